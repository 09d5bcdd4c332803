// Theory Results
//
// Annotation facades over the findings of music-theory analysis passes.
// A pass that detects, say, parallel fifths wraps the offending voice-leading
// quartet in a `QuartetResult`, describes it, and stores it. Later consumers
// use the result to highlight the notes, print a label under them, or tag
// them with editorial flags, without needing to know how the finding's notes
// are laid out.
//
// Architecture:
// - result.rs: `ResultInfo` (text/value/current color), `Annotated`, `Alignment`
// - selection.rs: Per-shape position enums and `Selection<P>` sets
// - interval.rs, quartet.rs, note.rs, verticality.rs, segment.rs, ntuplet.rs:
//   One result type per finding shape, each mapping positions to notes
// - theory_result.rs: `TheoryResult` sum type and `ResultKind` tags
// - book.rs: `ResultBook`, results of an analysis run grouped by kind
// - config.rs: `AnnotationConfig`, JSON-loadable defaults
// - error.rs: `ResultError`
//
// Results hold `NoteId` handles only. Every operation borrows the
// `theory_score::Score` that owns the notes, so dropping a result never
// affects the music.

pub mod book;
pub mod config;
pub mod error;
pub mod interval;
pub mod note;
pub mod ntuplet;
pub mod quartet;
pub mod result;
pub mod segment;
pub mod selection;
pub mod theory_result;
pub mod verticality;

pub use book::ResultBook;
pub use config::AnnotationConfig;
pub use error::{Result, ResultError};
pub use interval::IntervalResult;
pub use note::NoteResult;
pub use ntuplet::{MarkPlan, NTupletResult, NTupletTarget};
pub use quartet::QuartetResult;
pub use result::{Alignment, Annotated, ResultInfo};
pub use segment::SegmentResult;
pub use selection::{PairPosition, Position, QuartetPosition, SegmentPosition, Selection};
pub use theory_result::{ResultKind, TheoryResult};
pub use verticality::VerticalityResult;
