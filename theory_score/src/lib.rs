// Theory Score Model
//
// The musical objects that theory analysis passes point at. Analysis code
// finds patterns (intervals, voice-leading quartets, vertical slices, linear
// segments) and records them as small bundles of note handles; the notes
// themselves live in one `Score` arena and are mutated in place when results
// are annotated.
//
// Architecture:
// - note.rs: `Score` arena, `NoteId` handles, `Note` with color/lyric/editorial
// - finding.rs: Handle-only finding shapes (interval, quartet, linear segment)
// - verticality.rs: Vertical slices keyed by part, and n-tuplets of slices
// - error.rs: Lookup failures (`ScoreError`)
//
// Nothing in this crate knows about analysis results. The annotation layer
// (theory_results) borrows a `Score` for every operation and never owns notes.

pub mod error;
pub mod finding;
pub mod note;
pub mod verticality;

pub use error::ScoreError;
pub use finding::{Interval, ThreeNoteLinearSegment, VoiceLeadingQuartet};
pub use note::{Editorial, Note, NoteId, Score, pitch_name};
pub use verticality::{Element, ElementFilter, Verticality, VerticalityNTuplet};
