// Lookup failures raised by the score model.
//
// The annotation layer performs no validation of its own; these errors
// surface unchanged to whoever asked for the annotation.

use thiserror::Error;

/// A failed lookup into a verticality or n-tuplet.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScoreError {
    /// The verticality has no entry for this part.
    #[error("no note for part {part} in verticality")]
    PartNotFound { part: usize },

    /// Index past the end of an n-tuplet's verticality list.
    #[error("verticality index {index} out of range (n-tuplet has {len})")]
    VerticalityOutOfRange { index: usize, len: usize },

    /// The n-tuplet has no linear segment for this part.
    #[error("no linear segment for part {part}")]
    SegmentNotFound { part: usize },

    /// N-tuplets are only defined for two or three verticalities.
    #[error("unsupported n-tuplet arity {0} (expected 2 or 3)")]
    UnsupportedArity(usize),
}
