// Error type for the annotation layer.
//
// Annotation itself only fails when a lookup into the score model fails
// (unknown part, verticality index past the end, missing segment); those
// errors pass through untouched. Loading an `AnnotationConfig` adds the
// usual I/O and JSON failures.

use theory_score::ScoreError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResultError {
    /// Lookup into the score model failed.
    #[error("score lookup failed: {0}")]
    Score(#[from] ScoreError),

    /// Config parsed but holds unusable values.
    #[error("configuration error: {0}")]
    Config(String),

    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience Result type for annotation operations.
pub type Result<T> = std::result::Result<T, ResultError>;
