use thiserror::Error;

use crate::embedding::EmbeddingError;

#[derive(Debug, Error)]
pub enum ScoringError {
    /// Submission was empty or whitespace only.
    #[error("{}", crate::constants::NO_TEXT_PROVIDED)]
    EmptySubmission,

    #[error("reference corpus is empty")]
    EmptyCorpus,

    #[error("embedding provider failed: {0}")]
    Embedding(#[from] EmbeddingError),

    #[error("sentence embedding has dimension {actual}, corpus expects {expected}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("provider returned {actual} embeddings for {expected} sentences")]
    CountMismatch { expected: usize, actual: usize },
}

impl ScoringError {
    /// `true` for errors caused by the submission rather than the backend.
    pub fn is_client_error(&self) -> bool {
        matches!(self, ScoringError::EmptySubmission)
    }
}
