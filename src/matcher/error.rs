use thiserror::Error;

use crate::embedding::EmbeddingError;

#[derive(Debug, Error)]
pub enum MatchError {
    #[error("embedding error: {0}")]
    Embedding(#[from] EmbeddingError),

    #[error("reference index has {actual} vectors for {expected} corpus entries")]
    IndexSizeMismatch { expected: usize, actual: usize },

    #[error("vector dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
}
