use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EmbeddingError {
    #[error("no sentence encoder directory configured")]
    NotConfigured,

    #[error("sentence encoder directory not found: {path}")]
    ModelNotFound { path: PathBuf },

    #[error("sentence encoder file '{file}' missing in {dir}")]
    MissingModelFile { dir: PathBuf, file: &'static str },

    #[error("failed to load sentence encoder: {reason}")]
    ModelLoadFailed { reason: String },

    #[error("tokenization failed: {reason}")]
    TokenizationFailed { reason: String },

    #[error("encoder inference failed: {reason}")]
    InferenceFailed { reason: String },

    #[error("invalid encoder configuration: {reason}")]
    InvalidConfig { reason: String },

    #[error("embedding dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("encoder I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<candle_core::Error> for EmbeddingError {
    fn from(err: candle_core::Error) -> Self {
        EmbeddingError::InferenceFailed {
            reason: err.to_string(),
        }
    }
}
