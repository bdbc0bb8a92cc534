use std::path::PathBuf;

use crate::embedding::error::EmbeddingError;

/// Default encoder output dimension.
pub const ENCODER_EMBEDDING_DIM: usize = crate::constants::DEFAULT_ENCODER_DIM;

/// Default encoder max sequence length.
pub const ENCODER_MAX_SEQ_LEN: usize = crate::constants::DEFAULT_ENCODER_MAX_SEQ_LEN;

/// Files an encoder directory must contain.
pub const ENCODER_FILES: [&str; 3] = ["config.json", "model.safetensors", "tokenizer.json"];

#[derive(Debug, Clone)]
/// Configuration for [`SentenceEncoder`](super::SentenceEncoder).
pub struct EncoderConfig {
    /// Directory holding `config.json`, `model.safetensors` and `tokenizer.json`.
    pub model_dir: PathBuf,
    /// Max tokens to consider.
    pub max_seq_len: usize,
    /// Output dimension in stub mode (a loaded model reports its own hidden size).
    pub embedding_dim: usize,
    /// If true, run in deterministic stub mode (no model files required).
    pub testing_stub: bool,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            model_dir: PathBuf::new(),
            max_seq_len: ENCODER_MAX_SEQ_LEN,
            embedding_dim: ENCODER_EMBEDDING_DIM,
            testing_stub: false,
        }
    }
}

impl EncoderConfig {
    /// Env var used to locate the encoder directory.
    pub const ENV_MODEL_PATH: &'static str = "FAQ_MODEL_PATH";

    /// Loads config from the environment (a missing value leaves `model_dir` empty).
    pub fn from_env() -> Self {
        let model_dir = std::env::var(Self::ENV_MODEL_PATH)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
            .unwrap_or_default();

        Self {
            model_dir,
            ..Default::default()
        }
    }

    pub fn new<P: Into<PathBuf>>(model_dir: P) -> Self {
        Self {
            model_dir: model_dir.into(),
            ..Default::default()
        }
    }

    /// Creates a stub config (no model files; produces deterministic embeddings).
    pub fn stub() -> Self {
        Self {
            testing_stub: true,
            ..Default::default()
        }
    }

    pub fn with_max_seq_len(mut self, max_seq_len: usize) -> Self {
        self.max_seq_len = max_seq_len;
        self
    }

    /// Validates required fields for non-stub mode.
    pub fn validate(&self) -> Result<(), EmbeddingError> {
        if self.max_seq_len == 0 {
            return Err(EmbeddingError::InvalidConfig {
                reason: "max_seq_len must be greater than zero".to_string(),
            });
        }

        if self.testing_stub {
            if self.embedding_dim == 0 {
                return Err(EmbeddingError::InvalidConfig {
                    reason: "embedding_dim must be greater than zero".to_string(),
                });
            }
            return Ok(());
        }

        if self.model_dir.as_os_str().is_empty() {
            return Err(EmbeddingError::NotConfigured);
        }

        if !self.model_dir.is_dir() {
            return Err(EmbeddingError::ModelNotFound {
                path: self.model_dir.clone(),
            });
        }

        if let Some(file) = ENCODER_FILES
            .into_iter()
            .find(|file| !self.model_dir.join(file).exists())
        {
            return Err(EmbeddingError::MissingModelFile {
                dir: self.model_dir.clone(),
                file,
            });
        }

        Ok(())
    }

    /// Returns `true` if every encoder file is present.
    pub fn model_available(&self) -> bool {
        !self.model_dir.as_os_str().is_empty()
            && ENCODER_FILES
                .iter()
                .all(|file| self.model_dir.join(file).exists())
    }
}
