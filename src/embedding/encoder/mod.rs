//! Dense sentence encoder (BERT + tokenizer, mean pooled, L2 normalized).
//!
//! Use [`EncoderConfig::stub`] for tests/examples without model files.

/// Encoder configuration.
pub mod config;
pub(crate) mod model;


pub use config::{ENCODER_EMBEDDING_DIM, ENCODER_FILES, ENCODER_MAX_SEQ_LEN, EncoderConfig};

use std::sync::Arc;

use candle_core::Device;
use tracing::{debug, info, warn};

use crate::embedding::device::select_device;
use crate::embedding::error::EmbeddingError;
use crate::embedding::utils::load_tokenizer;

use model::MeanPooledBert;

enum EncoderBackend {
    Model {
        model: MeanPooledBert,
        tokenizer: Arc<tokenizers::Tokenizer>,
        device: Device,
    },
    Stub,
}

/// Text-to-vector encoder for the dense-embedding strategy (supports stub mode).
pub struct SentenceEncoder {
    backend: EncoderBackend,
    config: EncoderConfig,
    dims: usize,
}

impl std::fmt::Debug for SentenceEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SentenceEncoder")
            .field(
                "backend",
                &match &self.backend {
                    EncoderBackend::Model { device, .. } => format!("Model({:?})", device),
                    EncoderBackend::Stub => "Stub".to_string(),
                },
            )
            .field("dims", &self.dims)
            .field("max_seq_len", &self.config.max_seq_len)
            .finish()
    }
}

impl SentenceEncoder {
    /// Loads the encoder from a config (stub mode is supported).
    pub fn load(config: EncoderConfig) -> Result<Self, EmbeddingError> {
        config.validate()?;

        if config.testing_stub {
            warn!("Sentence encoder running in STUB mode (testing only)");
            let dims = config.embedding_dim;
            return Ok(Self {
                backend: EncoderBackend::Stub,
                config,
                dims,
            });
        }

        let device = select_device();
        debug!(?device, "Selected compute device for sentence encoder");

        let model = MeanPooledBert::load(&config.model_dir, &device).map_err(|e| {
            EmbeddingError::ModelLoadFailed {
                reason: format!("Failed to load BERT encoder: {}", e),
            }
        })?;

        let tokenizer = load_tokenizer(&config.model_dir, config.max_seq_len)?;

        let dims = model.hidden_size();

        info!(
            model_dir = %config.model_dir.display(),
            dims,
            max_seq_len = config.max_seq_len,
            "Sentence encoder loaded"
        );

        Ok(Self {
            backend: EncoderBackend::Model {
                model,
                tokenizer: Arc::new(tokenizer),
                device,
            },
            config,
            dims,
        })
    }

    /// Loads a stub encoder.
    pub fn stub() -> Result<Self, EmbeddingError> {
        Self::load(EncoderConfig::stub())
    }

    /// Encodes one string into a unit-length vector (all zeros if it has no tokens).
    pub fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        match &self.backend {
            EncoderBackend::Model {
                model,
                tokenizer,
                device,
            } => self.embed_with_model(text, model, tokenizer, device),
            EncoderBackend::Stub => Ok(self.embed_stub(text)),
        }
    }

    /// Encodes a batch of strings, preserving order.
    pub fn embed_batch(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        texts.iter().map(|text| self.embed(text)).collect()
    }

    fn embed_with_model(
        &self,
        text: &str,
        model: &MeanPooledBert,
        tokenizer: &tokenizers::Tokenizer,
        device: &Device,
    ) -> Result<Vec<f32>, EmbeddingError> {
        let encoding =
            tokenizer
                .encode(text, true)
                .map_err(|e| EmbeddingError::TokenizationFailed {
                    reason: e.to_string(),
                })?;

        if encoding.get_ids().is_empty() {
            return Ok(vec![0.0; self.dims]);
        }

        debug!(
            text_len = text.len(),
            token_count = encoding.get_ids().len(),
            "Encoding text"
        );

        let embedding = model
            .embed(
                encoding.get_ids(),
                encoding.get_type_ids(),
                encoding.get_attention_mask(),
                device,
            )
            .map_err(|e| EmbeddingError::InferenceFailed {
                reason: format!("Encoder forward pass failed: {}", e),
            })?;

        if embedding.len() != self.dims {
            return Err(EmbeddingError::DimensionMismatch {
                expected: self.dims,
                actual: embedding.len(),
            });
        }

        Ok(normalize(embedding))
    }

    fn embed_stub(&self, text: &str) -> Vec<f32> {
        use std::hash::{DefaultHasher, Hash, Hasher};

        debug!(text_len = text.len(), "Generating stub embedding");

        if text.trim().is_empty() {
            return vec![0.0; self.dims];
        }

        let mut hasher = DefaultHasher::new();
        text.hash(&mut hasher);
        let mut state = hasher.finish();

        let mut embedding = Vec::with_capacity(self.dims);
        for _ in 0..self.dims {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
            let value = ((state >> 32) as f32 / u32::MAX as f32) * 2.0 - 1.0;
            embedding.push(value);
        }

        normalize(embedding)
    }

    /// Output vector dimension.
    pub fn dims(&self) -> usize {
        self.dims
    }

    pub fn is_stub(&self) -> bool {
        matches!(self.backend, EncoderBackend::Stub)
    }

    pub fn has_model(&self) -> bool {
        matches!(self.backend, EncoderBackend::Model { .. })
    }

    pub fn config(&self) -> &EncoderConfig {
        &self.config
    }
}

fn normalize(mut embedding: Vec<f32>) -> Vec<f32> {
    let norm: f32 = embedding.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm > 0.0 {
        for x in &mut embedding {
            *x /= norm;
        }
    }

    embedding
}
