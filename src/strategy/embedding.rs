use std::sync::Arc;

use crate::constants::DEFAULT_EMBEDDING_THRESHOLD;
use crate::corpus::Corpus;
use crate::embedding::{EmbeddingError, SentenceEncoder};
use crate::scoring::cosine_similarity;

use super::{MatchStrategy, Probe, StrategyKind};

/// Dense strategy: sentence-encoder vectors scored by cosine similarity, with the
/// nominal threshold applied unchanged.
#[derive(Debug, Clone)]
pub struct EmbeddingStrategy {
    encoder: Arc<SentenceEncoder>,
}

impl EmbeddingStrategy {
    pub fn new(encoder: SentenceEncoder) -> Self {
        Self {
            encoder: Arc::new(encoder),
        }
    }

    pub fn encoder(&self) -> &SentenceEncoder {
        &self.encoder
    }
}

impl MatchStrategy for EmbeddingStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Embedding
    }

    fn dims(&self) -> usize {
        self.encoder.dims()
    }

    fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        self.encoder.embed(text)
    }

    fn embed_corpus(&self, corpus: &Corpus) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        self.encoder.embed_batch(&corpus.questions())
    }

    fn score(&self, query: Probe<'_>, reference: Probe<'_>) -> f32 {
        cosine_similarity(query.vector, reference.vector)
    }

    fn default_threshold(&self) -> f32 {
        DEFAULT_EMBEDDING_THRESHOLD
    }

    fn effective_threshold(&self, nominal: f32) -> f32 {
        nominal
    }
}
