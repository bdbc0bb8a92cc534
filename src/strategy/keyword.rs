use crate::constants::{DEFAULT_KEYWORD_THRESHOLD, KEYWORD_THRESHOLD_SCALE};
use crate::embedding::{EmbeddingError, KeywordVectorizer};
use crate::scoring::{cosine_similarity, token_overlap};

use super::{KeywordScoring, MatchStrategy, Probe, StrategyKind};

/// Lexical strategy: keyword-count vectors, scored by token overlap (default) or
/// cosine over the vectors. The nominal threshold is scaled by
/// [`KEYWORD_THRESHOLD_SCALE`] for either pairing.
#[derive(Debug, Clone, Default)]
pub struct KeywordStrategy {
    vectorizer: KeywordVectorizer,
    scoring: KeywordScoring,
}

impl KeywordStrategy {
    pub fn new(vectorizer: KeywordVectorizer, scoring: KeywordScoring) -> Self {
        Self { vectorizer, scoring }
    }

    pub fn with_scoring(scoring: KeywordScoring) -> Self {
        Self {
            scoring,
            ..Default::default()
        }
    }

    pub fn scoring(&self) -> KeywordScoring {
        self.scoring
    }

    pub fn vectorizer(&self) -> &KeywordVectorizer {
        &self.vectorizer
    }
}

impl MatchStrategy for KeywordStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Keyword
    }

    fn dims(&self) -> usize {
        self.vectorizer.dims()
    }

    fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        Ok(self.vectorizer.vectorize(text))
    }

    fn score(&self, query: Probe<'_>, reference: Probe<'_>) -> f32 {
        match self.scoring {
            KeywordScoring::Overlap => token_overlap(query.text, reference.text),
            KeywordScoring::Cosine => cosine_similarity(query.vector, reference.vector),
        }
    }

    fn default_threshold(&self) -> f32 {
        DEFAULT_KEYWORD_THRESHOLD
    }

    fn effective_threshold(&self, nominal: f32) -> f32 {
        nominal * KEYWORD_THRESHOLD_SCALE
    }
}
