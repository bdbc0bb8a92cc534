use tracing::{info, warn};

use crate::config::Config;
use crate::corpus::Corpus;
use crate::embedding::{EncoderConfig, SentenceEncoder};
use crate::strategy::{
    EmbeddingStrategy, KeywordScoring, KeywordStrategy, MatchStrategy, StrategyKind,
};

use super::Matcher;
use super::types::StrategySelection;

/// Assembles a [`Matcher`], trying strategies in priority order.
///
/// Preferring [`StrategyKind::Embedding`] tries the dense encoder first and
/// falls back to keyword when no encoder is configured or it fails to load.
/// Building never fails: keyword needs nothing external.
#[derive(Debug, Clone)]
pub struct MatcherBuilder {
    corpus: Corpus,
    preferred: StrategyKind,
    encoder: Option<EncoderConfig>,
    keyword_scoring: KeywordScoring,
    threshold: Option<f32>,
}

impl MatcherBuilder {
    pub fn new(corpus: Corpus) -> Self {
        Self {
            corpus,
            preferred: StrategyKind::Embedding,
            encoder: None,
            keyword_scoring: KeywordScoring::default(),
            threshold: None,
        }
    }

    /// Builder seeded from runtime configuration.
    pub fn from_config(config: &Config, corpus: Corpus) -> Self {
        let mut builder = Self::new(corpus)
            .preferred(config.strategy)
            .keyword_scoring(config.keyword_scoring)
            .threshold(config.threshold);
        if let Some(dir) = &config.model_path {
            builder = builder.encoder_config(EncoderConfig::new(dir));
        }
        builder
    }

    pub fn preferred(mut self, kind: StrategyKind) -> Self {
        self.preferred = kind;
        self
    }

    pub fn encoder_config(mut self, config: EncoderConfig) -> Self {
        self.encoder = Some(config);
        self
    }

    pub fn keyword_scoring(mut self, scoring: KeywordScoring) -> Self {
        self.keyword_scoring = scoring;
        self
    }

    /// Nominal threshold used when a lookup passes `None`.
    pub fn threshold(mut self, threshold: Option<f32>) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn build(self) -> Matcher {
        if !self.keyword_scoring.separates_off_topic() {
            warn!(
                keyword_scoring = %self.keyword_scoring,
                "Keyword scoring matches most off-topic questions; the fallback will rarely answer"
            );
        }
        let keyword = KeywordStrategy::with_scoring(self.keyword_scoring);

        let (strategy, fallback_reason): (Box<dyn MatchStrategy>, Option<String>) =
            match self.preferred {
                StrategyKind::Keyword => (Box::new(keyword.clone()), None),
                StrategyKind::Embedding => match self.load_encoder() {
                    Ok(encoder) => (Box::new(EmbeddingStrategy::new(encoder)), None),
                    Err(reason) => {
                        warn!(
                            reason = %reason,
                            fallback = %StrategyKind::Keyword,
                            "Embedding strategy unavailable"
                        );
                        (Box::new(keyword.clone()), Some(reason))
                    }
                },
            };

        let selection = StrategySelection {
            preferred: self.preferred,
            active: strategy.kind(),
            fallback_reason,
        };

        info!(
            strategy = %selection.active,
            preferred = %selection.preferred,
            keyword_scoring = %self.keyword_scoring,
            entries = self.corpus.len(),
            "Matching strategy selected"
        );

        Matcher::assemble(self.corpus, strategy, keyword, self.threshold, selection)
    }

    fn load_encoder(&self) -> Result<SentenceEncoder, String> {
        let config = self
            .encoder
            .clone()
            .ok_or_else(|| "no sentence encoder configured".to_string())?;
        SentenceEncoder::load(config).map_err(|e| e.to_string())
    }
}
