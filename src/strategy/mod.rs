//! Interchangeable matching strategies.
//!
//! A [`MatchStrategy`] bundles the three things that vary between the keyword and
//! dense-embedding paths: how text becomes a vector, how a query is scored against
//! a reference question, and how the nominal threshold maps to the cutoff actually
//! applied. The [`Matcher`](crate::matcher::Matcher) only talks to this trait.

pub mod embedding;
pub mod keyword;
pub mod kind;


pub use embedding::EmbeddingStrategy;
pub use keyword::KeywordStrategy;
pub use kind::{KeywordScoring, StrategyKind};

use crate::corpus::Corpus;
use crate::embedding::EmbeddingError;

/// A text together with its representation under the active strategy.
#[derive(Debug, Clone, Copy)]
pub struct Probe<'a> {
    pub text: &'a str,
    pub vector: &'a [f32],
}

impl<'a> Probe<'a> {
    pub fn new(text: &'a str, vector: &'a [f32]) -> Self {
        Self { text, vector }
    }
}

/// Capability shared by every representation strategy.
pub trait MatchStrategy: Send + Sync + std::fmt::Debug {
    fn kind(&self) -> StrategyKind;

    /// Width of the vectors returned by [`embed`](Self::embed).
    fn dims(&self) -> usize;

    /// Maps text to its fixed-dimension representation.
    fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError>;

    /// Representations for every reference question, in corpus order.
    fn embed_corpus(&self, corpus: &Corpus) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        corpus.iter().map(|entry| self.embed(&entry.question)).collect()
    }

    /// Similarity of a query to one reference question.
    fn score(&self, query: Probe<'_>, reference: Probe<'_>) -> f32;

    /// Nominal threshold used when the caller does not supply one.
    fn default_threshold(&self) -> f32;

    /// Cutoff a best score must reach for a given nominal threshold.
    fn effective_threshold(&self, nominal: f32) -> f32;
}
