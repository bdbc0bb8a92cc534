//! FAQ router library crate (used by the terminal binary and integration tests).
//!
//! Routes a free-text question to a curated answer from a small, fixed
//! knowledge base when one of its reference questions is close enough, and to a
//! generative fallback otherwise.
//!
//! # Public API Surface
//!
//! ## Matching
//! - [`Matcher`], [`MatcherBuilder`] - Nearest-question lookup and strategy selection
//! - [`MatchResult`], [`MatchOutcome`], [`ScoredEntry`] - Lookup results and explanations
//! - [`MatchStrategy`], [`KeywordStrategy`], [`EmbeddingStrategy`] - Interchangeable strategies
//!
//! ## Embedding & Scoring
//! - [`SentenceEncoder`], [`EncoderConfig`] - Dense sentence embeddings (candle BERT)
//! - [`KeywordVectorizer`] - Domain keyword counts
//! - [`cosine_similarity`], [`token_overlap`] - Similarity functions
//!
//! ## Conversation
//! - [`SupportAssistant`], [`Reply`] - Matcher first, fallback second
//! - [`FallbackGenerator`], [`GenaiFallback`] - Generated answers
//! - [`ChatSession`], [`ChatMessage`], [`Role`] - Append-only chat log
//!
//! ## Test/Mock Support
//! [`MockFallback`] is available behind `#[cfg(any(test, feature = "mock"))]`.

pub mod assistant;
pub mod config;
pub mod constants;
pub mod corpus;
pub mod embedding;
pub mod fallback;
pub mod matcher;
pub mod scoring;
pub mod session;
pub mod strategy;

pub use assistant::{Reply, SupportAssistant};
pub use config::{Config, ConfigError};
pub use corpus::{Corpus, CorpusError, QaEntry};
pub use embedding::{EmbeddingError, EncoderConfig, KeywordVectorizer, SentenceEncoder};
#[cfg(any(test, feature = "mock"))]
pub use fallback::MockFallback;
pub use fallback::{FallbackError, FallbackGenerator, GenaiFallback, StaticFallback};
pub use matcher::{
    MatchError, MatchOutcome, MatchResult, Matcher, MatcherBuilder, ScoredEntry,
    StrategySelection,
};
pub use scoring::{cosine_similarity, token_overlap};
pub use session::{ChatMessage, ChatSession, Role};
pub use strategy::{
    EmbeddingStrategy, KeywordScoring, KeywordStrategy, MatchStrategy, StrategyKind,
};
