use std::fmt;
use std::str::FromStr;

/// Representation strategy behind a [`MatchStrategy`](super::MatchStrategy).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrategyKind {
    /// Counts over a fixed domain vocabulary.
    Keyword,
    /// Dense vectors from a pretrained sentence encoder.
    Embedding,
}

impl StrategyKind {
    /// Returns the lowercase name used in configuration.
    pub fn as_str(&self) -> &'static str {
        match self {
            StrategyKind::Keyword => "keyword",
            StrategyKind::Embedding => "embedding",
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StrategyKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "keyword" | "keywords" => Ok(StrategyKind::Keyword),
            "embedding" | "embeddings" | "dense" => Ok(StrategyKind::Embedding),
            other => Err(format!(
                "unknown strategy '{other}' (expected 'embedding' or 'keyword')"
            )),
        }
    }
}

/// Similarity pairing used by the keyword strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum KeywordScoring {
    /// Multiset token overlap computed on the raw question strings.
    #[default]
    Overlap,
    /// Cosine similarity over the keyword-count vectors.
    Cosine,
}

impl KeywordScoring {
    pub fn as_str(&self) -> &'static str {
        match self {
            KeywordScoring::Overlap => "overlap",
            KeywordScoring::Cosine => "cosine",
        }
    }

    /// Whether unrelated questions score below the keyword cutoff.
    ///
    /// Cosine over keyword counts is dominated by the token-count dimension, so
    /// nearly every query lands close to some reference question.
    pub fn separates_off_topic(&self) -> bool {
        matches!(self, KeywordScoring::Overlap)
    }
}

impl fmt::Display for KeywordScoring {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for KeywordScoring {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "overlap" | "jaccard" => Ok(KeywordScoring::Overlap),
            "cosine" => Ok(KeywordScoring::Cosine),
            other => Err(format!(
                "unknown keyword scoring '{other}' (expected 'overlap' or 'cosine')"
            )),
        }
    }
}
