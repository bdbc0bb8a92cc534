//! Keyword-count vectors over a fixed domain vocabulary.

use crate::constants::DOMAIN_KEYWORDS;
use crate::embedding::tokenize::tokenize;

/// Maps text to `[count(k_1), .., count(k_n), total_tokens]`.
///
/// Deterministic and dependency-free; used when no sentence encoder is available.
#[derive(Debug, Clone)]
pub struct KeywordVectorizer {
    vocabulary: Vec<String>,
}

impl Default for KeywordVectorizer {
    fn default() -> Self {
        Self::new(DOMAIN_KEYWORDS.iter().copied())
    }
}

impl KeywordVectorizer {
    /// Creates a vectorizer over a custom vocabulary (terms are lowercased).
    pub fn new<I, S>(vocabulary: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            vocabulary: vocabulary
                .into_iter()
                .map(|k| k.as_ref().to_lowercase())
                .collect(),
        }
    }

    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }

    /// Vector width (vocabulary size + 1).
    pub fn dims(&self) -> usize {
        self.vocabulary.len() + 1
    }

    pub fn vectorize(&self, text: &str) -> Vec<f32> {
        let tokens = tokenize(text);

        let mut vector: Vec<f32> = self
            .vocabulary
            .iter()
            .map(|keyword| tokens.iter().filter(|t| *t == keyword).count() as f32)
            .collect();

        vector.push(tokens.len() as f32);
        vector
    }
}
