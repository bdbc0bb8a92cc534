//! Lowercase word tokenization shared by the keyword vector and token-overlap scoring.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

// `\w` is Unicode-aware: letters, digits, and underscore.
static WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\w+\b").expect("word regex is valid"));

/// Splits `text` into lowercase word tokens, in order of appearance.
///
/// "Thoughtful AI's Agents." yields `["thoughtful", "ai", "s", "agents"]`.
pub fn tokenize(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    WORD.find_iter(&lower)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Token multiset (bag of words) for `text`.
pub fn token_counts(text: &str) -> HashMap<String, usize> {
    let mut counts = HashMap::new();
    for token in tokenize(text) {
        *counts.entry(token).or_insert(0) += 1;
    }
    counts
}
