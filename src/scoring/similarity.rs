use crate::embedding::token_counts;

/// Cosine similarity between two vectors, clamped to `[-1.0, 1.0]`.
///
/// Returns `0.0` when either vector has zero magnitude, when the lengths differ,
/// or when the vectors are empty.
///
/// ```text
///            a · b
/// cos(θ) = ─────────
///          ‖a‖ × ‖b‖
/// ```
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }

    let mut dot = 0.0f32;
    let mut norm_a = 0.0f32;
    let mut norm_b = 0.0f32;

    for (x, y) in a.iter().zip(b.iter()) {
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    (dot / (norm_a.sqrt() * norm_b.sqrt())).clamp(-1.0, 1.0)
}

/// Multiset (bag-of-words) overlap of two strings: `|A ∩ B| / |A ∪ B|`.
///
/// Intersection and union count multiplicities (`min` and `max` per token).
/// Returns `0.0` when neither string has any tokens.
pub fn token_overlap(a: &str, b: &str) -> f32 {
    let counts_a = token_counts(a);
    let counts_b = token_counts(b);

    let mut intersection = 0usize;
    let mut union = 0usize;

    for (token, &n_a) in &counts_a {
        let n_b = counts_b.get(token).copied().unwrap_or(0);
        intersection += n_a.min(n_b);
        union += n_a.max(n_b);
    }

    union += counts_b
        .iter()
        .filter(|(token, _)| !counts_a.contains_key(*token))
        .map(|(_, n)| *n)
        .sum::<usize>();

    if union == 0 {
        return 0.0;
    }

    intersection as f32 / union as f32
}
