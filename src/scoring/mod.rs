//! Similarity functions used by the matching strategies.
//!
//! - [`cosine_similarity`] pairs with vector representations (dense or keyword).
//! - [`token_overlap`] works on the raw strings and ignores representations.

pub mod similarity;

#[cfg(test)]
mod tests;

pub use similarity::{cosine_similarity, token_overlap};
