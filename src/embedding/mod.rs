//! Text-to-vector builders.
//!
//! - [`keyword`] maps text to keyword-count vectors (always available).
//! - [`encoder`] runs a pretrained sentence encoder (needs model files).
//! - [`tokenize`] is the word tokenizer both keyword paths share.

/// Device selection (CPU / Metal / CUDA).
pub mod device;
/// Dense sentence encoder.
pub mod encoder;
mod error;
/// Keyword-count vectorizer.
pub mod keyword;
/// Lowercase word tokenizer.
pub mod tokenize;
/// Tokenizer loading helpers.
pub mod utils;

pub use encoder::{ENCODER_EMBEDDING_DIM, ENCODER_MAX_SEQ_LEN, EncoderConfig, SentenceEncoder};
pub use error::EmbeddingError;
pub use keyword::KeywordVectorizer;
pub use tokenize::{token_counts, tokenize};
