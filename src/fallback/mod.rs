//! Generative fallback for questions the corpus does not cover.
//!
//! Implementations never fail toward the caller: every problem (blank question,
//! missing key, provider error) becomes a fixed user-facing message, so the
//! chat flow always has something to show.

pub mod error;
pub mod provider;
pub mod prompt;

#[cfg(test)]
mod tests;

pub use error::FallbackError;
pub use provider::GenaiFallback;
pub use prompt::{
    EMPTY_QUESTION_MESSAGE, MISSING_API_KEY_MESSAGE, SYSTEM_PROMPT, UNAVAILABLE_MESSAGE,
    api_key_usable, openai_api_key_configured,
};

use async_trait::async_trait;
use futures_util::future::ready;
use futures_util::stream::{self, BoxStream, StreamExt};

#[async_trait]
/// Produces an answer when no curated entry matched.
pub trait FallbackGenerator: Send + Sync {
    /// Complete answer text.
    async fn answer(&self, question: &str) -> String;

    /// Answer as ordered text fragments; concatenated they form the reply.
    fn answer_stream(&self, question: &str) -> BoxStream<'static, String>;
}

/// Fallback that always returns the same text (used when no provider is wanted).
#[derive(Debug, Clone)]
pub struct StaticFallback {
    message: String,
}

impl StaticFallback {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Default for StaticFallback {
    fn default() -> Self {
        Self::new(UNAVAILABLE_MESSAGE)
    }
}

#[async_trait]
impl FallbackGenerator for StaticFallback {
    async fn answer(&self, question: &str) -> String {
        if question.trim().is_empty() {
            return EMPTY_QUESTION_MESSAGE.to_string();
        }
        self.message.clone()
    }

    fn answer_stream(&self, question: &str) -> BoxStream<'static, String> {
        let text = if question.trim().is_empty() {
            EMPTY_QUESTION_MESSAGE.to_string()
        } else {
            self.message.clone()
        };
        stream::once(ready(text)).boxed()
    }
}

#[cfg(any(test, feature = "mock"))]
/// Recording fallback that replies with a canned text split into word chunks.
#[derive(Debug, Default)]
pub struct MockFallback {
    reply: String,
    questions: parking_lot::Mutex<Vec<String>>,
}

#[cfg(any(test, feature = "mock"))]
impl MockFallback {
    pub fn new(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
            questions: parking_lot::Mutex::new(Vec::new()),
        }
    }

    /// Questions received so far, in call order.
    pub fn questions(&self) -> Vec<String> {
        self.questions.lock().clone()
    }

    pub fn call_count(&self) -> usize {
        self.questions.lock().len()
    }
}

#[cfg(any(test, feature = "mock"))]
#[async_trait]
impl FallbackGenerator for MockFallback {
    async fn answer(&self, question: &str) -> String {
        self.questions.lock().push(question.to_string());
        self.reply.clone()
    }

    fn answer_stream(&self, question: &str) -> BoxStream<'static, String> {
        self.questions.lock().push(question.to_string());
        let chunks: Vec<String> = self
            .reply
            .split_inclusive(' ')
            .map(str::to_string)
            .collect();
        stream::iter(chunks).boxed()
    }
}
