use std::fmt::Display;
use std::time::Duration;

use async_trait::async_trait;
use futures_util::future::ready;
use futures_util::stream::{self, BoxStream, StreamExt};
use genai::Client;
use genai::chat::{ChatMessage, ChatOptions, ChatRequest, ChatStreamEvent};
use tracing::{debug, warn};

use crate::config::Config;
use crate::constants::{
    DEFAULT_LLM_MAX_TOKENS, DEFAULT_LLM_MODEL, DEFAULT_LLM_TEMPERATURE, DEFAULT_LLM_TIMEOUT_SECS,
};

use super::FallbackGenerator;
use super::error::FallbackError;
use super::prompt::{
    EMPTY_QUESTION_MESSAGE, MISSING_API_KEY_MESSAGE, SYSTEM_PROMPT, UNAVAILABLE_MESSAGE,
    openai_api_key_configured,
};

/// Fallback backed by a hosted chat model through `genai`.
///
/// The provider key is read from `OPENAI_API_KEY` on every call, so a key set
/// after startup is picked up.
#[derive(Clone)]
pub struct GenaiFallback {
    client: Client,
    model: String,
    options: ChatOptions,
    timeout: Duration,
}

impl std::fmt::Debug for GenaiFallback {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GenaiFallback")
            .field("model", &self.model)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl Default for GenaiFallback {
    fn default() -> Self {
        Self::new(
            DEFAULT_LLM_MODEL,
            DEFAULT_LLM_MAX_TOKENS,
            DEFAULT_LLM_TEMPERATURE,
            Duration::from_secs(DEFAULT_LLM_TIMEOUT_SECS),
        )
    }
}

impl GenaiFallback {
    pub fn new(model: impl Into<String>, max_tokens: u32, temperature: f64, timeout: Duration) -> Self {
        Self {
            client: Client::default(),
            model: model.into(),
            options: ChatOptions::default()
                .with_max_tokens(max_tokens)
                .with_temperature(temperature),
            timeout,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.llm_model.clone(),
            config.llm_max_tokens,
            config.llm_temperature,
            Duration::from_secs(config.llm_timeout_secs),
        )
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    fn request(question: &str) -> ChatRequest {
        ChatRequest::new(vec![
            ChatMessage::system(SYSTEM_PROMPT),
            ChatMessage::user(question),
        ])
    }

    /// One-shot completion; errors are returned rather than replaced by a message.
    pub async fn complete(&self, question: &str) -> Result<String, FallbackError> {
        if !openai_api_key_configured() {
            return Err(FallbackError::MissingApiKey);
        }

        let call = self
            .client
            .exec_chat(self.model.as_str(), Self::request(question), Some(&self.options));
        let response = tokio::time::timeout(self.timeout, call)
            .await
            .map_err(|_| FallbackError::Timeout {
                secs: self.timeout.as_secs(),
            })??;

        let text = response.first_text().unwrap_or_default().trim().to_string();
        if text.is_empty() {
            return Err(FallbackError::EmptyResponse);
        }
        debug!(model = %self.model, chars = text.len(), "Fallback completion received");
        Ok(text)
    }
}

#[async_trait]
impl FallbackGenerator for GenaiFallback {
    async fn answer(&self, question: &str) -> String {
        if question.trim().is_empty() {
            return EMPTY_QUESTION_MESSAGE.to_string();
        }

        match self.complete(question).await {
            Ok(text) => text,
            Err(FallbackError::MissingApiKey) => MISSING_API_KEY_MESSAGE.to_string(),
            Err(e) => {
                warn!(error = %e, model = %self.model, "Fallback completion failed");
                UNAVAILABLE_MESSAGE.to_string()
            }
        }
    }

    fn answer_stream(&self, question: &str) -> BoxStream<'static, String> {
        if question.trim().is_empty() {
            return single(EMPTY_QUESTION_MESSAGE);
        }
        if !openai_api_key_configured() {
            return single(MISSING_API_KEY_MESSAGE);
        }

        let client = self.client.clone();
        let model = self.model.clone();
        let options = self.options.clone();
        let timeout = self.timeout;
        let request = Self::request(question);

        stream::once(async move {
            let call = client.exec_chat_stream(model.as_str(), request, Some(&options));
            match tokio::time::timeout(timeout, call).await {
                Ok(Ok(response)) => {
                    let events = response
                        .stream
                        .map(|event| {
                            event.map(|event| match event {
                                ChatStreamEvent::Chunk(chunk) => Some(chunk.content),
                                _ => None,
                            })
                        })
                        .boxed();
                    text_chunks(events)
                }
                Ok(Err(e)) => {
                    warn!(error = %e, model = %model, "Fallback stream init failed");
                    single(UNAVAILABLE_MESSAGE)
                }
                Err(_) => {
                    warn!(
                        timeout_secs = timeout.as_secs(),
                        model = %model,
                        "Fallback stream init timed out"
                    );
                    single(UNAVAILABLE_MESSAGE)
                }
            }
        })
        .flatten()
        .boxed()
    }
}

fn single(message: &str) -> BoxStream<'static, String> {
    stream::once(ready(message.to_string())).boxed()
}

/// Non-empty text fragments of a provider stream, in order.
///
/// A failure mid-stream yields [`UNAVAILABLE_MESSAGE`] once and ends the stream.
pub(crate) fn text_chunks<E>(
    events: BoxStream<'static, Result<Option<String>, E>>,
) -> BoxStream<'static, String>
where
    E: Display + Send + 'static,
{
    stream::unfold(Some(events), |state| async move {
        let mut events = state?;
        loop {
            match events.next().await {
                Some(Ok(Some(text))) if !text.is_empty() => return Some((text, Some(events))),
                Some(Ok(_)) => continue,
                Some(Err(e)) => {
                    warn!(error = %e, "Fallback stream interrupted");
                    return Some((UNAVAILABLE_MESSAGE.to_string(), None));
                }
                None => return None,
            }
        }
    })
    .boxed()
}
