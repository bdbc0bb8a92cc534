//! Support assistant: curated answer first, generated answer second.
//!
//! One turn appends the user's question to the session, looks it up in the
//! [`Matcher`], and answers from the corpus when an entry matched. Otherwise the
//! [`FallbackGenerator`] answers (complete or streamed). The reply is appended
//! to the session in both cases.


use std::sync::Arc;

use futures_util::StreamExt;
use tracing::{debug, error};

use crate::fallback::FallbackGenerator;
use crate::matcher::{MatchResult, Matcher};
use crate::session::ChatSession;

/// Answer produced for one question.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    /// Served from the corpus.
    Curated(MatchResult),
    /// Produced by the fallback generator.
    Generated(String),
}

impl Reply {
    pub fn text(&self) -> &str {
        match self {
            Reply::Curated(result) => &result.answer,
            Reply::Generated(text) => text,
        }
    }

    pub fn is_curated(&self) -> bool {
        matches!(self, Reply::Curated(_))
    }

    /// Match confidence, for curated replies.
    pub fn score(&self) -> Option<f32> {
        match self {
            Reply::Curated(result) => Some(result.score),
            Reply::Generated(_) => None,
        }
    }
}

#[derive(Clone)]
pub struct SupportAssistant {
    matcher: Arc<Matcher>,
    fallback: Arc<dyn FallbackGenerator>,
    threshold: Option<f32>,
}

impl std::fmt::Debug for SupportAssistant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SupportAssistant")
            .field("strategy", &self.matcher.strategy_kind())
            .field("entries", &self.matcher.corpus().len())
            .field("threshold", &self.threshold)
            .finish()
    }
}

impl SupportAssistant {
    pub fn new(matcher: Arc<Matcher>, fallback: Arc<dyn FallbackGenerator>) -> Self {
        Self {
            matcher,
            fallback,
            threshold: None,
        }
    }

    /// Nominal threshold passed to every lookup (`None` = matcher default).
    pub fn with_threshold(mut self, threshold: Option<f32>) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn matcher(&self) -> &Matcher {
        &self.matcher
    }

    /// Corpus lookup, run off the async executor.
    pub async fn lookup(&self, question: &str) -> Option<MatchResult> {
        let matcher = Arc::clone(&self.matcher);
        let question = question.to_string();
        let threshold = self.threshold;

        match tokio::task::spawn_blocking(move || matcher.find_best_match(&question, threshold))
            .await
        {
            Ok(result) => result,
            Err(e) => {
                error!(error = %e, "Match task failed; treating as no match");
                None
            }
        }
    }

    /// Answers one question without touching any session.
    pub async fn reply(&self, question: &str) -> Reply {
        if let Some(result) = self.lookup(question).await {
            debug!(index = result.index, score = result.score, "Curated answer");
            return Reply::Curated(result);
        }
        debug!("No curated match; using fallback");
        Reply::Generated(self.fallback.answer(question).await)
    }

    /// One chat turn with a complete fallback answer.
    pub async fn respond(&self, session: &mut ChatSession, question: &str) -> Reply {
        session.push_user(question);
        let reply = self.reply(question).await;
        session.push_assistant(reply.text());
        reply
    }

    /// One chat turn; fallback text is handed to `on_chunk` as it arrives.
    ///
    /// A curated answer is delivered as a single chunk.
    pub async fn respond_streaming<F>(
        &self,
        session: &mut ChatSession,
        question: &str,
        mut on_chunk: F,
    ) -> Reply
    where
        F: FnMut(&str),
    {
        session.push_user(question);

        let reply = match self.lookup(question).await {
            Some(result) => {
                on_chunk(&result.answer);
                Reply::Curated(result)
            }
            None => {
                let mut stream = self.fallback.answer_stream(question);
                let mut text = String::new();
                while let Some(chunk) = stream.next().await {
                    on_chunk(&chunk);
                    text.push_str(&chunk);
                }
                Reply::Generated(text)
            }
        };

        session.push_assistant(reply.text());
        reply
    }
}
