//! Test fixtures for integration tests.

use std::io::Write;
use std::sync::Arc;

use faq_router::{Corpus, MatcherBuilder, MockFallback, QaEntry, StrategyKind, SupportAssistant};
use tempfile::NamedTempFile;

/// Query that overlaps no reference question enough to match.
pub const OFF_TOPIC_QUERY: &str = "What color is the sky?";

/// Canned text returned by the mock fallback.
pub const GENERATED_REPLY: &str = "Thoughtful AI focuses on healthcare automation.";

#[derive(Default)]
pub struct CorpusBuilder {
    entries: Vec<QaEntry>,
}

impl CorpusBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entry(mut self, question: &str, answer: &str) -> Self {
        self.entries.push(QaEntry::new(question, answer));
        self
    }

    pub fn build(self) -> Corpus {
        Corpus::from_entries(self.entries).expect("fixture corpus should be valid")
    }

    /// Writes the entries as a JSON corpus file.
    pub fn write_json(self) -> NamedTempFile {
        let json = serde_json::to_string_pretty(&self.entries).expect("serialize corpus");
        write_temp(&json)
    }
}

pub fn write_temp(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write temp file");
    file.flush().expect("flush temp file");
    file
}

/// Keyword-strategy assistant over the built-in corpus with a recording fallback.
pub fn keyword_assistant() -> (SupportAssistant, Arc<MockFallback>) {
    let matcher = MatcherBuilder::new(Corpus::load())
        .preferred(StrategyKind::Keyword)
        .build();
    let mock = Arc::new(MockFallback::new(GENERATED_REPLY));
    let assistant = SupportAssistant::new(Arc::new(matcher), mock.clone());
    (assistant, mock)
}
