//! Reference corpus: the fixed, ordered question/answer pairs the matcher serves.
//!
//! Entry identity is its position. Order is significant: on exact score ties the
//! earliest entry wins.

pub mod error;

#[cfg(test)]
mod tests;

pub use error::CorpusError;

use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

/// Built-in knowledge base (question, answer).
const BUILTIN_QA: [(&str, &str); 5] = [
    (
        "What does the eligibility verification agent (EVA) do?",
        "EVA automates the process of verifying a patient's eligibility and benefits information in real-time, eliminating manual data entry errors and reducing claim rejections.",
    ),
    (
        "What does the claims processing agent (CAM) do?",
        "CAM streamlines the submission and management of claims, improving accuracy, reducing manual intervention, and accelerating reimbursements.",
    ),
    (
        "How does the payment posting agent (PHIL) work?",
        "PHIL automates the posting of payments to patient accounts, ensuring fast, accurate reconciliation of payments and reducing administrative burden.",
    ),
    (
        "Tell me about Thoughtful AI's Agents.",
        "Thoughtful AI provides a suite of AI-powered automation agents designed to streamline healthcare processes. These include Eligibility Verification (EVA), Claims Processing (CAM), and Payment Posting (PHIL), among others.",
    ),
    (
        "What are the benefits of using Thoughtful AI's agents?",
        "Using Thoughtful AI's Agents can significantly reduce administrative costs, improve operational efficiency, and reduce errors in critical processes like claims management and payment posting.",
    ),
];

/// A single reference question and its curated answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QaEntry {
    pub question: String,
    pub answer: String,
}

impl QaEntry {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawEntry {
    question: Option<String>,
    answer: Option<String>,
}

/// Immutable, ordered sequence of [`QaEntry`]. Cloning shares the entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Corpus {
    entries: Arc<[QaEntry]>,
}

impl Corpus {
    /// Returns the built-in knowledge base.
    pub fn load() -> Self {
        let entries: Vec<QaEntry> = BUILTIN_QA
            .iter()
            .map(|(q, a)| QaEntry::new(*q, *a))
            .collect();

        Self {
            entries: entries.into(),
        }
    }

    /// Builds a corpus from explicit entries, rejecting blank fields.
    pub fn from_entries(entries: Vec<QaEntry>) -> Result<Self, CorpusError> {
        if entries.is_empty() {
            return Err(CorpusError::Empty);
        }

        for (index, entry) in entries.iter().enumerate() {
            if entry.question.trim().is_empty() {
                return Err(CorpusError::MalformedEntry {
                    index,
                    field: "question",
                });
            }
            if entry.answer.trim().is_empty() {
                return Err(CorpusError::MalformedEntry {
                    index,
                    field: "answer",
                });
            }
        }

        Ok(Self {
            entries: entries.into(),
        })
    }

    /// Parses a JSON array of `{"question": ..., "answer": ...}` objects.
    pub fn from_json(json: &str) -> Result<Self, CorpusError> {
        let raw: Vec<RawEntry> = serde_json::from_str(json)?;

        let entries = raw
            .into_iter()
            .enumerate()
            .map(|(index, entry)| {
                let question = entry.question.ok_or(CorpusError::MalformedEntry {
                    index,
                    field: "question",
                })?;
                let answer = entry.answer.ok_or(CorpusError::MalformedEntry {
                    index,
                    field: "answer",
                })?;
                Ok(QaEntry { question, answer })
            })
            .collect::<Result<Vec<_>, CorpusError>>()?;

        Self::from_entries(entries)
    }

    /// Reads and parses a JSON corpus file.
    pub fn from_path(path: &Path) -> Result<Self, CorpusError> {
        let content = std::fs::read_to_string(path).map_err(|source| CorpusError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let corpus = Self::from_json(&content)?;
        info!(
            path = %path.display(),
            entries = corpus.len(),
            "Loaded corpus from file"
        );
        Ok(corpus)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&QaEntry> {
        self.entries.get(index)
    }

    pub fn entries(&self) -> &[QaEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, QaEntry> {
        self.entries.iter()
    }

    /// All reference questions, in corpus order.
    pub fn questions(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.question.as_str()).collect()
    }

    /// All curated answers, in corpus order.
    pub fn answers(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.answer.as_str()).collect()
    }
}

impl Default for Corpus {
    fn default() -> Self {
        Self::load()
    }
}

impl<'a> IntoIterator for &'a Corpus {
    type Item = &'a QaEntry;
    type IntoIter = std::slice::Iter<'a, QaEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
