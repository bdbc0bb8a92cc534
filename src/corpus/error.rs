use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading a corpus from an external source.
///
/// The built-in corpus never fails; these only apply to [`Corpus::from_json`](super::Corpus::from_json)
/// and [`Corpus::from_path`](super::Corpus::from_path).
#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("failed to read corpus file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse corpus JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("corpus entry {index} is malformed: missing or blank '{field}'")]
    MalformedEntry { index: usize, field: &'static str },

    #[error("corpus contains no entries")]
    Empty,
}
