use std::sync::OnceLock;
use std::sync::atomic::{AtomicUsize, Ordering};

use parking_lot::Mutex;

use super::error::MatchError;

/// Reference-question vectors for one strategy, built on first use.
///
/// The build runs under `gate`, so concurrent first callers wait for a single
/// build instead of racing. A failed build leaves the cell empty and the next
/// caller retries.
#[derive(Debug, Default)]
pub(crate) struct ReferenceIndex {
    vectors: OnceLock<Vec<Vec<f32>>>,
    gate: Mutex<()>,
    builds: AtomicUsize,
}

impl ReferenceIndex {
    pub(crate) fn get_or_build<F>(&self, build: F) -> Result<&[Vec<f32>], MatchError>
    where
        F: FnOnce() -> Result<Vec<Vec<f32>>, MatchError>,
    {
        if let Some(vectors) = self.vectors.get() {
            return Ok(vectors);
        }

        let _guard = self.gate.lock();
        if let Some(vectors) = self.vectors.get() {
            return Ok(vectors);
        }

        let vectors = build()?;
        self.builds.fetch_add(1, Ordering::Relaxed);
        Ok(self.vectors.get_or_init(|| vectors))
    }

    pub(crate) fn is_built(&self) -> bool {
        self.vectors.get().is_some()
    }

    pub(crate) fn builds(&self) -> usize {
        self.builds.load(Ordering::Relaxed)
    }
}
