//! Nearest-question lookup over the curated corpus.
//!
//! A [`Matcher`] owns the corpus, the active [`MatchStrategy`] and a lazily built
//! reference index. For a query it scores every reference question, keeps the
//! earliest best entry (ties never displace it) and accepts it when the score
//! reaches the strategy's effective threshold.
//!
//! When the active strategy is the dense one, a keyword lane is kept alongside.
//! If embedding a query fails at call time, [`Matcher::find_best_match`] answers
//! from that lane instead of surfacing the error.

pub mod builder;
pub mod error;
mod index;
pub mod types;


pub use builder::MatcherBuilder;
pub use error::MatchError;
pub use types::{MatchOutcome, MatchResult, ScoredEntry, StrategySelection};

use tracing::{debug, info, warn};

use crate::corpus::Corpus;
use crate::strategy::{KeywordStrategy, MatchStrategy, Probe, StrategyKind};

use index::ReferenceIndex;

#[derive(Debug)]
struct Lane {
    strategy: Box<dyn MatchStrategy>,
    index: ReferenceIndex,
}

impl Lane {
    fn new(strategy: Box<dyn MatchStrategy>) -> Self {
        Self {
            strategy,
            index: ReferenceIndex::default(),
        }
    }

    fn reference_vectors(&self, corpus: &Corpus) -> Result<&[Vec<f32>], MatchError> {
        self.index.get_or_build(|| {
            let vectors = self.strategy.embed_corpus(corpus)?;
            if vectors.len() != corpus.len() {
                return Err(MatchError::IndexSizeMismatch {
                    expected: corpus.len(),
                    actual: vectors.len(),
                });
            }
            let dims = self.strategy.dims();
            if let Some(bad) = vectors.iter().find(|v| v.len() != dims) {
                return Err(MatchError::DimensionMismatch {
                    expected: dims,
                    actual: bad.len(),
                });
            }
            info!(
                strategy = %self.strategy.kind(),
                entries = vectors.len(),
                dims,
                "Reference index built"
            );
            Ok(vectors)
        })
    }

    fn score_all(&self, corpus: &Corpus, query: &str) -> Result<Vec<f32>, MatchError> {
        let references = self.reference_vectors(corpus)?;
        let query_vector = self.strategy.embed(query)?;
        if query_vector.len() != self.strategy.dims() {
            return Err(MatchError::DimensionMismatch {
                expected: self.strategy.dims(),
                actual: query_vector.len(),
            });
        }

        let probe = Probe::new(query, &query_vector);
        Ok(corpus
            .iter()
            .zip(references)
            .map(|(entry, vector)| {
                self.strategy
                    .score(probe, Probe::new(&entry.question, vector))
            })
            .collect())
    }

    fn evaluate(
        &self,
        corpus: &Corpus,
        query: &str,
        nominal: f32,
    ) -> Result<MatchOutcome, MatchError> {
        if query.trim().is_empty() {
            return Ok(MatchOutcome::EmptyQuery);
        }

        let scores = self.score_all(corpus, query)?;
        let effective_threshold = self.strategy.effective_threshold(nominal);

        let mut best_index = 0;
        let mut top_score = 0.0_f32;
        for (index, &score) in scores.iter().enumerate() {
            if score > top_score {
                top_score = score;
                best_index = index;
            }
        }

        // Nothing above zero means no candidate at all.
        let outcome = if top_score > 0.0 && top_score >= effective_threshold {
            MatchOutcome::Matched {
                index: best_index,
                score: top_score,
                effective_threshold,
            }
        } else {
            MatchOutcome::BelowThreshold {
                best_index,
                top_score,
                effective_threshold,
            }
        };

        debug!(
            strategy = %self.strategy.kind(),
            status = outcome.debug_status(),
            best_index,
            top_score,
            effective_threshold,
            "Query scored"
        );

        Ok(outcome)
    }
}

/// Finds the curated answer whose reference question best matches a query.
#[derive(Debug)]
pub struct Matcher {
    corpus: Corpus,
    primary: Lane,
    degraded: Option<Lane>,
    threshold: Option<f32>,
    selection: StrategySelection,
}

impl Matcher {
    /// Matcher over `corpus` using `strategy` directly.
    ///
    /// A dense strategy gets a default keyword lane for per-call degradation.
    pub fn new(corpus: Corpus, strategy: Box<dyn MatchStrategy>) -> Self {
        let kind = strategy.kind();
        Self::assemble(
            corpus,
            strategy,
            KeywordStrategy::default(),
            None,
            StrategySelection::direct(kind),
        )
    }

    /// Keyword matcher with default scoring.
    pub fn keyword(corpus: Corpus) -> Self {
        Self::new(corpus, Box::new(KeywordStrategy::default()))
    }

    pub(crate) fn assemble(
        corpus: Corpus,
        strategy: Box<dyn MatchStrategy>,
        keyword: KeywordStrategy,
        threshold: Option<f32>,
        selection: StrategySelection,
    ) -> Self {
        let degraded = match strategy.kind() {
            StrategyKind::Embedding => Some(Lane::new(Box::new(keyword))),
            StrategyKind::Keyword => None,
        };

        Self {
            corpus,
            primary: Lane::new(strategy),
            degraded,
            threshold,
            selection,
        }
    }

    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    /// Strategy serving queries.
    pub fn strategy_kind(&self) -> StrategyKind {
        self.primary.strategy.kind()
    }

    pub fn selection(&self) -> &StrategySelection {
        &self.selection
    }

    /// Nominal threshold used when a call passes `None`.
    pub fn default_threshold(&self) -> f32 {
        self.threshold
            .unwrap_or_else(|| self.primary.strategy.default_threshold())
    }

    /// Cutoff applied for a nominal threshold under the active strategy.
    pub fn effective_threshold(&self, threshold: Option<f32>) -> f32 {
        self.primary
            .strategy
            .effective_threshold(threshold.unwrap_or_else(|| self.default_threshold()))
    }

    /// Returns `true` once the active strategy's reference index exists.
    pub fn is_initialized(&self) -> bool {
        self.primary.index.is_built()
    }

    /// Number of times the active strategy's reference index was built.
    pub fn index_builds(&self) -> usize {
        self.primary.index.builds()
    }

    /// Builds the reference index now instead of on the first query.
    pub fn warm(&self) -> Result<(), MatchError> {
        self.primary.reference_vectors(&self.corpus).map(|_| ())
    }

    /// Scores every corpus entry against `query`, in corpus order.
    ///
    /// An empty or whitespace query yields an empty list.
    pub fn rank(&self, query: &str) -> Result<Vec<ScoredEntry>, MatchError> {
        if query.trim().is_empty() {
            return Ok(Vec::new());
        }
        let scores = self.primary.score_all(&self.corpus, query)?;
        Ok(scores
            .into_iter()
            .enumerate()
            .map(|(index, score)| ScoredEntry { index, score })
            .collect())
    }

    /// Full decision for `query` under the active strategy.
    pub fn explain(&self, query: &str, threshold: Option<f32>) -> Result<MatchOutcome, MatchError> {
        self.primary
            .evaluate(&self.corpus, query, self.nominal(threshold))
    }

    /// Like [`find_best_match`](Self::find_best_match), but surfaces strategy
    /// failures instead of degrading.
    pub fn try_find_best_match(
        &self,
        query: &str,
        threshold: Option<f32>,
    ) -> Result<Option<MatchResult>, MatchError> {
        let outcome = self.explain(query, threshold)?;
        Ok(self.to_result(&outcome, self.strategy_kind()))
    }

    /// Best curated answer for `query`, or `None` when no entry clears the
    /// threshold (`None` uses the active strategy's default).
    ///
    /// Never fails: a dense-strategy error falls back to the keyword lane for
    /// this call, and any remaining error is logged and reported as no match.
    pub fn find_best_match(&self, query: &str, threshold: Option<f32>) -> Option<MatchResult> {
        let error = match self.explain(query, threshold) {
            Ok(outcome) => return self.to_result(&outcome, self.strategy_kind()),
            Err(e) => e,
        };

        let Some(lane) = &self.degraded else {
            warn!(error = %error, "Match failed; treating as no match");
            return None;
        };

        warn!(
            error = %error,
            fallback = %lane.strategy.kind(),
            "Embedding strategy failed for query; degrading"
        );

        match lane.evaluate(&self.corpus, query, self.degraded_nominal(lane, threshold)) {
            Ok(outcome) => self.to_result(&outcome, lane.strategy.kind()),
            Err(e) => {
                warn!(error = %e, "Degraded match failed; treating as no match");
                None
            }
        }
    }

    /// Ranking under the keyword lane a dense matcher degrades to.
    ///
    /// `None` when the active strategy is already keyword.
    pub fn degraded_rank(&self, query: &str) -> Option<Result<Vec<ScoredEntry>, MatchError>> {
        let lane = self.degraded.as_ref()?;
        if query.trim().is_empty() {
            return Some(Ok(Vec::new()));
        }
        Some(lane.score_all(&self.corpus, query).map(|scores| {
            scores
                .into_iter()
                .enumerate()
                .map(|(index, score)| ScoredEntry { index, score })
                .collect()
        }))
    }

    /// Decision [`find_best_match`](Self::find_best_match) serves when the
    /// dense strategy fails for `query`.
    ///
    /// `None` when the active strategy is already keyword.
    pub fn degraded_explain(
        &self,
        query: &str,
        threshold: Option<f32>,
    ) -> Option<Result<MatchOutcome, MatchError>> {
        let lane = self.degraded.as_ref()?;
        Some(lane.evaluate(&self.corpus, query, self.degraded_nominal(lane, threshold)))
    }

    fn nominal(&self, threshold: Option<f32>) -> f32 {
        threshold.unwrap_or_else(|| self.default_threshold())
    }

    fn degraded_nominal(&self, lane: &Lane, threshold: Option<f32>) -> f32 {
        threshold
            .or(self.threshold)
            .unwrap_or_else(|| lane.strategy.default_threshold())
    }

    fn to_result(&self, outcome: &MatchOutcome, strategy: StrategyKind) -> Option<MatchResult> {
        match *outcome {
            MatchOutcome::Matched { index, score, .. } => {
                self.corpus.get(index).map(|entry| MatchResult {
                    answer: entry.answer.clone(),
                    score,
                    index,
                    strategy,
                })
            }
            _ => None,
        }
    }
}
