use crate::strategy::StrategyKind;

/// A corpus answer accepted for a query. Owned by the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchResult {
    /// Curated answer of the winning entry.
    pub answer: String,
    /// Similarity of the query to the winning reference question.
    pub score: f32,
    /// Corpus position of the winning entry.
    pub index: usize,
    /// Strategy that produced the score.
    pub strategy: StrategyKind,
}

/// Score of one corpus entry for a query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredEntry {
    pub index: usize,
    pub score: f32,
}

#[derive(Debug, Clone, PartialEq)]
/// Decision for a single query.
pub enum MatchOutcome {
    /// Best entry reached the effective threshold.
    Matched {
        index: usize,
        score: f32,
        effective_threshold: f32,
    },
    /// Best entry fell short (or scored zero).
    BelowThreshold {
        best_index: usize,
        top_score: f32,
        effective_threshold: f32,
    },
    /// Query was empty or whitespace; nothing was scored.
    EmptyQuery,
}

impl MatchOutcome {
    /// Returns `true` if matched.
    pub fn is_match(&self) -> bool {
        matches!(self, MatchOutcome::Matched { .. })
    }

    /// Returns the best score (if anything was scored).
    pub fn score(&self) -> Option<f32> {
        match self {
            MatchOutcome::Matched { score, .. }
            | MatchOutcome::BelowThreshold {
                top_score: score, ..
            } => Some(*score),
            MatchOutcome::EmptyQuery => None,
        }
    }

    /// Returns the cutoff that was applied (if anything was scored).
    pub fn effective_threshold(&self) -> Option<f32> {
        match self {
            MatchOutcome::Matched {
                effective_threshold,
                ..
            }
            | MatchOutcome::BelowThreshold {
                effective_threshold,
                ..
            } => Some(*effective_threshold),
            MatchOutcome::EmptyQuery => None,
        }
    }

    /// Returns a short debug string.
    pub fn debug_status(&self) -> &'static str {
        match self {
            MatchOutcome::Matched { .. } => "MATCHED",
            MatchOutcome::BelowThreshold { .. } => "BELOW_THRESHOLD",
            MatchOutcome::EmptyQuery => "EMPTY_QUERY",
        }
    }
}

impl std::fmt::Display for MatchOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchOutcome::Matched {
                index,
                score,
                effective_threshold,
            } => write!(
                f,
                "MATCHED entry #{} (score: {:.4} >= {:.4})",
                index, score, effective_threshold
            ),
            MatchOutcome::BelowThreshold {
                best_index,
                top_score,
                effective_threshold,
            } => write!(
                f,
                "BELOW_THRESHOLD best #{} (score: {:.4} < {:.4})",
                best_index, top_score, effective_threshold
            ),
            MatchOutcome::EmptyQuery => write!(f, "EMPTY_QUERY"),
        }
    }
}

/// Which strategy the builder settled on, and why.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrategySelection {
    /// Strategy asked for.
    pub preferred: StrategyKind,
    /// Strategy actually serving queries.
    pub active: StrategyKind,
    /// Why the preferred strategy was skipped, if it was.
    pub fallback_reason: Option<String>,
}

impl StrategySelection {
    pub fn direct(kind: StrategyKind) -> Self {
        Self {
            preferred: kind,
            active: kind,
            fallback_reason: None,
        }
    }

    /// Returns `true` if the preferred strategy could not be used.
    pub fn is_degraded(&self) -> bool {
        self.preferred != self.active
    }
}
