//! Typed search errors.
//!
//! `NoPathFound` is an ordinary outcome, not an exceptional one: callers are
//! expected to match on it. `InvalidPolicy` is the only pre-flight failure;
//! it is returned before any state is expanded.

/// Failure of a search, reconstruction or policy validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// The frontier emptied without reaching a near-zero-heuristic state.
    #[error("no path found after {expansions} expansions")]
    NoPathFound { expansions: u64 },

    /// `SearchPolicy::max_expansions` was reached before a goal was popped.
    #[error("expansion budget of {max_expansions} exceeded")]
    ExpansionBudgetExceeded { max_expansions: u64 },

    /// The policy failed pre-flight validation.
    #[error("invalid search policy: {detail}")]
    InvalidPolicy { detail: String },

    /// The predecessor map loops back on itself.
    #[error("predecessor map contains a cycle (detected after {steps} steps)")]
    PredecessorCycle { steps: usize },
}

impl SearchError {
    /// Whether this error means "the search ran and found nothing"
    /// rather than "the search was misconfigured or cut short".
    #[must_use]
    pub fn is_no_path(&self) -> bool {
        matches!(self, Self::NoPathFound { .. })
    }
}
