//! Search policy types.

use crate::error::SearchError;
use crate::node::Cost;

/// Heuristic values within this distance of zero mark a goal state.
///
/// Suited to heuristics that return exact integer-like distances. Heuristics
/// with larger rounding error should widen [`SearchPolicy::goal_epsilon`].
pub const DEFAULT_GOAL_EPSILON: Cost = 1e-6;

/// Per-call search configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchPolicy {
    /// Goal test tolerance: a popped state is a goal when
    /// `|heuristic(state)| < goal_epsilon`.
    pub goal_epsilon: Cost,
    /// Hard cap on node expansions. `None` runs until a goal is popped or
    /// the frontier empties.
    pub max_expansions: Option<u64>,
}

impl SearchPolicy {
    /// Builder-style override of `max_expansions`.
    #[must_use]
    pub fn with_max_expansions(mut self, max_expansions: u64) -> Self {
        self.max_expansions = Some(max_expansions);
        self
    }

    /// Builder-style override of `goal_epsilon`.
    #[must_use]
    pub fn with_goal_epsilon(mut self, goal_epsilon: Cost) -> Self {
        self.goal_epsilon = goal_epsilon;
        self
    }

    /// Whether a heuristic value counts as "at the goal".
    #[must_use]
    pub fn is_goal_estimate(&self, estimate: Cost) -> bool {
        estimate.abs() < self.goal_epsilon
    }

    /// Validate the policy before any search step is taken.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidPolicy`] if `goal_epsilon` is not a
    /// finite positive number or `max_expansions` is `Some(0)`.
    pub fn validate(&self) -> Result<(), SearchError> {
        if !self.goal_epsilon.is_finite() || self.goal_epsilon <= 0.0 {
            return Err(SearchError::InvalidPolicy {
                detail: format!(
                    "goal_epsilon must be finite and positive, got {}",
                    self.goal_epsilon
                ),
            });
        }
        if self.max_expansions == Some(0) {
            return Err(SearchError::InvalidPolicy {
                detail: "max_expansions must be at least 1 when set".into(),
            });
        }
        Ok(())
    }
}

impl Default for SearchPolicy {
    fn default() -> Self {
        Self {
            goal_epsilon: DEFAULT_GOAL_EPSILON,
            max_expansions: None,
        }
    }
}
