//! Scored frontier candidates.

use std::cmp::Ordering;

/// Path and heuristic cost unit.
///
/// Costs are floating point so heuristics may return fractional estimates
/// (e.g. half the remaining item distance in a two-items-per-move puzzle).
pub type Cost = f64;

/// A state paired with its estimated total cost `f = g + h`.
///
/// Ordering compares `f_cost` only, using [`f64::total_cmp`]. There is no
/// secondary key: two candidates with equal `f_cost` compare `Equal` and the
/// frontier may yield them in either order.
#[derive(Debug, Clone)]
pub struct ScoredCandidate<T> {
    /// The candidate state.
    pub state: T,
    /// Accumulated path cost at the time the candidate was pushed.
    pub g_cost: Cost,
    /// Estimated total cost (`g_cost + heuristic(state)`).
    pub f_cost: Cost,
}

impl<T> ScoredCandidate<T> {
    #[must_use]
    pub fn new(state: T, g_cost: Cost, f_cost: Cost) -> Self {
        Self {
            state,
            g_cost,
            f_cost,
        }
    }
}

impl<T> PartialEq for ScoredCandidate<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T> Eq for ScoredCandidate<T> {}

impl<T> PartialOrd for ScoredCandidate<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for ScoredCandidate<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.f_cost.total_cmp(&other.f_cost)
    }
}
