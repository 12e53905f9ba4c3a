//! World contract: the minimal trait a world must implement.
//!
//! Worlds provide domain-specific states, moves and estimates. Worlds may NOT
//! implement hashing, report rendering or policy; those are runner concerns.

use std::hash::Hash;

use wayfind_search::Cost;

/// Typed failure for world construction and description.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WorldError {
    /// World input text could not be parsed.
    #[error("world input parse error at line {line}: {detail}")]
    Parse { line: usize, detail: String },
    /// A required marker (start, goal) is missing from the input.
    #[error("world input is missing {what}")]
    Missing { what: String },
}

/// The contract a world must implement to be searched by the runner.
///
/// # Contract
///
/// - `successors` is deterministic: the same state yields the same states in
///   the same order.
/// - `heuristic` is non-negative and returns (approximately) zero exactly on
///   goal states.
/// - `describe_state` renders a state using integer-only JSON so it can be
///   part of a canonical report.
pub trait SearchWorld {
    /// The world's state type.
    type State: Clone + Eq + Hash;

    /// Unique world identifier (e.g., `"grid_maze"`).
    fn world_id(&self) -> &str;

    /// The state the search starts from.
    fn start(&self) -> Self::State;

    /// Estimated remaining cost from `state` to the nearest goal.
    fn heuristic(&self, state: &Self::State) -> Cost;

    /// Legal successor states of `state`.
    fn successors(&self, state: &Self::State) -> Vec<Self::State>;

    /// Cost of stepping from `from` to `to`. Unit by default.
    fn edge_cost(&self, _from: &Self::State, _to: &Self::State) -> Cost {
        1.0
    }

    /// Canonical JSON rendering of a state for reports.
    fn describe_state(&self, state: &Self::State) -> serde_json::Value;
}
