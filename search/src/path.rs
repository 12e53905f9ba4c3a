//! Path reconstruction from a predecessor map.

use std::collections::HashMap;
use std::hash::Hash;

use crate::error::SearchError;

/// Walk `predecessors` backward from `terminal` to the state that has no
/// predecessor (the start), returning states in start-to-terminal order.
///
/// The output length is the number of edges plus one; a terminal with no
/// predecessor yields `[terminal]`.
///
/// A well-formed predecessor map is a tree rooted at the start, so every
/// walk visits each key at most once. The walk is bounded by the map size:
/// if it takes more successful lookups than there are entries, the map must
/// contain a cycle.
///
/// # Errors
///
/// Returns [`SearchError::PredecessorCycle`] if the map loops.
pub fn reconstruct<T>(terminal: &T, predecessors: &HashMap<T, T>) -> Result<Vec<T>, SearchError>
where
    T: Clone + Eq + Hash,
{
    let mut path = vec![terminal.clone()];
    let mut current = terminal;

    while let Some(previous) = predecessors.get(current) {
        if path.len() > predecessors.len() {
            return Err(SearchError::PredecessorCycle { steps: path.len() });
        }
        path.push(previous.clone());
        current = previous;
    }

    path.reverse();
    Ok(path)
}
