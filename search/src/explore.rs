//! Bounded frontier exploration: every state within a cost budget.
//!
//! Uniform-cost breadth expansion with a FIFO queue. No heuristic and no goal
//! test; the walk is bounded only by `max_cost`.

use std::cmp::Ordering;
use std::collections::{HashMap, VecDeque};
use std::hash::Hash;

use crate::node::Cost;

/// Map every state reachable from `start` within the cost bound to its
/// shortest unit-step distance.
///
/// A state is expanded only if its distance is strictly less than
/// `max_cost`. Successors of an expanded state are recorded at distance
/// `d + 1`, so states at exactly `max_cost` (and, for fractional bounds, the
/// first integer above it) appear in the map but are never expanded.
/// With `max_cost <= 0` or a NaN bound the result is `{start: 0}`.
///
/// First discovery wins: because every edge costs 1 and the queue is FIFO,
/// the first recorded distance of a state is its shortest one.
pub fn explore_within<T, E, I>(start: T, max_cost: Cost, expand: E) -> HashMap<T, Cost>
where
    T: Clone + Eq + Hash,
    E: Fn(&T) -> I,
    I: IntoIterator<Item = T>,
{
    let mut path_cost: HashMap<T, Cost> = HashMap::new();
    let mut queue: VecDeque<T> = VecDeque::new();
    path_cost.insert(start.clone(), 0.0);
    queue.push_back(start);

    let mut expanded: u64 = 0;
    while let Some(current) = queue.pop_front() {
        let Some(&cost) = path_cost.get(&current) else {
            continue;
        };
        if cost.partial_cmp(&max_cost) != Some(Ordering::Less) {
            continue;
        }
        expanded += 1;

        for successor in expand(&current) {
            if !path_cost.contains_key(&successor) {
                path_cost.insert(successor.clone(), cost + 1.0);
                queue.push_back(successor);
            }
        }
    }

    tracing::debug!(
        max_cost,
        visited = path_cost.len(),
        expanded,
        "bounded exploration finished"
    );
    path_cost
}
