//! Search entry points and the best-first expansion loop.
//!
//! The goal test is heuristic-driven: a popped state whose heuristic is
//! within `goal_epsilon` of zero is a goal. There is no explicit goal state,
//! so a heuristic that is zero over a whole region makes every state in that
//! region a goal.
//!
//! # Caller contract
//!
//! - `heuristic` returns a finite, non-negative estimate. Optimality holds
//!   only if it never overestimates the remaining cost; an inadmissible
//!   heuristic still terminates on finite spaces but may return a longer path.
//! - `expand` terminates and never mutates its argument. It may return states
//!   that were already visited, or nothing at all.
//! - `edge_cost` (weighted variant only) is finite and non-negative.
//!
//! Violations are not detected beyond `debug_assert!`s. A heuristic that never
//! reaches zero over an infinite `expand` makes the search run indefinitely
//! unless `SearchPolicy::max_expansions` is set.

use std::collections::HashMap;
use std::hash::Hash;

use crate::error::SearchError;
use crate::frontier::CostFrontier;
use crate::node::{Cost, ScoredCandidate};
use crate::path::reconstruct;
use crate::policy::SearchPolicy;
use crate::stats::SearchStats;

/// A successful search: the path, its cost and the search counters.
#[derive(Debug, Clone, PartialEq)]
pub struct FoundPath<T> {
    /// States from start to goal, both inclusive.
    pub states: Vec<T>,
    /// Accumulated cost of the path (the goal's recorded `g`).
    pub cost: Cost,
    /// Counters collected during the search.
    pub stats: SearchStats,
}

impl<T> FoundPath<T> {
    /// Number of edges in the path.
    #[must_use]
    pub fn edges(&self) -> usize {
        self.states.len().saturating_sub(1)
    }

    /// The start state.
    #[must_use]
    pub fn start(&self) -> Option<&T> {
        self.states.first()
    }

    /// The goal state.
    #[must_use]
    pub fn goal(&self) -> Option<&T> {
        self.states.last()
    }

    /// Discard cost and counters, keeping only the state sequence.
    #[must_use]
    pub fn into_states(self) -> Vec<T> {
        self.states
    }
}

/// Run a unit-cost best-first search with the default policy.
///
/// Every edge costs 1, so the returned `cost` equals the number of edges.
///
/// # Errors
///
/// Returns [`SearchError::NoPathFound`] if no reachable state has a
/// near-zero heuristic.
pub fn search<T, H, E, I>(start: T, heuristic: H, expand: E) -> Result<FoundPath<T>, SearchError>
where
    T: Clone + Eq + Hash,
    H: Fn(&T) -> Cost,
    E: Fn(&T) -> I,
    I: IntoIterator<Item = T>,
{
    search_with_policy(start, &SearchPolicy::default(), heuristic, expand)
}

/// Run a unit-cost best-first search under an explicit policy.
///
/// # Errors
///
/// Returns [`SearchError::InvalidPolicy`] before searching if the policy is
/// invalid, [`SearchError::ExpansionBudgetExceeded`] if the budget runs out,
/// and [`SearchError::NoPathFound`] if the frontier empties.
pub fn search_with_policy<T, H, E, I>(
    start: T,
    policy: &SearchPolicy,
    heuristic: H,
    expand: E,
) -> Result<FoundPath<T>, SearchError>
where
    T: Clone + Eq + Hash,
    H: Fn(&T) -> Cost,
    E: Fn(&T) -> I,
    I: IntoIterator<Item = T>,
{
    search_weighted(start, policy, heuristic, |_, _| 1.0, expand)
}

/// Run a best-first search where stepping from `a` to `b` costs
/// `edge_cost(a, b)`.
///
/// # Errors
///
/// Same as [`search_with_policy`].
pub fn search_weighted<T, H, C, E, I>(
    start: T,
    policy: &SearchPolicy,
    heuristic: H,
    edge_cost: C,
    expand: E,
) -> Result<FoundPath<T>, SearchError>
where
    T: Clone + Eq + Hash,
    H: Fn(&T) -> Cost,
    C: Fn(&T, &T) -> Cost,
    E: Fn(&T) -> I,
    I: IntoIterator<Item = T>,
{
    policy.validate()?;
    tracing::debug!(
        goal_epsilon = policy.goal_epsilon,
        max_expansions = ?policy.max_expansions,
        "search start"
    );

    let mut frontier = CostFrontier::new();
    let mut path_cost: HashMap<T, Cost> = HashMap::new();
    let mut predecessors: HashMap<T, T> = HashMap::new();
    let mut stats = SearchStats::default();

    let start_estimate = heuristic(&start);
    debug_assert!(start_estimate >= 0.0, "heuristic must be non-negative");
    path_cost.insert(start.clone(), 0.0);
    frontier.push(start, 0.0, start_estimate);
    stats.pushes += 1;

    while let Some(ScoredCandidate {
        state: current,
        g_cost,
        f_cost,
    }) = frontier.pop()
    {
        // Every pushed state has a recorded cost; the fallback is unreachable.
        let best = path_cost.get(&current).copied().unwrap_or(g_cost);
        if g_cost > best {
            stats.stale_pops += 1;
            continue;
        }

        if policy.is_goal_estimate(heuristic(&current)) {
            stats.frontier_high_water = frontier.high_water();
            let states = reconstruct(&current, &predecessors)?;
            tracing::debug!(
                cost = best,
                edges = states.len() - 1,
                expansions = stats.expansions,
                pushes = stats.pushes,
                frontier_high_water = stats.frontier_high_water,
                "search reached goal"
            );
            return Ok(FoundPath {
                states,
                cost: best,
                stats,
            });
        }

        if let Some(max_expansions) = policy.max_expansions {
            if stats.expansions >= max_expansions {
                tracing::debug!(max_expansions, pushes = stats.pushes, "search budget exceeded");
                return Err(SearchError::ExpansionBudgetExceeded { max_expansions });
            }
        }

        stats.expansions += 1;
        tracing::trace!(
            expansion = stats.expansions,
            f_cost,
            frontier_len = frontier.len(),
            "expand"
        );

        for successor in expand(&current) {
            let step = edge_cost(&current, &successor);
            debug_assert!(step >= 0.0, "edge cost must be non-negative");
            let new_cost = best + step;

            // Relaxation: only a strictly cheaper path replaces a recorded one.
            let previous = path_cost.get(&successor).copied();
            if previous.is_some_and(|known| new_cost >= known) {
                continue;
            }
            if previous.is_some() {
                stats.improvements += 1;
            }

            let estimate = heuristic(&successor);
            debug_assert!(estimate >= 0.0, "heuristic must be non-negative");
            path_cost.insert(successor.clone(), new_cost);
            predecessors.insert(successor.clone(), current.clone());
            frontier.push(successor, new_cost, new_cost + estimate);
            stats.pushes += 1;
        }
    }

    stats.frontier_high_water = frontier.high_water();
    tracing::debug!(
        expansions = stats.expansions,
        pushes = stats.pushes,
        frontier_high_water = stats.frontier_high_water,
        "search frontier exhausted"
    );
    Err(SearchError::NoPathFound {
        expansions: stats.expansions,
    })
}
