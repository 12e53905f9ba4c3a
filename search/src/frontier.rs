//! Cost frontier: min-priority queue of scored candidates.
//!
//! # Tie-breaking
//!
//! Candidates are ordered by `f_cost` alone. Among candidates with equal
//! `f_cost` the extraction order is whatever `BinaryHeap` happens to produce
//! for the sequence of pushes and pops so far. That order is reproducible for
//! an identical push/pop sequence within this implementation, but it is not
//! part of the contract and no secondary key (depth, insertion counter) is
//! applied. Callers that need bit-exact paths across implementations must not
//! rely on which of several equal-cost paths is returned.
//!
//! The frontier does not deduplicate. The same state may be present several
//! times with different costs; the search loop discards stale entries on pop.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::node::{Cost, ScoredCandidate};

/// Best-first frontier ordered ascending by estimated total cost.
///
/// `BinaryHeap` is a max-heap, so entries are wrapped in `Reverse` to get
/// min-heap behavior (lowest `f_cost` first).
#[derive(Debug)]
pub struct CostFrontier<T> {
    heap: BinaryHeap<Reverse<ScoredCandidate<T>>>,
    high_water: u64,
}

impl<T> CostFrontier<T> {
    /// Create a new empty frontier.
    #[must_use]
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            high_water: 0,
        }
    }

    /// Push a state with accumulated cost `g_cost` and estimate `f_cost`.
    pub fn push(&mut self, state: T, g_cost: Cost, f_cost: Cost) {
        self.heap
            .push(Reverse(ScoredCandidate::new(state, g_cost, f_cost)));
        let size = self.heap.len() as u64;
        if size > self.high_water {
            self.high_water = size;
        }
    }

    /// Pop the candidate with the lowest `f_cost`.
    #[must_use]
    pub fn pop(&mut self) -> Option<ScoredCandidate<T>> {
        self.heap.pop().map(|Reverse(c)| c)
    }

    /// Lowest `f_cost` currently queued, without removing it.
    #[must_use]
    pub fn peek_cost(&self) -> Option<Cost> {
        self.heap.peek().map(|Reverse(c)| c.f_cost)
    }

    /// Current frontier size.
    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Whether the frontier is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// High-water mark of frontier size.
    #[must_use]
    pub fn high_water(&self) -> u64 {
        self.high_water
    }
}

impl<T> Default for CostFrontier<T> {
    fn default() -> Self {
        Self::new()
    }
}
