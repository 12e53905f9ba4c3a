//! Wayfind Search: generic best-first search over caller-defined state spaces.
//!
//! The engine knows nothing about what a state *is*. Callers supply the start
//! state plus two closures (successor expansion and a heuristic estimate) and
//! the engine returns the cheapest path it finds, or a typed failure.
//!
//! # Crate dependency graph
//!
//! ```text
//! wayfind_search  ←  wayfind_harness  ←  lock-tests / benchmarks
//! (frontier, A*)     (worlds, reports)
//! ```
//!
//! # Key items
//!
//! - [`search::search`]: unit-cost best-first search with a near-zero heuristic goal test
//! - [`search::search_weighted`]: the same loop with a caller-supplied edge cost
//! - [`explore::explore_within`]: bounded uniform-cost breadth expansion
//! - [`path::reconstruct`]: predecessor-map walk from a terminal state back to the start
//! - [`frontier::CostFrontier`]: min-priority queue ordered by estimated total cost
//! - [`policy::SearchPolicy`]: goal epsilon and optional expansion budget
//!
//! # Determinism
//!
//! Given deterministic `expand`/`heuristic` closures, a search is a pure
//! function of its inputs, with one documented exception: the relative order
//! of frontier entries with *equal* estimated cost is unspecified (see
//! [`frontier`]). Paths of equal cost may therefore differ between
//! implementations; the returned cost never does.

#![forbid(unsafe_code)]

pub mod error;
pub mod explore;
pub mod frontier;
pub mod node;
pub mod path;
pub mod policy;
pub mod search;
pub mod stats;

pub use error::SearchError;
pub use explore::explore_within;
pub use frontier::CostFrontier;
pub use node::{Cost, ScoredCandidate};
pub use path::reconstruct;
pub use policy::SearchPolicy;
pub use search::{search, search_weighted, search_with_policy, FoundPath};
pub use stats::SearchStats;
