//! Wayfind Harness: concrete worlds run through the search engine.
//!
//! The harness owns orchestration (running a search, rendering the outcome
//! as a canonical JSON report, digesting it, persisting it). Worlds provide
//! domain data only: a start state, successor generation and a heuristic.
//! The engine itself lives in `wayfind_search` and never sees a report.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod contract;
pub mod digest;
pub mod policy;
pub mod report_dir;
pub mod runner;
pub mod worlds;
