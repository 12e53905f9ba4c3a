//! Harness runner: drives the search engine over a world and renders an
//! auditable report.
//!
//! The runner uses ONLY engine entry points (`search_weighted`,
//! `explore_within`). It does not implement any search logic itself.
//!
//! # Pipeline
//!
//! ```text
//! build_policy_snapshot(Search) → search_weighted() → describe_state() × path
//!   → canonical_json_bytes() → canonical_hash(DOMAIN_SEARCH_REPORT)
//! ```
//!
//! An exhausted frontier or a spent expansion budget is a legitimate outcome
//! and lands in the report as its `termination`. Only a run that could not
//! start (invalid policy) or could not be rendered is an `Err`.

use tracing::{debug, debug_span};
use wayfind_search::{explore_within, search_weighted, Cost, SearchError, SearchStats};

use crate::contract::SearchWorld;
use crate::digest::{
    canonical_hash, canonical_json_bytes, cost_string, CanonError, ContentHash,
    DOMAIN_EXPLORATION_REPORT, DOMAIN_SEARCH_REPORT,
};
use crate::policy::{build_policy_snapshot, RunConfig, RunKind};

/// `schema_version` of a search report.
pub const SEARCH_REPORT_SCHEMA: &str = "search_report.v1";

/// `schema_version` of an exploration report.
pub const EXPLORATION_REPORT_SCHEMA: &str = "exploration_report.v1";

/// Error during a harness run.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RunError {
    /// The engine refused to start (pre-flight policy failure).
    #[error("search rejected the run: {0}")]
    Search(#[from] SearchError),
    /// Canonical JSON serialization failed.
    #[error(transparent)]
    Canon(#[from] CanonError),
    /// The exploration bound is NaN, infinite or negative.
    #[error("exploration bound must be finite and non-negative, got {max_cost}")]
    InvalidExplorationBound { max_cost: String },
}

/// How a search run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Termination {
    GoalReached,
    NoPathFound,
    ExpansionBudgetExceeded,
}

impl Termination {
    /// Stable string form used in reports.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::GoalReached => "goal_reached",
            Self::NoPathFound => "no_path_found",
            Self::ExpansionBudgetExceeded => "expansion_budget_exceeded",
        }
    }
}

/// A report that has a canonical byte form and a digest over it.
pub trait CanonicalReport {
    /// The report's `schema_version` string.
    fn schema_version(&self) -> &'static str;
    /// Canonical JSON bytes of the report.
    fn canonical_bytes(&self) -> &[u8];
    /// Domain-separated digest of [`CanonicalReport::canonical_bytes`].
    fn digest(&self) -> &ContentHash;
}

/// Hash domain for a report `schema_version`, if it is a known one.
#[must_use]
pub fn report_domain(schema_version: &str) -> Option<&'static [u8]> {
    match schema_version {
        SEARCH_REPORT_SCHEMA => Some(DOMAIN_SEARCH_REPORT),
        EXPLORATION_REPORT_SCHEMA => Some(DOMAIN_EXPLORATION_REPORT),
        _ => None,
    }
}

/// Outcome of [`run_search`].
#[derive(Debug, Clone, PartialEq)]
pub struct SearchReportV1 {
    pub world_id: String,
    pub termination: Termination,
    /// Path states rendered with `describe_state`. Empty unless the goal was reached.
    pub path: Vec<serde_json::Value>,
    /// Path cost. `None` unless the goal was reached.
    pub cost: Option<Cost>,
    /// Full counters. `None` unless the goal was reached.
    pub stats: Option<SearchStats>,
    /// Expansions performed, known for every termination.
    pub expansions: u64,
    /// Digest of the policy snapshot the run was made under.
    pub policy_digest: ContentHash,
    /// Canonical JSON bytes of the report.
    pub bytes: Vec<u8>,
    /// `canonical_hash(DOMAIN_SEARCH_REPORT, bytes)`.
    pub digest: ContentHash,
}

impl SearchReportV1 {
    /// Number of edges on the reported path.
    #[must_use]
    pub fn path_edges(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

impl CanonicalReport for SearchReportV1 {
    fn schema_version(&self) -> &'static str {
        SEARCH_REPORT_SCHEMA
    }

    fn canonical_bytes(&self) -> &[u8] {
        &self.bytes
    }

    fn digest(&self) -> &ContentHash {
        &self.digest
    }
}

/// Outcome of [`run_exploration`].
#[derive(Debug, Clone, PartialEq)]
pub struct ExplorationReportV1 {
    pub world_id: String,
    pub max_cost: Cost,
    /// Digest of the policy snapshot the run was made under.
    pub policy_digest: ContentHash,
    /// Number of distinct states reached, the start included.
    pub visited: usize,
    /// `(distance, state count)` in ascending distance order.
    pub histogram: Vec<(Cost, u64)>,
    /// Canonical JSON bytes of the report.
    pub bytes: Vec<u8>,
    /// `canonical_hash(DOMAIN_EXPLORATION_REPORT, bytes)`.
    pub digest: ContentHash,
}

impl CanonicalReport for ExplorationReportV1 {
    fn schema_version(&self) -> &'static str {
        EXPLORATION_REPORT_SCHEMA
    }

    fn canonical_bytes(&self) -> &[u8] {
        &self.bytes
    }

    fn digest(&self) -> &ContentHash {
        &self.digest
    }
}

/// Search `world` from its start state under `config.search`.
///
/// # Errors
///
/// Returns [`RunError::Search`] if the policy fails validation and
/// [`RunError::Canon`] if a state description is not integer-only JSON.
pub fn run_search<W: SearchWorld>(
    world: &W,
    config: &RunConfig,
) -> Result<SearchReportV1, RunError> {
    let span = debug_span!("run_search", world_id = world.world_id());
    let _guard = span.enter();

    let snapshot = build_policy_snapshot(world.world_id(), RunKind::Search, config)?;

    let outcome = search_weighted(
        world.start(),
        &config.search,
        |state| world.heuristic(state),
        |from, to| world.edge_cost(from, to),
        |state| world.successors(state),
    );

    let (termination, path, cost, stats, expansions) = match outcome {
        Ok(found) => {
            let path = found
                .states
                .iter()
                .map(|s| world.describe_state(s))
                .collect();
            (
                Termination::GoalReached,
                path,
                Some(found.cost),
                Some(found.stats),
                found.stats.expansions,
            )
        }
        Err(SearchError::NoPathFound { expansions }) => {
            (Termination::NoPathFound, Vec::new(), None, None, expansions)
        }
        Err(SearchError::ExpansionBudgetExceeded { max_expansions }) => (
            Termination::ExpansionBudgetExceeded,
            Vec::new(),
            None,
            None,
            max_expansions,
        ),
        Err(other) => return Err(other.into()),
    };

    let stats_value = match stats {
        Some(s) => serde_json::json!({
            "expansions": s.expansions,
            "frontier_high_water": s.frontier_high_water,
            "improvements": s.improvements,
            "pushes": s.pushes,
            "stale_pops": s.stale_pops,
        }),
        None => serde_json::json!({ "expansions": expansions }),
    };

    let report_value = serde_json::json!({
        "cost": cost.map(cost_string),
        "path": path,
        "policy_digest": snapshot.digest.as_str(),
        "schema_version": SEARCH_REPORT_SCHEMA,
        "stats": stats_value,
        "termination": termination.as_str(),
        "world_id": world.world_id(),
    });
    let bytes = canonical_json_bytes(&report_value)?;
    let digest = canonical_hash(DOMAIN_SEARCH_REPORT, &bytes);

    debug!(
        termination = termination.as_str(),
        expansions,
        digest = digest.as_str(),
        "search run finished"
    );

    Ok(SearchReportV1 {
        world_id: world.world_id().to_string(),
        termination,
        path,
        cost,
        stats,
        expansions,
        policy_digest: snapshot.digest,
        bytes,
        digest,
    })
}

/// Enumerate every state of `world` within `config.exploration_max_cost`
/// unit steps of its start.
///
/// # Errors
///
/// Returns [`RunError::InvalidExplorationBound`] if the bound is not a
/// finite non-negative number and [`RunError::Canon`] if rendering fails.
pub fn run_exploration<W: SearchWorld>(
    world: &W,
    config: &RunConfig,
) -> Result<ExplorationReportV1, RunError> {
    let span = debug_span!("run_exploration", world_id = world.world_id());
    let _guard = span.enter();

    let max_cost = config.exploration_max_cost;
    if !max_cost.is_finite() || max_cost < 0.0 {
        return Err(RunError::InvalidExplorationBound {
            max_cost: cost_string(max_cost),
        });
    }
    let snapshot = build_policy_snapshot(world.world_id(), RunKind::Exploration, config)?;

    let reached = explore_within(world.start(), max_cost, |state| world.successors(state));

    let mut histogram: Vec<(Cost, u64)> = Vec::new();
    let mut distances: Vec<Cost> = reached.values().copied().collect();
    distances.sort_by(f64::total_cmp);
    for distance in distances {
        if let Some((last, count)) = histogram.last_mut() {
            if last.total_cmp(&distance).is_eq() {
                *count += 1;
                continue;
            }
        }
        histogram.push((distance, 1));
    }

    let report_value = serde_json::json!({
        "histogram": histogram
            .iter()
            .map(|&(d, count)| serde_json::json!({ "cost": cost_string(d), "count": count }))
            .collect::<Vec<_>>(),
        "max_cost": cost_string(max_cost),
        "policy_digest": snapshot.digest.as_str(),
        "schema_version": EXPLORATION_REPORT_SCHEMA,
        "visited": reached.len(),
        "world_id": world.world_id(),
    });
    let bytes = canonical_json_bytes(&report_value)?;
    let digest = canonical_hash(DOMAIN_EXPLORATION_REPORT, &bytes);

    debug!(visited = reached.len(), digest = digest.as_str(), "exploration run finished");

    Ok(ExplorationReportV1 {
        world_id: world.world_id().to_string(),
        max_cost,
        policy_digest: snapshot.digest,
        visited: reached.len(),
        histogram,
        bytes,
        digest,
    })
}
