//! Run configuration and its auditable snapshot.
//!
//! The runner derives a [`PolicySnapshotV1`] deterministically from the world
//! id, the kind of run and the part of the run configuration that run reads.
//! The snapshot digest is bound into every report, so two reports with equal
//! digests were produced under equal policies. A search snapshot never carries
//! the exploration bound and an exploration snapshot never carries the search
//! policy.

use wayfind_search::{Cost, SearchPolicy};

use crate::digest::{
    canonical_hash, canonical_json_bytes, cost_string, CanonError, ContentHash,
    DOMAIN_POLICY_SNAPSHOT,
};

/// Default cost bound for exploration runs.
pub const DEFAULT_EXPLORATION_MAX_COST: Cost = 64.0;

/// Configuration for one harness run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    /// Search policy handed to the engine.
    pub search: SearchPolicy,
    /// Cost bound for `run_exploration`.
    pub exploration_max_cost: Cost,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            search: SearchPolicy::default(),
            exploration_max_cost: DEFAULT_EXPLORATION_MAX_COST,
        }
    }
}

/// Which runner a snapshot is built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RunKind {
    Search,
    Exploration,
}

impl RunKind {
    /// Stable string form used in snapshots.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Search => "search",
            Self::Exploration => "exploration",
        }
    }
}

/// In-memory policy snapshot for a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicySnapshotV1 {
    /// Canonical JSON bytes of the snapshot.
    pub bytes: Vec<u8>,
    /// `canonical_hash(DOMAIN_POLICY_SNAPSHOT, bytes)`.
    pub digest: ContentHash,
}

/// Build the policy snapshot for a `kind` run of `world_id` under `config`.
///
/// # Errors
///
/// Returns [`CanonError`] if canonical JSON serialization fails.
pub fn build_policy_snapshot(
    world_id: &str,
    kind: RunKind,
    config: &RunConfig,
) -> Result<PolicySnapshotV1, CanonError> {
    let settings = match kind {
        RunKind::Search => serde_json::json!({
            "goal_epsilon": cost_string(config.search.goal_epsilon),
            "max_expansions": config.search.max_expansions,
        }),
        RunKind::Exploration => serde_json::json!({
            "max_cost": cost_string(config.exploration_max_cost),
        }),
    };
    let snapshot_value = serde_json::json!({
        "run": kind.as_str(),
        "schema_version": "policy.v1",
        "settings": settings,
        "world_id": world_id,
    });
    let bytes = canonical_json_bytes(&snapshot_value)?;
    let digest = canonical_hash(DOMAIN_POLICY_SNAPSHOT, &bytes);
    Ok(PolicySnapshotV1 { bytes, digest })
}
