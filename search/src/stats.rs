//! Per-search counters.

/// Counters collected during one search call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// States popped and expanded (goal pops and stale pops excluded).
    pub expansions: u64,
    /// Frontier pushes, including the start state.
    pub pushes: u64,
    /// Pushes that lowered an already-recorded path cost.
    pub improvements: u64,
    /// Popped entries discarded because a cheaper path to the same state
    /// had already been recorded.
    pub stale_pops: u64,
    /// Largest frontier size observed.
    pub frontier_high_water: u64,
}
