use crate::config::SearchConfig;

/// Counters describing the work done by one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Cells popped from the frontier and expanded.
    pub expanded: usize,
    /// Frontier pops discarded because a cheaper route had superseded them.
    pub stale: usize,
    /// Entries pushed onto the frontier, including the start.
    pub pushed: usize,
}

/// Shortest-path engine for 8-connected walkable grids.
///
/// A `Pathfinder` holds only immutable configuration. Every search allocates
/// its own frontier and cost tables, so one instance can serve any number of
/// agents, including from several threads at once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Pathfinder {
    config: SearchConfig,
}

impl Pathfinder {
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    #[inline]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }
}
