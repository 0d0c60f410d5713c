/// Tunables for a [`Pathfinder`](crate::Pathfinder).
///
/// The defaults give plain, unbounded 8-connected A*.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchConfig {
    /// Stop and report no route once this many cells have been expanded.
    /// `None` searches until the frontier is exhausted.
    pub max_expansions: Option<usize>,
    /// Allow a diagonal step between two blocked orthogonal cells. When
    /// `false`, both cells sharing an edge with the step must be walkable.
    pub corner_cutting: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_expansions: None,
            corner_cutting: true,
        }
    }
}

impl SearchConfig {
    /// Cap the number of expanded cells.
    pub fn with_max_expansions(mut self, limit: usize) -> Self {
        self.max_expansions = Some(limit);
        self
    }

    pub fn with_corner_cutting(mut self, allow: bool) -> Self {
        self.corner_cutting = allow;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_overrides_defaults() {
        let cfg = SearchConfig::default()
            .with_max_expansions(64)
            .with_corner_cutting(false);
        assert_eq!(cfg.max_expansions, Some(64));
        assert!(!cfg.corner_cutting);
        assert!(SearchConfig::default().corner_cutting);
    }
}
