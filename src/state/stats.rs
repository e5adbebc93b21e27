//! Per-dimension load statistics for the side panel.

use crate::loader::LoadErrorKind;
use crate::network::Dimension;

/// Display outcome of one dimension's dataset load.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LoadOutcome {
    Pending,
    Loaded {
        stations: usize,
        lines: usize,
        fetch_latency_ms: f64,
    },
    Failed {
        kind: LoadErrorKind,
    },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DimensionLoad {
    pub dimension: Dimension,
    pub outcome: LoadOutcome,
}

/// Load statistics, one entry per dimension in load order.
#[derive(Debug, Clone)]
pub struct SessionStats {
    loads: Vec<DimensionLoad>,
}

impl Default for SessionStats {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStats {
    pub fn new() -> Self {
        Self {
            loads: Dimension::all()
                .iter()
                .map(|dim| DimensionLoad {
                    dimension: *dim,
                    outcome: LoadOutcome::Pending,
                })
                .collect(),
        }
    }

    /// Record a load outcome, replacing the dimension's entry.
    pub fn record(&mut self, dimension: Dimension, outcome: LoadOutcome) {
        if let Some(entry) = self.loads.iter_mut().find(|e| e.dimension == dimension) {
            entry.outcome = outcome;
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &DimensionLoad> {
        self.loads.iter()
    }

    pub fn loaded_count(&self) -> usize {
        self.loads
            .iter()
            .filter(|e| matches!(e.outcome, LoadOutcome::Loaded { .. }))
            .count()
    }

    pub fn failed_count(&self) -> usize {
        self.loads
            .iter()
            .filter(|e| matches!(e.outcome, LoadOutcome::Failed { .. }))
            .count()
    }

    /// True once no dimension is still pending.
    pub fn is_complete(&self) -> bool {
        !self
            .loads
            .iter()
            .any(|e| matches!(e.outcome, LoadOutcome::Pending))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_pending_for_every_dimension() {
        let stats = SessionStats::new();
        assert_eq!(stats.iter().count(), 3);
        assert!(!stats.is_complete());
        assert_eq!(stats.loaded_count(), 0);
    }

    #[test]
    fn test_record_replaces_entry() {
        let mut stats = SessionStats::new();

        stats.record(
            Dimension::Nether,
            LoadOutcome::Failed {
                kind: LoadErrorKind::Fetch,
            },
        );
        stats.record(
            Dimension::Nether,
            LoadOutcome::Loaded {
                stations: 4,
                lines: 1,
                fetch_latency_ms: 20.0,
            },
        );

        assert_eq!(stats.loaded_count(), 1);
        assert_eq!(stats.failed_count(), 0);
        assert_eq!(stats.iter().count(), 3);
    }

    #[test]
    fn test_complete_after_all_outcomes() {
        let mut stats = SessionStats::new();
        for dim in Dimension::all() {
            stats.record(
                *dim,
                LoadOutcome::Loaded {
                    stations: 0,
                    lines: 0,
                    fetch_latency_ms: 1.0,
                },
            );
        }
        assert!(stats.is_complete());
        assert_eq!(stats.loaded_count(), 3);
    }
}
