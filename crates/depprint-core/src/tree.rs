//! Resolved module tree container and statistics.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::record::ModuleRecord;

/// Summary statistics for a module scan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanStats {
    /// Descriptors successfully read, the root included.
    pub descriptors_read: u64,
    /// Declared modules whose descriptor was absent.
    pub missing_descriptors: u64,
    /// Aggregator modules walked through (never reported).
    pub aggregators: u64,
    /// Deepest module level reached (root = 0).
    pub max_depth: u32,
}

impl ScanStats {
    /// Create new empty stats.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a descriptor read at the given depth.
    pub fn record_descriptor(&mut self, depth: u32) {
        self.descriptors_read += 1;
        self.max_depth = self.max_depth.max(depth);
    }

    /// Record a declared module without a descriptor.
    pub fn record_missing(&mut self) {
        self.missing_descriptors += 1;
    }

    /// Record a module that declares submodules of its own.
    pub fn record_aggregator(&mut self) {
        self.aggregators += 1;
    }

    /// Fold another walk's statistics into these.
    pub fn merge(&mut self, other: &ScanStats) {
        self.descriptors_read += other.descriptors_read;
        self.missing_descriptors += other.missing_descriptors;
        self.aggregators += other.aggregators;
        self.max_depth = self.max_depth.max(other.max_depth);
    }
}

/// Leaf modules discovered below a root project.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModuleTree {
    /// The root project the walk started from.
    pub root: ModuleRecord,

    /// Leaf modules, ascending by coordinate key, one per key.
    pub leaves: Vec<ModuleRecord>,

    /// Duration of the scan.
    pub scan_duration: Duration,

    /// Summary statistics.
    pub stats: ScanStats,
}

impl ModuleTree {
    /// Create a new module tree.
    pub fn new(
        root: ModuleRecord,
        leaves: Vec<ModuleRecord>,
        stats: ScanStats,
        scan_duration: Duration,
    ) -> Self {
        Self {
            root,
            leaves,
            scan_duration,
            stats,
        }
    }

    /// Directory of the root project.
    pub fn root_path(&self) -> PathBuf {
        self.root.root.clone()
    }

    /// Number of leaf modules.
    pub fn leaf_count(&self) -> usize {
        self.leaves.len()
    }

    /// Check if some declared module had no descriptor.
    pub fn was_truncated(&self) -> bool {
        self.stats.missing_descriptors > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_stats_default() {
        let stats = ScanStats::default();
        assert_eq!(stats.descriptors_read, 0);
        assert_eq!(stats.missing_descriptors, 0);
        assert_eq!(stats.max_depth, 0);
    }

    #[test]
    fn test_scan_stats_record() {
        let mut stats = ScanStats::new();
        stats.record_descriptor(0);
        stats.record_descriptor(2);
        stats.record_descriptor(1);
        stats.record_missing();
        stats.record_aggregator();

        assert_eq!(stats.descriptors_read, 3);
        assert_eq!(stats.max_depth, 2);
        assert_eq!(stats.missing_descriptors, 1);
        assert_eq!(stats.aggregators, 1);
    }

    #[test]
    fn test_scan_stats_merge() {
        let mut a = ScanStats::new();
        a.record_descriptor(1);
        let mut b = ScanStats::new();
        b.record_descriptor(4);
        b.record_missing();

        a.merge(&b);
        assert_eq!(a.descriptors_read, 2);
        assert_eq!(a.missing_descriptors, 1);
        assert_eq!(a.max_depth, 4);
    }

    #[test]
    fn test_module_tree_accessors() {
        let root = ModuleRecord::new("g", "parent", "1", "pom", "/p");
        let leaves = vec![ModuleRecord::new("g", "child", "1", "jar", "/p/child")];
        let tree = ModuleTree::new(root, leaves, ScanStats::new(), Duration::ZERO);

        assert_eq!(tree.root_path(), PathBuf::from("/p"));
        assert_eq!(tree.leaf_count(), 1);
        assert!(!tree.was_truncated());
    }
}
