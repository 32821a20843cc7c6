//! LRU Cache Metrics
//!
//! Metrics specific to the LRU (Least Recently Used) cache algorithm.

extern crate alloc;

use super::{CacheMetrics, CoreCacheMetrics};
use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};

/// LRU-specific metrics (extends CoreCacheMetrics)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LruCacheMetrics {
    /// Core metrics common to all cache algorithms
    pub core: CoreCacheMetrics,

    /// Lookups or updates that hit the entry already at the front, which
    /// leave the recency order untouched
    pub front_hits: u64,
}

impl LruCacheMetrics {
    /// Creates zeroed metrics for a cache holding at most `capacity` entries.
    pub fn new(capacity: u64) -> Self {
        Self {
            core: CoreCacheMetrics::new(capacity),
            front_hits: 0,
        }
    }

    /// Records a hit on the most recently used entry.
    pub fn record_front_hit(&mut self) {
        self.front_hits += 1;
    }

    /// Converts LRU metrics to BTreeMap for reporting
    pub fn to_btreemap(&self) -> BTreeMap<String, f64> {
        let mut metrics = self.core.to_btreemap();
        metrics.insert("front_hits".to_string(), self.front_hits as f64);
        metrics
    }
}

impl CacheMetrics for LruCacheMetrics {
    fn metrics(&self) -> BTreeMap<String, f64> {
        self.to_btreemap()
    }

    fn algorithm_name(&self) -> &'static str {
        "LRU"
    }
}
