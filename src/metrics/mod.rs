//! Cache Metrics System
//!
//! Counters are reported through the [`CacheMetrics`] trait as a
//! `BTreeMap<String, f64>`, so metric names always come out in the same
//! order. That keeps test assertions and harness output reproducible.

extern crate alloc;

use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};

pub mod lru;

pub use lru::LruCacheMetrics;

/// Counters shared by every cache algorithm.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CoreCacheMetrics {
    /// Total number of lookups (`get`/`get_mut`) made against the cache
    pub requests: u64,

    /// Number of lookups that found their key
    pub cache_hits: u64,

    /// Number of new keys stored, including ones that reused an evicted slot
    pub insertions: u64,

    /// Number of `put` calls that overwrote the value of a present key
    pub updates: u64,

    /// Number of entries pushed out to make room for a new key
    pub evictions: u64,

    /// Number of times the cache was cleared
    pub clears: u64,

    /// Entries currently held
    pub entries: u64,

    /// Maximum number of entries the cache can hold
    pub capacity: u64,
}

impl CoreCacheMetrics {
    /// Creates zeroed counters for a cache holding at most `capacity` entries.
    pub fn new(capacity: u64) -> Self {
        Self {
            capacity,
            ..Default::default()
        }
    }

    /// Records a lookup that found its key.
    pub fn record_hit(&mut self) {
        self.requests += 1;
        self.cache_hits += 1;
    }

    /// Records a lookup that did not find its key.
    ///
    /// Misses are derived as `requests - cache_hits`.
    pub fn record_miss(&mut self) {
        self.requests += 1;
    }

    /// Records a new key taking a freshly allocated entry.
    pub fn record_insertion(&mut self) {
        self.insertions += 1;
        self.entries += 1;
    }

    /// Records a new key taking over the slot of an evicted one.
    ///
    /// The entry count does not change.
    pub fn record_eviction(&mut self) {
        self.evictions += 1;
        self.insertions += 1;
    }

    /// Records an in-place value update of a present key.
    pub fn record_update(&mut self) {
        self.updates += 1;
    }

    /// Records a clear. All entries are gone afterwards.
    pub fn record_clear(&mut self) {
        self.clears += 1;
        self.entries = 0;
    }

    /// Fraction of lookups that hit, between 0.0 and 1.0.
    pub fn hit_rate(&self) -> f64 {
        if self.requests > 0 {
            self.cache_hits as f64 / self.requests as f64
        } else {
            0.0
        }
    }

    /// Fraction of lookups that missed, between 0.0 and 1.0.
    pub fn miss_rate(&self) -> f64 {
        if self.requests > 0 {
            (self.requests - self.cache_hits) as f64 / self.requests as f64
        } else {
            0.0
        }
    }

    /// How full the cache is relative to its capacity.
    pub fn utilization(&self) -> f64 {
        if self.capacity > 0 {
            self.entries as f64 / self.capacity as f64
        } else {
            0.0
        }
    }

    /// Converts the counters to a map keyed by metric name.
    pub fn to_btreemap(&self) -> BTreeMap<String, f64> {
        let mut metrics = BTreeMap::new();

        // Counters
        metrics.insert("requests".to_string(), self.requests as f64);
        metrics.insert("cache_hits".to_string(), self.cache_hits as f64);
        metrics.insert(
            "cache_misses".to_string(),
            (self.requests - self.cache_hits) as f64,
        );
        metrics.insert("insertions".to_string(), self.insertions as f64);
        metrics.insert("updates".to_string(), self.updates as f64);
        metrics.insert("evictions".to_string(), self.evictions as f64);
        metrics.insert("clears".to_string(), self.clears as f64);

        // Rates (0.0 to 1.0)
        metrics.insert("hit_rate".to_string(), self.hit_rate());
        metrics.insert("miss_rate".to_string(), self.miss_rate());

        // Occupancy
        metrics.insert("len".to_string(), self.entries as f64);
        metrics.insert("capacity".to_string(), self.capacity as f64);
        metrics.insert("utilization".to_string(), self.utilization());

        if self.requests > 0 {
            metrics.insert(
                "eviction_rate".to_string(),
                self.evictions as f64 / self.requests as f64,
            );
        }

        metrics
    }
}

/// Uniform metrics reporting for cache implementations.
pub trait CacheMetrics {
    /// Returns all metrics as name/value pairs in sorted order.
    fn metrics(&self) -> BTreeMap<String, f64>;

    /// Short name of the eviction algorithm, e.g. `"LRU"`.
    fn algorithm_name(&self) -> &'static str;
}
