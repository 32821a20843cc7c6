// Logged and timed wrappers around cache operations

use crate::stats::LatencyStats;
use slab_lru::{CacheError, LruCache};
use std::time::{Duration, Instant};
use tracing::{info, warn};

/// Wraps a borrowed cache and reports every operation it forwards.
///
/// Logged operations print the cache contents after the call, timed
/// operations print how long the call took and fold the measurement into
/// [`LatencyStats`]. The tester only uses the cache's public API.
pub struct OpsTester<'a> {
    cache: &'a mut LruCache<i64, i64>,
    latency: LatencyStats,
}

impl<'a> OpsTester<'a> {
    pub fn new(cache: &'a mut LruCache<i64, i64>) -> Self {
        Self {
            cache,
            latency: LatencyStats::default(),
        }
    }

    /// Capacity of the wrapped cache
    pub fn capacity(&self) -> usize {
        self.cache.cap().get()
    }

    /// Latency collected by the timed operations so far
    pub fn latency(&self) -> &LatencyStats {
        &self.latency
    }

    pub fn log_initial_cache(&self) {
        info!("LRUCache({}): Initial Cache: {}", self.capacity(), self.cache);
    }

    pub fn logged_put(&mut self, key: i64, value: i64) -> Result<(), CacheError> {
        self.cache.put(key, value)?;
        info!(
            "LRUCache({}): After Put({}, {}): {}",
            self.capacity(),
            key,
            value,
            self.cache
        );
        Ok(())
    }

    pub fn logged_get(&mut self, key: i64) -> Option<i64> {
        let value = self.cache.get(&key).copied();
        info!("Get({}) Returned: {}", key, render(value));
        info!(
            "LRUCache({}): After Get({}): {}",
            self.capacity(),
            key,
            self.cache
        );
        value
    }

    pub fn timed_put(&mut self, key: i64, value: i64) -> Result<(), CacheError> {
        let start = Instant::now();
        let result = self.cache.put(key, value);
        let elapsed = start.elapsed();
        result?;
        self.latency.record_put(elapsed);
        info!(
            "LRUCache({}): Time Taken for Put({}, {}) is: {} ns",
            self.capacity(),
            key,
            value,
            elapsed.as_nanos()
        );
        Ok(())
    }

    pub fn timed_get(&mut self, key: i64) -> Option<i64> {
        let start = Instant::now();
        let value = self.cache.get(&key).copied();
        let elapsed = start.elapsed();
        self.latency.record_get(elapsed);
        info!(
            "LRUCache({}): Time Taken for Get({}) that Returned {} is: {} ns",
            self.capacity(),
            key,
            render(value),
            elapsed.as_nanos()
        );
        value
    }

    /// Put `1..=capacity`, leaving the cache full.
    pub fn populate_to_capacity(&mut self) -> Result<(), CacheError> {
        let cap = i64::try_from(self.capacity()).unwrap_or(i64::MAX);
        for i in 1..=cap {
            self.cache.put(i, i)?;
        }
        info!(
            "LRUCache({}): Size is now at: {}",
            self.capacity(),
            self.cache.len()
        );
        Ok(())
    }

    /// Run `load` rounds of `put(i, i)` followed by `get(i % (load / 50))`.
    ///
    /// The modulus is clamped to at least one so small loads only re-read
    /// key zero.
    pub fn time_test_load(&mut self, load: u32) -> Result<Duration, CacheError> {
        let divisor = i64::from((load / 50).max(1));
        let start = Instant::now();
        for i in 0..i64::from(load) {
            self.cache.put(i, i)?;
            let _ = self.cache.get(&(i % divisor));
        }
        let elapsed = start.elapsed();

        if self.cache.len() != self.capacity() {
            warn!(
                "LRUCache({}): load of {} left the cache at {} entries",
                self.capacity(),
                load,
                self.cache.len()
            );
        }
        info!(
            "LRUCache({}): Time Taken for Put and Get for {} times is: {} ms",
            self.capacity(),
            load,
            elapsed.as_millis()
        );
        Ok(elapsed)
    }
}

fn render(value: Option<i64>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => "not found".to_string(),
    }
}
