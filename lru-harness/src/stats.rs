// Latency bookkeeping for timed cache operations

use std::fmt;
use std::time::Duration;

/// Latency statistics for a single operation type (get or put)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OpLatencyStats {
    /// Total time spent (nanoseconds)
    pub total_ns: u64,
    /// Number of operations
    pub count: u64,
    /// Minimum latency (nanoseconds)
    pub min_ns: u64,
    /// Maximum latency (nanoseconds)
    pub max_ns: u64,
}

impl OpLatencyStats {
    /// Fold one measured operation into the totals
    pub fn record(&mut self, elapsed: Duration) {
        let ns = u64::try_from(elapsed.as_nanos()).unwrap_or(u64::MAX);
        if self.count == 0 {
            self.min_ns = ns;
            self.max_ns = ns;
        } else {
            self.min_ns = self.min_ns.min(ns);
            self.max_ns = self.max_ns.max(ns);
        }
        self.total_ns = self.total_ns.saturating_add(ns);
        self.count += 1;
    }

    /// Calculate average latency in nanoseconds
    pub fn avg_ns(&self) -> f64 {
        if self.count > 0 {
            self.total_ns as f64 / self.count as f64
        } else {
            0.0
        }
    }

    /// Calculate throughput in operations per second
    pub fn ops_per_sec(&self) -> f64 {
        if self.total_ns > 0 {
            (self.count as f64 * 1_000_000_000.0) / self.total_ns as f64
        } else {
            0.0
        }
    }
}

impl fmt::Display for OpLatencyStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.count == 0 {
            return write!(f, "no samples");
        }
        write!(
            f,
            "{} ops, avg {:.1} ns, min {} ns, max {} ns",
            self.count,
            self.avg_ns(),
            self.min_ns,
            self.max_ns
        )
    }
}

/// Latency statistics for all timed cache operations
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LatencyStats {
    /// Total time spent in all cache operations (nanoseconds)
    pub total_ns: u64,
    /// Total number of operations
    pub count: u64,
    /// Get operation stats
    pub get_stats: OpLatencyStats,
    /// Put operation stats
    pub put_stats: OpLatencyStats,
}

impl LatencyStats {
    pub fn record_get(&mut self, elapsed: Duration) {
        self.get_stats.record(elapsed);
        self.record_total(elapsed);
    }

    pub fn record_put(&mut self, elapsed: Duration) {
        self.put_stats.record(elapsed);
        self.record_total(elapsed);
    }

    fn record_total(&mut self, elapsed: Duration) {
        let ns = u64::try_from(elapsed.as_nanos()).unwrap_or(u64::MAX);
        self.total_ns = self.total_ns.saturating_add(ns);
        self.count += 1;
    }

    /// Calculate average latency in nanoseconds (across all operations)
    pub fn avg_ns(&self) -> f64 {
        if self.count > 0 {
            self.total_ns as f64 / self.count as f64
        } else {
            0.0
        }
    }
}
