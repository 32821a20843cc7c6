// Scripted runs against a single cache

use crate::stats::LatencyStats;
use crate::tester::OpsTester;
use slab_lru::{CacheError, LruCache};
use std::fmt;
use std::time::Duration;
use tracing::info;

/// Default number of put/get rounds in the load test
pub const DEFAULT_LOAD: u32 = 10_000;

/// Which scripted run to perform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scenario {
    /// Logged put/get script that walks through two evictions
    Logged,
    /// Timed operations followed by a load test
    Timed { load: u32 },
    /// Logged, then timed, on the same cache
    All { load: u32 },
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scenario::Logged => write!(f, "logged"),
            Scenario::Timed { load } => write!(f, "timed (load {load})"),
            Scenario::All { load } => write!(f, "all (load {load})"),
        }
    }
}

/// Outcome of a scenario run
#[derive(Debug, Default)]
pub struct ScenarioReport {
    /// Values returned by the logged gets, in call order
    pub logged_gets: Vec<Option<i64>>,
    /// Latency of the timed operations
    pub latency: LatencyStats,
    /// Wall time of the load test, if one ran
    pub load_elapsed: Option<Duration>,
}

/// Run `scenario` against `cache`.
pub fn run(
    scenario: Scenario,
    cache: &mut LruCache<i64, i64>,
) -> Result<ScenarioReport, CacheError> {
    let mut report = ScenarioReport::default();
    match scenario {
        Scenario::Logged => {
            report.logged_gets = run_logged(cache)?;
        }
        Scenario::Timed { load } => {
            let (latency, elapsed) = run_timed(cache, load)?;
            report.latency = latency;
            report.load_elapsed = Some(elapsed);
        }
        Scenario::All { load } => {
            report.logged_gets = run_logged(cache)?;
            let (latency, elapsed) = run_timed(cache, load)?;
            report.latency = latency;
            report.load_elapsed = Some(elapsed);
        }
    }
    Ok(report)
}

/// The capacity-2 walkthrough: two evictions and the lookups around them.
pub fn run_logged(cache: &mut LruCache<i64, i64>) -> Result<Vec<Option<i64>>, CacheError> {
    info!("TEST_LOGGED:");
    let mut tester = OpsTester::new(cache);
    let mut gets = Vec::with_capacity(5);

    tester.log_initial_cache();
    tester.logged_put(1, 1)?;
    tester.logged_put(2, 2)?;
    gets.push(tester.logged_get(1));
    tester.logged_put(3, 3)?;
    gets.push(tester.logged_get(2));
    tester.logged_put(4, 4)?;
    gets.push(tester.logged_get(1));
    gets.push(tester.logged_get(3));
    gets.push(tester.logged_get(4));

    Ok(gets)
}

/// Timings on a fresh cache, then on a full one, then the load test.
pub fn run_timed(
    cache: &mut LruCache<i64, i64>,
    load: u32,
) -> Result<(LatencyStats, Duration), CacheError> {
    info!("TEST_TIMED_AND_LOADED:");
    let mut tester = OpsTester::new(cache);

    info!("Starting with empty cache:");
    tester.timed_put(1, 1)?;
    tester.timed_get(1);
    tester.timed_put(2, 2)?;
    tester.timed_get(2);
    tester.timed_put(3, 3)?;
    tester.timed_get(4);
    tester.timed_get(4);

    info!("Populate to full capacity and time the Get and Put:");
    tester.populate_to_capacity()?;
    tester.timed_put(-1, -2)?;
    tester.timed_get(-1);
    tester.timed_get(-2);
    tester.timed_put(1, 2)?;

    info!("Load tested and timed for {} times of Get and Put:", load);
    let elapsed = tester.time_test_load(load)?;

    let latency = tester.latency().clone();
    info!("get latency: {}", latency.get_stats);
    info!("put latency: {}", latency.put_stats);
    Ok((latency, elapsed))
}
