use clap::{Parser, Subcommand};
use lru_harness::scenarios::{self, Scenario, DEFAULT_LOAD};
use slab_lru::config::LruCacheConfig;
use slab_lru::metrics::CacheMetrics;
use slab_lru::LruCache;
use std::io::{self, BufRead, IsTerminal, Write};
use tracing::{error, info, warn};

/// Capacity used when none is given on the command line or at the prompt
const DEFAULT_CAPACITY: i64 = 2;

/// LRU cache demonstration harness
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Cache capacity (number of entries); prompted for when omitted
    #[arg(short, long, allow_negative_numbers = true)]
    capacity: Option<i64>,
}

/// Subcommands for the CLI
#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the logged put/get walkthrough
    Logged,

    /// Time individual operations, then run a load test
    Timed {
        /// Number of put/get rounds in the load test
        #[arg(short, long, default_value_t = DEFAULT_LOAD)]
        load: u32,
    },

    /// Run the logged walkthrough followed by the timed runs
    All {
        /// Number of put/get rounds in the load test
        #[arg(short, long, default_value_t = DEFAULT_LOAD)]
        load: u32,
    },
}

impl Commands {
    fn scenario(&self) -> Scenario {
        match *self {
            Commands::Logged => Scenario::Logged,
            Commands::Timed { load } => Scenario::Timed { load },
            Commands::All { load } => Scenario::All { load },
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = Args::parse();

    let requested = match args.capacity {
        Some(capacity) => capacity,
        None => prompt_capacity()?,
    };

    let config = match LruCacheConfig::try_from(requested) {
        Ok(config) => config,
        Err(e) => {
            error!("LRUCache rejected capacity: {e}");
            return Err(e.into());
        }
    };

    let scenario = args
        .command
        .as_ref()
        .map(Commands::scenario)
        .unwrap_or(Scenario::All { load: DEFAULT_LOAD });

    info!("Running {} scenario with capacity {}", scenario, config.capacity);
    let mut cache = LruCache::init(config, None);
    let report = scenarios::run(scenario, &mut cache)?;

    if let Some(elapsed) = report.load_elapsed {
        info!("Load test finished in {:.2?}", elapsed);
    }
    for (name, value) in cache.metrics() {
        info!("{} {}: {}", cache.algorithm_name(), name, value);
    }

    Ok(())
}

/// Ask for the capacity on an interactive terminal, otherwise use the default.
fn prompt_capacity() -> io::Result<i64> {
    let stdin = io::stdin();
    if !stdin.is_terminal() {
        return Ok(DEFAULT_CAPACITY);
    }

    print!("Enter LRUCache's Capacity [{DEFAULT_CAPACITY}]: ");
    io::stdout().flush()?;

    let mut line = String::new();
    stdin.lock().read_line(&mut line)?;
    Ok(parse_capacity(&line))
}

fn parse_capacity(line: &str) -> i64 {
    let line = line.trim();
    if line.is_empty() {
        return DEFAULT_CAPACITY;
    }
    match line.parse() {
        Ok(capacity) => capacity,
        Err(_) => {
            warn!("'{line}' is not a number, using capacity {DEFAULT_CAPACITY}");
            DEFAULT_CAPACITY
        }
    }
}
