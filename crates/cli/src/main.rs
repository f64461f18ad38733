//! Page-replacement simulator CLI.
//!
//! This binary drives a full simulation batch: it builds the run
//! configuration (built-in defaults, optionally a JSON config file, then
//! flag overrides), runs the FIFO/LRU/MRU capacity sweep, and prints the
//! minimum-fault tallies and Belady's-Anomaly reports.

use std::path::PathBuf;
use std::{fs, process};

use clap::Parser;

use faultsim_core::{SimConfig, report, run_batch};

#[derive(Parser, Debug)]
#[command(
    name = "faultsim",
    author,
    version,
    about = "Concurrent FIFO/LRU/MRU page-replacement simulator",
    long_about = "Replays randomized page-reference sequences against FIFO, LRU, and MRU \
caches across a capacity sweep, tallies which policy faults least, and reports every \
occurrence of Belady's Anomaly.\n\nExamples:\n  faultsim\n  faultsim -n 200 --max-capacity 50 --seed 7\n  faultsim --config run.json -j 4"
)]
struct Cli {
    /// JSON config file; flags below override its values.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of independent trials (one random sequence each).
    #[arg(short = 'n', long)]
    trials: Option<usize>,

    /// References per generated sequence.
    #[arg(long)]
    sequence_length: Option<usize>,

    /// Largest page identifier drawn (references are uniform over 1..=N).
    #[arg(long)]
    max_page_id: Option<u32>,

    /// Largest cache capacity in the sweep (capacities 1..=N are simulated).
    #[arg(long)]
    max_capacity: Option<usize>,

    /// Worker threads; defaults to the host's available parallelism.
    #[arg(short = 'j', long)]
    workers: Option<usize>,

    /// RNG seed for reproducible sequences; omit to seed from OS entropy.
    #[arg(long)]
    seed: Option<u64>,
}

impl Cli {
    /// Builds the effective configuration: defaults, then the config file,
    /// then individual flag overrides.
    fn build_config(&self) -> SimConfig {
        let mut config = match &self.config {
            Some(path) => load_config_file(path),
            None => SimConfig::default(),
        };
        if let Some(trials) = self.trials {
            config.trials = trials;
        }
        if let Some(sequence_length) = self.sequence_length {
            config.sequence_length = sequence_length;
        }
        if let Some(max_page_id) = self.max_page_id {
            config.max_page_id = max_page_id;
        }
        if let Some(max_capacity) = self.max_capacity {
            config.max_capacity = max_capacity;
        }
        if let Some(workers) = self.workers {
            config.workers = workers;
        }
        config
    }
}

fn load_config_file(path: &PathBuf) -> SimConfig {
    let text = fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading config {}: {}", path.display(), e);
        process::exit(1);
    });
    serde_json::from_str(&text).unwrap_or_else(|e| {
        eprintln!("Error parsing config {}: {}", path.display(), e);
        process::exit(1);
    })
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.build_config();

    match run_batch(&config, cli.seed) {
        Ok(outcome) => report::print(&outcome),
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    }
}
