//! Batch driver: trial submission, the barrier, and timing.
//!
//! `run_batch` is the engine's single entry point and the structural
//! guarantee behind the aggregation precondition: the store is handed to the
//! aggregator only after `drain()` has returned for the whole batch.

use std::sync::Arc;
use std::time::{Duration, Instant};

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::debug;

use crate::aggregate::{AggregateReport, aggregate};
use crate::config::SimConfig;
use crate::error::SimError;
use crate::policy::Policy;
use crate::pool::WorkerPool;
use crate::results::ResultStore;
use crate::sequence::{PageId, ReferenceSequence};

/// Submits the full capacity sweep of one trial to the pool.
///
/// Each (policy, capacity) pair becomes one independent unit: a fresh
/// simulator instance bound to a unique result cell, free to execute in any
/// order relative to its siblings.
#[derive(Debug)]
pub struct TrialRunner<'a> {
    pool: &'a WorkerPool,
    store: &'a ResultStore,
    max_page_id: PageId,
}

impl<'a> TrialRunner<'a> {
    /// Creates a runner submitting into `pool` and writing into `store`.
    pub fn new(pool: &'a WorkerPool, store: &'a ResultStore, max_page_id: PageId) -> Self {
        Self {
            pool,
            store,
            max_page_id,
        }
    }

    /// Submits `3 * max_capacity` units replaying `sequence` for `trial`.
    pub fn run_trial(&self, trial: usize, sequence: &Arc<ReferenceSequence>) {
        let max_page_id = self.max_page_id;
        for capacity in 1..=self.store.max_capacity() {
            for policy in Policy::ALL {
                let sequence = Arc::clone(sequence);
                let row = self.store.row(trial, policy);
                self.pool.submit(Box::new(move || {
                    let faults = policy.count_faults(&sequence, capacity, max_page_id);
                    row[capacity].store(faults, std::sync::atomic::Ordering::Relaxed);
                }));
            }
        }
    }
}

/// Everything a completed batch produces.
#[derive(Debug)]
pub struct RunOutcome {
    /// The completed fault matrix.
    pub store: ResultStore,
    /// Tallies and anomaly reports derived from the matrix.
    pub report: AggregateReport,
    /// Wall-clock duration of the simulation phase (generation through drain).
    pub duration: Duration,
    /// Units that failed and left their cell at zero; non-zero means the
    /// aggregate numbers exclude those cells.
    pub skipped_units: u64,
}

/// Runs a full batch: validates, generates, simulates, drains, aggregates.
///
/// Passing a `seed` makes the generated sequences (and therefore the entire
/// outcome) reproducible; `None` seeds from OS entropy.
///
/// # Errors
///
/// Returns [`SimError::Config`] if any run parameter is zero. Per-unit
/// failures do not propagate; see [`RunOutcome::skipped_units`].
pub fn run_batch(config: &SimConfig, seed: Option<u64>) -> Result<RunOutcome, SimError> {
    config.validate()?;

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let store = ResultStore::new(config.trials, config.max_capacity);
    let pool = WorkerPool::new(config.workers);
    let runner = TrialRunner::new(&pool, &store, config.max_page_id);

    debug!(
        trials = config.trials,
        units = config.unit_count(),
        workers = config.workers,
        "submitting batch"
    );
    let started = Instant::now();
    for trial in 0..config.trials {
        let sequence = Arc::new(ReferenceSequence::generate(
            &mut rng,
            config.sequence_length,
            config.max_page_id,
        ));
        runner.run_trial(trial, &sequence);
    }
    pool.drain();
    let duration = started.elapsed();
    let skipped_units = pool.skipped_units();
    debug!(?duration, skipped_units, "batch drained");

    // The barrier above is what licenses reading the store.
    let report = aggregate(&store);
    Ok(RunOutcome {
        store,
        report,
        duration,
        skipped_units,
    })
}
