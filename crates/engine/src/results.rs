//! The capacity-indexed fault-count matrix.
//!
//! One row exists per (trial, policy) pair; each row holds one cell per
//! capacity in the sweep. During the simulation phase every cell has exactly
//! one writer, fixed at submission time, so the cells need no locking —
//! they are atomics only so rows can be shared with workers in safe Rust.
//! Relaxed ordering suffices because the pool's drain barrier provides the
//! happens-before edge between the last store and the aggregator's loads.

use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};

use crate::policy::Policy;

/// A shared fault-count row for one (trial, policy) pair.
///
/// Rows are `max_capacity + 1` cells long and indexed directly by capacity;
/// slot 0 is unused.
pub type FaultRow = Arc<[AtomicU32]>;

/// All fault counts for a batch: `trials` rows per policy, capacity-indexed.
///
/// Write-once-per-cell during the simulation phase, read-only afterwards.
/// The aggregator must not read any cell until the pool's barrier has
/// returned for the whole batch.
#[derive(Debug)]
pub struct ResultStore {
    rows: Vec<[FaultRow; 3]>,
    max_capacity: usize,
}

impl ResultStore {
    /// Creates a zeroed store for `trials` trials and capacities `1..=max_capacity`.
    pub fn new(trials: usize, max_capacity: usize) -> Self {
        let zero_row = || -> FaultRow { (0..=max_capacity).map(|_| AtomicU32::new(0)).collect() };
        let rows = (0..trials)
            .map(|_| [zero_row(), zero_row(), zero_row()])
            .collect();
        Self { rows, max_capacity }
    }

    /// Number of trials in the store.
    pub fn trials(&self) -> usize {
        self.rows.len()
    }

    /// Largest capacity in the sweep.
    pub fn max_capacity(&self) -> usize {
        self.max_capacity
    }

    /// The shared row for `(trial, policy)`; cloned into each unit so the
    /// unit can store its fault count at its capacity index.
    pub fn row(&self, trial: usize, policy: Policy) -> FaultRow {
        Arc::clone(&self.rows[trial][policy.index()])
    }

    /// Reads the fault count at `(trial, policy, capacity)`.
    ///
    /// Valid only after the batch barrier; a cell whose unit was skipped
    /// reads as zero.
    pub fn faults(&self, trial: usize, policy: Policy, capacity: usize) -> u32 {
        self.rows[trial][policy.index()][capacity].load(Ordering::Relaxed)
    }
}
