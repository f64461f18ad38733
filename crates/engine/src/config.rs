//! Configuration for a simulation batch.
//!
//! This module defines the run parameters for the engine. It provides:
//! 1. **Defaults:** Baseline constants for trials, sequence length, page-id space, and capacity sweep.
//! 2. **Structure:** A flat `SimConfig`, deserializable from JSON for config files.
//! 3. **Validation:** Rejection of non-positive parameters before any work is submitted.

use std::num::NonZeroUsize;

use serde::Deserialize;

use crate::error::SimError;
use crate::sequence::PageId;

/// Default configuration constants for the simulator.
mod defaults {
    /// Number of independent trials (one randomly generated sequence each).
    pub const TRIALS: usize = 1000;

    /// Number of page references per generated sequence.
    pub const SEQUENCE_LENGTH: usize = 1000;

    /// Largest page identifier drawn; references are uniform over `1..=MAX_PAGE_ID`.
    pub const MAX_PAGE_ID: u32 = 250;

    /// Largest cache capacity in the sweep; every trial simulates
    /// capacities `1..=MAX_CAPACITY` under every policy.
    pub const MAX_CAPACITY: usize = 100;
}

/// Run parameters for a simulation batch.
///
/// All fields must be positive; [`SimConfig::validate`] enforces this before
/// any simulation unit is submitted. `workers` defaults to the host's
/// available parallelism.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimConfig {
    /// Number of independent trials to run.
    pub trials: usize,
    /// Length of each generated reference sequence.
    pub sequence_length: usize,
    /// Upper bound (inclusive) of the page-identifier space.
    pub max_page_id: PageId,
    /// Upper bound (inclusive) of the capacity sweep.
    pub max_capacity: usize,
    /// Number of worker threads in the pool.
    pub workers: usize,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            trials: defaults::TRIALS,
            sequence_length: defaults::SEQUENCE_LENGTH,
            max_page_id: defaults::MAX_PAGE_ID,
            max_capacity: defaults::MAX_CAPACITY,
            workers: available_parallelism_or_one(),
        }
    }
}

impl SimConfig {
    /// Checks that every run parameter is positive.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Config`] naming the first zero-valued field.
    pub fn validate(&self) -> Result<(), SimError> {
        let checks: [(&'static str, usize); 5] = [
            ("trials", self.trials),
            ("sequence_length", self.sequence_length),
            ("max_page_id", self.max_page_id as usize),
            ("max_capacity", self.max_capacity),
            ("workers", self.workers),
        ];
        for (field, value) in checks {
            if value == 0 {
                return Err(SimError::Config { field, value });
            }
        }
        Ok(())
    }

    /// Total number of simulation units a run of this configuration submits:
    /// one per (trial, policy, capacity) triple.
    pub fn unit_count(&self) -> usize {
        self.trials * crate::policy::Policy::ALL.len() * self.max_capacity
    }
}

/// Returns `std::thread::available_parallelism()` with a safe floor of 1.
pub fn available_parallelism_or_one() -> usize {
    std::thread::available_parallelism().map_or(1, NonZeroUsize::get)
}
