//! Concurrent page-replacement simulation engine.
//!
//! This crate replays randomized page-reference sequences against three
//! eviction policies (FIFO, LRU, MRU) across a sweep of cache capacities and
//! aggregates the resulting fault counts. It provides:
//! 1. **Sequences:** Bounded, uniformly-random reference sequence generation.
//! 2. **Policies:** Exact per-policy replay state machines producing fault counts.
//! 3. **Orchestration:** A fixed-width worker pool with a two-phase submit/drain barrier.
//! 4. **Results:** A write-once-per-cell fault matrix shared between workers and the aggregator.
//! 5. **Aggregation:** Best-policy tallies (with N-way ties) and Belady's-Anomaly detection.
//! 6. **Reporting:** Human-readable rendering of a completed run.

/// Best-policy tallies and Belady's-Anomaly detection over a completed run.
pub mod aggregate;
/// Simulation configuration (defaults, validation).
pub mod config;
/// Error types for configuration rejection.
pub mod error;
/// Eviction policies and their replay state machines.
pub mod policy;
/// Fixed-width worker pool with a submit/drain barrier.
pub mod pool;
/// Report rendering for a completed run.
pub mod report;
/// The capacity-indexed fault-count matrix.
pub mod results;
/// Page identifiers and reference-sequence generation.
pub mod sequence;
/// Batch driver: trial submission, the barrier, and timing.
pub mod sim;

/// Root configuration type; use `SimConfig::default()` or deserialize from JSON.
pub use crate::config::SimConfig;
/// Error type returned by configuration validation and the batch driver.
pub use crate::error::SimError;
/// The three eviction policies under study.
pub use crate::policy::Policy;
/// Runs a full batch; the only path to an aggregated result.
pub use crate::sim::{RunOutcome, run_batch};
