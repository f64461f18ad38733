//! Best-policy tallies and Belady's-Anomaly detection.
//!
//! Aggregation runs strictly after the pool's drain barrier, over an
//! immutable [`ResultStore`]. It provides:
//! 1. **Min tallies:** per (trial, capacity), every policy tied for the minimum fault count is credited.
//! 2. **Anomaly scan:** per (policy, trial), each capacity step whose fault count *rises* is recorded.

use crate::policy::Policy;
use crate::results::ResultStore;

/// Per-policy counts of (trial, capacity) points where the policy achieved
/// the minimum fault count. Ties credit every tied policy, so the per-point
/// credit total is between 1 and 3.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MinCountTally {
    counts: [u64; 3],
}

impl MinCountTally {
    /// Credits `policy` with one minimal point.
    fn credit(&mut self, policy: Policy) {
        self.counts[policy.index()] += 1;
    }

    /// Total minimal points credited to `policy` across the batch.
    pub fn count(&self, policy: Policy) -> u64 {
        self.counts[policy.index()]
    }
}

/// One occurrence of Belady's Anomaly: raising the capacity by one raised
/// the fault count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnomalyEvent {
    /// Trial the anomaly occurred in.
    pub trial: usize,
    /// Capacity at which the fault count rose (the step is `capacity - 1` → `capacity`).
    pub capacity: usize,
    /// Fault count at `capacity - 1`.
    pub previous: u32,
    /// Fault count at `capacity`.
    pub current: u32,
    /// `current - previous`; always positive.
    pub delta: u32,
}

/// All anomaly occurrences for one policy, in discovery order
/// (trial-major, capacity-ascending).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnomalyReport {
    /// Policy this report covers.
    pub policy: Policy,
    /// Every occurrence, in discovery order.
    pub events: Vec<AnomalyEvent>,
    /// Largest delta observed, zero when no anomaly occurred.
    pub max_delta: u32,
}

impl AnomalyReport {
    /// Number of occurrences across all trials.
    pub fn occurrences(&self) -> usize {
        self.events.len()
    }
}

/// The aggregated statistics of a completed batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregateReport {
    /// Minimal-fault-count tallies per policy.
    pub min_counts: MinCountTally,
    /// Anomaly reports, one per policy in [`Policy::ALL`] order.
    pub anomalies: [AnomalyReport; 3],
}

/// Post-processes a completed store into tallies and anomaly reports.
///
/// The caller must have drained the worker pool first: aggregation reads the
/// store as a completed whole, and a partial read would fabricate zero-valued
/// cells and bogus deltas.
pub fn aggregate(store: &ResultStore) -> AggregateReport {
    let mut min_counts = MinCountTally::default();
    for trial in 0..store.trials() {
        for capacity in 1..=store.max_capacity() {
            let faults = Policy::ALL.map(|policy| store.faults(trial, policy, capacity));
            // min over a non-empty array; at least one policy is credited.
            let min = faults.iter().copied().min().unwrap_or(0);
            for policy in Policy::ALL {
                if faults[policy.index()] == min {
                    min_counts.credit(policy);
                }
            }
        }
    }

    let anomalies = Policy::ALL.map(|policy| scan_anomalies(store, policy));
    AggregateReport {
        min_counts,
        anomalies,
    }
}

/// Walks the capacity axis of every trial for one policy, recording each
/// step where the fault count rises.
fn scan_anomalies(store: &ResultStore, policy: Policy) -> AnomalyReport {
    let mut events = Vec::new();
    let mut max_delta = 0;
    for trial in 0..store.trials() {
        for capacity in 2..=store.max_capacity() {
            let previous = store.faults(trial, policy, capacity - 1);
            let current = store.faults(trial, policy, capacity);
            if current > previous {
                let delta = current - previous;
                max_delta = max_delta.max(delta);
                events.push(AnomalyEvent {
                    trial,
                    capacity,
                    previous,
                    current,
                    delta,
                });
            }
        }
    }
    AnomalyReport {
        policy,
        events,
        max_delta,
    }
}
