//! Report rendering.

use std::sync::atomic::Ordering;
use std::time::Duration;

use faultsim_core::aggregate::aggregate;
use faultsim_core::results::ResultStore;
use faultsim_core::sim::RunOutcome;
use faultsim_core::{Policy, SimConfig, report, run_batch};

/// An outcome with one known FIFO anomaly (3 → 5 at capacity 2).
fn fixture_outcome(skipped_units: u64) -> RunOutcome {
    let store = ResultStore::new(1, 2);
    let values = [
        (Policy::Fifo, [3, 5]),
        (Policy::Lru, [3, 2]),
        (Policy::Mru, [4, 4]),
    ];
    for (policy, counts) in values {
        let row = store.row(0, policy);
        for (capacity, count) in counts.into_iter().enumerate() {
            row[capacity + 1].store(count, Ordering::Relaxed);
        }
    }
    let report = aggregate(&store);
    RunOutcome {
        store,
        report,
        duration: Duration::from_millis(42),
        skipped_units,
    }
}

#[test]
fn report_carries_every_section() {
    let text = report::render(&fixture_outcome(0));
    assert!(text.starts_with("Simulation took 42 ms\n"));
    assert!(text.contains("FIFO min PF : 1"));
    assert!(text.contains("LRU min PF : 2"));
    assert!(text.contains("MRU min PF : 0"));
    for policy in Policy::ALL {
        assert!(text.contains(&format!("Belady's Anomaly Report for {}", policy.name())));
    }
}

#[test]
fn anomaly_lines_follow_the_detected_format() {
    let text = report::render(&fixture_outcome(0));
    assert!(text.contains("\tdetected - Previous 3 : Current 5 (2)"));
    assert!(text.contains("\t Anomaly detected 1 times with a max difference of 2"));
    // Policies without occurrences still print their summary line.
    assert!(text.contains("\t Anomaly detected 0 times with a max difference of 0"));
}

#[test]
fn skipped_units_warning_appears_only_when_nonzero() {
    let clean = report::render(&fixture_outcome(0));
    assert!(!clean.contains("warning"));

    let degraded = report::render(&fixture_outcome(3));
    assert!(degraded.contains("warning: 3 simulation unit(s) failed"));
}

#[test]
fn full_run_renders_without_anomaly_noise_for_lru() {
    let config = SimConfig {
        trials: 2,
        sequence_length: 80,
        max_page_id: 9,
        max_capacity: 9,
        workers: 2,
    };
    let outcome = run_batch(&config, Some(17)).expect("valid config");
    let text = report::render(&outcome);
    // LRU is a stack algorithm, so its section reports zero occurrences.
    let lru_section = text
        .split("Belady's Anomaly Report for LRU")
        .nth(1)
        .expect("LRU section present");
    assert!(lru_section.starts_with("\n\t Anomaly detected 0 times"));
}
