//! Report rendering for a completed run.
//!
//! Renders into any [`fmt::Write`] sink so callers (and tests) can capture
//! the text; [`print`] writes the same report to stdout.

use std::fmt::{self, Write as _};

use crate::aggregate::AnomalyReport;
use crate::policy::Policy;
use crate::sim::RunOutcome;

/// Writes the full human-readable report for a completed run.
///
/// Sections, in order: simulation duration, the per-policy minimum-fault
/// tallies, one Belady's-Anomaly report per policy, and (only when units
/// were skipped) a warning that the aggregates exclude those cells.
///
/// # Errors
///
/// Propagates formatting errors from the sink.
pub fn write_report<W: fmt::Write>(w: &mut W, outcome: &RunOutcome) -> fmt::Result {
    writeln!(w, "Simulation took {} ms", outcome.duration.as_millis())?;
    writeln!(w)?;

    for policy in Policy::ALL {
        writeln!(
            w,
            "{} min PF : {}",
            policy.name(),
            outcome.report.min_counts.count(policy)
        )?;
    }
    writeln!(w)?;

    for anomalies in &outcome.report.anomalies {
        write_anomaly_report(w, anomalies)?;
    }

    if outcome.skipped_units > 0 {
        writeln!(
            w,
            "warning: {} simulation unit(s) failed; their cells were counted as zero",
            outcome.skipped_units
        )?;
    }
    Ok(())
}

fn write_anomaly_report<W: fmt::Write>(w: &mut W, report: &AnomalyReport) -> fmt::Result {
    writeln!(w, "Belady's Anomaly Report for {}", report.policy.name())?;
    for event in &report.events {
        writeln!(
            w,
            "\tdetected - Previous {} : Current {} ({})",
            event.previous, event.current, event.delta
        )?;
    }
    writeln!(
        w,
        "\t Anomaly detected {} times with a max difference of {}",
        report.occurrences(),
        report.max_delta
    )?;
    writeln!(w)
}

/// Renders the report to a `String`.
pub fn render(outcome: &RunOutcome) -> String {
    let mut text = String::new();
    // Writing into a String cannot fail.
    write_report(&mut text, outcome).ok();
    text
}

/// Prints the report to stdout.
pub fn print(outcome: &RunOutcome) {
    print!("{}", render(outcome));
}
