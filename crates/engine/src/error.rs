//! Error types for the simulation engine.
//!
//! Configuration errors are the only fatal errors the engine produces: they
//! are rejected before any work is submitted. Failures inside individual
//! simulation units are contained by the worker pool and surfaced as a
//! skipped-unit count on the run outcome, never as an `Err`.

use thiserror::Error;

/// Errors produced by the simulation engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimError {
    /// A configuration parameter was zero. All run parameters must be
    /// positive; the offending field and its value are carried for the
    /// caller's diagnostics.
    #[error("configuration: `{field}` must be positive (got {value})")]
    Config {
        /// Name of the rejected configuration field.
        field: &'static str,
        /// The rejected value.
        value: usize,
    },
}
