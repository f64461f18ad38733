//! Unit tests for the engine components.

/// Configuration defaults and validation.
pub mod config;
/// Worker pool: barrier semantics and failure containment.
pub mod pool;
/// Report rendering.
pub mod report;
