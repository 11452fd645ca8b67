//! Tracing and logging setup shared by the warehouse binaries.

/// Tracing configuration (filters, output format).
pub mod tracing;

pub use self::tracing::{init, init_with_filter};
