//! Shared logging/tracing setup for applications and test harnesses that
//! embed the calendar crates.

/// Tracing configuration (filter, output format).
pub mod tracing;

/// Initialize process-wide observability.
///
/// Safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init();
}
