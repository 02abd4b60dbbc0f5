//! Tracing/logging initialization.

use tracing_subscriber::EnvFilter;

/// Install the process-wide tracing subscriber.
///
/// The filter comes from `RUST_LOG` when set; the fallback enables debug
/// output for the convene crates themselves (registry mutations log at
/// debug) and info for everything else.
///
/// Safe to call multiple times; only the first call installs a subscriber.
pub fn init() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("convene=debug,info"));

    // JSON logs with timestamps, configurable via RUST_LOG.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false)
        .try_init();
}
