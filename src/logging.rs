//! Diagnostic logging bootstrap for the binary
//!
//! The library only emits `tracing` events; installing a subscriber is left
//! to the process entry point.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter (e.g. `study_planner=debug`)
pub const LOG_ENV_VAR: &str = "STUDY_PLANNER_LOG";

const DEFAULT_FILTER: &str = "warn";

/// Install a stderr subscriber filtered by [`LOG_ENV_VAR`]
///
/// Calling this more than once is harmless; only the first call installs a
/// subscriber.
pub fn init_logging() {
    let filter =
        EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
