// Rust guideline compliant 2026-02-06

//! Log subscriber setup for the `warta` binary.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable holding the log filter, e.g. `warta_app=debug`.
pub const LOG_ENV: &str = "WARTA_LOG";

/// Builds the log filter from `WARTA_LOG`, falling back to `warn`
/// (or `debug` when `verbose` is set).
#[must_use]
pub fn build_filter(verbose: bool) -> EnvFilter {
    let default_level = if verbose { "debug" } else { "warn" };
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level))
}

/// Installs the global subscriber. Logs go to stderr so stdout stays
/// machine-readable in JSON mode.
///
/// Calling this more than once is harmless; later calls are ignored.
pub fn init(verbose: bool) {
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .with(build_filter(verbose))
        .try_init();
}
