//! Tracing subscriber setup shared by the plugin and the host binary.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, e.g. `PAML_LOG=debug`.
pub const LOG_ENV: &str = "PAML_LOG";

/// Build the filter from `PAML_LOG`, falling back to `default_directive`.
pub fn env_filter(default_directive: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_directive))
}

/// Install a global fmt subscriber.
///
/// Returns `false` if a global subscriber was already installed, which
/// happens when the host process configured tracing first.
pub fn init(default_directive: &str) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(default_directive))
        .with_target(true)
        .try_init()
        .is_ok()
}
