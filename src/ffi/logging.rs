//! Logging setup for hosts that load the plugin.

use crate::logging;

/// Installs a stderr tracing subscriber filtered by `PAML_LOG` (default `info`).
///
/// # Returns
/// 0 when the subscriber was installed, 1 if one was already present.
#[no_mangle]
pub extern "C" fn paml_init_logging() -> i32 {
    if logging::init("info") {
        tracing::info!(version = env!("CARGO_PKG_VERSION"), "PAML logging initialised");
        0
    } else {
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logging_is_idempotent() {
        // A subscriber is already installed for the test run
        assert_eq!(paml_init_logging(), 1);
        assert_eq!(paml_init_logging(), 1);
    }
}
