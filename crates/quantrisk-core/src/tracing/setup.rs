//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Environment variable holding the log filter directives.
pub const LOG_ENV_VAR: &str = "QUANTRISK_LOG";

/// Filter used when `QUANTRISK_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "quantrisk=info";

/// Initialize the QuantRisk tracing/logging system.
///
/// Reads `QUANTRISK_LOG` for per-crate log levels.
/// Format: `QUANTRISK_LOG=quantrisk_analysis=debug,quantrisk_core=warn`
///
/// Falls back to `quantrisk=info` if `QUANTRISK_LOG` is not set or is invalid.
///
/// Idempotent; later calls are no-ops. If another global subscriber is
/// already installed the call leaves it in place.
pub fn init_tracing() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(build_filter())
            .try_init();
    });
}

fn build_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}
