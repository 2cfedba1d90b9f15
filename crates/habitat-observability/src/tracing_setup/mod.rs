//! Tracing setup: structured logging with span definitions.

pub mod spans;

use std::sync::Once;

use habitat_core::config::ObservabilityConfig;
use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Initialize the tracing subscriber with human-readable output.
///
/// Respects the `HABITAT_LOG` environment variable for filtering and falls
/// back to `info`. Idempotent: only the first call installs a subscriber.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_env("HABITAT_LOG").unwrap_or_else(|_| EnvFilter::new("info"));

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .try_init();
    });
}

/// Initialize tracing from config. `HABITAT_LOG` still wins over `log_level`.
pub fn init_tracing_with_config(config: &ObservabilityConfig) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("HABITAT_LOG")
            .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

        let builder = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true);

        let _ = if config.json_logs {
            builder.json().try_init()
        } else {
            builder.try_init()
        };
    });
}
