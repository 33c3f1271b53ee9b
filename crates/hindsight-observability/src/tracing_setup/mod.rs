//! Tracing setup: structured logging with span definitions and event helpers.

pub mod events;
pub mod spans;

use std::sync::Once;

use hindsight_core::config::ObservabilityConfig;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the filter directive, e.g.
/// `HINDSIGHT_LOG=hindsight_engine=debug,hindsight_text=info`.
pub const LOG_ENV: &str = "HINDSIGHT_LOG";

static INIT: Once = Once::new();

/// Install a JSON subscriber filtered by `HINDSIGHT_LOG`, falling back to `info`.
///
/// Idempotent. A subscriber installed elsewhere first is left in place.
pub fn init_tracing() {
    init_tracing_from_config(&ObservabilityConfig::default());
}

/// Install a subscriber using `config.log_level` when `HINDSIGHT_LOG` is unset,
/// and JSON or human-readable output per `config.json_logs`.
pub fn init_tracing_from_config(config: &ObservabilityConfig) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV)
            .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
        let builder = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true);
        let installed = if config.json_logs {
            builder.json().try_init()
        } else {
            builder.try_init()
        };
        if installed.is_err() {
            tracing::debug!("global subscriber already set; keeping it");
        }
    });
}

/// Install a JSON subscriber with an explicit filter (tests, embedding hosts).
/// Returns false if a global subscriber was already set.
pub fn init_tracing_with_filter(filter: &str) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(true)
        .json()
        .try_init()
        .is_ok()
}
