//! Logging/tracing setup: one-time `tracing-subscriber` install, stderr only,
//! so stdout stays reserved for the single result line.

use crate::runconfig::LogLevel;
use std::sync::Once;

static INIT: Once = Once::new();

/// Install the global `tracing` subscriber. Safe to call more than once;
/// only the first call takes effect. `--log-level` sets the default filter;
/// `RUST_LOG` can still override it per the usual `tracing-subscriber` rules.
pub fn init(level: LogLevel) {
    INIT.call_once(|| {
        let default_filter = level.as_filter_str();
        let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| default_filter.to_string());
        let _ = tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .try_init();
    });
}
