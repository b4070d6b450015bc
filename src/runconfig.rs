//! Fully resolved, validated run configuration threaded from the CLI into
//! the driver.

use crate::scheduler::Executor;
use std::path::PathBuf;
use std::str::FromStr;

/// Logging verbosity selectable from the CLI; maps onto a `tracing` filter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    Debug,
    Info,
    Warning,
    Error,
}

impl LogLevel {
    pub fn as_filter_str(self) -> &'static str {
        match self {
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warning => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "DEBUG" => Ok(LogLevel::Debug),
            "INFO" => Ok(LogLevel::Info),
            "WARNING" => Ok(LogLevel::Warning),
            "ERROR" => Ok(LogLevel::Error),
            other => Err(format!("invalid log level {other:?} (expected DEBUG, INFO, WARNING, or ERROR)")),
        }
    }
}

/// Resolved configuration for one end-to-end run.
#[derive(Clone, Debug)]
pub struct RunConfig {
    pub input_path: PathBuf,
    pub num_buckets: usize,
    pub log_level: LogLevel,
    pub handle_cache_capacity: usize,
}

impl RunConfig {
    /// The executor for pass 2, resolved from `RC_EXECUTOR` (or the auto default).
    pub fn executor(&self) -> Executor {
        Executor::from_env()
    }
}
