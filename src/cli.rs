//! CLI surface: the only collaborator-facing layer between a shell
//! invocation and the pipeline's `RunConfig`.

use crate::runconfig::{LogLevel, RunConfig};
use anyhow::{bail, Context, Result};
use clap::Parser;
use std::path::PathBuf;

/// Find the longest simple directed cycle across per-key routing-claim subgraphs.
#[derive(Parser, Debug)]
#[command(name = "routing-cycle-detector", version, about)]
pub struct Cli {
    /// Newline-delimited, pipe-separated input file (`source|destination|claim_id|status_code`).
    pub input_file: PathBuf,

    /// Number of on-disk partition buckets. Must be a power of two.
    #[arg(long, default_value_t = 1024)]
    pub buckets: usize,

    /// Logging verbosity: DEBUG, INFO, WARNING, or ERROR.
    #[arg(long, default_value = "WARNING")]
    pub log_level: String,

    /// Maximum number of open bucket file handles during partitioning.
    #[arg(long, default_value_t = 128)]
    pub handle_cache: usize,
}

impl Cli {
    /// Validate parsed arguments and produce a `RunConfig`. Configuration
    /// errors (non-power-of-two bucket count, missing input) are surfaced
    /// here, before pass 1 begins.
    pub fn into_run_config(self) -> Result<RunConfig> {
        if !self.buckets.is_power_of_two() {
            bail!("--buckets must be a power of two, got {}", self.buckets);
        }
        if !self.input_file.exists() {
            bail!("input file not found: {}", self.input_file.display());
        }
        let log_level: LogLevel = self
            .log_level
            .parse()
            .with_context(|| format!("invalid --log-level {:?}", self.log_level))?;

        Ok(RunConfig {
            input_path: self.input_file,
            num_buckets: self.buckets,
            log_level,
            handle_cache_capacity: self.handle_cache.max(1),
        })
    }
}
