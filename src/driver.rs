//! Driver: create the work directory, run the partitioner then the
//! scheduler, format the result, tear down on every exit path.

use crate::bucketwriter::{bucket_path, BucketWriter};
use crate::partitioner::partition;
use crate::runconfig::RunConfig;
use crate::scheduler;
use crate::workdir::WorkDir;
use crate::worker::BucketResult;
use anyhow::Result;
use std::path::PathBuf;

/// Run the full pipeline for one input file and return the formatted result
/// line. The work directory is removed before this returns, regardless
/// of success or failure, because `WorkDir` is dropped at the end of this
/// function's scope.
pub fn run(config: &RunConfig) -> Result<String> {
    let work_dir = WorkDir::create()?;
    run_in(config, work_dir.path().to_path_buf())
}

fn run_in(config: &RunConfig, dir: PathBuf) -> Result<String> {
    tracing::info!(
        input = %config.input_path.display(),
        buckets = config.num_buckets,
        handle_cache = config.handle_cache_capacity,
        "partitioning input"
    );

    let mut writer = BucketWriter::new(&dir, config.handle_cache_capacity);
    let non_empty = partition(&config.input_path, config.num_buckets, &mut writer)?;

    tracing::info!(non_empty_buckets = non_empty.len(), "partitioning complete");

    let bucket_paths: Vec<PathBuf> = non_empty.into_iter().map(|idx| bucket_path(&dir, idx)).collect();

    let executor = config.executor();
    tracing::info!(?executor, buckets = bucket_paths.len(), "dispatching bucket workers");

    let best = scheduler::run(executor, &bucket_paths)?;

    if let Some(r) = &best {
        tracing::info!(length = r.length, "found longest cycle");
    } else {
        tracing::info!("no cycle found in any bucket");
    }

    Ok(format_result(best))
}

fn format_result(best: Option<BucketResult>) -> String {
    match best {
        Some(r) => format!(
            "{},{},{}",
            String::from_utf8_lossy(&r.key.claim_id),
            String::from_utf8_lossy(&r.key.status_code),
            r.length
        ),
        None => "0".to_string(),
    }
}
