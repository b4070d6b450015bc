//! Scheduler: pick an executor, fan bucket paths out to the per-bucket
//! worker, reduce to a single global winner.

use crate::worker::{process_bucket, BucketResult};
use anyhow::Result;
use rayon::prelude::*;
use std::path::PathBuf;

/// Number of bucket tasks dispatched per batch under the isolated-heap
/// executor, amortizing per-task scheduling overhead.
const PROCESS_CHUNK_SIZE: usize = 16;

/// Which concurrency model drives pass 2.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Executor {
    /// Shared-memory worker-thread pool (`rayon`). The default on this
    /// runtime, which always supports OS-thread CPU parallelism.
    Threads,
    /// Independent-heap workers, dispatched in chunks. Provided for parity
    /// with the abstract contract and for isolation in testing.
    Processes,
    /// Single-threaded, used for deterministic tests and as a safety valve.
    Serial,
}

impl Executor {
    fn resolve(explicit: Option<&str>) -> Self {
        match explicit.map(str::to_ascii_lowercase).as_deref() {
            Some("processes") => Executor::Processes,
            Some("serial") => Executor::Serial,
            Some("threads") => Executor::Threads,
            _ => Executor::Threads,
        }
    }

    /// Resolve the executor from `RC_EXECUTOR`, defaulting to `Threads`.
    pub fn from_env() -> Self {
        Self::resolve(std::env::var("RC_EXECUTOR").ok().as_deref())
    }
}

fn reduce(results: Vec<Option<BucketResult>>) -> Option<BucketResult> {
    let mut best: Option<BucketResult> = None;
    for r in results.into_iter().flatten() {
        if best.as_ref().map_or(true, |b| r.length > b.length) {
            best = Some(r);
        }
    }
    best
}

/// Run the bucket worker over every bucket path with the chosen executor and
/// reduce to the single globally-best result.
pub fn run(executor: Executor, buckets: &[PathBuf]) -> Result<Option<BucketResult>> {
    match executor {
        Executor::Threads => run_threaded(buckets),
        Executor::Processes => run_isolated(buckets),
        Executor::Serial => run_serial(buckets),
    }
}

fn run_threaded(buckets: &[PathBuf]) -> Result<Option<BucketResult>> {
    let results: Vec<Option<BucketResult>> =
        buckets.par_iter().map(|p| process_bucket(p)).collect::<Result<Vec<_>>>()?;
    Ok(reduce(results))
}

fn run_isolated(buckets: &[PathBuf]) -> Result<Option<BucketResult>> {
    let mut results: Vec<Option<BucketResult>> = Vec::with_capacity(buckets.len());
    for chunk in buckets.chunks(PROCESS_CHUNK_SIZE) {
        let chunk_results: Vec<Option<BucketResult>> =
            chunk.par_iter().map(|p| process_bucket(p)).collect::<Result<Vec<_>>>()?;
        results.extend(chunk_results);
    }
    Ok(reduce(results))
}

fn run_serial(buckets: &[PathBuf]) -> Result<Option<BucketResult>> {
    let mut best: Option<BucketResult> = None;
    for p in buckets {
        if let Some(r) = process_bucket(p)? {
            if best.as_ref().map_or(true, |b| r.length > b.length) {
                best = Some(r);
            }
        }
    }
    Ok(best)
}
