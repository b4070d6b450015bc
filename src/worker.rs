//! Bucket worker: compose the graph builder and cycle finders over one
//! bucket file, with no global state read or written.

use crate::cycles::longest_cycle;
use crate::graphbuilder::build;
use crate::record::Key;
use anyhow::Result;
use std::path::Path;

/// The best cycle found while scanning one bucket file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BucketResult {
    pub key: Key,
    pub length: usize,
}

/// Build the per-key graphs for one bucket and return its locally-best cycle,
/// or `None` if every per-key graph in the bucket is acyclic.
pub fn process_bucket(bucket_path: &Path) -> Result<Option<BucketResult>> {
    let graphs = build(bucket_path)?;

    let mut best: Option<BucketResult> = None;
    for (key, graph) in graphs {
        let Some(length) = longest_cycle(&graph) else { continue };
        if best.as_ref().map_or(true, |b| length > b.length) {
            best = Some(BucketResult { key, length });
        }
    }

    Ok(best)
}
