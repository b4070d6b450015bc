//! Pass 1: stream the input once and route each record to a bucket.

use crate::bucketwriter::BucketWriter;
use crate::record::{parse_line, strip_cr};
use ahash::RandomState;
use anyhow::{ensure, Context, Result};
use std::fs::File;
use std::hash::{BuildHasher, Hasher};
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Default read-buffer size for the input stream, matching the generous I/O
/// buffers used elsewhere in this family of tools for large sequential scans.
const READ_BUFFER_BYTES: usize = 256 * 1024;

/// Fixed-seed hasher state for bucket assignment. Seeded (rather than
/// process-random) so the same key always lands in the same bucket across
/// runs, matching the deterministic-sharding seeds used elsewhere in this
/// family of tools.
const BUCKET_HASH_STATE: RandomState = RandomState::with_seeds(
    0x1357_9bdf_2468_ace0,
    0xace0_1357_9bdf_2468,
    0x2468_ace0_1357_9bdf,
    0x9bdf_2468_ace0_1357,
);

/// Compute the bucket index for a `(claim_id, status_code)` pair from a
/// fixed-seed hash over `claim_id ++ "|" ++ status_code`, masked to
/// `num_buckets - 1`. `num_buckets` must be a power of two so the mask is a
/// valid low-bit filter.
pub fn bucket_index(claim_id: &[u8], status_code: &[u8], num_buckets: usize) -> usize {
    let mut hasher = BUCKET_HASH_STATE.build_hasher();
    hasher.write(claim_id);
    hasher.write(b"|");
    hasher.write(status_code);
    (hasher.finish() as usize) & (num_buckets - 1)
}

/// Stream `input_path` once, writing every well-formed line to its bucket via
/// `writer`. Returns the sorted indices of buckets that received ≥ 1 record.
pub fn partition(input_path: &Path, num_buckets: usize, writer: &mut BucketWriter) -> Result<Vec<usize>> {
    ensure!(num_buckets.is_power_of_two(), "num_buckets must be a power of two, got {num_buckets}");

    let file = File::open(input_path).with_context(|| format!("open input {}", input_path.display()))?;
    let reader = BufReader::with_capacity(READ_BUFFER_BYTES, file);

    let mut non_empty = vec![false; num_buckets];

    for raw_line in reader.split(b'\n') {
        let raw_line = raw_line.with_context(|| format!("read {}", input_path.display()))?;
        if raw_line.is_empty() {
            continue;
        }
        let line = strip_cr(&raw_line);
        let Some(record) = parse_line(line) else { continue };

        let idx = bucket_index(record.claim_id, record.status_code, num_buckets);
        debug_assert!(idx < num_buckets, "bucket index out of range");

        writer.write(idx, line)?;
        non_empty[idx] = true;
    }

    writer.close_all()?;

    Ok(non_empty.into_iter().enumerate().filter_map(|(i, present)| present.then_some(i)).collect())
}
