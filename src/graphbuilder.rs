//! Pass 2, stage 1: reconstruct per-key adjacency from one bucket file.

use crate::record::{parse_line, strip_cr, Key};
use ahash::{AHashMap, AHashSet, HashMapExt as _};
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Deduplicated adjacency for one key's subgraph, plus the largest out-degree
/// observed across its source nodes.
#[derive(Default, Debug)]
pub struct KeyGraph {
    pub adjacency: AHashMap<Vec<u8>, AHashSet<Vec<u8>>>,
    pub max_out_degree: usize,
}

/// Parse one bucket file and group its edges by `(claim_id, status_code)`.
/// A missing bucket file (an index that never received a write) yields an
/// empty map rather than an error.
pub fn build(bucket_path: &Path) -> Result<AHashMap<Key, KeyGraph>> {
    let file = match File::open(bucket_path) {
        Ok(f) => f,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(AHashMap::new()),
        Err(e) => return Err(e).with_context(|| format!("open {}", bucket_path.display())),
    };
    let reader = BufReader::new(file);

    let mut graphs: AHashMap<Key, KeyGraph> = AHashMap::new();

    for raw_line in reader.split(b'\n') {
        let raw_line = raw_line.with_context(|| format!("read {}", bucket_path.display()))?;
        if raw_line.is_empty() {
            continue;
        }
        let line = strip_cr(&raw_line);
        let Some(record) = parse_line(line) else { continue };

        let key = Key::from_fields(record.claim_id, record.status_code);
        let graph = graphs.entry(key).or_default();
        let dests = graph.adjacency.entry(record.source.to_vec()).or_default();
        dests.insert(record.destination.to_vec());
        graph.max_out_degree = graph.max_out_degree.max(dests.len());
    }

    Ok(graphs)
}
