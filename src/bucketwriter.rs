//! Bucket writer with a fixed-capacity LRU handle cache.

use anyhow::{Context, Result};
use std::collections::HashMap;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Default capacity of the open-handle cache (`H` in the design).
pub const DEFAULT_CAPACITY: usize = 128;

/// Path of the on-disk file backing bucket `index` under `dir`.
pub fn bucket_path(dir: &Path, index: usize) -> PathBuf {
    dir.join(format!("bucket_{index}.bin"))
}

/// Appends raw record lines to one of `B` bucket files, keeping at most `H`
/// file handles open at a time. Single-threaded: pass 1 owns this exclusively.
pub struct BucketWriter {
    dir: PathBuf,
    capacity: usize,
    handles: HashMap<usize, BufWriter<File>>,
    // Insertion-ordered recency list; front is least-recently-used, back is MRU.
    order: Vec<usize>,
}

impl BucketWriter {
    pub fn new(dir: impl Into<PathBuf>, capacity: usize) -> Self {
        Self {
            dir: dir.into(),
            capacity: capacity.max(1),
            handles: HashMap::new(),
            order: Vec::new(),
        }
    }

    fn touch(&mut self, index: usize) {
        if let Some(pos) = self.order.iter().position(|&i| i == index) {
            self.order.remove(pos);
        }
        self.order.push(index);
    }

    fn open(&self, index: usize) -> Result<BufWriter<File>> {
        let path = bucket_path(&self.dir, index);
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .with_context(|| format!("open bucket {}", path.display()))?;
        Ok(BufWriter::new(file))
    }

    /// Append `line` followed by a single `\n` to bucket `index`.
    pub fn write(&mut self, index: usize, line: &[u8]) -> Result<()> {
        if !self.handles.contains_key(&index) {
            if self.handles.len() >= self.capacity {
                let lru = self.order.remove(0);
                if let Some(mut evicted) = self.handles.remove(&lru) {
                    evicted
                        .flush()
                        .with_context(|| format!("flush bucket {}", bucket_path(&self.dir, lru).display()))?;
                }
            }
            let writer = self.open(index)?;
            self.handles.insert(index, writer);
        }
        self.touch(index);

        let w = self.handles.get_mut(&index).expect("handle present after insert/touch");
        w.write_all(line)?;
        w.write_all(b"\n")?;
        Ok(())
    }

    /// Number of file handles currently open. Exposed for testing.
    pub fn open_handles(&self) -> usize {
        self.handles.len()
    }

    /// Flush and close every open handle.
    pub fn close_all(&mut self) -> Result<()> {
        for (index, mut w) in self.handles.drain() {
            w.flush()
                .with_context(|| format!("flush bucket {}", bucket_path(&self.dir, index).display()))?;
        }
        self.order.clear();
        Ok(())
    }
}
