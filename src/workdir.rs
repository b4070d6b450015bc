//! Work-directory guard: owns the temporary directory backing the bucket
//! files, and guarantees teardown on every exit path via `Drop`.

use anyhow::{Context, Result};
use std::path::Path;
use tempfile::TempDir;

/// RAII guard around a temporary work directory. Removed on drop, whether
/// the run inside it succeeded or failed.
pub struct WorkDir {
    inner: TempDir,
}

impl WorkDir {
    pub fn create() -> Result<Self> {
        let inner = TempDir::new().context("create work directory")?;
        Ok(Self { inner })
    }

    pub fn path(&self) -> &Path {
        self.inner.path()
    }
}
