use std::fs::File;
use std::io::Write as _;
use std::path::{Path, PathBuf};

/// Write `contents` to `name` under `dir` and return the file's path.
pub fn write_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    let mut f = File::create(&path).unwrap();
    f.write_all(contents.as_bytes()).unwrap();
    path
}
