//! Small filesystem helpers for image files.

use std::io;
use std::path::Path;
use std::time::UNIX_EPOCH;

/// Last modification time of `path` as unix seconds.
pub fn modified_time<P: AsRef<Path>>(path: P) -> io::Result<i64> {
    let modified = std::fs::metadata(path)?.modified()?;
    match modified.duration_since(UNIX_EPOCH) {
        Ok(d) => Ok(d.as_secs() as i64),
        // Pre-epoch mtimes count backwards.
        Err(e) => Ok(-(e.duration().as_secs() as i64)),
    }
}

/// Rename (move) a file.
pub fn rename<P: AsRef<Path>, Q: AsRef<Path>>(from: P, to: Q) -> io::Result<()> {
    std::fs::rename(from, to)
}

/// Delete a file.
pub fn remove<P: AsRef<Path>>(path: P) -> io::Result<()> {
    std::fs::remove_file(path)
}
