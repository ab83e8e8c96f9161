//! Atomic persist helper for in-memory payloads.
//! - Writes to a unique temp file in the destination directory and fsyncs it.
//! - Atomically renames temp -> dest (Windows rename doesn't overwrite, so an
//!   existing destination is removed there first).
//! - On Unix, best-effort fsync of the destination directory after the rename.
//!
//! A reader therefore never observes a partially written destination file
//! under normal (non-crash) conditions.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::errors::{OpError, OpResult};

/// Persist `bytes` at `dest` via write-temp-then-rename.
pub fn write_atomic(dest: &Path, bytes: &[u8]) -> OpResult<()> {
    let dest_dir = dest
        .parent()
        .ok_or_else(|| OpError::DirectoryNotFound(dest.to_path_buf()))?;

    let tmp = unique_temp_path(dest_dir);

    // create_new so we never clobber a concurrent writer's temp file.
    let mut f = OpenOptions::new()
        .create_new(true)
        .write(true)
        .open(&tmp)
        .map_err(OpError::io_ctx("create temporary file", &tmp))?;

    if let Err(e) = f.write_all(bytes).and_then(|_| f.sync_all()) {
        drop(f);
        let _ = fs::remove_file(&tmp);
        return Err(OpError::io_ctx("write temporary file", &tmp)(e));
    }
    drop(f);

    // Windows: ensure the destination path is free (rename doesn't overwrite there).
    #[cfg(windows)]
    if dest.exists() {
        if let Err(e) = fs::remove_file(dest) {
            if e.kind() != std::io::ErrorKind::NotFound {
                let _ = fs::remove_file(&tmp);
                return Err(OpError::io_ctx("remove existing destination", dest)(e));
            }
        }
    }

    if let Err(e) = fs::rename(&tmp, dest) {
        let _ = fs::remove_file(&tmp);
        return Err(OpError::io_ctx("rename temporary file into", dest)(e));
    }

    // Ignore fsync errors to avoid turning a successful rename into a failure.
    #[cfg(unix)]
    let _ = fsync_dir(dest_dir);

    Ok(())
}

fn unique_temp_path(dir: &Path) -> PathBuf {
    // Sequence number covers clocks too coarse to separate two calls.
    static SEQ: AtomicU64 = AtomicU64::new(0);
    let pid = std::process::id();
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or(0);
    let seq = SEQ.fetch_add(1, Ordering::Relaxed);
    dir.join(format!(".dirwatch.{}.{}.{}.tmp", pid, nanos, seq))
}

#[cfg(unix)]
fn fsync_dir(dir: &Path) -> std::io::Result<()> {
    let f = fs::File::open(dir)?;
    f.sync_all()
}
