//! File metadata snapshots and directory listing.

use std::fs::{self, File, Metadata};
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use tracing::debug;

use super::validate;
use crate::errors::{OpError, OpResult};

/// How many leading bytes of content a watch-event snapshot captures.
pub const CONTENT_PREVIEW_BYTES: usize = 64;

/// Read-only snapshot of a file at the moment of observation.
/// Constructed fresh for each listing entry or watch event, never cached.
#[derive(Debug, Clone)]
pub struct FileDescriptor {
    /// Base file name.
    pub name: String,
    /// Full path the snapshot was taken at.
    pub path: PathBuf,
    /// Creation time, falling back to modification time on filesystems
    /// without birth-time support. None when the file is already gone.
    pub created: Option<DateTime<Local>>,
    /// Byte length at observation time.
    pub len: u64,
    /// First [`CONTENT_PREVIEW_BYTES`] bytes of content; only populated for
    /// watch events, and only when the file is still readable.
    pub preview: Option<Vec<u8>>,
}

impl FileDescriptor {
    /// Snapshot from already-fetched metadata (listing path; no preview).
    pub fn from_metadata(path: &Path, meta: &Metadata) -> Self {
        let created = meta
            .created()
            .or_else(|_| meta.modified())
            .ok()
            .map(DateTime::<Local>::from);
        Self {
            name: base_name(path),
            path: path.to_path_buf(),
            created,
            len: meta.len(),
            preview: None,
        }
    }

    /// Best-effort snapshot for a watch event, including a short content
    /// preview. A deleted or unreadable file yields name-only data.
    pub fn observe(path: &Path) -> Self {
        match fs::metadata(path) {
            Ok(meta) => {
                let mut fd = Self::from_metadata(path, &meta);
                fd.preview = read_preview(path).ok();
                fd
            }
            Err(e) => {
                debug!(path = %path.display(), error = %e, "snapshot of vanished file");
                Self {
                    name: base_name(path),
                    path: path.to_path_buf(),
                    created: None,
                    len: 0,
                    preview: None,
                }
            }
        }
    }

    /// The `name - created - N bytes` detail line used by listings and
    /// watch output.
    pub fn describe(&self) -> String {
        let created = self
            .created
            .map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
            .unwrap_or_else(|| "-".to_string());
        format!("{} - {} - {} bytes", self.name, created, self.len)
    }
}

/// List the regular files directly inside `raw` (non-recursive,
/// subdirectories excluded), sorted by name for stable output.
pub fn read_files_from_directory(raw: &str) -> OpResult<Vec<FileDescriptor>> {
    let path = validate::non_blank(raw)?;
    validate::existing_dir(path)?;

    let entries = fs::read_dir(path).map_err(OpError::io_ctx("read directory", path))?;
    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(OpError::io_ctx("read directory entry in", path))?;
        let meta = entry
            .metadata()
            .map_err(OpError::io_ctx("read metadata in", path))?;
        if meta.is_file() {
            files.push(FileDescriptor::from_metadata(&entry.path(), &meta));
        }
    }
    files.sort_by(|a, b| a.name.cmp(&b.name));
    debug!(path = %path.display(), count = files.len(), "listed directory");
    Ok(files)
}

fn base_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn read_preview(path: &Path) -> io::Result<Vec<u8>> {
    let f = File::open(path)?;
    let mut buf = Vec::with_capacity(CONTENT_PREVIEW_BYTES);
    f.take(CONTENT_PREVIEW_BYTES as u64).read_to_end(&mut buf)?;
    Ok(buf)
}
