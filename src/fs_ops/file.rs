//! File-level one-shot operations: copy into a directory, delete.

use std::fs;

use tracing::info;

use super::validate;
use crate::errors::{OpError, OpResult};

/// Copy `file_raw` into `dir_raw`, preserving the source base name.
/// An existing destination file of the same name is overwritten.
///
/// Validation order is part of the contract: blank file path, blank
/// directory path, missing directory, missing file, then the copy.
pub fn copy_file_to_directory(file_raw: &str, dir_raw: &str) -> OpResult<()> {
    let src = validate::non_blank(file_raw)?;
    let dir = validate::non_blank(dir_raw)?;
    validate::existing_dir(dir)?;
    validate::existing_file(src)?;

    let name = src
        .file_name()
        .ok_or_else(|| OpError::FileNotFound(src.to_path_buf()))?;
    let dest = dir.join(name);
    fs::copy(src, &dest).map_err(OpError::io_ctx("copy file to", &dest))?;
    info!(src = %src.display(), dest = %dest.display(), "copied file");
    Ok(())
}

/// Delete a single file. Absence is an expected failure.
pub fn delete_file(raw: &str) -> OpResult<()> {
    let path = validate::non_blank(raw)?;
    validate::existing_file(path)?;
    fs::remove_file(path).map_err(OpError::io_ctx("delete file", path))?;
    info!(path = %path.display(), "deleted file");
    Ok(())
}
