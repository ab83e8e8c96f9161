//! Directory-level one-shot operations.

use std::fs;

use tracing::info;

use super::validate;
use crate::errors::{OpError, OpResult};

/// Create a directory, including any missing parent segments.
/// Idempotent: an already-existing directory is a no-op success.
pub fn create_directory(raw: &str) -> OpResult<()> {
    let path = validate::non_blank(raw)?;
    if path.is_dir() {
        return Ok(());
    }
    fs::create_dir_all(path).map_err(OpError::io_ctx("create directory", path))?;
    info!(path = %path.display(), "created directory");
    Ok(())
}

/// Check that a directory exists. Absence is an expected failure, not a panic.
pub fn directory_exists(raw: &str) -> OpResult<()> {
    let path = validate::non_blank(raw)?;
    validate::existing_dir(path)
}
