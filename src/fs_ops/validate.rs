//! Input validation building blocks for the facade operations.
//!
//! Every operation applies the same fixed order: blank check first, then
//! existence check, then the mutating action. A caller therefore gets the
//! same failure for a given invalid input regardless of filesystem state,
//! and nothing on disk is touched before validation passes.

use std::path::Path;

use crate::errors::{OpError, OpResult};

/// Reject empty or whitespace-only input, returning the trimmed path.
pub fn non_blank(raw: &str) -> OpResult<&Path> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(OpError::EmptyPath);
    }
    Ok(Path::new(trimmed))
}

/// The path must name an existing directory.
pub fn existing_dir(path: &Path) -> OpResult<()> {
    if path.is_dir() {
        Ok(())
    } else {
        Err(OpError::DirectoryNotFound(path.to_path_buf()))
    }
}

/// The path must name an existing regular file.
pub fn existing_file(path: &Path) -> OpResult<()> {
    if path.is_file() {
        Ok(())
    } else {
        Err(OpError::FileNotFound(path.to_path_buf()))
    }
}
