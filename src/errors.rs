//! Typed error definitions for dirwatch.
//! Provides the small set of expected failure modes every operation can
//! report, plus carriers for downstream io/http/watch errors so the menu can
//! print them on the standard status line instead of unwinding.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Outcome of every facade and watch operation.
pub type OpResult<T> = Result<T, OpError>;

#[derive(Debug, Error)]
pub enum OpError {
    /// Blank or whitespace-only path input, rejected before any filesystem access.
    #[error("Empty path")]
    EmptyPath,

    #[error("Directory not found: {0}")]
    DirectoryNotFound(PathBuf),

    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: io::Error,
    },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Watch subscription error: {0}")]
    Watch(String),
}

impl OpError {
    /// Build a `map_err` closure that wraps an io error with the attempted
    /// action and the path it was attempted on.
    pub(crate) fn io_ctx<'a>(action: &'a str, path: &'a Path) -> impl FnOnce(io::Error) -> OpError + 'a {
        move |source| OpError::Io {
            context: format!("{} '{}'", action, path.display()),
            source,
        }
    }
}
