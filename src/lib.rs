//! Core library for `dirwatch`.
//!
//! One-shot filesystem operations (create/exists/copy/list/delete/download)
//! behind a uniform validate-then-act contract, plus a directory watch session
//! that streams change events to a caller-supplied handler until the caller's
//! blocking wait returns. Expected failures (blank input, missing target) are
//! values, never panics; the interactive menu in [`menu`] prints each outcome
//! as a one-line status.

pub mod errors;
pub mod fetch;
pub mod fs_ops;
pub mod menu;
pub mod output;
pub mod shutdown;
pub mod watch;

pub use errors::{OpError, OpResult};
pub use fs_ops::FileDescriptor;
pub use watch::{ChangeEvent, ChangeKind, watch_directory};
