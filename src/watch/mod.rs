//! Directory change watching: the live, stateful counterpart to the one-shot
//! operations in [`crate::fs_ops`].

mod event;
mod session;

pub use event::{ChangeEvent, ChangeKind};
pub use session::watch_directory;
