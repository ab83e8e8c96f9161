//! One-shot filesystem operations behind a common validate-then-act contract.

mod atomic;
mod dir;
mod download;
mod entry;
mod file;
pub(crate) mod validate;

pub use atomic::write_atomic;
pub use dir::{create_directory, directory_exists};
pub use download::download_and_save;
pub use entry::{CONTENT_PREVIEW_BYTES, FileDescriptor, read_files_from_directory};
pub use file::{copy_file_to_directory, delete_file};
