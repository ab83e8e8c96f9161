//! Domain change events and their translation from raw notify events.

use std::fmt;
use std::path::PathBuf;

use notify::EventKind;
use notify::event::{ModifyKind, RenameMode};

use crate::fs_ops::FileDescriptor;

/// What happened to a watched directory entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    Created,
    Modified,
    /// Reported once, at the new path. The old name is not reported.
    Renamed,
    Deleted,
}

impl fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ChangeKind::Created => "created",
            ChangeKind::Modified => "modified",
            ChangeKind::Renamed => "renamed",
            ChangeKind::Deleted => "deleted",
        };
        f.write_str(s)
    }
}

/// One observed filesystem mutation: kind plus a fresh snapshot of the
/// affected file. Produced only by the watch session.
#[derive(Debug, Clone)]
pub struct ChangeEvent {
    pub kind: ChangeKind,
    pub file: FileDescriptor,
}

impl ChangeEvent {
    /// Detail line printed for each event in watch mode.
    pub fn describe(&self) -> String {
        format!("{} - {}", self.kind, self.file.describe())
    }
}

/// Maps raw notify events to domain events, one per affected path.
///
/// Renames need a little state: backends deliver one rename in several
/// shapes (separate `From`/`To` events, a cookie-matched `Both` carrying old
/// and new path, or an ambiguous `Any`), and may deliver more than one shape
/// for the same rename. The translator reports each rename once, at the new
/// path, and never reports the old name.
pub(super) struct Translator {
    last_rename: Option<PathBuf>,
}

impl Translator {
    pub(super) fn new() -> Self {
        Self { last_rename: None }
    }

    pub(super) fn translate(&mut self, event: &notify::Event) -> Vec<ChangeEvent> {
        let kind = match event.kind {
            EventKind::Create(_) => ChangeKind::Created,
            EventKind::Modify(ModifyKind::Name(mode)) => {
                return self.translate_rename(mode, &event.paths);
            }
            EventKind::Modify(_) => ChangeKind::Modified,
            EventKind::Remove(_) => ChangeKind::Deleted,
            _ => return Vec::new(),
        };

        self.last_rename = None;
        event
            .paths
            .iter()
            .map(|path| ChangeEvent {
                kind,
                file: FileDescriptor::observe(path),
            })
            .collect()
    }

    fn translate_rename(&mut self, mode: RenameMode, paths: &[PathBuf]) -> Vec<ChangeEvent> {
        let new_path = match mode {
            // The old name is not reported.
            RenameMode::From => None,
            // `Both` carries [old, new]; `To` carries just the new path.
            RenameMode::To | RenameMode::Both => paths.last(),
            // Ambiguous shapes fire once per side of the rename; only the
            // new name still exists on disk.
            RenameMode::Any | RenameMode::Other => paths.last().filter(|p| p.exists()),
        };
        let Some(path) = new_path else {
            return Vec::new();
        };

        // A `To` followed by a cookie-matched `Both` is the same rename.
        if self.last_rename.as_deref() == Some(path.as_path()) {
            return Vec::new();
        }
        self.last_rename = Some(path.clone());

        vec![ChangeEvent {
            kind: ChangeKind::Renamed,
            file: FileDescriptor::observe(path),
        }]
    }
}
