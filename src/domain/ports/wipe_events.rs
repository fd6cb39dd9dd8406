//! Wipe Event Port

use std::path::PathBuf;

/// Which of a project's directories is being removed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirKind {
    Worktree,
    GitDir,
    ObjectDir,
}

impl DirKind {
    pub fn label(&self) -> &'static str {
        match self {
            DirKind::Worktree => "worktree",
            DirKind::GitDir => "git directory",
            DirKind::ObjectDir => "objects directory",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WipeEvent {
    /// About to remove a directory
    Deleting { kind: DirKind, path: PathBuf },
    /// Object directory left in place because other projects still use it
    ObjectDirKept { path: PathBuf, users: Vec<String> },
    /// Projects dropped from the registry
    Unregistered { names: Vec<String> },
}

pub trait WipeEventSink {
    fn on_event(&self, event: WipeEvent);
}

pub struct NoopWipeSink;

impl WipeEventSink for NoopWipeSink {
    fn on_event(&self, _event: WipeEvent) {}
}
