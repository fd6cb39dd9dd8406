//! Shared JSON event types for consistent CLI output.

use std::path::{Path, PathBuf};

use serde::Serialize;

/// Event emitted when a command starts.
#[derive(Debug, Clone, Serialize)]
pub struct StartEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub version: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repodir: Option<&'a Path>,
}

impl<'a> StartEvent<'a> {
    pub fn new(command: &'a str) -> Self {
        Self {
            event: "start",
            command,
            version: env!("CARGO_PKG_VERSION"),
            repodir: None,
        }
    }

    pub fn with_repodir(mut self, repodir: &'a Path) -> Self {
        self.repodir = Some(repodir);
        self
    }
}

/// The merged deletion plan of a gc run. Empty when there is nothing to clean.
#[derive(Debug, Clone, Serialize)]
pub struct GcPlanEvent<'a> {
    pub event: &'static str,
    pub count: usize,
    pub paths: &'a [PathBuf],
}

impl<'a> GcPlanEvent<'a> {
    pub fn new(paths: &'a [PathBuf]) -> Self {
        Self {
            event: "gc_plan",
            count: paths.len(),
            paths,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DirDeletedEvent<'a> {
    pub event: &'static str,
    pub path: &'a Path,
}

impl<'a> DirDeletedEvent<'a> {
    pub fn new(path: &'a Path) -> Self {
        Self {
            event: "dir_deleted",
            path,
        }
    }
}

/// A wipe is about to remove one of a project's directories
#[derive(Debug, Clone, Serialize)]
pub struct DeletingEvent<'a> {
    pub event: &'static str,
    pub kind: &'static str,
    pub path: &'a Path,
}

impl<'a> DeletingEvent<'a> {
    pub fn new(kind: &'static str, path: &'a Path) -> Self {
        Self {
            event: "deleting",
            kind,
            path,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DirFailedEvent<'a> {
    pub event: &'static str,
    pub path: &'a Path,
    pub error: &'a str,
}

impl<'a> DirFailedEvent<'a> {
    pub fn new(path: &'a Path, error: &'a str) -> Self {
        Self {
            event: "dir_failed",
            path,
            error,
        }
    }
}

/// Shared object directory left in place by a forced wipe
#[derive(Debug, Clone, Serialize)]
pub struct ObjectDirKeptEvent<'a> {
    pub event: &'static str,
    pub path: &'a Path,
    pub users: &'a [String],
}

impl<'a> ObjectDirKeptEvent<'a> {
    pub fn new(path: &'a Path, users: &'a [String]) -> Self {
        Self {
            event: "objdir_kept",
            path,
            users,
        }
    }
}

/// Event emitted when a command finishes.
#[derive(Debug, Clone, Serialize)]
pub struct CompleteEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failed: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wiped: Option<&'a [String]>,
}

impl<'a> CompleteEvent<'a> {
    fn new(command: &'a str, success: bool) -> Self {
        Self {
            event: "complete",
            command,
            success,
            outcome: None,
            deleted: None,
            failed: None,
            wiped: None,
        }
    }

    pub fn success(command: &'a str) -> Self {
        Self::new(command, true)
    }

    pub fn failure(command: &'a str) -> Self {
        Self::new(command, false)
    }

    pub fn with_outcome(mut self, outcome: &'static str) -> Self {
        self.outcome = Some(outcome);
        self
    }

    pub fn with_counts(mut self, deleted: usize, failed: usize) -> Self {
        self.deleted = Some(deleted);
        self.failed = Some(failed);
        self
    }

    pub fn with_wiped(mut self, wiped: &'a [String]) -> Self {
        self.wiped = Some(wiped);
        self
    }
}

/// Event emitted when an error occurs.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub code: &'a str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub help: Option<String>,
}

impl<'a> ErrorEvent<'a> {
    pub fn new(command: &'a str, code: &'a str, message: impl Into<String>) -> Self {
        Self {
            event: "error",
            command,
            code,
            message: message.into(),
            help: None,
        }
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}
