//! Error types for reposweep
//!
//! Library errors use `thiserror`; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::RegistryError;

/// Result type alias for reposweep operations
pub type SweepResult<T> = Result<T, SweepError>;

/// Main error type for reposweep operations
#[derive(Error, Debug)]
pub enum SweepError {
    /// No `.repo/` directory above the start directory
    #[error("no workspace found: no .repo directory in {start} or any parent")]
    WorkspaceNotFound { start: PathBuf },

    /// `--repo-dir` points at something that is not a directory
    #[error("repo dir {path} is not a directory")]
    RepoDirMissing { path: PathBuf },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file could not be parsed
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Project registry could not be read or written
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// A project named on the command line is not registered
    #[error("project '{name}' is not registered in this workspace")]
    UnknownProject { name: String },

    /// Wiping this project would break another project's object storage
    #[error(
        "project '{project}' shares object directory with '{other}' (and possibly others). Use --force to wipe."
    )]
    SharedObjectDir { project: String, other: String },

    /// Deleting a directory during wipe failed
    #[error("failed to delete {path}: {message}")]
    DeleteFailed { path: PathBuf, message: String },

    /// Another reposweep process holds the workspace lock
    #[error("failed to lock workspace at {path}: {message}")]
    Lock { path: PathBuf, message: String },
}
