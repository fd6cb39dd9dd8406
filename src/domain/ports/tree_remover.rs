//! TreeRemover port - recursive, destructive directory removal
//!
//! Deletion either fully succeeds for a path or reports an error for that
//! path; callers decide whether one failure stops the rest.

use std::path::{Path, PathBuf};

/// Result type for removal operations
pub type RemoveResult<T> = Result<T, RemoveError>;

/// Removal errors
#[derive(Debug)]
pub enum RemoveError {
    /// Path does not exist
    NotFound(PathBuf),
    /// Permission denied (even after clearing read-only bits)
    PermissionDenied(PathBuf),
    /// I/O error
    Io { path: PathBuf, source: std::io::Error },
}

impl RemoveError {
    /// Classify an I/O error raised while removing `path`.
    pub fn from_io(path: &Path, err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => RemoveError::NotFound(path.to_path_buf()),
            std::io::ErrorKind::PermissionDenied => {
                RemoveError::PermissionDenied(path.to_path_buf())
            }
            _ => RemoveError::Io {
                path: path.to_path_buf(),
                source: err,
            },
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            RemoveError::NotFound(path) | RemoveError::PermissionDenied(path) => path,
            RemoveError::Io { path, .. } => path,
        }
    }
}

impl std::fmt::Display for RemoveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RemoveError::NotFound(path) => write!(f, "not found: {}", path.display()),
            RemoveError::PermissionDenied(path) => {
                write!(f, "permission denied: {}", path.display())
            }
            RemoveError::Io { path, source } => write!(f, "{}: {}", path.display(), source),
        }
    }
}

impl std::error::Error for RemoveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RemoveError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Recursively removes a directory and everything under it.
///
/// Implementations:
/// - `LocalTreeRemover` - local disk, clears read-only bits and retries
/// - test doubles that record calls or fail on chosen paths
pub trait TreeRemover {
    fn remove_tree(&self, path: &Path) -> RemoveResult<()>;
}

impl<T: TreeRemover + ?Sized> TreeRemover for &T {
    fn remove_tree(&self, path: &Path) -> RemoveResult<()> {
        (**self).remove_tree(path)
    }
}
