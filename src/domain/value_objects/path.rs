//! Safe Path Value Object
//!
//! Project names and worktree paths come from the registry file and end up
//! joined onto the workspace root before anything is deleted. A `SafePath`
//! guarantees the join cannot leave the workspace:
//! - No traversal components (`..`)
//! - Relative, non-empty

use std::fmt;
use std::path::{Component, Path, PathBuf};

/// Error when path validation fails
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// Path contains traversal components (..)
    ContainsTraversal,
    /// Path is absolute when relative is required
    AbsoluteNotAllowed,
    /// Path is empty
    Empty,
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathError::ContainsTraversal => {
                write!(f, "path contains traversal components (..)")
            }
            PathError::AbsoluteNotAllowed => write!(f, "absolute paths are not allowed"),
            PathError::Empty => write!(f, "path is empty"),
        }
    }
}

impl std::error::Error for PathError {}

/// A validated workspace-relative path
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SafePath(PathBuf);

impl SafePath {
    /// Create a new SafePath after validation
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, PathError> {
        let path = path.as_ref();

        if path.as_os_str().is_empty() {
            return Err(PathError::Empty);
        }

        if path.is_absolute() || path.has_root() {
            return Err(PathError::AbsoluteNotAllowed);
        }

        let mut normal = 0usize;
        for component in path.components() {
            match component {
                Component::ParentDir => return Err(PathError::ContainsTraversal),
                Component::Normal(_) => normal += 1,
                _ => {}
            }
        }

        // "." and "./" name the root itself
        if normal == 0 {
            return Err(PathError::Empty);
        }

        Ok(Self(path.to_path_buf()))
    }

    /// Get the inner path
    pub fn as_path(&self) -> &Path {
        &self.0
    }

    /// Join onto `root` and append `suffix` to the last component.
    ///
    /// `SafePath::new("platform/build")?.under_with_suffix(root, ".git")`
    /// yields `root/platform/build.git`.
    pub fn under_with_suffix(&self, root: &Path, suffix: &str) -> PathBuf {
        let mut joined = root.join(&self.0).into_os_string();
        joined.push(suffix);
        PathBuf::from(joined)
    }
}

impl fmt::Display for SafePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

impl AsRef<Path> for SafePath {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl TryFrom<&str> for SafePath {
    type Error = PathError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
