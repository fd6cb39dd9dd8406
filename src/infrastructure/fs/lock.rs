//! Workspace lock
//!
//! One gc or wipe at a time per workspace. Held for the whole command.

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use fs2::FileExt;

use crate::error::{SweepError, SweepResult};

#[derive(Debug)]
pub struct WorkspaceLock {
    file: File,
    path: PathBuf,
}

impl WorkspaceLock {
    /// Take the lock without waiting.
    pub fn acquire(path: &Path) -> SweepResult<Self> {
        let lock_error = |message: String| SweepError::Lock {
            path: path.to_path_buf(),
            message,
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let file = File::create(path).map_err(|e| lock_error(e.to_string()))?;
        file.try_lock_exclusive()
            .map_err(|_| lock_error("another reposweep process is running".to_string()))?;

        Ok(Self {
            file,
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for WorkspaceLock {
    fn drop(&mut self) {
        let _ = self.file.unlock();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn second_acquire_fails_while_held() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("reposweep.lock");

        let held = WorkspaceLock::acquire(&path).unwrap();
        let err = WorkspaceLock::acquire(&path).unwrap_err();
        assert!(matches!(err, SweepError::Lock { .. }));
        assert!(err.to_string().contains("another reposweep process"));

        drop(held);
        assert!(WorkspaceLock::acquire(&path).is_ok());
    }

    #[test]
    fn creates_missing_parent() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(".repo/reposweep.lock");
        let lock = WorkspaceLock::acquire(&path).unwrap();
        assert_eq!(lock.path(), path.as_path());
        assert!(path.exists());
    }
}
