//! Workspace entity
//!
//! A workspace is a directory holding a `.repo/` metadata directory (the repodir).
//! Every path reposweep reads or deletes is derived from here.

use std::path::{Path, PathBuf};

use crate::domain::value_objects::ScanRoot;

/// Name of the metadata directory at the top of a workspace
pub const REPO_DIR_NAME: &str = ".repo";
/// Per-project git directories, relative to the repodir
pub const DEFAULT_PROJECTS_DIR: &str = "projects";
/// Shared object storage, relative to the repodir
pub const DEFAULT_OBJECTS_DIR: &str = "project-objects";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workspace {
    root: PathBuf,
    repodir: PathBuf,
    projects_dir: PathBuf,
    objects_dir: PathBuf,
}

impl Workspace {
    /// Build from the repodir; the workspace root is its parent.
    pub fn from_repodir(repodir: impl Into<PathBuf>) -> Self {
        let repodir = repodir.into();
        let root = repodir
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| repodir.clone());
        Self {
            root,
            repodir,
            projects_dir: PathBuf::from(DEFAULT_PROJECTS_DIR),
            objects_dir: PathBuf::from(DEFAULT_OBJECTS_DIR),
        }
    }

    /// Override the two scan directories, relative to the repodir.
    ///
    /// Callers pass dirs checked by `GcConfig::validate`.
    pub fn with_scan_dirs(mut self, projects_dir: PathBuf, objects_dir: PathBuf) -> Self {
        self.projects_dir = projects_dir;
        self.objects_dir = objects_dir;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn repodir(&self) -> &Path {
        &self.repodir
    }

    /// Scan root holding per-project git directories
    pub fn project_root(&self) -> ScanRoot {
        ScanRoot::new(self.repodir.join(&self.projects_dir))
    }

    /// Scan root holding shared object storage
    pub fn object_root(&self) -> ScanRoot {
        ScanRoot::new(self.repodir.join(&self.objects_dir))
    }

    pub fn registry_path(&self) -> PathBuf {
        self.repodir.join("projects.toml")
    }

    pub fn config_path(&self) -> PathBuf {
        self.repodir.join("reposweep.toml")
    }

    pub fn lock_path(&self) -> PathBuf {
        self.repodir.join("reposweep.lock")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scan_roots_live_under_repodir() {
        let ws = Workspace::from_repodir("/ws/.repo");
        assert_eq!(ws.root(), Path::new("/ws"));
        assert_eq!(ws.project_root().as_path(), Path::new("/ws/.repo/projects"));
        assert_eq!(
            ws.object_root().as_path(),
            Path::new("/ws/.repo/project-objects")
        );
    }

    #[test]
    fn scan_dir_override_replaces_default() {
        let ws = Workspace::from_repodir("/ws/.repo")
            .with_scan_dirs(PathBuf::from("meta"), PathBuf::from("store/objects"));
        assert_eq!(ws.project_root().as_path(), Path::new("/ws/.repo/meta"));
        assert_eq!(
            ws.object_root().as_path(),
            Path::new("/ws/.repo/store/objects")
        );
    }

    #[test]
    fn config_path_sits_in_repodir() {
        let ws = Workspace::from_repodir("/ws/.repo");
        assert_eq!(ws.config_path(), PathBuf::from("/ws/.repo/reposweep.toml"));
    }
}
