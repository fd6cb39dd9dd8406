//! GC options

use std::path::PathBuf;

use crate::domain::entities::{Registry, Workspace};
use crate::domain::value_objects::{KeepSet, ScanRoot};

/// The two (keep set, scan root) pairs of one gc run.
///
/// The pairs are never mixed: a directory found under `project_root` is only
/// ever checked against `project_keep`.
#[derive(Debug, Clone)]
pub struct GcRequest {
    /// Shown in the scan-start notice
    pub repodir: PathBuf,
    pub project_keep: KeepSet,
    pub project_root: ScanRoot,
    pub object_keep: KeepSet,
    pub object_root: ScanRoot,
}

impl GcRequest {
    /// Derive both keep sets from the registry.
    pub fn from_registry(workspace: &Workspace, registry: &Registry) -> Self {
        let (project_keep, object_keep) = registry.keep_sets(workspace);
        Self {
            repodir: workspace.repodir().to_path_buf(),
            project_keep,
            project_root: workspace.project_root(),
            object_keep,
            object_root: workspace.object_root(),
        }
    }
}

/// Options for the gc command
#[derive(Debug, Clone, Default)]
pub struct GcOptions {
    /// List the plan and stop before confirmation
    pub dry_run: bool,
}

impl GcOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}
