//! Reconcile Scanner Domain Service
//!
//! Walks a scan root, collects every directory whose name ends in `.git`,
//! and keeps only those the caller's keep set does not protect.

use std::ffi::OsStr;
use std::path::PathBuf;

use ignore::WalkBuilder;

use crate::domain::value_objects::{DeleteSet, KeepSet, ScanRoot, REPO_DIR_SUFFIX};

/// Detailed outcome of one walk
#[derive(Debug, Clone, Default)]
pub struct ScanReport {
    /// Candidates not in the keep set
    pub deletable: DeleteSet,
    /// Candidates protected by the keep set
    pub kept: Vec<PathBuf>,
    /// Entries that could not be read; the walk skipped them and went on
    pub issues: Vec<String>,
}

impl ScanReport {
    pub fn candidate_count(&self) -> usize {
        self.deletable.len() + self.kept.len()
    }
}

/// Reconcile scanner service
#[derive(Debug, Clone, Copy, Default)]
pub struct ReconcileScanner;

impl ReconcileScanner {
    pub fn new() -> Self {
        Self
    }

    /// Candidates under `root` that `keep` does not contain.
    ///
    /// A missing root yields an empty set.
    pub fn find_deletable(&self, keep: &KeepSet, root: &ScanRoot) -> DeleteSet {
        self.scan(keep, root).deletable
    }

    /// Full walk of `root`, including directories nested under candidates.
    pub fn scan(&self, keep: &KeepSet, root: &ScanRoot) -> ScanReport {
        let mut report = ScanReport::default();

        if !root.as_path().is_dir() {
            return report;
        }

        let walker = WalkBuilder::new(root.as_path())
            .standard_filters(false)
            .follow_links(false)
            .build();

        for result in walker {
            let entry = match result {
                Ok(entry) => entry,
                Err(err) => {
                    report.issues.push(err.to_string());
                    continue;
                }
            };

            // The root itself is never a candidate
            if entry.depth() == 0 {
                continue;
            }

            let is_dir = entry.file_type().map(|ft| ft.is_dir()).unwrap_or(false);
            if !is_dir || !is_repo_dir_name(entry.file_name()) {
                continue;
            }

            let path = entry.into_path();
            if keep.contains(&path) {
                report.kept.push(path);
            } else {
                report.deletable.insert(path);
            }
        }

        report
    }
}

/// Whether a base name follows the repository-state naming convention.
pub fn is_repo_dir_name(name: &OsStr) -> bool {
    name.to_string_lossy().ends_with(REPO_DIR_SUFFIX)
}
