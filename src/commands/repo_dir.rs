use std::path::{Path, PathBuf};

use reposweep::domain::entities::REPO_DIR_NAME;
use reposweep::{SweepError, SweepResult};

/// Nearest `.repo/` directory at or above `start`.
pub(crate) fn discover_repodir(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .map(|dir| dir.join(REPO_DIR_NAME))
        .find(|candidate| candidate.is_dir())
}

/// Resolve the repodir from `--repo-dir` (relative to `cwd`) or by discovery.
///
/// The result is canonical, so keep sets and walked paths share one spelling.
pub(crate) fn resolve_repodir(explicit: Option<&Path>, cwd: &Path) -> SweepResult<PathBuf> {
    let repodir = match explicit {
        Some(dir) => {
            let dir = cwd.join(dir);
            if !dir.is_dir() {
                return Err(SweepError::RepoDirMissing { path: dir });
            }
            dir
        }
        None => discover_repodir(cwd).ok_or_else(|| SweepError::WorkspaceNotFound {
            start: cwd.to_path_buf(),
        })?,
    };

    Ok(std::fs::canonicalize(repodir)?)
}
