//! Local Tree Remover
//!
//! Implements the TreeRemover port for local disk.

use std::fs;
use std::path::Path;

use ignore::WalkBuilder;

use crate::domain::ports::{RemoveError, RemoveResult, TreeRemover};

/// Removes directory trees from local disk.
///
/// Git marks pack files and loose objects read-only. When the first attempt is
/// refused, write permission is restored on the whole tree and removal is
/// retried once.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalTreeRemover;

impl LocalTreeRemover {
    pub fn new() -> Self {
        Self
    }
}

impl TreeRemover for LocalTreeRemover {
    fn remove_tree(&self, path: &Path) -> RemoveResult<()> {
        match fs::remove_dir_all(path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::PermissionDenied => {
                make_tree_writable(path);
                fs::remove_dir_all(path).map_err(|e| RemoveError::from_io(path, e))
            }
            Err(e) => Err(RemoveError::from_io(path, e)),
        }
    }
}

/// Best effort: entries that cannot be updated are left for the retry to report.
fn make_tree_writable(root: &Path) {
    let walker = WalkBuilder::new(root)
        .standard_filters(false)
        .follow_links(false)
        .build();

    for entry in walker.flatten() {
        let is_symlink = entry.path_is_symlink();
        if !is_symlink {
            make_writable(entry.path());
        }
    }
}

#[cfg(unix)]
fn make_writable(path: &Path) {
    use std::os::unix::fs::PermissionsExt;

    if let Ok(meta) = fs::symlink_metadata(path) {
        let mut perms = meta.permissions();
        let extra = if meta.is_dir() { 0o700 } else { 0o600 };
        perms.set_mode(perms.mode() | extra);
        let _ = fs::set_permissions(path, perms);
    }
}

#[cfg(not(unix))]
fn make_writable(path: &Path) {
    if let Ok(meta) = fs::symlink_metadata(path) {
        let mut perms = meta.permissions();
        if perms.readonly() {
            #[allow(clippy::permissions_set_readonly_false)]
            perms.set_readonly(false);
            let _ = fs::set_permissions(path, perms);
        }
    }
}
