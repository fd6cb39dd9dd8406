//! Keep sets, delete sets and scan roots
//!
//! Both sets are ordered (`BTreeSet`) so listings are deterministic.

use std::collections::BTreeSet;
use std::fmt;
use std::path::{Path, PathBuf};

/// Base-name suffix that marks a directory as repository state
pub const REPO_DIR_SUFFIX: &str = ".git";

/// Directories in active use under one scan root. Never deleted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeepSet(BTreeSet<PathBuf>);

impl KeepSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, path: impl Into<PathBuf>) -> bool {
        self.0.insert(path.into())
    }

    /// Component-wise equality, no symlink resolution or case folding.
    pub fn contains(&self, path: &Path) -> bool {
        self.0.contains(path)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PathBuf> {
        self.0.iter()
    }
}

impl<P: Into<PathBuf>> FromIterator<P> for KeepSet {
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

/// Candidate directories that no keep set protects.
///
/// Iterates in sorted path order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteSet(BTreeSet<PathBuf>);

impl DeleteSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, path: impl Into<PathBuf>) -> bool {
        self.0.insert(path.into())
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.0.contains(path)
    }

    /// Merge another root's delete set into this one.
    pub fn merge(&mut self, other: DeleteSet) {
        self.0.extend(other.0);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PathBuf> {
        self.0.iter()
    }

    pub fn into_vec(self) -> Vec<PathBuf> {
        self.0.into_iter().collect()
    }
}

impl<P: Into<PathBuf>> FromIterator<P> for DeleteSet {
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl IntoIterator for DeleteSet {
    type Item = PathBuf;
    type IntoIter = std::collections::btree_set::IntoIter<PathBuf>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Directory where a reconcile walk starts.
///
/// May not exist; a missing root simply has nothing to clean.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ScanRoot(PathBuf);

impl ScanRoot {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    pub fn as_path(&self) -> &Path {
        &self.0
    }
}

impl AsRef<Path> for ScanRoot {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl fmt::Display for ScanRoot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}
