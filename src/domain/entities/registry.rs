//! Registry entity
//!
//! Lists every project registered in the workspace. The registry is the only
//! source of the keep sets: a `.git` directory no project resolves to is garbage.

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

use crate::domain::value_objects::{KeepSet, SafePath, REPO_DIR_SUFFIX};

use super::Workspace;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectEntry {
    /// Unique project name, e.g. `platform/build`
    pub name: SafePath,
    /// Worktree path relative to the workspace root
    pub path: SafePath,
    /// Explicit git directory (relative to the repodir, or absolute)
    pub gitdir: Option<PathBuf>,
    /// Explicit object directory (relative to the repodir, or absolute)
    pub objdir: Option<PathBuf>,
}

/// A project with every location made absolute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedProject {
    pub name: String,
    pub worktree: PathBuf,
    pub gitdir: PathBuf,
    pub objdir: PathBuf,
}

impl ProjectEntry {
    pub fn new(name: SafePath, path: SafePath) -> Self {
        Self {
            name,
            path,
            gitdir: None,
            objdir: None,
        }
    }

    pub fn with_gitdir(mut self, gitdir: impl Into<PathBuf>) -> Self {
        self.gitdir = Some(gitdir.into());
        self
    }

    pub fn with_objdir(mut self, objdir: impl Into<PathBuf>) -> Self {
        self.objdir = Some(objdir.into());
        self
    }

    pub fn name(&self) -> String {
        self.name.to_string()
    }

    /// Resolve against the workspace.
    ///
    /// Defaults: gitdir is `<projects root>/<path>.git`, objdir is
    /// `<objects root>/<name>.git`.
    pub fn resolve(&self, workspace: &Workspace) -> ResolvedProject {
        let gitdir = match &self.gitdir {
            Some(dir) => workspace.repodir().join(dir),
            None => self
                .path
                .under_with_suffix(workspace.project_root().as_path(), REPO_DIR_SUFFIX),
        };
        let objdir = match &self.objdir {
            Some(dir) => workspace.repodir().join(dir),
            None => self
                .name
                .under_with_suffix(workspace.object_root().as_path(), REPO_DIR_SUFFIX),
        };

        ResolvedProject {
            name: self.name(),
            worktree: workspace.root().join(&self.path),
            gitdir,
            objdir,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registry {
    pub version: u32,
    pub projects: Vec<ProjectEntry>,
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl Registry {
    pub fn new() -> Self {
        Self {
            version: 1,
            projects: Vec::new(),
        }
    }

    pub fn upsert(&mut self, entry: ProjectEntry) {
        if let Some(existing) = self.projects.iter_mut().find(|p| p.name == entry.name) {
            *existing = entry;
        } else {
            self.projects.push(entry);
        }
    }

    pub fn remove(&mut self, name: &str) -> bool {
        let len_before = self.projects.len();
        self.projects.retain(|p| p.name.as_path() != Path::new(name));
        self.projects.len() != len_before
    }

    pub fn find(&self, name: &str) -> Option<&ProjectEntry> {
        self.projects
            .iter()
            .find(|p| p.name.as_path() == Path::new(name))
    }

    pub fn all(&self) -> &[ProjectEntry] {
        &self.projects
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn resolve_all(&self, workspace: &Workspace) -> Vec<ResolvedProject> {
        self.projects.iter().map(|p| p.resolve(workspace)).collect()
    }

    /// Keep sets for the two scan roots: (git directories, object directories).
    pub fn keep_sets(&self, workspace: &Workspace) -> (KeepSet, KeepSet) {
        let mut project_keep = KeepSet::new();
        let mut object_keep = KeepSet::new();
        for project in self.resolve_all(workspace) {
            project_keep.insert(project.gitdir);
            object_keep.insert(project.objdir);
        }
        (project_keep, object_keep)
    }

    /// Map each object directory to the names of the projects using it.
    pub fn objdir_users(&self, workspace: &Workspace) -> BTreeMap<PathBuf, BTreeSet<String>> {
        let mut users: BTreeMap<PathBuf, BTreeSet<String>> = BTreeMap::new();
        for project in self.resolve_all(workspace) {
            users.entry(project.objdir).or_default().insert(project.name);
        }
        users
    }
}
