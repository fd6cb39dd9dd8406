//! Wipe Use Case

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use crate::domain::entities::{ResolvedProject, Workspace};
use crate::domain::ports::{DirKind, RegistryRepository, TreeRemover, WipeEvent, WipeEventSink};
use crate::error::{SweepError, SweepResult};

use super::options::WipeOptions;
use super::result::WipeResult;

pub struct WipeUseCase<RR, R>
where
    RR: RegistryRepository,
    R: TreeRemover,
{
    registry_repo: RR,
    remover: R,
}

impl<RR, R> WipeUseCase<RR, R>
where
    RR: RegistryRepository,
    R: TreeRemover,
{
    pub fn new(registry_repo: RR, remover: R) -> Self {
        Self {
            registry_repo,
            remover,
        }
    }

    /// Wipe the projects named in `options`.
    ///
    /// Every name is checked and every sharing conflict is reported before the
    /// first directory is touched. A deletion failure stops the wipe.
    pub fn execute(
        &self,
        workspace: &Workspace,
        options: &WipeOptions,
        events: &dyn WipeEventSink,
    ) -> SweepResult<WipeResult> {
        let registry = self.registry_repo.load()?;

        let mut targets: Vec<ResolvedProject> = Vec::new();
        for name in &options.projects {
            if targets.iter().any(|t| &t.name == name) {
                continue;
            }
            let entry = registry
                .find(name)
                .ok_or_else(|| SweepError::UnknownProject { name: name.clone() })?;
            targets.push(entry.resolve(workspace));
        }

        let wiping: BTreeSet<String> = targets.iter().map(|t| t.name.clone()).collect();
        let users = registry.objdir_users(workspace);

        let mut objdirs_to_delete: BTreeSet<PathBuf> = BTreeSet::new();
        let mut result = WipeResult::new();

        for target in &targets {
            let others: Vec<String> = users
                .get(&target.objdir)
                .map(|names| names.difference(&wiping).cloned().collect())
                .unwrap_or_default();

            if others.is_empty() {
                objdirs_to_delete.insert(target.objdir.clone());
                continue;
            }
            if !options.force {
                return Err(SweepError::SharedObjectDir {
                    project: target.name.clone(),
                    other: others[0].clone(),
                });
            }
            if !result.kept_objdirs.contains(&target.objdir) {
                events.on_event(WipeEvent::ObjectDirKept {
                    path: target.objdir.clone(),
                    users: others,
                });
                result.kept_objdirs.push(target.objdir.clone());
            }
        }

        for target in &targets {
            self.delete_if_exists(DirKind::Worktree, &target.worktree, events, &mut result)?;
            self.delete_if_exists(DirKind::GitDir, &target.gitdir, events, &mut result)?;
        }
        for objdir in &objdirs_to_delete {
            self.delete_if_exists(DirKind::ObjectDir, objdir, events, &mut result)?;
        }

        let names: Vec<String> = wiping.into_iter().collect();
        result.wiped = self.registry_repo.remove_projects(&names)?;
        events.on_event(WipeEvent::Unregistered {
            names: result.wiped.clone(),
        });

        Ok(result)
    }

    fn delete_if_exists(
        &self,
        kind: DirKind,
        path: &Path,
        events: &dyn WipeEventSink,
        result: &mut WipeResult,
    ) -> SweepResult<()> {
        if !path.exists() {
            return Ok(());
        }
        events.on_event(WipeEvent::Deleting {
            kind,
            path: path.to_path_buf(),
        });
        self.remover
            .remove_tree(path)
            .map_err(|e| SweepError::DeleteFailed {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
        result.deleted.push(path.to_path_buf());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{ProjectEntry, Registry};
    use crate::domain::ports::{NoopWipeSink, RegistryError, RemoveError, RemoveResult};
    use crate::domain::value_objects::SafePath;
    use std::cell::RefCell;
    use std::fs;
    use tempfile::{tempdir, TempDir};

    struct MemoryRegistryRepo {
        registry: RefCell<Registry>,
    }

    impl RegistryRepository for MemoryRegistryRepo {
        fn load(&self) -> Result<Registry, RegistryError> {
            Ok(self.registry.borrow().clone())
        }

        fn save(&self, registry: &Registry) -> Result<(), RegistryError> {
            *self.registry.borrow_mut() = registry.clone();
            Ok(())
        }

        fn remove_projects(&self, names: &[String]) -> Result<Vec<String>, RegistryError> {
            let mut registry = self.registry.borrow_mut();
            Ok(names
                .iter()
                .filter(|name| registry.remove(name))
                .cloned()
                .collect())
        }
    }

    /// Removes for real, except for paths it was told to refuse
    #[derive(Default)]
    struct DiskRemover {
        refuse: Option<PathBuf>,
    }

    impl TreeRemover for DiskRemover {
        fn remove_tree(&self, path: &Path) -> RemoveResult<()> {
            if self.refuse.as_deref() == Some(path) {
                return Err(RemoveError::PermissionDenied(path.to_path_buf()));
            }
            fs::remove_dir_all(path).map_err(|e| RemoveError::from_io(path, e))
        }
    }

    fn entry(name: &str, path: &str) -> ProjectEntry {
        ProjectEntry::new(SafePath::new(name).unwrap(), SafePath::new(path).unwrap())
    }

    /// Lays out every project directory on disk and returns the workspace.
    fn setup(registry: &Registry) -> (TempDir, Workspace) {
        let dir = tempdir().unwrap();
        let workspace = Workspace::from_repodir(dir.path().join(".repo"));
        for project in registry.resolve_all(&workspace) {
            fs::create_dir_all(&project.worktree).unwrap();
            fs::create_dir_all(&project.gitdir).unwrap();
            fs::create_dir_all(&project.objdir).unwrap();
        }
        (dir, workspace)
    }

    fn repo(registry: Registry) -> MemoryRegistryRepo {
        MemoryRegistryRepo {
            registry: RefCell::new(registry),
        }
    }

    #[test]
    fn wipes_all_three_directories_and_unregisters() {
        let mut registry = Registry::new();
        registry.upsert(entry("platform/build", "build"));
        registry.upsert(entry("platform/art", "art"));
        let (_dir, workspace) = setup(&registry);
        let build = registry.find("platform/build").unwrap().resolve(&workspace);

        let repo = repo(registry);
        let use_case = WipeUseCase::new(&repo, DiskRemover::default());
        let result = use_case
            .execute(
                &workspace,
                &WipeOptions::new(vec!["platform/build".to_string()]),
                &NoopWipeSink,
            )
            .unwrap();

        assert_eq!(result.wiped, vec!["platform/build".to_string()]);
        assert_eq!(
            result.deleted,
            vec![build.worktree.clone(), build.gitdir.clone(), build.objdir.clone()]
        );
        assert!(!build.worktree.exists());
        assert!(!build.gitdir.exists());
        assert!(!build.objdir.exists());
        assert!(repo.registry.borrow().find("platform/build").is_none());
        assert!(repo.registry.borrow().find("platform/art").is_some());
    }

    #[test]
    fn unknown_project_is_rejected_before_deleting() {
        let mut registry = Registry::new();
        registry.upsert(entry("platform/build", "build"));
        let (_dir, workspace) = setup(&registry);
        let build = registry.find("platform/build").unwrap().resolve(&workspace);

        let use_case = WipeUseCase::new(repo(registry), DiskRemover::default());
        let err = use_case
            .execute(
                &workspace,
                &WipeOptions::new(vec!["platform/build".to_string(), "nope".to_string()]),
                &NoopWipeSink,
            )
            .unwrap_err();

        assert!(matches!(err, SweepError::UnknownProject { ref name } if name == "nope"));
        assert!(build.worktree.exists());
    }

    #[test]
    fn shared_objdir_without_force_fails_untouched() {
        let mut registry = Registry::new();
        registry.upsert(entry("kernel-a", "kernel/a").with_objdir("project-objects/kernel.git"));
        registry.upsert(entry("kernel-b", "kernel/b").with_objdir("project-objects/kernel.git"));
        let (_dir, workspace) = setup(&registry);
        let a = registry.find("kernel-a").unwrap().resolve(&workspace);

        let use_case = WipeUseCase::new(repo(registry), DiskRemover::default());
        let err = use_case
            .execute(
                &workspace,
                &WipeOptions::new(vec!["kernel-a".to_string()]),
                &NoopWipeSink,
            )
            .unwrap_err();

        match err {
            SweepError::SharedObjectDir { project, other } => {
                assert_eq!(project, "kernel-a");
                assert_eq!(other, "kernel-b");
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(a.worktree.exists());
        assert!(a.gitdir.exists());
    }

    #[test]
    fn force_keeps_shared_objdir() {
        let mut registry = Registry::new();
        registry.upsert(entry("kernel-a", "kernel/a").with_objdir("project-objects/kernel.git"));
        registry.upsert(entry("kernel-b", "kernel/b").with_objdir("project-objects/kernel.git"));
        let (_dir, workspace) = setup(&registry);
        let a = registry.find("kernel-a").unwrap().resolve(&workspace);

        let use_case = WipeUseCase::new(repo(registry), DiskRemover::default());
        let result = use_case
            .execute(
                &workspace,
                &WipeOptions::new(vec!["kernel-a".to_string()]).with_force(true),
                &NoopWipeSink,
            )
            .unwrap();

        assert!(!a.worktree.exists());
        assert!(!a.gitdir.exists());
        assert!(a.objdir.exists());
        assert_eq!(result.kept_objdirs, vec![a.objdir]);
    }

    #[test]
    fn wiping_every_user_of_shared_objdir_deletes_it() {
        let mut registry = Registry::new();
        registry.upsert(entry("kernel-a", "kernel/a").with_objdir("project-objects/kernel.git"));
        registry.upsert(entry("kernel-b", "kernel/b").with_objdir("project-objects/kernel.git"));
        let (_dir, workspace) = setup(&registry);
        let a = registry.find("kernel-a").unwrap().resolve(&workspace);

        let use_case = WipeUseCase::new(repo(registry), DiskRemover::default());
        let result = use_case
            .execute(
                &workspace,
                &WipeOptions::new(vec!["kernel-a".to_string(), "kernel-b".to_string()]),
                &NoopWipeSink,
            )
            .unwrap();

        assert!(!a.objdir.exists());
        assert!(result.kept_objdirs.is_empty());
        assert_eq!(result.wiped.len(), 2);
    }

    #[test]
    fn missing_directories_are_skipped() {
        let mut registry = Registry::new();
        registry.upsert(entry("platform/build", "build"));
        let dir = tempdir().unwrap();
        let workspace = Workspace::from_repodir(dir.path().join(".repo"));

        let use_case = WipeUseCase::new(repo(registry), DiskRemover::default());
        let result = use_case
            .execute(
                &workspace,
                &WipeOptions::new(vec!["platform/build".to_string()]),
                &NoopWipeSink,
            )
            .unwrap();

        assert!(result.deleted.is_empty());
        assert_eq!(result.wiped, vec!["platform/build".to_string()]);
    }

    #[test]
    fn delete_failure_aborts_and_keeps_registry() {
        let mut registry = Registry::new();
        registry.upsert(entry("platform/build", "build"));
        let (_dir, workspace) = setup(&registry);
        let build = registry.find("platform/build").unwrap().resolve(&workspace);

        let repo = repo(registry);
        let remover = DiskRemover {
            refuse: Some(build.gitdir.clone()),
        };
        let use_case = WipeUseCase::new(&repo, remover);
        let err = use_case
            .execute(
                &workspace,
                &WipeOptions::new(vec!["platform/build".to_string()]),
                &NoopWipeSink,
            )
            .unwrap_err();

        assert!(matches!(err, SweepError::DeleteFailed { ref path, .. } if *path == build.gitdir));
        assert!(repo.registry.borrow().find("platform/build").is_some());
    }
}
