//! TOML Registry Repository
//!
//! Persists the project registry at `.repo/projects.toml`.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use fs2::FileExt;
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;

use crate::domain::entities::{ProjectEntry, Registry};
use crate::domain::ports::{RegistryError, RegistryRepository};
use crate::domain::value_objects::SafePath;

#[derive(Debug, Clone, Serialize, Deserialize)]
struct TomlProjectEntry {
    name: String,
    path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    gitdir: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    objdir: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct TomlRegistry {
    #[serde(default = "default_version")]
    version: u32,
    #[serde(default)]
    projects: Vec<TomlProjectEntry>,
}

fn default_version() -> u32 {
    1
}

pub struct TomlRegistryRepository {
    path: PathBuf,
}

impl TomlRegistryRepository {
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn lock_path(&self) -> PathBuf {
        self.path.with_extension("lock")
    }

    /// Run `f` while holding the exclusive registry lock.
    fn with_lock<T>(
        &self,
        f: impl FnOnce() -> Result<T, RegistryError>,
    ) -> Result<T, RegistryError> {
        let lock_path = self.lock_path();
        if let Some(parent) = lock_path.parent() {
            fs::create_dir_all(parent).map_err(access_error)?;
        }

        let lock_file = fs::File::create(&lock_path).map_err(access_error)?;
        lock_file.lock_exclusive().map_err(access_error)?;

        let result = f();

        let _ = lock_file.unlock();
        result
    }

    fn load_from_disk(&self) -> Result<Registry, RegistryError> {
        if !self.path.exists() {
            return Ok(Registry::new());
        }

        let content = fs::read_to_string(&self.path).map_err(access_error)?;

        let toml_reg: TomlRegistry =
            toml::from_str(&content).map_err(|e| RegistryError::Corrupted {
                path: self.path.clone(),
                message: e.to_string(),
            })?;

        from_toml(&self.path, toml_reg)
    }

    /// Write to a temp file beside the registry, then rename over it.
    fn save_to_disk(&self, registry: &Registry) -> Result<(), RegistryError> {
        let parent = self
            .path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        fs::create_dir_all(&parent).map_err(access_error)?;

        let content = toml::to_string_pretty(&to_toml(registry)).map_err(|e| {
            RegistryError::SerializationError {
                message: e.to_string(),
            }
        })?;

        let mut tmp = NamedTempFile::new_in(&parent).map_err(access_error)?;
        tmp.write_all(content.as_bytes()).map_err(access_error)?;
        tmp.persist(&self.path)
            .map_err(|e| access_error(e.error))?;

        Ok(())
    }
}

impl RegistryRepository for TomlRegistryRepository {
    fn load(&self) -> Result<Registry, RegistryError> {
        self.load_from_disk()
    }

    fn save(&self, registry: &Registry) -> Result<(), RegistryError> {
        self.with_lock(|| self.save_to_disk(registry))
    }

    fn remove_projects(&self, names: &[String]) -> Result<Vec<String>, RegistryError> {
        self.with_lock(|| {
            let mut registry = self.load_from_disk()?;
            let removed: Vec<String> = names
                .iter()
                .filter(|name| registry.remove(name))
                .cloned()
                .collect();
            if !removed.is_empty() {
                self.save_to_disk(&registry)?;
            }
            Ok(removed)
        })
    }
}

fn access_error(e: std::io::Error) -> RegistryError {
    RegistryError::AccessError {
        message: e.to_string(),
    }
}

fn from_toml(path: &Path, toml_registry: TomlRegistry) -> Result<Registry, RegistryError> {
    let invalid = |name: &str, message: String| RegistryError::InvalidEntry {
        path: path.to_path_buf(),
        name: name.to_string(),
        message,
    };

    let mut registry = Registry::new();
    registry.version = toml_registry.version;
    for p in toml_registry.projects {
        let name = SafePath::new(&p.name).map_err(|e| invalid(&p.name, format!("name: {e}")))?;
        let worktree =
            SafePath::new(&p.path).map_err(|e| invalid(&p.name, format!("path: {e}")))?;
        registry.projects.push(ProjectEntry {
            name,
            path: worktree,
            gitdir: p.gitdir,
            objdir: p.objdir,
        });
    }
    Ok(registry)
}

fn to_toml(registry: &Registry) -> TomlRegistry {
    TomlRegistry {
        version: registry.version,
        projects: registry
            .projects
            .iter()
            .map(|p| TomlProjectEntry {
                name: p.name.to_string(),
                path: p.path.to_string(),
                gitdir: p.gitdir.clone(),
                objdir: p.objdir.clone(),
            })
            .collect(),
    }
}
