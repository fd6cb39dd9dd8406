//! RegistryRepository port
//!
//! Persists the project registry at `.repo/projects.toml`.

use crate::domain::entities::Registry;
use std::path::PathBuf;

pub trait RegistryRepository {
    fn load(&self) -> Result<Registry, RegistryError>;
    fn save(&self, registry: &Registry) -> Result<(), RegistryError>;
    /// Remove projects by name under the registry lock. Returns the names removed.
    fn remove_projects(&self, names: &[String]) -> Result<Vec<String>, RegistryError>;
}

impl<T: RegistryRepository + ?Sized> RegistryRepository for &T {
    fn load(&self) -> Result<Registry, RegistryError> {
        (**self).load()
    }

    fn save(&self, registry: &Registry) -> Result<(), RegistryError> {
        (**self).save(registry)
    }

    fn remove_projects(&self, names: &[String]) -> Result<Vec<String>, RegistryError> {
        (**self).remove_projects(names)
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Failed to access registry: {message}")]
    AccessError { message: String },

    #[error("Failed to serialize registry: {message}")]
    SerializationError { message: String },

    #[error(
        "registry file corrupted: {path}\n  → Fix: restore the file or re-sync the workspace\n  → Details: {message}"
    )]
    Corrupted { path: PathBuf, message: String },

    #[error("invalid registry entry '{name}' in {path}: {message}")]
    InvalidEntry {
        path: PathBuf,
        name: String,
        message: String,
    },
}
