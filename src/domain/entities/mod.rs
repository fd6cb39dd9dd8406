//! Domain Entities
//!
//! - `Workspace` - Where the metadata lives and where each scan starts
//! - `Registry` - The registered projects, source of both keep sets

mod registry;
mod workspace;

pub use registry::{ProjectEntry, Registry, ResolvedProject};
pub use workspace::{Workspace, DEFAULT_OBJECTS_DIR, DEFAULT_PROJECTS_DIR, REPO_DIR_NAME};
