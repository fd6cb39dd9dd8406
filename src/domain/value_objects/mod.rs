//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod path;
mod path_set;

pub use path::{PathError, SafePath};
pub use path_set::{DeleteSet, KeepSet, ScanRoot, REPO_DIR_SUFFIX};
