//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - Tree removal and the workspace lock
//! - `repositories/` - Project registry persistence
//! - `prompt/` - Operator confirmation

pub mod fs;
pub mod prompt;
pub mod repositories;

pub use fs::{LocalTreeRemover, WorkspaceLock};
pub use prompt::{LineConfirmer, TerminalConfirmer};
pub use repositories::TomlRegistryRepository;
