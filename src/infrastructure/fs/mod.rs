//! File system implementations

mod local;
mod lock;

pub use local::LocalTreeRemover;
pub use lock::WorkspaceLock;
