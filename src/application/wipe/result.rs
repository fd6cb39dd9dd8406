//! Wipe result

use std::path::PathBuf;

/// What a wipe removed
#[derive(Debug, Clone, Default)]
pub struct WipeResult {
    /// Projects removed from the registry
    pub wiped: Vec<String>,
    /// Directories deleted, in deletion order
    pub deleted: Vec<PathBuf>,
    /// Shared object directories left in place
    pub kept_objdirs: Vec<PathBuf>,
}

impl WipeResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn deleted_count(&self) -> usize {
        self.deleted.len()
    }
}
