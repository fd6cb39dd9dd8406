//! Wipe options

/// Options for the wipe command
#[derive(Debug, Clone, Default)]
pub struct WipeOptions {
    /// Project names, as registered
    pub projects: Vec<String>,
    /// Wipe even when the object directory is shared with another project
    pub force: bool,
}

impl WipeOptions {
    pub fn new(projects: Vec<String>) -> Self {
        Self {
            projects,
            force: false,
        }
    }

    pub fn with_force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }
}
