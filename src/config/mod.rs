//! Configuration module for reposweep
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (REPOSWEEP_*)
//! 3. Workspace config (.repo/reposweep.toml)
//! 4. User config (~/.config/reposweep/config.toml)
//! 5. Built-in defaults (lowest priority)
//!
//! Only the first config file found is read; files are not merged.

mod loader;
mod types;

pub use loader::{
    apply_env, user_config_path, ConfigWarning, ENV_COLOR, ENV_REPO_DIR, ENV_VERBOSITY,
};
pub use types::{ColorMode, Config, GcConfig, OutputConfig, Verbosity};
