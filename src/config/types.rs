//! Configuration types

use std::path::{Component, Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::entities::{DEFAULT_OBJECTS_DIR, DEFAULT_PROJECTS_DIR};
use crate::domain::value_objects::SafePath;
use crate::error::SweepResult;

use super::loader::{self, ConfigWarning};

/// Scan layout
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GcConfig {
    /// Per-project git directories, relative to the repodir
    #[serde(default = "default_projects_dir")]
    pub projects_dir: PathBuf,

    /// Object storage, relative to the repodir
    #[serde(default = "default_objects_dir")]
    pub objects_dir: PathBuf,
}

impl Default for GcConfig {
    fn default() -> Self {
        Self {
            projects_dir: default_projects_dir(),
            objects_dir: default_objects_dir(),
        }
    }
}

impl GcConfig {
    /// Both scan dirs must stay inside the repodir and be disjoint.
    pub fn validate(&self) -> Result<(), String> {
        for (key, dir) in [
            ("projects_dir", &self.projects_dir),
            ("objects_dir", &self.objects_dir),
        ] {
            SafePath::new(dir).map_err(|e| {
                format!(
                    "gc.{key} '{}' must be a directory inside the repodir: {e}",
                    dir.display()
                )
            })?;
        }

        let projects = normalized(&self.projects_dir);
        let objects = normalized(&self.objects_dir);
        if projects.starts_with(&objects) || objects.starts_with(&projects) {
            return Err(format!(
                "gc.projects_dir '{}' and gc.objects_dir '{}' overlap",
                self.projects_dir.display(),
                self.objects_dir.display()
            ));
        }
        Ok(())
    }
}

fn normalized(dir: &Path) -> PathBuf {
    dir.components()
        .filter(|c| matches!(c, Component::Normal(_)))
        .collect()
}

fn default_projects_dir() -> PathBuf {
    PathBuf::from(DEFAULT_PROJECTS_DIR)
}

fn default_objects_dir() -> PathBuf {
    PathBuf::from(DEFAULT_OBJECTS_DIR)
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub verbosity: Verbosity,

    #[serde(default)]
    pub color: ColorMode,

    #[serde(default = "default_true")]
    pub unicode: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            verbosity: Verbosity::default(),
            color: ColorMode::default(),
            unicode: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "auto" => Some(ColorMode::Auto),
            "always" => Some(ColorMode::Always),
            "never" => Some(ColorMode::Never),
            _ => None,
        }
    }
}

/// Verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
    Debug,
}

impl Verbosity {
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "quiet" => Verbosity::Quiet,
            "verbose" => Verbosity::Verbose,
            "debug" => Verbosity::Debug,
            _ => Verbosity::Normal,
        }
    }

    /// `-v` counts: 1 = verbose, 2+ = debug. Zero leaves the level unchanged.
    pub fn raised_by(self, count: u8) -> Self {
        match count {
            0 => self,
            1 => self.max(Verbosity::Verbose),
            _ => Verbosity::Debug,
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub gc: GcConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> SweepResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> SweepResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Workspace config, then user config, then defaults; environment on top.
    pub fn load_layered(repodir: Option<&Path>) -> SweepResult<(Self, Vec<ConfigWarning>)> {
        loader::load_layered(repodir)
    }
}
