//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! Global flags (--json, --color, --verbose, --repo-dir) are inherited by all subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::{ColorMode, ENV_REPO_DIR};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

impl From<ColorWhen> for ColorMode {
    fn from(value: ColorWhen) -> Self {
        match value {
            ColorWhen::Auto => ColorMode::Auto,
            ColorWhen::Always => ColorMode::Always,
            ColorWhen::Never => ColorMode::Never,
        }
    }
}

/// reposweep - garbage collector for workspace metadata directories
#[derive(Parser, Debug)]
#[command(name = "reposweep")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output NDJSON events instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Workspace metadata directory (default: nearest .repo above the current directory)
    #[arg(long, global = true, env = ENV_REPO_DIR, value_name = "PATH")]
    pub repo_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Delete .git directories no registered project uses
    Gc {
        /// Delete without asking for confirmation
        #[arg(short, long)]
        yes: bool,

        /// List what would be deleted and stop
        #[arg(long)]
        dry_run: bool,
    },

    /// Remove projects from the worktree and their git data from the repodir
    Wipe {
        /// Wipe even when the object directory is shared with other projects
        #[arg(short, long)]
        force: bool,

        /// Project names, as registered
        #[arg(required = true, value_name = "PROJECT")]
        projects: Vec<String>,
    },
}

impl Commands {
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Gc { .. } => "gc",
            Commands::Wipe { .. } => "wipe",
        }
    }
}
