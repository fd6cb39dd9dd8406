//! Command handlers for the reposweep binary.

pub mod gc;
pub mod repo_dir;
pub mod wipe;

use anyhow::Result;

use reposweep::config::Config;
use reposweep::presentation::{Cli, Commands};
use reposweep::Workspace;

use crate::ui::context::UiContext;
use crate::ui::output::print_config_warnings;

/// Resolve the workspace, load config, then run the subcommand. Returns the exit code.
pub fn run(cli: Cli) -> Result<i32> {
    let cwd = std::env::current_dir()?;
    let repodir = repo_dir::resolve_repodir(cli.repo_dir.as_deref(), &cwd)?;

    let (config, warnings) = Config::load_layered(Some(&repodir))?;
    let ui = UiContext::new(cli.json, cli.verbose, cli.color, &config);
    print_config_warnings(&warnings, &ui);

    let workspace = Workspace::from_repodir(repodir).with_scan_dirs(
        config.gc.projects_dir.clone(),
        config.gc.objects_dir.clone(),
    );

    match cli.command {
        Commands::Gc { yes, dry_run } => gc::cmd_gc(&workspace, &ui, yes, dry_run),
        Commands::Wipe { force, projects } => wipe::cmd_wipe(&workspace, &ui, projects, force),
    }
}
