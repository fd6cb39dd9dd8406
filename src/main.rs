//! reposweep - garbage collector for workspace metadata directories
//!
//! Usage: reposweep <COMMAND>
//!
//! Commands:
//!   gc    Delete .git directories no registered project uses
//!   wipe  Remove projects and their git data

mod commands;
mod ui;

use clap::Parser;

use reposweep::config::Config;
use reposweep::presentation::Cli;

use crate::ui::context::UiContext;
use crate::ui::error::print_error;
use crate::ui::json::emit_event;
use crate::ui::json::events::CompleteEvent;

fn main() {
    let cli = Cli::parse();
    let command = cli.command.name();
    // Config is not loaded yet when resolution fails, so errors use defaults
    let fallback = UiContext::new(cli.json, cli.verbose, cli.color, &Config::default());

    match commands::run(cli) {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            print_error(&err, command, fallback.json, fallback.color, fallback.unicode);
            if fallback.json {
                let _ = emit_event(&CompleteEvent::failure(command));
            }
            std::process::exit(1);
        }
    }
}
