//! Gc command handler

use anyhow::Result;

use reposweep::application::{GcOptions, GcRequest};
use reposweep::domain::ports::RegistryRepository;
use reposweep::infrastructure::{TomlRegistryRepository, WorkspaceLock};
use reposweep::presentation::{create_gc_use_case, ConfirmMode};
use reposweep::{SweepError, Workspace};

use crate::ui::context::UiContext;
use crate::ui::json::emit_event;
use crate::ui::json::events::{CompleteEvent, StartEvent};
use crate::ui::views::gc::{render_gc_result, ConsoleGcSink, JsonGcSink};

pub fn cmd_gc(workspace: &Workspace, ui: &UiContext, yes: bool, dry_run: bool) -> Result<i32> {
    let _lock = WorkspaceLock::acquire(&workspace.lock_path())?;

    let registry = TomlRegistryRepository::with_path(workspace.registry_path())
        .load()
        .map_err(SweepError::from)?;
    let request = GcRequest::from_registry(workspace, &registry);
    let options = GcOptions::new().with_dry_run(dry_run);

    let mode = ConfirmMode::select(yes, ui.json, ui.caps.stdin_is_tty);
    let use_case = create_gc_use_case(mode);

    if ui.json {
        emit_event(&StartEvent::new("gc").with_repodir(workspace.repodir()))?;
        let result = use_case.run(&request, &options, &JsonGcSink::stdout());
        let complete = if result.is_success() {
            CompleteEvent::success("gc")
        } else {
            CompleteEvent::failure("gc")
        };
        emit_event(
            &complete
                .with_outcome(result.outcome.label())
                .with_counts(result.deleted.len(), result.failed.len()),
        )?;
        return Ok(result.outcome.exit_code());
    }

    let result = use_case.run(&request, &options, &ConsoleGcSink::new(*ui, dry_run));

    if !ui.is_quiet() || result.has_failures() {
        if let Some(summary) = render_gc_result(&result, ui.color, ui.unicode) {
            print!("{}", summary);
        }
    }

    Ok(result.outcome.exit_code())
}
