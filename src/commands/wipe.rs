//! Wipe command handler

use anyhow::Result;

use reposweep::application::WipeOptions;
use reposweep::infrastructure::WorkspaceLock;
use reposweep::presentation::create_wipe_use_case;
use reposweep::Workspace;

use crate::ui::context::UiContext;
use crate::ui::json::emit_event;
use crate::ui::json::events::{CompleteEvent, StartEvent};
use crate::ui::views::wipe::{render_wipe_result, ConsoleWipeSink, JsonWipeSink};

pub fn cmd_wipe(
    workspace: &Workspace,
    ui: &UiContext,
    projects: Vec<String>,
    force: bool,
) -> Result<i32> {
    let _lock = WorkspaceLock::acquire(&workspace.lock_path())?;

    let use_case = create_wipe_use_case(workspace);
    let options = WipeOptions::new(projects).with_force(force);

    if ui.json {
        emit_event(&StartEvent::new("wipe").with_repodir(workspace.repodir()))?;
        let result = use_case.execute(workspace, &options, &JsonWipeSink::stdout())?;
        emit_event(&CompleteEvent::success("wipe").with_wiped(&result.wiped))?;
        return Ok(0);
    }

    let result = use_case.execute(workspace, &options, &ConsoleWipeSink::new(*ui))?;
    if !ui.is_quiet() {
        print!("{}", render_wipe_result(&result, ui.color, ui.unicode));
    }

    Ok(0)
}
