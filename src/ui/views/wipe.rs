//! Wipe command UI views

use std::io::{self, Write};
use std::sync::Mutex;

use crate::ui::blocks::summary::ResultSummary;
use crate::ui::context::UiContext;
use crate::ui::json::events::{DeletingEvent, ObjectDirKeptEvent};
use crate::ui::json::write_typed_event;
use crate::ui::primitives::icon::Icon;
use reposweep::application::WipeResult;
use reposweep::domain::ports::{WipeEvent, WipeEventSink};

/// One progress line, e.g. `Deleting git directory: /ws/.repo/projects/art.git`
pub fn render_wipe_event(event: &WipeEvent) -> Option<String> {
    match event {
        WipeEvent::Deleting { kind, path } => {
            Some(format!("Deleting {}: {}", kind.label(), path.display()))
        }
        WipeEvent::ObjectDirKept { path, users } => Some(format!(
            "Keeping shared objects directory: {} (used by {})",
            path.display(),
            users.join(", ")
        )),
        WipeEvent::Unregistered { .. } => None,
    }
}

pub fn render_wipe_result(
    result: &WipeResult,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut summary = ResultSummary::success("Wipe Complete");
    summary.add_stat("projects wiped", result.wiped.len());
    summary.add_stat("directories deleted", result.deleted_count());
    for kept in &result.kept_objdirs {
        summary.add_warning(format!("shared objects kept: {}", kept.display()));
    }
    summary.render(supports_color, supports_unicode)
}

pub struct ConsoleWipeSink {
    ui: UiContext,
}

impl ConsoleWipeSink {
    pub fn new(ui: UiContext) -> Self {
        Self { ui }
    }
}

impl WipeEventSink for ConsoleWipeSink {
    fn on_event(&self, event: WipeEvent) {
        if self.ui.is_quiet() {
            return;
        }
        if let Some(line) = render_wipe_event(&event) {
            let icon = match event {
                WipeEvent::ObjectDirKept { .. } => Icon::Warning,
                _ => Icon::Trash,
            };
            println!("{} {}", icon.colored(self.ui.color, self.ui.unicode), line);
        }
    }
}

pub struct JsonWipeSink {
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonWipeSink {
    pub fn stdout() -> Self {
        Self::with_writer(io::stdout())
    }

    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write<T: serde::Serialize>(&self, event: &T) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = write_typed_event(&mut *writer, event);
        }
    }
}

impl WipeEventSink for JsonWipeSink {
    fn on_event(&self, event: WipeEvent) {
        match event {
            WipeEvent::Deleting { kind, path } => {
                self.write(&DeletingEvent::new(kind.label(), &path))
            }
            WipeEvent::ObjectDirKept { path, users } => {
                self.write(&ObjectDirKeptEvent::new(&path, &users))
            }
            WipeEvent::Unregistered { .. } => {}
        }
    }
}
