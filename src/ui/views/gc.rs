//! GC command UI views
//!
//! Console and NDJSON renderings of the gc event stream, plus the final summary.

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::ui::blocks::header::CommandHeader;
use crate::ui::blocks::summary::ResultSummary;
use crate::ui::blocks::warning::WarningBlock;
use crate::ui::context::UiContext;
use crate::ui::json::events::{DirDeletedEvent, DirFailedEvent, GcPlanEvent};
use crate::ui::json::write_typed_event;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use reposweep::application::{GcOutcome, GcResult};
use reposweep::domain::ports::{GcEvent, GcEventSink};

pub const PLAN_TITLE: &str = "Identified the following projects are no longer used:";
pub const DESTROY_WARNING: &str =
    "If you proceed, any local commits in those projects will be destroyed!";

pub fn render_gc_header(
    repodir: &Path,
    dry_run: bool,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let title = if dry_run {
        "reposweep gc (dry run)"
    } else {
        "reposweep gc"
    };
    let mut header = CommandHeader::new(Icon::Sweep, title);
    header.add("Repodir", repodir.display().to_string());
    header.render(supports_color, supports_unicode)
}

/// The deletion plan as printed before the confirmation prompt
pub fn render_gc_plan(paths: &[PathBuf], supports_color: bool) -> String {
    let mut out = ColoredText::warning(PLAN_TITLE)
        .bold()
        .render(supports_color);
    out.push('\n');
    for path in paths {
        out.push_str(&format!("  {}\n", path.display()));
    }
    out
}

pub fn render_destroy_warning(supports_color: bool, supports_unicode: bool) -> String {
    let mut block = WarningBlock::new("Local commits will be lost");
    block.add_line(DESTROY_WARNING);
    block.render(supports_color, supports_unicode)
}

/// Summary box after the run. `None` when there is nothing worth summarizing.
pub fn render_gc_result(
    result: &GcResult,
    supports_color: bool,
    supports_unicode: bool,
) -> Option<String> {
    match result.outcome {
        GcOutcome::NothingToClean | GcOutcome::Declined => None,
        GcOutcome::DryRun => {
            let mut summary = ResultSummary::success("Dry Run Complete");
            summary.add_stat("directories would be deleted", result.plan.len());
            summary.with_next_step("run `reposweep gc` to delete them");
            Some(summary.render(supports_color, supports_unicode))
        }
        GcOutcome::Completed => {
            let mut summary = if result.has_failures() {
                ResultSummary::partial("Cleanup Finished With Errors")
            } else {
                ResultSummary::success("Cleanup Complete")
            };
            summary.add_stat("directories deleted", result.deleted.len());
            if result.has_failures() {
                summary.add_stat("directories failed", result.failed.len());
                for failure in &result.failed {
                    summary.add_warning(format!("{}: {}", failure.path.display(), failure.error));
                }
            }
            Some(summary.render(supports_color, supports_unicode))
        }
    }
}

/// Human-readable gc output
pub struct ConsoleGcSink {
    ui: UiContext,
    dry_run: bool,
}

impl ConsoleGcSink {
    pub fn new(ui: UiContext, dry_run: bool) -> Self {
        Self { ui, dry_run }
    }
}

impl GcEventSink for ConsoleGcSink {
    fn on_event(&self, event: GcEvent) {
        let (color, unicode) = (self.ui.color, self.ui.unicode);
        match event {
            GcEvent::ScanStarted { repodir } => {
                if self.ui.is_quiet() {
                    return;
                }
                print!("{}", render_gc_header(&repodir, self.dry_run, color, unicode));
                println!("Scanning filesystem under {}...", repodir.display());
            }
            GcEvent::RootScanned {
                root,
                candidates,
                deletable,
                issues,
            } => {
                if !self.ui.is_verbose() {
                    return;
                }
                eprintln!(
                    "{} {}: {} candidates, {} unused",
                    Icon::Bullet.colored(color, unicode),
                    root.display(),
                    candidates,
                    deletable
                );
                // Unreadable entries were skipped, not fatal
                for issue in issues {
                    eprintln!("{} {}", Icon::Warning.colored(color, unicode), issue);
                }
            }
            GcEvent::NothingToClean => {
                if !self.ui.is_quiet() {
                    println!("Nothing to clean up.");
                }
            }
            GcEvent::PlanReady { paths } => {
                print!("{}", render_gc_plan(&paths, color));
                if !self.dry_run {
                    print!("{}", render_destroy_warning(color, unicode));
                }
                let _ = io::stdout().flush();
            }
            GcEvent::Declined => {
                eprintln!("Aborted. Nothing was deleted.");
            }
            GcEvent::DirDeleted { path } => {
                if self.ui.is_verbose() {
                    println!(
                        "{} Deleted {}",
                        Icon::Trash.colored(color, unicode),
                        path.display()
                    );
                }
            }
            GcEvent::DirFailed { path, error } => {
                eprintln!(
                    "{} Failed to delete {}: {}",
                    Icon::Error.colored(color, unicode),
                    path.display(),
                    error
                );
            }
            GcEvent::Completed { .. } => {}
        }
    }
}

/// NDJSON gc output. `start` and `complete` are written by the command.
pub struct JsonGcSink {
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonGcSink {
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

impl GcEventSink for JsonGcSink {
    fn on_event(&self, event: GcEvent) {
        match event {
            GcEvent::NothingToClean => self.write(&GcPlanEvent::new(&[])),
            GcEvent::PlanReady { paths } => self.write(&GcPlanEvent::new(&paths)),
            GcEvent::DirDeleted { path } => self.write(&DirDeletedEvent::new(&path)),
            GcEvent::DirFailed { path, error } => self.write(&DirFailedEvent::new(&path, &error)),
            GcEvent::ScanStarted { .. }
            | GcEvent::RootScanned { .. }
            | GcEvent::Declined
            | GcEvent::Completed { .. } => {}
        }
    }
}
