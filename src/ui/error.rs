use reposweep::domain::ports::RegistryError;
use reposweep::SweepError;

use crate::ui::blocks::error::ErrorBlock;
use crate::ui::json::emit_event;
use crate::ui::json::events::ErrorEvent;

/// Stable machine-readable code for the `error` NDJSON event
pub fn error_code(err: &anyhow::Error) -> &'static str {
    match err.downcast_ref::<SweepError>() {
        Some(SweepError::WorkspaceNotFound { .. }) | Some(SweepError::RepoDirMissing { .. }) => {
            "workspace_not_found"
        }
        Some(SweepError::Io(_)) => "io",
        Some(SweepError::InvalidConfig { .. }) => "invalid_config",
        Some(SweepError::Registry(_)) => "registry",
        Some(SweepError::UnknownProject { .. }) => "unknown_project",
        Some(SweepError::SharedObjectDir { .. }) => "shared_object_dir",
        Some(SweepError::DeleteFailed { .. }) => "delete_failed",
        Some(SweepError::Lock { .. }) => "locked",
        None => "error",
    }
}

fn error_fix(err: &SweepError) -> Option<String> {
    match err {
        SweepError::WorkspaceNotFound { .. } => Some(
            "Pass --repo-dir or set REPOSWEEP_REPO_DIR".to_string(),
        ),
        SweepError::RepoDirMissing { .. } => {
            Some("Point --repo-dir at an existing .repo directory".to_string())
        }
        SweepError::InvalidConfig { file, .. } => {
            Some(format!("Fix or remove {}", file.display()))
        }
        SweepError::UnknownProject { .. } => {
            Some("Check the name against .repo/projects.toml".to_string())
        }
        SweepError::SharedObjectDir { .. } => {
            Some("Wipe every project sharing it together, or pass --force".to_string())
        }
        SweepError::Lock { .. } => {
            Some("Wait for the other run to finish, then try again".to_string())
        }
        SweepError::Registry(RegistryError::InvalidEntry { path, .. }) => {
            Some(format!("Correct the entry in {}", path.display()))
        }
        SweepError::Registry(_) | SweepError::Io(_) | SweepError::DeleteFailed { .. } => None,
    }
}

fn error_context(err: &SweepError) -> Option<String> {
    match err {
        SweepError::WorkspaceNotFound { start } => Some(start.display().to_string()),
        SweepError::InvalidConfig { file, .. } => Some(file.display().to_string()),
        SweepError::DeleteFailed { path, .. } | SweepError::Lock { path, .. } => {
            Some(path.display().to_string())
        }
        _ => None,
    }
}

pub fn format_error(err: &anyhow::Error, supports_color: bool, supports_unicode: bool) -> String {
    let Some(sweep) = err.downcast_ref::<SweepError>() else {
        return ErrorBlock::new(format!("{:#}", err)).render(supports_color, supports_unicode);
    };

    let mut block = ErrorBlock::new(sweep.to_string());
    if let Some(context) = error_context(sweep) {
        block = block.with_context(context);
    }
    if let Some(fix) = error_fix(sweep) {
        block = block.with_fix(fix);
    }
    block.render(supports_color, supports_unicode)
}

pub fn print_error(
    err: &anyhow::Error,
    command: &str,
    json: bool,
    supports_color: bool,
    supports_unicode: bool,
) {
    if json {
        let mut event = ErrorEvent::new(command, error_code(err), format!("{:#}", err));
        if let Some(fix) = err.downcast_ref::<SweepError>().and_then(error_fix) {
            event = event.with_help(fix);
        }
        let _ = emit_event(&event);
        return;
    }

    eprint!("{}", format_error(err, supports_color, supports_unicode));
}
