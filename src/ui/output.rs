use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;
use reposweep::config::ConfigWarning;

pub fn format_config_warning(warning: &ConfigWarning, supports_unicode: bool) -> String {
    let icon = Icon::Warning.render(supports_unicode);
    let mut out = match warning.line {
        Some(line) => format!(
            "{} Unknown config key '{}' in {}:{}",
            icon,
            warning.key,
            warning.file.display(),
            line
        ),
        None => format!(
            "{} Unknown config key '{}' in {}",
            icon,
            warning.key,
            warning.file.display()
        ),
    };
    if let Some(suggestion) = &warning.suggestion {
        out.push_str(&format!("\n   Did you mean '{}'?", suggestion));
    }
    out
}

/// Config warnings go to stderr, so they never mix with NDJSON on stdout.
pub fn print_config_warnings(warnings: &[ConfigWarning], ui: &UiContext) {
    for warning in warnings {
        eprintln!("{}", format_config_warning(warning, ui.unicode));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn warning_names_file_line_and_suggestion() {
        let warning = ConfigWarning {
            key: "colr".to_string(),
            file: PathBuf::from("/ws/.repo/reposweep.toml"),
            line: Some(3),
            suggestion: Some("color".to_string()),
        };
        assert_eq!(
            format_config_warning(&warning, false),
            "[WARN] Unknown config key 'colr' in /ws/.repo/reposweep.toml:3\n   Did you mean 'color'?"
        );
    }
}
