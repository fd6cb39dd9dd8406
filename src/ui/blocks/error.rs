use crate::ui::primitives::icon::Icon;
use crate::ui::widgets::r#box::{Box, BoxStyle};

/// Boxed error message with an optional fix hint
#[derive(Debug, Clone)]
pub struct ErrorBlock {
    message: String,
    context: Option<String>,
    fix: Option<String>,
}

impl ErrorBlock {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            context: None,
            fix: None,
        }
    }

    /// File or directory the error is about
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    pub fn with_fix(mut self, fix: impl Into<String>) -> Self {
        self.fix = Some(fix.into());
        self
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let title = format!(
            "{} ERROR",
            Icon::Error.colored(supports_color, supports_unicode)
        );
        let mut b = Box::with_title(title).style(BoxStyle::Error);

        if let Some(context) = &self.context {
            b.add_line(context.clone());
        }
        b.add_empty();
        b.add_line(self.message.clone());

        if let Some(fix) = &self.fix {
            b.add_empty();
            b.add_line(format!("FIX: {}", fix));
        }

        b.render(supports_color, supports_unicode)
    }
}
