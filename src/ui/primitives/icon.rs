use crossterm::style::Stylize;

use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Success,
    Error,
    Warning,
    Arrow,
    Bullet,
    Sweep,
    Trash,
}

impl Icon {
    pub fn render(&self, supports_unicode: bool) -> &'static str {
        if supports_unicode {
            match self {
                Icon::Success => theme::icons::SUCCESS,
                Icon::Error => theme::icons::ERROR,
                Icon::Warning => theme::icons::WARNING,
                Icon::Arrow => theme::icons::ARROW,
                Icon::Bullet => theme::icons::BULLET,
                Icon::Sweep => theme::icons::SWEEP,
                Icon::Trash => theme::icons::TRASH,
            }
        } else {
            match self {
                Icon::Success => theme::icons_ascii::SUCCESS,
                Icon::Error => theme::icons_ascii::ERROR,
                Icon::Warning => theme::icons_ascii::WARNING,
                Icon::Arrow => theme::icons_ascii::ARROW,
                Icon::Bullet => theme::icons_ascii::BULLET,
                Icon::Sweep => theme::icons_ascii::SWEEP,
                Icon::Trash => theme::icons_ascii::TRASH,
            }
        }
    }

    pub fn colored(&self, supports_color: bool, supports_unicode: bool) -> String {
        let s = self.render(supports_unicode);
        if !supports_color {
            return s.to_string();
        }
        let color = match self {
            Icon::Success => theme::colors::SUCCESS,
            Icon::Error => theme::colors::ERROR,
            Icon::Warning | Icon::Trash => theme::colors::WARNING,
            Icon::Arrow | Icon::Bullet => theme::colors::DIM,
            Icon::Sweep => theme::colors::INFO,
        };
        format!("{}", s.with(color))
    }
}
