use crossterm::style::Stylize;

use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Success,
    Error,
    Warning,
    Bullet,
    Predict,
    Package,
}

impl Icon {
    pub fn render(&self, supports_unicode: bool) -> &'static str {
        match (supports_unicode, self) {
            (true, Icon::Success) => theme::icons::SUCCESS,
            (true, Icon::Error) => theme::icons::ERROR,
            (true, Icon::Warning) => theme::icons::WARNING,
            (true, Icon::Bullet) => theme::icons::BULLET,
            (true, Icon::Predict) => theme::icons::PREDICT,
            (true, Icon::Package) => theme::icons::PACKAGE,
            (false, Icon::Success) => theme::icons_ascii::SUCCESS,
            (false, Icon::Error) => theme::icons_ascii::ERROR,
            (false, Icon::Warning) => theme::icons_ascii::WARNING,
            (false, Icon::Bullet) => theme::icons_ascii::BULLET,
            (false, Icon::Predict) => theme::icons_ascii::PREDICT,
            (false, Icon::Package) => theme::icons_ascii::PACKAGE,
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
            Icon::Warning => theme::colors::WARNING,
            Icon::Bullet => theme::colors::DIM,
            Icon::Predict | Icon::Package => theme::colors::INFO,
        };
        format!("{}", s.with(color))
    }
}
