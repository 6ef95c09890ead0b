use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::theme;
use crate::ui::widgets::r#box::{Box, BoxStyle};

/// Framed error with an optional remediation hint.
#[derive(Debug, Clone)]
pub struct ErrorBlock {
    message: String,
    suggestion: Option<String>,
}

impl ErrorBlock {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            suggestion: None,
        }
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let title = format!(
            "{} {}",
            Icon::Error.colored(supports_color, supports_unicode),
            ColoredText::error("ERROR").bold().render(supports_color)
        );
        let mut b = Box::with_title(title)
            .style(BoxStyle::Error)
            .width(theme::CONTENT_WIDTH);

        b.add_empty();
        b.add_wrapped(&self.message, 0);

        if let Some(suggestion) = &self.suggestion {
            b.add_empty();
            b.add_line(ColoredText::info("Suggestion:").render(supports_color));
            b.add_wrapped(suggestion, 4);
        }

        b.render(supports_color, supports_unicode)
    }
}
