use std::borrow::Cow;

use crossterm::style::Stylize;
use unicode_width::UnicodeWidthStr;

use crate::ui::primitives::border::BorderSet;
use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoxStyle {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

/// Bordered panel. Rows grow the box unless a fixed content width is set, in
/// which case `add_wrapped` folds text to fit.
#[derive(Debug, Default, Clone)]
pub struct Box {
    title: Option<String>,
    content: Vec<String>,
    width: Option<usize>,
    style: BoxStyle,
}

impl Box {
    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    pub fn style(mut self, style: BoxStyle) -> Self {
        self.style = style;
        self
    }

    /// Fix the text column width (border and padding excluded).
    pub fn width(mut self, columns: usize) -> Self {
        self.width = Some(columns);
        self
    }

    pub fn add_line(&mut self, line: impl Into<String>) {
        let line = line.into();
        for part in line.lines() {
            self.content.push(part.to_string());
        }
    }

    /// Word-wrap `text` to the content width, prefixing every row with `indent`.
    pub fn add_wrapped(&mut self, text: &str, indent: usize) {
        let columns = self.width.unwrap_or(theme::CONTENT_WIDTH);
        let pad = " ".repeat(indent);
        for row in wrap_words(text, columns.saturating_sub(indent)) {
            self.content.push(format!("{}{}", pad, row));
        }
    }

    pub fn add_empty(&mut self) {
        self.content.push(String::new());
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let mut lines = Vec::new();
        if let Some(title) = &self.title {
            lines.push(title.as_str());
        }
        lines.extend(self.content.iter().map(String::as_str));

        let text_width = self
            .width
            .unwrap_or_else(|| lines.iter().map(|l| visible_width(l)).max().unwrap_or(0));
        // One space of padding on each side.
        let inner_width = text_width + 2;

        let set = BorderSet::for_terminal(supports_unicode);
        let paint = |s: &str| color_border(s, supports_color, self.style);
        let v = paint(set.vertical);

        let mut out = String::new();
        out.push_str(&paint(&set.top(inner_width)));
        out.push('\n');

        for line in lines {
            let fill = text_width.saturating_sub(visible_width(line));
            out.push_str(&v);
            out.push(' ');
            out.push_str(line);
            out.push_str(&" ".repeat(fill + 1));
            out.push_str(&v);
            out.push('\n');
        }

        out.push_str(&paint(&set.bottom(inner_width)));
        out.push('\n');
        out
    }
}

/// Greedy word wrap on whitespace. Words longer than `width` get their own row.
pub fn wrap_words(text: &str, width: usize) -> Vec<String> {
    let mut rows = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
        } else if current.width() + 1 + word.width() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            rows.push(std::mem::take(&mut current));
            current.push_str(word);
        }
    }

    if !current.is_empty() {
        rows.push(current);
    }
    rows
}

fn color_border(s: &str, supports_color: bool, style: BoxStyle) -> String {
    if !supports_color {
        return s.to_string();
    }

    let color = match style {
        BoxStyle::Info => theme::colors::INFO,
        BoxStyle::Success => theme::colors::SUCCESS,
        BoxStyle::Warning => theme::colors::WARNING,
        BoxStyle::Error => theme::colors::ERROR,
    };
    format!("{}", s.with(color))
}

pub fn visible_width(s: &str) -> usize {
    strip_ansi(s).width()
}

pub fn strip_ansi(s: &str) -> Cow<'_, str> {
    if !s.contains('\u{1b}') {
        return Cow::Borrowed(s);
    }

    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\u{1b}' {
            // ESC [ ... <final letter>
            if matches!(chars.peek(), Some('[') | Some(']')) {
                let _ = chars.next();
            }
            for next in chars.by_ref() {
                if next.is_ascii_alphabetic() {
                    break;
                }
            }
            continue;
        }
        out.push(c);
    }

    Cow::Owned(out)
}
