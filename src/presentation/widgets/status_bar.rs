//! Status line widget.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

/// Status severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    /// Informational.
    Info,
    /// Success.
    Success,
    /// Warning.
    Warning,
    /// Error.
    Error,
}

impl StatusLevel {
    /// Returns color for level.
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Self::Info => Color::Cyan,
            Self::Success => Color::Green,
            Self::Warning => Color::Yellow,
            Self::Error => Color::Red,
        }
    }
}

/// A one-line message shown under the screen body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Message text.
    pub message: String,
    /// Severity.
    pub level: StatusLevel,
}

impl Notice {
    /// Creates info notice.
    #[must_use]
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: StatusLevel::Info,
        }
    }

    /// Creates success notice.
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: StatusLevel::Success,
        }
    }

    /// Creates warning notice.
    #[must_use]
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: StatusLevel::Warning,
        }
    }

    /// Creates error notice.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: StatusLevel::Error,
        }
    }
}

/// Status bar widget: notice on the left, context on the right.
#[derive(Debug, Clone, Default)]
pub struct StatusBar<'a> {
    notice: Option<&'a Notice>,
    right: &'a str,
}

impl<'a> StatusBar<'a> {
    /// Creates status bar for an optional notice.
    #[must_use]
    pub const fn new(notice: Option<&'a Notice>) -> Self {
        Self { notice, right: "" }
    }

    /// Sets right-aligned content.
    #[must_use]
    pub const fn right(mut self, content: &'a str) -> Self {
        self.right = content;
        self
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        let width = usize::from(area.width);
        let mut spans = Vec::new();
        let mut used = 0;

        if let Some(notice) = self.notice {
            let style = Style::default()
                .fg(notice.level.color())
                .add_modifier(Modifier::BOLD);
            let text = format!(" {}", notice.message);
            used = text.width();
            spans.push(Span::styled(text, style));
        }

        if !self.right.is_empty() {
            let right = format!("{} ", self.right);
            let padding = width.saturating_sub(used + right.width());
            if padding > 0 {
                spans.push(Span::raw(" ".repeat(padding)));
                spans.push(Span::styled(right, Style::default().fg(Color::DarkGray)));
            }
        }

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_line(bar: StatusBar<'_>, width: u16) -> String {
        let area = Rect::new(0, 0, width, 1);
        let mut buf = Buffer::empty(area);
        bar.render(area, &mut buf);
        (0..width).map(|x| buf[(x, 0)].symbol().to_string()).collect()
    }

    #[test]
    fn test_notice_and_right_content() {
        let notice = Notice::warning("Scan in progress");
        let line = render_line(StatusBar::new(Some(&notice)).right("VIN 1HG"), 40);

        assert!(line.starts_with(" Scan in progress"));
        assert!(line.ends_with("VIN 1HG "));
    }

    #[test]
    fn test_right_content_dropped_when_too_narrow() {
        let notice = Notice::info("A long status message");
        let line = render_line(StatusBar::new(Some(&notice)).right("context"), 24);
        assert!(!line.contains("context"));
    }

    #[test]
    fn test_levels() {
        assert_eq!(Notice::error("x").level, StatusLevel::Error);
        assert_eq!(Notice::success("x").level.color(), Color::Green);
    }
}
