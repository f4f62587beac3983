use crate::presentation::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

pub struct HeaderBarStyle {
    pub background: Style,
    pub app_name: Style,
    pub version: Style,
    pub title: Style,
    pub vin: Style,
}

impl HeaderBarStyle {
    #[must_use]
    pub fn from_theme(theme: &Theme) -> Self {
        Self {
            app_name: Style::default()
                .bg(theme.accent)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            version: Style::default().bg(theme.accent_bg).fg(Color::White),
            title: theme.title_style,
            ..Self::default()
        }
    }
}

impl Default for HeaderBarStyle {
    fn default() -> Self {
        Self {
            background: Style::default(),
            app_name: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            version: Style::default().fg(Color::DarkGray),
            title: Style::default().add_modifier(Modifier::BOLD),
            vin: Style::default().fg(Color::Gray),
        }
    }
}

/// Top bar: application name, screen title and the VIN under audit.
pub struct HeaderBar<'a> {
    app_name: &'a str,
    version: &'a str,
    title: &'a str,
    vin: &'a str,
    style: HeaderBarStyle,
}

impl<'a> HeaderBar<'a> {
    #[must_use]
    pub fn new(app_name: &'a str, version: &'a str) -> Self {
        Self {
            app_name,
            version,
            title: "",
            vin: "",
            style: HeaderBarStyle::default(),
        }
    }

    #[must_use]
    pub const fn title(mut self, title: &'a str) -> Self {
        self.title = title;
        self
    }

    #[must_use]
    pub const fn vin(mut self, vin: &'a str) -> Self {
        self.vin = vin;
        self
    }

    #[must_use]
    pub const fn style(mut self, style: HeaderBarStyle) -> Self {
        self.style = style;
        self
    }
}

impl Widget for HeaderBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        for x in area.left()..area.right() {
            buf[(x, area.y)]
                .set_char(' ')
                .set_style(self.style.background);
        }

        let mut left = vec![
            Span::styled(
                format!(" {} ", self.app_name.to_uppercase()),
                self.style.app_name,
            ),
            Span::styled(format!(" v{} ", self.version), self.style.version),
        ];
        if !self.title.is_empty() {
            left.push(Span::raw("  "));
            left.push(Span::styled(self.title, self.style.title));
        }
        let left_line = Line::from(left);
        let left_width = u16::try_from(left_line.width()).unwrap_or(u16::MAX);
        Paragraph::new(left_line).render(Rect::new(area.x, area.y, area.width, 1), buf);

        if self.vin.is_empty() {
            return;
        }

        let vin_text = format!("VIN {} ", self.vin);
        let vin_width = u16::try_from(vin_text.len()).unwrap_or(u16::MAX);
        if vin_width < area.width.saturating_sub(left_width) {
            let right_area = Rect::new(area.right() - vin_width, area.y, vin_width, 1);
            Paragraph::new(Span::styled(vin_text, self.style.vin)).render(right_area, buf);
        }
    }
}
