use crate::domain::keybinding::Keybind;
use crate::presentation::theme::Theme;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

pub struct FooterBarStyle {
    pub background: Style,
    pub label_style: Style,
    pub key_style: Style,
}

impl FooterBarStyle {
    #[must_use]
    pub fn from_theme(theme: &Theme) -> Self {
        Self {
            label_style: Style::default()
                .bg(theme.accent)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            key_style: Style::default().bg(theme.accent_bg).fg(Color::White),
            ..Self::default()
        }
    }
}

impl Default for FooterBarStyle {
    fn default() -> Self {
        Self {
            background: Style::default(),
            label_style: Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            key_style: Style::default().fg(Color::White).bg(Color::DarkGray),
        }
    }
}

/// Key hints for the current screen.
pub struct FooterBar<'a> {
    keybindings: &'a [Keybind],
    style: FooterBarStyle,
}

impl<'a> FooterBar<'a> {
    #[must_use]
    pub fn new(keybindings: &'a [Keybind]) -> Self {
        Self {
            keybindings,
            style: FooterBarStyle::default(),
        }
    }

    #[must_use]
    pub const fn style(mut self, style: FooterBarStyle) -> Self {
        self.style = style;
        self
    }

    pub(crate) fn format_key(key: &KeyEvent) -> String {
        use std::fmt::Write;
        let mut s = String::new();
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            s.push_str("C-");
        }
        if key.modifiers.contains(KeyModifiers::ALT) {
            s.push_str("A-");
        }

        match key.code {
            KeyCode::Char(c) => s.push(c),
            KeyCode::Enter => s.push_str("Enter"),
            KeyCode::Esc => s.push_str("Esc"),
            KeyCode::Tab => s.push_str("Tab"),
            KeyCode::Up => s.push('↑'),
            KeyCode::Down => s.push('↓'),
            KeyCode::F(n) => {
                let _ = write!(s, "F{n}");
            }
            other => {
                let _ = write!(s, "{other:?}");
            }
        }
        s
    }

    fn build_spans(&self) -> Vec<Span<'_>> {
        let mut spans = Vec::new();

        for (i, binding) in self.keybindings.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" "));
            }

            spans.push(Span::styled(
                format!(" {} ", binding.label),
                self.style.label_style,
            ));

            let key_text = binding
                .key_display
                .as_deref()
                .map_or_else(|| Self::format_key(&binding.key), ToString::to_string);

            spans.push(Span::styled(format!(" {key_text} "), self.style.key_style));
        }

        spans
    }
}

impl Widget for FooterBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        for x in area.left()..area.right() {
            buf[(x, area.y)]
                .set_char(' ')
                .set_style(self.style.background);
        }

        let line = Line::from(self.build_spans());
        Paragraph::new(line).render(Rect::new(area.x, area.y, area.width, 1), buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::keybinding::Action;

    #[test]
    fn test_format_key() {
        assert_eq!(
            FooterBar::format_key(&KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL)),
            "C-s"
        );
        assert_eq!(
            FooterBar::format_key(&KeyEvent::new(KeyCode::F(2), KeyModifiers::NONE)),
            "F2"
        );
    }

    #[test]
    fn test_bindings_render_label_and_key() {
        let bindings = vec![
            Keybind::new(
                KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE),
                Action::Confirm,
                "Select",
            ),
            Keybind::new(
                KeyEvent::new(KeyCode::Up, KeyModifiers::NONE),
                Action::Navigate,
                "Move",
            )
            .with_key_display("Arrows"),
        ];
        let area = Rect::new(0, 0, 60, 1);
        let mut buf = Buffer::empty(area);
        FooterBar::new(&bindings).render(area, &mut buf);

        let line: String = (0..60).map(|x| buf[(x, 0)].symbol().to_string()).collect();
        assert!(line.contains("Select"));
        assert!(line.contains("Enter"));
        assert!(line.contains("Move"));
        assert!(line.contains("Arrows"));
    }
}
