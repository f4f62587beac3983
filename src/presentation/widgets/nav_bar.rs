//! Bottom navigation bar.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::Line,
    widgets::{Paragraph, Widget},
};

use crate::domain::entities::{NavItem, Screen};
use crate::presentation::commands::CommandRegistry;
use crate::presentation::theme::Theme;

use super::footer_bar::FooterBar;

/// Home / Audit / History / Profile shortcuts with the active entry marked.
pub struct NavBar<'a> {
    current: Screen,
    registry: &'a CommandRegistry,
    theme: &'a Theme,
}

impl<'a> NavBar<'a> {
    #[must_use]
    pub const fn new(current: Screen, registry: &'a CommandRegistry, theme: &'a Theme) -> Self {
        Self {
            current,
            registry,
            theme,
        }
    }

    fn entry_text(&self, item: NavItem) -> String {
        match self.registry.nav_key(item) {
            Some(key) => format!("{} {}", FooterBar::format_key(&key), item.label()),
            None => item.label().to_string(),
        }
    }
}

impl Widget for NavBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        let columns = Layout::horizontal([Constraint::Ratio(1, 4); 4]).split(area);

        for (item, column) in NavItem::ALL.into_iter().zip(columns.iter()) {
            let style = if item.is_active(self.current) {
                self.theme.selection_style
            } else {
                self.theme.dimmed_style
            };
            let marker = if item.is_active(self.current) { "▸ " } else { "  " };

            Paragraph::new(Line::from(format!("{marker}{}", self.entry_text(item))))
                .style(style)
                .centered()
                .render(*column, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_line(current: Screen) -> (String, Buffer) {
        let registry = CommandRegistry::new();
        let theme = Theme::default();
        let area = Rect::new(0, 0, 80, 1);
        let mut buf = Buffer::empty(area);
        NavBar::new(current, &registry, &theme).render(area, &mut buf);
        let line = (0..80).map(|x| buf[(x, 0)].symbol().to_string()).collect();
        (line, buf)
    }

    #[test]
    fn test_all_entries_with_keys() {
        let (line, _) = render_line(Screen::VinEntry);
        for label in ["F1 Home", "F2 Audit", "F3 History", "F4 Profile"] {
            assert!(line.contains(label), "missing {label} in {line}");
        }
    }

    #[test]
    fn test_active_marker_follows_screen() {
        let (line, _) = render_line(Screen::EngineAnalysis);
        assert!(line.contains("▸ F2 Audit"));
        assert!(!line.contains("▸ F3 History"));

        let (line, _) = render_line(Screen::PastAudits);
        assert!(line.contains("▸ F3 History"));
        assert!(line.contains("▸ F4 Profile"));
    }
}
