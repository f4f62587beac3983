use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::domain::keybinding::{Action, Keybind};
use crate::presentation::commands::HasCommands;
use crate::presentation::events::EventHandler;
use crate::presentation::theme::Theme;

use super::utils::{button, centered_column};

const FEATURES: [(&str, &str); 3] = [
    ("Engine Health Analysis", "AI-powered sound diagnostics"),
    ("Listing Verification", "Detect inconsistencies instantly"),
    ("Comprehensive Reports", "Download and share results"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WelcomeAction {
    None,
    StartAudit,
    LearnMore,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Choice {
    #[default]
    StartAudit,
    LearnMore,
}

impl Choice {
    const fn toggle(self) -> Self {
        match self {
            Self::StartAudit => Self::LearnMore,
            Self::LearnMore => Self::StartAudit,
        }
    }
}

pub struct WelcomeScreen {
    selected: Choice,
    theme: Theme,
}

impl WelcomeScreen {
    #[must_use]
    pub fn new(theme: Theme) -> Self {
        Self {
            selected: Choice::default(),
            theme,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> WelcomeAction {
        if EventHandler::is_up_event(&key) || EventHandler::is_down_event(&key) {
            self.selected = self.selected.toggle();
            return WelcomeAction::None;
        }

        if EventHandler::is_submit_event(&key) {
            return match self.selected {
                Choice::StartAudit => WelcomeAction::StartAudit,
                Choice::LearnMore => WelcomeAction::LearnMore,
            };
        }

        WelcomeAction::None
    }
}

impl HasCommands for WelcomeScreen {
    fn get_commands(&self) -> Vec<Keybind> {
        vec![
            Keybind::new(
                KeyEvent::new(KeyCode::Down, KeyModifiers::NONE),
                Action::Navigate,
                "Move",
            )
            .with_key_display("↑↓"),
            Keybind::new(
                KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE),
                Action::Confirm,
                "Select",
            ),
        ]
    }
}

impl Widget for &WelcomeScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let column = centered_column(56, area);
        let [_, title_area, tagline_area, _, features_area, _, buttons_area, _] =
            Layout::vertical([
                Constraint::Fill(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(9),
                Constraint::Length(1),
                Constraint::Length(3),
                Constraint::Fill(1),
            ])
            .areas(column);

        Paragraph::new("AI-Powered Vehicle Auditor")
            .style(self.theme.title_style)
            .centered()
            .render(title_area, buf);
        Paragraph::new("Know a car before you buy it")
            .style(self.theme.dimmed_style)
            .centered()
            .render(tagline_area, buf);

        let mut feature_lines = Vec::new();
        for (title, detail) in FEATURES {
            feature_lines.push(Line::from(vec![
                Span::styled("● ", Style::default().fg(self.theme.accent)),
                Span::styled(title, Style::default().add_modifier(Modifier::BOLD)),
            ]));
            feature_lines.push(Line::from(Span::styled(
                format!("  {detail}"),
                self.theme.dimmed_style,
            )));
            feature_lines.push(Line::default());
        }
        Paragraph::new(feature_lines).render(features_area, buf);

        let buttons = vec![
            button(
                "Start Audit",
                self.selected == Choice::StartAudit,
                true,
                &self.theme,
            ),
            Line::default(),
            button(
                "Learn More",
                self.selected == Choice::LearnMore,
                true,
                &self.theme,
            ),
        ];
        Paragraph::new(buttons).centered().render(buttons_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::ui::context::test_support::render_text;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_enter_starts_audit_by_default() {
        let mut screen = WelcomeScreen::new(Theme::default());
        assert_eq!(screen.handle_key(key(KeyCode::Enter)), WelcomeAction::StartAudit);
    }

    #[test]
    fn test_move_then_learn_more() {
        let mut screen = WelcomeScreen::new(Theme::default());
        assert_eq!(screen.handle_key(key(KeyCode::Down)), WelcomeAction::None);
        assert_eq!(screen.handle_key(key(KeyCode::Enter)), WelcomeAction::LearnMore);

        screen.handle_key(key(KeyCode::Tab));
        assert_eq!(screen.handle_key(key(KeyCode::Enter)), WelcomeAction::StartAudit);
    }

    #[test]
    fn test_other_keys_do_nothing() {
        let mut screen = WelcomeScreen::new(Theme::default());
        assert_eq!(screen.handle_key(key(KeyCode::Esc)), WelcomeAction::None);
        assert_eq!(screen.handle_key(key(KeyCode::Char('x'))), WelcomeAction::None);
    }

    #[test]
    fn test_render_lists_features_and_actions() {
        let screen = WelcomeScreen::new(Theme::default());
        let text = render_text(|area, buf| (&screen).render(area, buf), 60, 24);

        assert!(text.contains("AI-Powered Vehicle Auditor"));
        assert!(text.contains("Listing Verification"));
        assert!(text.contains("▸ Start Audit"));
        assert!(text.contains("Learn More"));
    }
}
