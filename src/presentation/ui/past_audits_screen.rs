use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph, StatefulWidget, Widget},
};

use crate::domain::entities::{AuditRecord, Score};
use crate::domain::keybinding::{Action, Keybind};
use crate::presentation::commands::HasCommands;
use crate::presentation::events::EventHandler;
use crate::presentation::theme::Theme;
use crate::presentation::widgets::Notice;

use super::utils::{button, centered_column, panel};

const SETTINGS: [&str; 5] = [
    "Notifications",
    "Dark Mode",
    "Privacy & Security",
    "Terms of Service",
    "Help & Support",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PastAuditsAction {
    None,
    Back,
    StartNew,
}

pub struct PastAuditsScreen {
    audits: Option<Vec<AuditRecord>>,
    list_state: ListState,
    notice: Option<Notice>,
    theme: Theme,
}

impl PastAuditsScreen {
    #[must_use]
    pub fn new(theme: Theme) -> Self {
        Self {
            audits: None,
            list_state: ListState::default(),
            notice: None,
            theme,
        }
    }

    #[must_use]
    pub fn audits(&self) -> &[AuditRecord] {
        self.audits.as_deref().unwrap_or_default()
    }

    #[must_use]
    pub const fn selected(&self) -> Option<usize> {
        self.list_state.selected()
    }

    #[must_use]
    pub const fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn set_audits(&mut self, audits: Vec<AuditRecord>) {
        let selected = (!audits.is_empty()).then_some(0);
        self.audits = Some(audits);
        self.list_state.select(selected);
    }

    pub fn set_error(&mut self, message: &str) {
        self.audits = Some(Vec::new());
        self.notice = Some(Notice::error(format!("Could not load audits: {message}")));
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> PastAuditsAction {
        if EventHandler::is_back_event(&key) {
            return PastAuditsAction::Back;
        }
        if EventHandler::is_submit_event(&key) {
            return PastAuditsAction::StartNew;
        }

        let count = self.audits().len();
        if count == 0 {
            return PastAuditsAction::None;
        }

        let current = self.list_state.selected().unwrap_or(0);
        if matches!(key.code, KeyCode::Up | KeyCode::Char('k')) {
            self.list_state.select(Some(current.saturating_sub(1)));
        } else if matches!(key.code, KeyCode::Down | KeyCode::Char('j')) {
            self.list_state.select(Some((current + 1).min(count - 1)));
        }

        PastAuditsAction::None
    }

    fn score_span(&self, label: &str, score: Score) -> Span<'static> {
        Span::styled(
            format!("{label} {}", score.value()),
            Style::default().fg(self.theme.grade_color(score.grade())),
        )
    }

    fn audit_item(&self, audit: &AuditRecord) -> ListItem<'static> {
        let recommendation_color = self.theme.recommendation_color(audit.recommendation);
        ListItem::new(vec![
            Line::from(vec![
                Span::styled(
                    audit.vehicle.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw("  "),
                Span::styled(
                    audit.recommendation.label(),
                    Style::default().fg(recommendation_color),
                ),
            ]),
            Line::from(vec![
                Span::styled(
                    format!("{}  {}", audit.vin, audit.display_date()),
                    self.theme.dimmed_style,
                ),
                Span::raw("  "),
                self.score_span("Health", audit.health_score),
                Span::raw("  "),
                self.score_span("Listing", audit.listing_score),
            ]),
            Line::default(),
        ])
    }
}

impl HasCommands for PastAuditsScreen {
    fn get_commands(&self) -> Vec<Keybind> {
        vec![
            Keybind::new(
                KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE),
                Action::Back,
                "Back",
            ),
            Keybind::new(
                KeyEvent::new(KeyCode::Down, KeyModifiers::NONE),
                Action::Navigate,
                "Move",
            )
            .with_key_display("↑↓"),
            Keybind::new(
                KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE),
                Action::Confirm,
                "Start New Audit",
            ),
        ]
    }
}

impl Widget for &PastAuditsScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let theme = &self.theme;
        let column = centered_column(76, area);
        let [title_area, audits_area, settings_area, action_area] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Fill(1),
            Constraint::Length(7),
            Constraint::Length(1),
        ])
        .areas(column);

        Paragraph::new(vec![
            Line::from(Span::styled("Past Audits", theme.title_style)),
            Line::from(Span::styled(
                "Your recent vehicle audits and settings",
                theme.dimmed_style,
            )),
        ])
        .centered()
        .render(title_area, buf);

        let block = panel("Recent Audits", theme);
        match self.audits.as_deref() {
            None => Paragraph::new("Loading audits...")
                .style(theme.dimmed_style)
                .block(block)
                .render(audits_area, buf),
            Some([]) => Paragraph::new("No audits yet")
                .style(theme.dimmed_style)
                .block(block)
                .render(audits_area, buf),
            Some(audits) => {
                let items: Vec<ListItem> = audits.iter().map(|a| self.audit_item(a)).collect();
                let list = List::new(items).block(block).highlight_style(
                    Style::default().bg(theme.selection_style.bg.unwrap_or(Color::DarkGray)),
                );
                let mut state = self.list_state;
                StatefulWidget::render(list, audits_area, buf, &mut state);
            }
        }

        let settings: Vec<Line> = SETTINGS
            .iter()
            .map(|item| {
                Line::from(vec![
                    Span::raw(*item),
                    Span::styled("  ›", theme.dimmed_style),
                ])
            })
            .collect();
        Paragraph::new(settings)
            .block(panel("Settings", theme))
            .render(settings_area, buf);

        Paragraph::new(button("Start New Audit", true, true, theme))
            .centered()
            .render(action_area, buf);
    }
}
