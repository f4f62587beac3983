use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use tracing::{debug, info};

use crate::application::dto::ListingRequest;
use crate::domain::entities::ListingReport;
use crate::domain::keybinding::{Action, Keybind};
use crate::infrastructure::demo::DEMO_LISTING_URL;
use crate::infrastructure::scheduler::TaskHandle;
use crate::presentation::commands::HasCommands;
use crate::presentation::events::EventHandler;
use crate::presentation::widgets::{Notice, ScoreBar, TextInput};

use super::context::{ScreenContext, ScreenTimer, TimerKind};
use super::utils::{button, centered_column, panel};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanState {
    Idle,
    Scanning,
    Done,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListingVerificationAction {
    None,
    Back,
    /// Scan started; the URL goes to the verification service.
    Verify(ListingRequest),
    Proceed,
}

pub struct ListingVerificationScreen {
    input: TextInput,
    state: ScanState,
    scan: Option<TaskHandle>,
    report: Option<ListingReport>,
    notice: Option<Notice>,
    ctx: ScreenContext,
}

impl ListingVerificationScreen {
    #[must_use]
    pub fn new(ctx: ScreenContext) -> Self {
        let mut input = TextInput::new(" Listing URL ")
            .placeholder("https://www.cars.com/listing/...")
            .accent(ctx.theme.accent);
        input.set_focused(true);

        Self {
            input,
            state: ScanState::Idle,
            scan: None,
            report: None,
            notice: None,
            ctx,
        }
    }

    #[must_use]
    pub const fn state(&self) -> ScanState {
        self.state
    }

    #[must_use]
    pub fn url(&self) -> &str {
        self.input.value()
    }

    #[must_use]
    pub const fn report(&self) -> Option<&ListingReport> {
        self.report.as_ref()
    }

    #[must_use]
    pub const fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    #[must_use]
    pub fn can_scan(&self) -> bool {
        self.state == ScanState::Idle && !self.input.value().trim().is_empty()
    }

    /// The URL field only takes keys before the scan starts.
    #[must_use]
    pub fn captures_text(&self) -> bool {
        self.state == ScanState::Idle
    }

    pub fn set_report(&mut self, report: ListingReport) {
        self.report = Some(report);
    }

    pub fn set_error(&mut self, message: &str) {
        self.notice = Some(Notice::error(format!(
            "Listing verification failed: {message}"
        )));
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> ListingVerificationAction {
        if EventHandler::is_back_event(&key) {
            return ListingVerificationAction::Back;
        }

        match self.state {
            ScanState::Idle => self.handle_idle_key(key),
            ScanState::Scanning => ListingVerificationAction::None,
            ScanState::Done if EventHandler::is_submit_event(&key) => {
                ListingVerificationAction::Proceed
            }
            ScanState::Done => ListingVerificationAction::None,
        }
    }

    pub fn handle_timer(&mut self, fired: &ScreenTimer) {
        if self.scan.as_ref().is_some_and(|h| h.owns(fired)) {
            self.scan = None;
            self.state = ScanState::Done;
            info!("Listing scan finished");
        }
    }

    fn handle_idle_key(&mut self, key: KeyEvent) -> ListingVerificationAction {
        if EventHandler::is_ctrl_char(&key, 'd') {
            self.input.set_value(DEMO_LISTING_URL);
            self.notice = None;
            return ListingVerificationAction::None;
        }

        if EventHandler::is_submit_event(&key) {
            if !self.can_scan() {
                self.notice = Some(Notice::warning("Paste a listing URL first"));
                return ListingVerificationAction::None;
            }

            let url = self.input.value().trim().to_string();
            debug!(url = %url, "Starting listing scan");
            self.scan = Some(
                self.ctx
                    .scheduler
                    .once(self.ctx.timing.listing_scan_delay(), TimerKind::ListingScan),
            );
            self.state = ScanState::Scanning;
            self.input.set_focused(false);
            self.notice = None;
            return ListingVerificationAction::Verify(ListingRequest::new(url));
        }

        if self.input.handle_edit_key(key) {
            self.notice = None;
        }
        ListingVerificationAction::None
    }

    fn result_lines(&self, report: &ListingReport) -> Vec<Line<'static>> {
        let theme = &self.ctx.theme;
        let mut lines = vec![
            Line::from(vec![
                Span::styled(
                    format!("{} verified", report.verified_count()),
                    Style::default().fg(theme.good).add_modifier(Modifier::BOLD),
                ),
                Span::raw("   "),
                Span::styled(
                    format!("{} flagged", report.flagged_count()),
                    Style::default()
                        .fg(theme.caution)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::default(),
        ];

        for check in &report.checks {
            let (icon, color) = if check.verified {
                ("✔", theme.good)
            } else {
                ("!", theme.caution)
            };
            lines.push(Line::from(vec![
                Span::styled(format!("{icon} "), Style::default().fg(color)),
                Span::styled(
                    check.label.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::styled(format!("  {}", check.listed), theme.dimmed_style),
            ]));
            if let Some(flag) = &check.flag {
                lines.push(Line::from(Span::styled(
                    format!("  {flag}"),
                    Style::default().fg(theme.caution),
                )));
            }
        }
        lines
    }
}

impl HasCommands for ListingVerificationScreen {
    fn get_commands(&self) -> Vec<Keybind> {
        let mut commands = vec![Keybind::new(
            KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE),
            Action::Back,
            "Back",
        )];

        match self.state {
            ScanState::Idle => {
                commands.push(Keybind::new(
                    KeyEvent::new(KeyCode::Char('d'), KeyModifiers::CONTROL),
                    Action::InsertDemo,
                    "Demo URL",
                ));
                if self.can_scan() {
                    commands.push(Keybind::new(
                        KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE),
                        Action::Scan,
                        "Scan Listing",
                    ));
                }
            }
            ScanState::Scanning => {}
            ScanState::Done => commands.push(Keybind::new(
                KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE),
                Action::Confirm,
                "View Report",
            )),
        }

        commands
    }
}

impl Widget for &ListingVerificationScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let theme = &self.ctx.theme;
        let column = centered_column(72, area);
        let [title_area, input_area, hint_area, score_area, results_area, action_area] =
            Layout::vertical([
                Constraint::Length(2),
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Length(2),
                Constraint::Fill(1),
                Constraint::Length(1),
            ])
            .areas(column);

        Paragraph::new(vec![
            Line::from(Span::styled("Listing Verification", theme.title_style)),
            Line::from(Span::styled(
                "Cross-check the seller's listing against vehicle records",
                theme.dimmed_style,
            )),
        ])
        .centered()
        .render(title_area, buf);

        (&self.input).render(input_area, buf);
        Paragraph::new(Span::styled(
            format!("Demo: {DEMO_LISTING_URL}"),
            theme.dimmed_style,
        ))
        .render(hint_area, buf);

        match (self.state, &self.report) {
            (ScanState::Idle, _) => {
                Paragraph::new(button("Scan Listing", self.can_scan(), self.can_scan(), theme))
                    .centered()
                    .render(action_area, buf);
            }
            (ScanState::Scanning, _) => {
                Paragraph::new("Scanning listing...")
                    .style(theme.title_style)
                    .centered()
                    .render(results_area, buf);
            }
            (ScanState::Done, Some(report)) => {
                let [score_row, _] =
                    Layout::vertical([Constraint::Length(1), Constraint::Length(1)])
                        .areas(score_area);
                ScoreBar::new("Listing Reliability", report.reliability_score, theme)
                    .render(score_row, buf);
                Paragraph::new(self.result_lines(report))
                    .block(panel("Verification Results", theme))
                    .render(results_area, buf);
                Paragraph::new(button("View Full Report", true, true, theme))
                    .centered()
                    .render(action_area, buf);
            }
            (ScanState::Done, None) => {
                Paragraph::new("No verification results available")
                    .style(theme.dimmed_style)
                    .centered()
                    .render(results_area, buf);
            }
        }
    }
}
