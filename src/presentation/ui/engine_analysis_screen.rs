use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use crate::domain::entities::{EngineAnalysis, FindingStatus};
use crate::domain::keybinding::{Action, Keybind};
use crate::presentation::commands::HasCommands;
use crate::presentation::events::EventHandler;
use crate::presentation::theme::Theme;
use crate::presentation::widgets::{Notice, ScoreBar};

use super::utils::{button, centered_column, panel};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineAnalysisAction {
    None,
    Back,
    Proceed,
}

pub struct EngineAnalysisScreen {
    analysis: Option<EngineAnalysis>,
    notice: Option<Notice>,
    theme: Theme,
}

impl EngineAnalysisScreen {
    #[must_use]
    pub const fn new(theme: Theme, analysis: Option<EngineAnalysis>) -> Self {
        Self {
            analysis,
            notice: None,
            theme,
        }
    }

    #[must_use]
    pub const fn analysis(&self) -> Option<&EngineAnalysis> {
        self.analysis.as_ref()
    }

    #[must_use]
    pub const fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn set_analysis(&mut self, analysis: EngineAnalysis) {
        self.analysis = Some(analysis);
        self.notice = None;
    }

    pub fn set_error(&mut self, message: &str) {
        self.notice = Some(Notice::error(format!("Engine analysis failed: {message}")));
    }

    pub fn handle_key(&self, key: KeyEvent) -> EngineAnalysisAction {
        if EventHandler::is_back_event(&key) {
            EngineAnalysisAction::Back
        } else if EventHandler::is_submit_event(&key) {
            EngineAnalysisAction::Proceed
        } else {
            EngineAnalysisAction::None
        }
    }

    fn finding_lines(&self, analysis: &EngineAnalysis) -> Vec<Line<'static>> {
        let mut lines = Vec::with_capacity(analysis.findings.len() * 2);
        for finding in &analysis.findings {
            let color = self.theme.finding_color(finding.status);
            let icon = match finding.status {
                FindingStatus::Good => "✔",
                FindingStatus::Caution => "!",
                FindingStatus::Problem => "✘",
            };
            lines.push(Line::from(vec![
                Span::styled(format!("{icon} "), Style::default().fg(color)),
                Span::styled(
                    finding.label.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw("  "),
                Span::styled(
                    format!("[{}]", finding.status.label()),
                    Style::default().fg(color),
                ),
            ]));
            lines.push(Line::from(Span::styled(
                format!("  {}", finding.detail),
                self.theme.dimmed_style,
            )));
        }
        lines
    }
}

impl HasCommands for EngineAnalysisScreen {
    fn get_commands(&self) -> Vec<Keybind> {
        vec![
            Keybind::new(
                KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE),
                Action::Back,
                "Back",
            ),
            Keybind::new(
                KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE),
                Action::Confirm,
                "Verify Listing",
            ),
        ]
    }
}

impl Widget for &EngineAnalysisScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let theme = &self.theme;
        let column = centered_column(72, area);
        let [title_area, score_area, summary_area, findings_area, action_area] =
            Layout::vertical([
                Constraint::Length(2),
                Constraint::Length(2),
                Constraint::Length(3),
                Constraint::Fill(1),
                Constraint::Length(1),
            ])
            .areas(column);

        Paragraph::new(vec![
            Line::from(Span::styled("Engine Health Analysis", theme.title_style)),
            Line::from(Span::styled(
                "Results from the recorded engine sound",
                theme.dimmed_style,
            )),
        ])
        .centered()
        .render(title_area, buf);

        let Some(analysis) = &self.analysis else {
            let waiting = if self.notice.is_some() {
                "No analysis available"
            } else {
                "Waiting for analysis results..."
            };
            Paragraph::new(waiting)
                .style(theme.dimmed_style)
                .centered()
                .render(findings_area, buf);
            return;
        };

        let grade = analysis.overall_score.grade();
        let [bar_area, grade_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(score_area);
        ScoreBar::new("Overall Health", analysis.overall_score, theme).render(bar_area, buf);
        Paragraph::new(Span::styled(
            grade.label(),
            Style::default()
                .fg(theme.grade_color(grade))
                .add_modifier(Modifier::BOLD),
        ))
        .right_aligned()
        .render(grade_area, buf);

        Paragraph::new(analysis.summary.as_str())
            .wrap(Wrap { trim: true })
            .render(summary_area, buf);

        Paragraph::new(self.finding_lines(analysis))
            .block(panel("Findings", theme))
            .render(findings_area, buf);

        Paragraph::new(button("Proceed to Listing Verification", true, true, theme))
            .centered()
            .render(action_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Finding, Score};
    use crate::presentation::ui::context::test_support::render_text;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn analysis() -> EngineAnalysis {
        EngineAnalysis {
            overall_score: Score::new(85),
            summary: "Engine sounds healthy overall".to_string(),
            findings: vec![
                Finding::new("Engine Block", FindingStatus::Good, "No knocking detected"),
                Finding::new("Exhaust System", FindingStatus::Caution, "Minor rattle"),
            ],
        }
    }

    #[test]
    fn test_keys_map_to_actions() {
        let screen = EngineAnalysisScreen::new(Theme::default(), None);
        assert_eq!(screen.handle_key(key(KeyCode::Esc)), EngineAnalysisAction::Back);
        assert_eq!(screen.handle_key(key(KeyCode::Enter)), EngineAnalysisAction::Proceed);
        assert_eq!(screen.handle_key(key(KeyCode::Char('x'))), EngineAnalysisAction::None);
    }

    #[test]
    fn test_set_analysis_clears_error() {
        let mut screen = EngineAnalysisScreen::new(Theme::default(), None);
        screen.set_error("service down");
        assert!(screen.notice().is_some());

        screen.set_analysis(analysis());
        assert!(screen.notice().is_none());
        assert_eq!(screen.analysis(), Some(&analysis()));
    }

    #[test]
    fn test_render_waiting() {
        let screen = EngineAnalysisScreen::new(Theme::default(), None);
        let text = render_text(|area, buf| (&screen).render(area, buf), 80, 20);
        assert!(text.contains("Waiting for analysis results..."));
    }

    #[test]
    fn test_render_findings_with_grade() {
        let screen = EngineAnalysisScreen::new(Theme::default(), Some(analysis()));
        let text = render_text(|area, buf| (&screen).render(area, buf), 80, 24);
        assert!(text.contains("85/100"));
        assert!(text.contains("Good"));
        assert!(text.contains("[Caution]"));
        assert!(text.contains("Minor rattle"));
        assert!(text.contains("Proceed to Listing Verification"));
    }
}
