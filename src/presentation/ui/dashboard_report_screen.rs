use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};
use tracing::info;

use crate::domain::entities::{Highlight, VehicleReport, Vin};
use crate::domain::keybinding::{Action, Keybind};
use crate::presentation::commands::HasCommands;
use crate::presentation::events::EventHandler;
use crate::presentation::theme::Theme;
use crate::presentation::widgets::{Notice, ScoreBar};

use super::utils::{button, button_row, centered_column, panel};

const UNAVAILABLE: &str = "not available in this build";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardAction {
    None,
    Back,
    GoHome,
}

pub struct DashboardReportScreen {
    vin: Option<Vin>,
    report: Option<VehicleReport>,
    notice: Option<Notice>,
    theme: Theme,
}

impl DashboardReportScreen {
    #[must_use]
    pub const fn new(theme: Theme, vin: Option<Vin>) -> Self {
        Self {
            vin,
            report: None,
            notice: None,
            theme,
        }
    }

    #[must_use]
    pub const fn report(&self) -> Option<&VehicleReport> {
        self.report.as_ref()
    }

    #[must_use]
    pub const fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn set_report(&mut self, report: VehicleReport) {
        self.report = Some(report);
    }

    pub fn set_error(&mut self, message: &str) {
        self.notice = Some(Notice::error(format!("Report unavailable: {message}")));
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> DashboardAction {
        if EventHandler::is_back_event(&key) {
            return DashboardAction::Back;
        }
        if EventHandler::is_submit_event(&key) {
            return DashboardAction::GoHome;
        }

        match EventHandler::plain_char(&key) {
            Some('d') => {
                info!("Report download requested");
                self.notice = Some(Notice::info(format!("Download is {UNAVAILABLE}")));
            }
            Some('s') => {
                info!("Report share requested");
                self.notice = Some(Notice::info(format!("Sharing is {UNAVAILABLE}")));
            }
            _ => {}
        }
        DashboardAction::None
    }

    fn banner(&self, report: &VehicleReport) -> Paragraph<'static> {
        let recommendation = report.recommendation();
        let color = self.theme.recommendation_color(recommendation);

        Paragraph::new(vec![
            Line::from(Span::styled(
                recommendation.label(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                format!("Overall score {}", report.overall_score()),
                self.theme.dimmed_style,
            )),
        ])
        .centered()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .border_style(Style::default().fg(color)),
        )
    }

    fn highlight_tile(&self, highlight: &Highlight, area: Rect, buf: &mut Buffer) {
        let color = self.theme.highlight_color(highlight.tone);
        Paragraph::new(vec![
            Line::from(Span::styled(highlight.label, self.theme.dimmed_style)),
            Line::from(Span::styled(
                highlight.value.clone(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )),
        ])
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(color)),
        )
        .render(area, buf);
    }
}

impl HasCommands for DashboardReportScreen {
    fn get_commands(&self) -> Vec<Keybind> {
        vec![
            Keybind::new(
                KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE),
                Action::Back,
                "Back",
            ),
            Keybind::new(
                KeyEvent::new(KeyCode::Char('d'), KeyModifiers::NONE),
                Action::Download,
                "Download",
            ),
            Keybind::new(
                KeyEvent::new(KeyCode::Char('s'), KeyModifiers::NONE),
                Action::Share,
                "Share",
            ),
            Keybind::new(
                KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE),
                Action::Confirm,
                "Start New Audit",
            ),
        ]
    }
}

impl Widget for &DashboardReportScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let theme = &self.theme;
        let column = centered_column(76, area);
        let [title_area, banner_area, scores_area, grid_area, action_area] =
            Layout::vertical([
                Constraint::Length(2),
                Constraint::Length(4),
                Constraint::Length(5),
                Constraint::Length(8),
                Constraint::Length(1),
            ])
            .areas(column);

        let vin = self.vin.as_ref().map_or("", Vin::as_str);
        let vehicle = self
            .report
            .as_ref()
            .map_or("Vehicle Report", |r| r.vehicle.description.as_str());
        Paragraph::new(vec![
            Line::from(Span::styled(vehicle.to_string(), theme.title_style)),
            Line::from(Span::styled(format!("VIN {vin}"), theme.dimmed_style)),
        ])
        .centered()
        .render(title_area, buf);

        let Some(report) = &self.report else {
            let waiting = if self.notice.is_some() {
                "No report available"
            } else {
                "Building report..."
            };
            Paragraph::new(waiting)
                .style(theme.dimmed_style)
                .centered()
                .render(banner_area, buf);
            Paragraph::new(button("Start New Audit", true, true, theme))
                .centered()
                .render(action_area, buf);
            return;
        };

        self.banner(report).render(banner_area, buf);

        let block = panel("Scores", theme);
        let inner = block.inner(scores_area);
        block.render(scores_area, buf);
        let [health_row, listing_row, overall_row] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(inner);
        ScoreBar::new("Mechanical Health", report.health_score, theme).render(health_row, buf);
        ScoreBar::new("Listing Reliability", report.listing_score, theme)
            .render(listing_row, buf);
        ScoreBar::new("Overall", report.overall_score(), theme).render(overall_row, buf);

        let [top, bottom] =
            Layout::vertical([Constraint::Length(4), Constraint::Length(4)]).areas(grid_area);
        let cells = [top, bottom].into_iter().flat_map(|row| {
            let [left, right] =
                Layout::horizontal([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)]).areas(row);
            [left, right]
        });
        for (highlight, cell) in report.highlights().iter().zip(cells) {
            self.highlight_tile(highlight, cell, buf);
        }

        Paragraph::new(button_row(
            [
                button("Download", false, true, theme),
                button("Share", false, true, theme),
                button("Start New Audit", true, true, theme),
            ],
            "  ",
        ))
        .centered()
        .render(action_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Score, VehicleInfo};
    use crate::presentation::ui::context::test_support::render_text;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn vin() -> Vin {
        Vin::parse("1HGBH41JXMN109186").unwrap()
    }

    fn report() -> VehicleReport {
        VehicleReport {
            vin: vin(),
            vehicle: VehicleInfo {
                description: "2020 Honda Accord EX-L".to_string(),
                title_status: "Clean".to_string(),
                accidents_on_record: 1,
            },
            health_score: Score::new(85),
            listing_score: Score::new(90),
        }
    }

    #[test]
    fn test_keys_map_to_actions() {
        let mut screen = DashboardReportScreen::new(Theme::default(), Some(vin()));
        assert_eq!(screen.handle_key(key(KeyCode::Esc)), DashboardAction::Back);
        assert_eq!(screen.handle_key(key(KeyCode::Enter)), DashboardAction::GoHome);
    }

    #[test]
    fn test_download_and_share_show_notice() {
        let mut screen = DashboardReportScreen::new(Theme::default(), Some(vin()));

        assert_eq!(screen.handle_key(key(KeyCode::Char('d'))), DashboardAction::None);
        assert_eq!(
            screen.notice().map(|n| n.message.as_str()),
            Some("Download is not available in this build")
        );

        screen.handle_key(key(KeyCode::Char('s')));
        assert_eq!(
            screen.notice().map(|n| n.message.as_str()),
            Some("Sharing is not available in this build")
        );
    }

    #[test]
    fn test_render_report() {
        let mut screen = DashboardReportScreen::new(Theme::default(), Some(vin()));
        screen.set_report(report());

        let text = render_text(|area, buf| (&screen).render(area, buf), 80, 24);
        assert!(text.contains("2020 Honda Accord EX-L"));
        assert!(text.contains("VIN 1HGBH41JXMN109186"));
        assert!(text.contains("Safe to Buy"));
        assert!(text.contains("88/100"));
        assert!(text.contains("Accident History"));
        assert!(text.contains("1 found"));
        assert!(text.contains("Download"));
        assert!(text.contains("Share"));
        assert!(text.contains("▸ Start New Audit"));
    }

    #[test]
    fn test_render_waiting() {
        let screen = DashboardReportScreen::new(Theme::default(), Some(vin()));
        let text = render_text(|area, buf| (&screen).render(area, buf), 80, 24);
        assert!(text.contains("Building report..."));
    }
}
