//! Labelled score gauge.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Gauge, Paragraph, Widget},
};

use crate::domain::entities::Score;
use crate::presentation::theme::Theme;

/// One row: label, gauge filled to the score, then `n/100`.
pub struct ScoreBar<'a> {
    label: &'a str,
    score: Score,
    theme: &'a Theme,
}

impl<'a> ScoreBar<'a> {
    #[must_use]
    pub const fn new(label: &'a str, score: Score, theme: &'a Theme) -> Self {
        Self {
            label,
            score,
            theme,
        }
    }
}

impl Widget for ScoreBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let color = self.theme.grade_color(self.score.grade());
        let [label_area, gauge_area, value_area] = Layout::horizontal([
            Constraint::Length(22),
            Constraint::Fill(1),
            Constraint::Length(8),
        ])
        .areas(area);

        Paragraph::new(self.label).render(label_area, buf);

        Gauge::default()
            .gauge_style(Style::default().fg(color))
            .use_unicode(true)
            .label("")
            .ratio(self.score.ratio())
            .render(gauge_area, buf);

        Paragraph::new(self.score.to_string())
            .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
            .right_aligned()
            .render(value_area, buf);
    }
}
