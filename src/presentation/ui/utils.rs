use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding};

use crate::presentation::theme::Theme;

/// Returns a centered column of at most `max_width` cells.
#[must_use]
pub fn centered_column(max_width: u16, r: Rect) -> Rect {
    let [_, column, _] = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Max(max_width),
        Constraint::Fill(1),
    ])
    .areas(r);
    column
}

/// Formats whole seconds as `m:ss`.
#[must_use]
pub fn format_elapsed(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

/// Bordered panel used for screen sections.
#[must_use]
pub fn panel<'a>(title: &'a str, theme: &Theme) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme.dimmed_style)
        .title(Span::styled(format!(" {title} "), theme.title_style))
        .padding(Padding::horizontal(1))
}

/// A selectable button label.
#[must_use]
pub fn button<'a>(label: &'a str, selected: bool, enabled: bool, theme: &Theme) -> Line<'a> {
    let style = if !enabled {
        theme.dimmed_style.add_modifier(Modifier::CROSSED_OUT)
    } else if selected {
        theme.selection_style
    } else {
        Style::default().fg(theme.accent)
    };
    let marker = if selected && enabled { "▸" } else { " " };

    Line::from(vec![
        Span::raw(marker),
        Span::styled(format!(" {label} "), style),
    ])
}

/// Joins buttons into one line separated by `gap`.
#[must_use]
pub fn button_row<'a>(buttons: impl IntoIterator<Item = Line<'a>>, gap: &'a str) -> Line<'a> {
    let mut spans = Vec::new();
    for (i, button) in buttons.into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(gap));
        }
        spans.extend(button.spans);
    }
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_elapsed() {
        assert_eq!(format_elapsed(0), "0:00");
        assert_eq!(format_elapsed(9), "0:09");
        assert_eq!(format_elapsed(75), "1:15");
        assert_eq!(format_elapsed(600), "10:00");
    }

    #[test]
    fn test_centered_column() {
        let area = Rect::new(0, 0, 100, 10);
        let column = centered_column(40, area);
        assert_eq!(column.width, 40);
        assert_eq!(column.x, 30);

        let narrow = centered_column(40, Rect::new(0, 0, 20, 10));
        assert_eq!(narrow.width, 20);
    }

    #[test]
    fn test_button_marker() {
        let theme = Theme::default();
        assert_eq!(button("Go", true, true, &theme).to_string(), "▸ Go ");
        assert_eq!(button("Go", true, false, &theme).to_string(), "  Go ");
    }

    #[test]
    fn test_button_row_joins_with_gap() {
        let theme = Theme::default();
        let row = button_row(
            [
                button("Scan", false, true, &theme),
                button("Go", true, true, &theme),
            ],
            "  ",
        );
        assert_eq!(row.to_string(), "  Scan   ▸ Go ");
        assert_eq!(button_row(Vec::<Line>::new(), " ").to_string(), "");
    }
}
