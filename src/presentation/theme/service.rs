use super::adapter::ColorConverter;
use crate::domain::entities::{FindingStatus, Grade, HighlightTone, Recommendation};
use ratatui::style::{Color, Modifier, Style};
use std::str::FromStr;

const GOOD: Color = Color::Rgb(34, 197, 94);
const CAUTION: Color = Color::Rgb(234, 179, 8);
const DANGER: Color = Color::Rgb(239, 68, 68);
const INFO: Color = Color::Rgb(59, 130, 246);

#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub accent: Color,
    pub accent_bg: Color,
    pub selection_style: Style,
    pub dimmed_style: Style,
    pub base_style: Style,
    pub title_style: Style,
    pub good: Color,
    pub caution: Color,
    pub danger: Color,
    pub info: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_color(GOOD)
    }
}

impl Theme {
    pub fn new(accent_color_str: &str) -> Self {
        Self::from_color(parse_color(accent_color_str))
    }

    #[must_use]
    pub fn from_color(accent: Color) -> Self {
        let accent_bg = ColorConverter::shade(accent, 0.5, 0.08);
        let selection_bg = ColorConverter::shade(accent, 0.3, 0.2);

        Self {
            accent,
            accent_bg,
            selection_style: Style::default()
                .bg(selection_bg)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            dimmed_style: Style::default().fg(Color::DarkGray),
            base_style: Style::default().fg(Color::Reset),
            title_style: Style::default().fg(accent).add_modifier(Modifier::BOLD),
            good: GOOD,
            caution: CAUTION,
            danger: DANGER,
            info: INFO,
        }
    }

    #[must_use]
    pub const fn grade_color(&self, grade: Grade) -> Color {
        match grade {
            Grade::Good => self.good,
            Grade::Fair => self.caution,
            Grade::Poor => self.danger,
        }
    }

    #[must_use]
    pub const fn finding_color(&self, status: FindingStatus) -> Color {
        match status {
            FindingStatus::Good => self.good,
            FindingStatus::Caution => self.caution,
            FindingStatus::Problem => self.danger,
        }
    }

    #[must_use]
    pub const fn recommendation_color(&self, recommendation: Recommendation) -> Color {
        match recommendation {
            Recommendation::SafeToBuy => self.good,
            Recommendation::ProceedWithCaution => self.caution,
            Recommendation::NotRecommended => self.danger,
        }
    }

    #[must_use]
    pub const fn highlight_color(&self, tone: HighlightTone) -> Color {
        match tone {
            HighlightTone::Good => self.good,
            HighlightTone::Info => self.info,
            HighlightTone::Caution => self.caution,
        }
    }
}

fn parse_color(s: &str) -> Color {
    if s.starts_with('#')
        && let Some((r, g, b)) = parse_hex_color(s)
    {
        return Color::Rgb(r, g, b);
    }

    if let Ok(c) = Color::from_str(s) {
        return c;
    }

    match s.to_lowercase().as_str() {
        "emerald" => Color::Rgb(16, 185, 129),
        "orange" => Color::Indexed(208),
        _ => Color::Green,
    }
}

fn parse_hex_color(s: &str) -> Option<(u8, u8, u8)> {
    let s = s.trim_start_matches('#');

    if !s.is_ascii() {
        return None;
    }

    let channel = |hex: &str| u8::from_str_radix(hex, 16).ok();

    match s.len() {
        6 => Some((channel(&s[0..2])?, channel(&s[2..4])?, channel(&s[4..6])?)),
        3 => {
            let doubled: String = s.chars().flat_map(|c| [c, c]).collect();
            parse_hex_color(&doubled)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_color() {
        assert_eq!(parse_color("Red"), Color::Red);
        assert_eq!(parse_color("blue"), Color::Blue);
        assert_eq!(parse_color("#10b981"), Color::Rgb(16, 185, 129));
        assert_eq!(parse_color("#0f0"), Color::Rgb(0, 255, 0));
        assert_eq!(parse_color("Emerald"), Color::Rgb(16, 185, 129));
        assert_eq!(parse_color("Invalid"), Color::Green);
        assert_eq!(parse_color("#12"), Color::Green);
    }

    #[test]
    fn test_grade_colors() {
        let theme = Theme::default();
        assert_eq!(theme.grade_color(Grade::Good), theme.good);
        assert_eq!(theme.grade_color(Grade::Fair), theme.caution);
        assert_eq!(theme.grade_color(Grade::Poor), theme.danger);
        assert_eq!(
            theme.recommendation_color(Recommendation::NotRecommended),
            theme.danger
        );
    }

    #[test]
    fn test_accent_background_is_dark() {
        let theme = Theme::new("#10b981");
        let hsl = ColorConverter::to_hsl(theme.accent_bg);
        assert!(hsl.l < 0.15);
    }
}
