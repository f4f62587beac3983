use coolor::{Hsl, Rgb};
use ratatui::style::Color;

/// Converts between terminal colours and HSL.
pub struct ColorConverter;

impl ColorConverter {
    #[must_use]
    pub fn to_hsl(color: Color) -> Hsl {
        let (r, g, b) = match color {
            Color::Rgb(r, g, b) => (r, g, b),
            Color::Black => ansi_to_rgb(0),
            Color::Red => ansi_to_rgb(1),
            Color::Green => ansi_to_rgb(2),
            Color::Yellow => ansi_to_rgb(3),
            Color::Blue => ansi_to_rgb(4),
            Color::Magenta => ansi_to_rgb(5),
            Color::Cyan => ansi_to_rgb(6),
            Color::Gray => ansi_to_rgb(7),
            Color::DarkGray => ansi_to_rgb(8),
            Color::LightRed => ansi_to_rgb(9),
            Color::LightGreen => ansi_to_rgb(10),
            Color::LightYellow => ansi_to_rgb(11),
            Color::LightBlue => ansi_to_rgb(12),
            Color::LightMagenta => ansi_to_rgb(13),
            Color::LightCyan => ansi_to_rgb(14),
            Color::Indexed(i) => ansi_to_rgb(i),
            _ => (255, 255, 255),
        };

        Rgb::new(r, g, b).to_hsl()
    }

    #[must_use]
    pub fn to_ratatui(hsl: Hsl) -> Color {
        let rgb: Rgb = hsl.to_rgb();
        Color::Rgb(rgb.r, rgb.g, rgb.b)
    }

    /// Returns `color` with its saturation and lightness replaced.
    #[must_use]
    pub fn shade(color: Color, saturation: f32, lightness: f32) -> Color {
        let mut hsl = Self::to_hsl(color);
        hsl.s = saturation;
        hsl.l = lightness;
        Self::to_ratatui(hsl)
    }
}

fn ansi_to_rgb(i: u8) -> (u8, u8, u8) {
    const BASE: [(u8, u8, u8); 16] = [
        (0, 0, 0),
        (170, 0, 0),
        (0, 170, 0),
        (170, 85, 0),
        (0, 0, 170),
        (170, 0, 170),
        (0, 170, 170),
        (170, 170, 170),
        (85, 85, 85),
        (255, 85, 85),
        (85, 255, 85),
        (255, 255, 85),
        (85, 85, 255),
        (255, 85, 255),
        (85, 255, 255),
        (255, 255, 255),
    ];

    match i {
        0..=15 => BASE[usize::from(i)],
        16..=231 => {
            let i = i - 16;
            let map = |c: u8| if c == 0 { 0 } else { c * 40 + 55 };
            (map(i / 36), map((i / 6) % 6), map(i % 6))
        }
        232..=255 => {
            let v = (i - 232) * 10 + 8;
            (v, v, v)
        }
    }
}
