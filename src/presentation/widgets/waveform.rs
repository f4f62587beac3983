//! Cosmetic audio level bars.

use rand::Rng;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Color,
    widgets::Widget,
};

/// Number of bars.
pub const BAR_COUNT: usize = 24;
/// Resting bar height.
pub const MIN_HEIGHT: u64 = 4;
/// Exclusive upper bound of a bar height.
pub const MAX_HEIGHT: u64 = 32;

/// Bar heights driven by the recording refresh timer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Waveform {
    bars: [u64; BAR_COUNT],
}

impl Default for Waveform {
    fn default() -> Self {
        Self {
            bars: [MIN_HEIGHT; BAR_COUNT],
        }
    }
}

impl Waveform {
    /// Returns current heights.
    #[must_use]
    pub const fn bars(&self) -> &[u64; BAR_COUNT] {
        &self.bars
    }

    /// Fills every bar with a random height in `[MIN_HEIGHT, MAX_HEIGHT)`.
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for bar in &mut self.bars {
            *bar = rng.gen_range(MIN_HEIGHT..MAX_HEIGHT);
        }
    }

    /// Resets every bar to the resting height.
    pub fn reset(&mut self) {
        self.bars = [MIN_HEIGHT; BAR_COUNT];
    }

    /// Returns whether all bars rest.
    #[must_use]
    pub fn is_flat(&self) -> bool {
        self.bars.iter().all(|&bar| bar == MIN_HEIGHT)
    }
}

/// Renders a [`Waveform`] in one colour.
pub struct WaveformView<'a> {
    waveform: &'a Waveform,
    color: Color,
}

impl<'a> WaveformView<'a> {
    #[must_use]
    pub const fn new(waveform: &'a Waveform, color: Color) -> Self {
        Self { waveform, color }
    }
}

impl Widget for WaveformView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        let count = u16::try_from(BAR_COUNT).unwrap_or(u16::MAX);
        let step = if area.width >= count * 2 { 2 } else { 1 };
        let width = (count * step).min(area.width);
        let left = area.x + (area.width - width) / 2;
        let rows = u64::from(area.height);

        for (i, &bar) in self.waveform.bars().iter().enumerate() {
            let Ok(offset) = u16::try_from(i) else { break };
            let x = left + offset * step;
            if x >= left + width {
                break;
            }

            let filled = (bar * rows).div_ceil(MAX_HEIGHT).clamp(1, rows);
            let filled = u16::try_from(filled).unwrap_or(area.height);
            for y in (area.bottom() - filled)..area.bottom() {
                buf[(x, y)].set_symbol("█").set_fg(self.color);
            }
        }
    }
}
