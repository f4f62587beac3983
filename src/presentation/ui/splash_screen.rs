use std::time::Duration;

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::Text,
    widgets::{Gauge, Paragraph, Widget},
};
use tachyonfx::{Effect, Interpolation, fx};
use tracing::debug;

use crate::infrastructure::scheduler::TaskHandle;

use super::context::{ScreenContext, ScreenTimer, TimerKind};

const LOGO_TEXT: &str = "
████████╗███╗   ███╗
╚══██╔══╝████╗ ████║
   ██║   ██╔████╔██║
   ██║   ██║╚██╔╝██║
   ██║   ██║ ╚═╝ ██║
   ╚═╝   ╚═╝     ╚═╝

T R U E M I L E A G E";

const PROGRESS_MAX: u8 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplashAction {
    None,
    Complete,
}

pub struct SplashScreen {
    progress: u8,
    tick: Option<TaskHandle>,
    finish: Option<TaskHandle>,
    intro_effect: Option<Effect>,
    pending_duration: Duration,
    ctx: ScreenContext,
}

impl SplashScreen {
    #[must_use]
    pub fn new(ctx: ScreenContext) -> Self {
        let tick = ctx
            .scheduler
            .every(ctx.timing.splash_tick(), TimerKind::SplashTick);
        let intro_effect = ctx
            .animations
            .then(|| fx::coalesce((800, Interpolation::CircOut)));

        Self {
            progress: 0,
            tick: Some(tick),
            finish: None,
            intro_effect,
            pending_duration: Duration::ZERO,
            ctx,
        }
    }

    #[must_use]
    pub const fn progress(&self) -> u8 {
        self.progress
    }

    #[must_use]
    pub const fn is_ticking(&self) -> bool {
        self.tick.is_some()
    }

    pub fn tick(&mut self, duration: Duration) {
        self.pending_duration = self.pending_duration.saturating_add(duration);
    }

    pub fn handle_timer(&mut self, fired: &ScreenTimer) -> SplashAction {
        if self.tick.as_ref().is_some_and(|h| h.owns(fired)) {
            self.progress = (self.progress + 1).min(PROGRESS_MAX);
            if self.progress == PROGRESS_MAX {
                self.tick = None;
                debug!("Splash progress complete");
                self.finish = Some(self.ctx.scheduler.once(
                    self.ctx.timing.splash_finish_delay(),
                    TimerKind::SplashFinish,
                ));
            }
        } else if self.finish.as_ref().is_some_and(|h| h.owns(fired)) {
            self.finish = None;
            return SplashAction::Complete;
        }

        SplashAction::None
    }
}

impl Widget for &mut SplashScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let text = Text::from(LOGO_TEXT.trim_matches('\n')).centered();
        let text_height = u16::try_from(text.lines.len()).unwrap_or(0);

        let [_, logo_area, _, gauge_area, percent_area, _] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(text_height),
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Fill(1),
        ])
        .areas(area);

        Paragraph::new(text)
            .style(Style::default().fg(self.ctx.theme.accent))
            .render(logo_area, buf);

        let [_, gauge_area, _] = Layout::horizontal([
            Constraint::Fill(1),
            Constraint::Max(40),
            Constraint::Fill(1),
        ])
        .areas(gauge_area);

        Gauge::default()
            .gauge_style(Style::default().fg(self.ctx.theme.accent))
            .use_unicode(true)
            .label("")
            .percent(u16::from(self.progress))
            .render(gauge_area, buf);

        Paragraph::new(format!("{}%", self.progress))
            .style(self.ctx.theme.dimmed_style)
            .centered()
            .render(percent_area, buf);

        let duration = self.pending_duration;
        self.pending_duration = Duration::ZERO;

        if let Some(effect) = &mut self.intro_effect {
            let overflow = effect.process(duration.into(), buf, logo_area);
            if overflow.is_some() {
                self.intro_effect = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::ui::context::test_support::{context, render_text};

    #[tokio::test(start_paused = true)]
    async fn test_progress_then_single_complete() {
        let (ctx, mut rx) = context();
        let mut splash = SplashScreen::new(ctx);
        let mut completions = 0;

        while completions == 0 {
            let fired = rx.recv().await.unwrap();
            if splash.handle_timer(&fired) == SplashAction::Complete {
                completions += 1;
            }
        }

        assert_eq!(splash.progress(), 100);
        assert!(!splash.is_ticking());

        tokio::time::sleep(Duration::from_secs(1)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_complete_after_full_duration() {
        let (ctx, mut rx) = context();
        let start = tokio::time::Instant::now();
        let mut splash = SplashScreen::new(ctx);

        loop {
            let fired = rx.recv().await.unwrap();
            if splash.handle_timer(&fired) == SplashAction::Complete {
                break;
            }
        }

        assert_eq!(start.elapsed(), Duration::from_millis(100 * 40 + 300));
    }

    #[tokio::test(start_paused = true)]
    async fn test_renders_percentage() {
        let (ctx, mut rx) = context();
        let mut splash = SplashScreen::new(ctx);
        for _ in 0..42 {
            let fired = rx.recv().await.unwrap();
            splash.handle_timer(&fired);
        }

        let text = render_text(|area, buf| (&mut splash).render(area, buf), 60, 20);
        assert!(text.contains("42%"));
        assert!(text.contains("T R U E M I L E A G E"));
    }
}
