use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rand::{SeedableRng, rngs::StdRng};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use tracing::{info, warn};

use crate::domain::entities::{RecordingClip, Vin};
use crate::domain::keybinding::{Action, Keybind};
use crate::infrastructure::scheduler::TaskHandle;
use crate::presentation::commands::HasCommands;
use crate::presentation::events::EventHandler;
use crate::presentation::widgets::{Waveform, WaveformView};

use super::context::{ScreenContext, ScreenTimer, TimerKind};
use super::utils::{button, centered_column, format_elapsed, panel};

const TIPS: [&str; 3] = [
    "Record in a quiet environment",
    "Hold phone 1-2 feet from the engine",
    "Record for at least 10 seconds",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordingState {
    Idle,
    Recording,
    Analyzing,
    Done,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineRecordingAction {
    None,
    Back,
    /// Recording stopped; the clip goes to the analysis service.
    Submit(RecordingClip),
    AnalysisComplete,
}

pub struct EngineRecordingScreen {
    state: RecordingState,
    seconds: u32,
    waveform: Waveform,
    rng: StdRng,
    seconds_tick: Option<TaskHandle>,
    waveform_tick: Option<TaskHandle>,
    analysis: Option<TaskHandle>,
    vin: Option<Vin>,
    ctx: ScreenContext,
}

impl EngineRecordingScreen {
    #[must_use]
    pub fn new(ctx: ScreenContext, vin: Option<Vin>) -> Self {
        Self {
            state: RecordingState::Idle,
            seconds: 0,
            waveform: Waveform::default(),
            rng: StdRng::from_entropy(),
            seconds_tick: None,
            waveform_tick: None,
            analysis: None,
            vin,
            ctx,
        }
    }

    #[must_use]
    pub const fn state(&self) -> RecordingState {
        self.state
    }

    #[must_use]
    pub const fn seconds(&self) -> u32 {
        self.seconds
    }

    #[must_use]
    pub const fn waveform(&self) -> &Waveform {
        &self.waveform
    }

    /// Returns whether any timer of this screen is still scheduled.
    #[must_use]
    pub const fn has_active_timers(&self) -> bool {
        self.seconds_tick.is_some() || self.waveform_tick.is_some() || self.analysis.is_some()
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> EngineRecordingAction {
        if EventHandler::is_back_event(&key) {
            return EngineRecordingAction::Back;
        }

        let submit = EventHandler::is_submit_event(&key);
        let plain = EventHandler::plain_char(&key);

        match self.state {
            RecordingState::Idle if submit || plain == Some('r') => {
                self.record();
                EngineRecordingAction::None
            }
            RecordingState::Recording if submit || plain == Some('s') => self.stop(),
            RecordingState::Done if submit => EngineRecordingAction::AnalysisComplete,
            _ => EngineRecordingAction::None,
        }
    }

    pub fn handle_timer(&mut self, fired: &ScreenTimer) {
        if self.seconds_tick.as_ref().is_some_and(|h| h.owns(fired)) {
            self.seconds = self.seconds.saturating_add(1);
        } else if self.waveform_tick.as_ref().is_some_and(|h| h.owns(fired)) {
            self.waveform.randomize(&mut self.rng);
        } else if self.analysis.as_ref().is_some_and(|h| h.owns(fired)) {
            self.analysis = None;
            self.state = RecordingState::Done;
            info!(seconds = self.seconds, "Engine analysis ready");
        }
    }

    fn record(&mut self) {
        let timing = &self.ctx.timing;
        self.seconds = 0;
        self.seconds_tick = Some(
            self.ctx
                .scheduler
                .every(timing.record_tick(), TimerKind::RecordTick),
        );
        self.waveform_tick = Some(
            self.ctx
                .scheduler
                .every(timing.waveform_refresh(), TimerKind::WaveformRefresh),
        );
        self.state = RecordingState::Recording;
        info!("Engine recording started");
    }

    fn stop(&mut self) -> EngineRecordingAction {
        if let Some(handle) = self.seconds_tick.take() {
            handle.cancel();
        }
        if let Some(handle) = self.waveform_tick.take() {
            handle.cancel();
        }
        self.waveform.reset();
        self.analysis = Some(
            self.ctx
                .scheduler
                .once(self.ctx.timing.analysis_delay(), TimerKind::AnalysisDone),
        );
        self.state = RecordingState::Analyzing;
        info!(seconds = self.seconds, "Engine recording stopped");

        match &self.vin {
            Some(vin) => EngineRecordingAction::Submit(RecordingClip {
                vin: vin.clone(),
                duration: Duration::from_secs(u64::from(self.seconds)),
            }),
            None => {
                warn!("Recording stopped without a VIN, nothing to analyze");
                EngineRecordingAction::None
            }
        }
    }

    fn status_lines(&self) -> Vec<Line<'static>> {
        let theme = &self.ctx.theme;
        match self.state {
            RecordingState::Idle => vec![
                Line::from(Span::styled("Ready to Record", theme.title_style)),
                Line::from(Span::styled(
                    "Start the engine and place your phone near the hood",
                    theme.dimmed_style,
                )),
            ],
            RecordingState::Recording => vec![
                Line::from(Span::styled(
                    "Recording...",
                    Style::default()
                        .fg(theme.danger)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    format_elapsed(self.seconds),
                    theme.title_style,
                )),
            ],
            RecordingState::Analyzing => vec![
                Line::from(Span::styled("Analyzing... Please wait", theme.title_style)),
                Line::from(Span::styled(
                    format!("Captured {}", format_elapsed(self.seconds)),
                    theme.dimmed_style,
                )),
            ],
            RecordingState::Done => vec![
                Line::from(Span::styled(
                    "Analysis Complete",
                    Style::default().fg(theme.good).add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    format!("Captured {}", format_elapsed(self.seconds)),
                    theme.dimmed_style,
                )),
            ],
        }
    }
}

impl HasCommands for EngineRecordingScreen {
    fn get_commands(&self) -> Vec<Keybind> {
        let mut commands = vec![Keybind::new(
            KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE),
            Action::Back,
            "Back",
        )];

        match self.state {
            RecordingState::Idle => commands.push(Keybind::new(
                KeyEvent::new(KeyCode::Char('r'), KeyModifiers::NONE),
                Action::Record,
                "Record",
            )),
            RecordingState::Recording => commands.push(Keybind::new(
                KeyEvent::new(KeyCode::Char('s'), KeyModifiers::NONE),
                Action::Stop,
                "Stop",
            )),
            RecordingState::Analyzing => {}
            RecordingState::Done => commands.push(Keybind::new(
                KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE),
                Action::Confirm,
                "View Results",
            )),
        }

        commands
    }
}

impl Widget for &EngineRecordingScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let theme = &self.ctx.theme;
        let column = centered_column(64, area);
        let [_, title_area, status_area, _, wave_area, _, action_area, _, tips_area, _] =
            Layout::vertical([
                Constraint::Fill(1),
                Constraint::Length(2),
                Constraint::Length(2),
                Constraint::Length(1),
                Constraint::Length(8),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(5),
                Constraint::Fill(1),
            ])
            .areas(column);

        Paragraph::new(vec![
            Line::from(Span::styled("Engine Sound Recording", theme.title_style)),
            Line::from(Span::styled(
                self.vin
                    .as_ref()
                    .map_or_else(String::new, |vin| format!("VIN {vin}")),
                theme.dimmed_style,
            )),
        ])
        .centered()
        .render(title_area, buf);

        Paragraph::new(self.status_lines())
            .centered()
            .render(status_area, buf);

        let wave_color = if self.state == RecordingState::Recording {
            theme.danger
        } else {
            theme.accent
        };
        WaveformView::new(&self.waveform, wave_color).render(wave_area, buf);

        let action = match self.state {
            RecordingState::Idle => Some(button("Start Recording", true, true, theme)),
            RecordingState::Recording => Some(button("Stop Recording", true, true, theme)),
            RecordingState::Analyzing => None,
            RecordingState::Done => Some(button("View Results", true, true, theme)),
        };
        if let Some(action) = action {
            Paragraph::new(action).centered().render(action_area, buf);
        }

        let tips: Vec<Line> = TIPS
            .iter()
            .map(|tip| {
                Line::from(vec![
                    Span::styled("• ", Style::default().fg(theme.accent)),
                    Span::styled(*tip, theme.dimmed_style),
                ])
            })
            .collect();
        Paragraph::new(tips)
            .block(panel("Recording Tips", theme))
            .render(tips_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::ui::context::test_support::{context, render_text};
    use crate::presentation::widgets::{MAX_HEIGHT, MIN_HEIGHT};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn vin() -> Vin {
        Vin::parse("1HGBH41JXMN109186").unwrap()
    }

    #[tokio::test(start_paused = true)]
    async fn test_record_stop_analyze_done() {
        let (ctx, mut rx) = context();
        let mut screen = EngineRecordingScreen::new(ctx, Some(vin()));
        assert_eq!(screen.state(), RecordingState::Idle);

        screen.handle_key(key(KeyCode::Char('r')));
        assert_eq!(screen.state(), RecordingState::Recording);

        // 1 s of recording: ten waveform refreshes and one second tick.
        for _ in 0..11 {
            let fired = rx.recv().await.unwrap();
            screen.handle_timer(&fired);
        }
        assert_eq!(screen.seconds(), 1);
        assert!(
            screen
                .waveform()
                .bars()
                .iter()
                .all(|bar| (MIN_HEIGHT..MAX_HEIGHT).contains(bar))
        );

        let action = screen.handle_key(key(KeyCode::Char('s')));
        assert_eq!(
            action,
            EngineRecordingAction::Submit(RecordingClip {
                vin: vin(),
                duration: Duration::from_secs(1),
            })
        );
        assert_eq!(screen.state(), RecordingState::Analyzing);
        assert!(screen.waveform().is_flat());

        let stopped = tokio::time::Instant::now();
        let fired = rx.recv().await.unwrap();
        assert_eq!(fired.kind, TimerKind::AnalysisDone);
        assert_eq!(stopped.elapsed(), Duration::from_millis(3000));

        screen.handle_timer(&fired);
        assert_eq!(screen.state(), RecordingState::Done);
        assert!(!screen.has_active_timers());

        tokio::time::sleep(Duration::from_secs(10)).await;
        assert!(rx.try_recv().is_err());
        assert_eq!(screen.seconds(), 1);

        assert_eq!(
            screen.handle_key(key(KeyCode::Enter)),
            EngineRecordingAction::AnalysisComplete
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_record_resets_seconds() {
        let (ctx, mut rx) = context();
        let mut screen = EngineRecordingScreen::new(ctx, Some(vin()));
        screen.handle_key(key(KeyCode::Enter));

        while screen.seconds() < 2 {
            let fired = rx.recv().await.unwrap();
            screen.handle_timer(&fired);
        }
        assert_eq!(screen.seconds(), 2);
        assert!(screen.has_active_timers());
    }

    #[tokio::test(start_paused = true)]
    async fn test_stale_firing_ignored_after_stop() {
        let (ctx, mut rx) = context();
        let mut screen = EngineRecordingScreen::new(ctx, Some(vin()));
        screen.handle_key(key(KeyCode::Char('r')));

        let stale = loop {
            let fired = rx.recv().await.unwrap();
            if fired.kind == TimerKind::RecordTick {
                break fired;
            }
        };
        screen.handle_key(key(KeyCode::Char('s')));
        let before = screen.seconds();
        screen.handle_timer(&stale);
        assert_eq!(screen.seconds(), before);
    }

    #[tokio::test]
    async fn test_enter_ignored_while_analyzing() {
        let (ctx, _rx) = context();
        let mut screen = EngineRecordingScreen::new(ctx, Some(vin()));
        screen.handle_key(key(KeyCode::Char('r')));
        screen.handle_key(key(KeyCode::Char('s')));

        assert_eq!(screen.handle_key(key(KeyCode::Enter)), EngineRecordingAction::None);
        assert!(screen.get_commands().iter().all(|k| k.action == Action::Back));
    }

    #[tokio::test]
    async fn test_stop_without_vin_submits_nothing() {
        let (ctx, _rx) = context();
        let mut screen = EngineRecordingScreen::new(ctx, None);
        screen.handle_key(key(KeyCode::Char('r')));
        assert_eq!(screen.handle_key(key(KeyCode::Char('s'))), EngineRecordingAction::None);
        assert_eq!(screen.state(), RecordingState::Analyzing);
    }

    #[tokio::test]
    async fn test_escape_goes_back_in_any_state() {
        let (ctx, _rx) = context();
        let mut screen = EngineRecordingScreen::new(ctx, Some(vin()));
        assert_eq!(screen.handle_key(key(KeyCode::Esc)), EngineRecordingAction::Back);
        screen.handle_key(key(KeyCode::Char('r')));
        assert_eq!(screen.handle_key(key(KeyCode::Esc)), EngineRecordingAction::Back);
    }

    #[tokio::test]
    async fn test_render_idle() {
        let (ctx, _rx) = context();
        let screen = EngineRecordingScreen::new(ctx, Some(vin()));
        let text = render_text(|area, buf| (&screen).render(area, buf), 70, 30);
        assert!(text.contains("Ready to Record"));
        assert!(text.contains("VIN 1HGBH41JXMN109186"));
        assert!(text.contains("Record for at least 10 seconds"));
    }
}
