//! Main application orchestrator.

use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{Event, EventStream, KeyEvent, KeyEventKind};
use futures_util::StreamExt;
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Layout},
};
use tokio::sync::mpsc;
use tokio::time::interval;
use tracing::{debug, info, warn};

use crate::application::dto::ReportRequest;
use crate::application::flow::{FlowController, FlowEvent};
use crate::domain::entities::{EngineAnalysis, ListingReport, Screen};
use crate::domain::keybinding::{Action as Command, Keybind};
use crate::domain::ports::{
    AuditHistoryPort, EngineAnalysisPort, ListingVerificationPort, VehicleLookupPort,
};
use crate::infrastructure::config::AppConfig;
use crate::infrastructure::scheduler::Scheduler;
use crate::presentation::commands::{CommandRegistry, HasCommands};
use crate::presentation::events::EventHandler;
use crate::presentation::theme::Theme;
use crate::presentation::widgets::{
    FooterBar, FooterBarStyle, HeaderBar, HeaderBarStyle, NavBar, Notice, StatusBar,
};

use super::backend::{Action, Backend, BackendCommand};
use super::context::{ScreenContext, ScreenTimer};
use super::{
    DashboardAction, DashboardReportScreen, EngineAnalysisAction, EngineAnalysisScreen,
    EngineRecordingAction, EngineRecordingScreen, ListingVerificationAction,
    ListingVerificationScreen, PastAuditsAction, PastAuditsScreen, SplashAction, SplashScreen,
    VinEntryAction, VinEntryScreen, WelcomeAction, WelcomeScreen,
};

const ANIMATION_TICK_RATE: Duration = Duration::from_millis(33);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AppState {
    Running,
    Exiting,
}

enum CurrentScreen {
    Splash(SplashScreen),
    Welcome(WelcomeScreen),
    VinEntry(VinEntryScreen),
    EngineRecording(EngineRecordingScreen),
    EngineAnalysis(EngineAnalysisScreen),
    ListingVerification(ListingVerificationScreen),
    DashboardReport(DashboardReportScreen),
    PastAudits(PastAuditsScreen),
}

impl CurrentScreen {
    fn commands(&self) -> Vec<Keybind> {
        match self {
            Self::Splash(_) => Vec::new(),
            Self::Welcome(s) => s.get_commands(),
            Self::VinEntry(s) => s.get_commands(),
            Self::EngineRecording(s) => s.get_commands(),
            Self::EngineAnalysis(s) => s.get_commands(),
            Self::ListingVerification(s) => s.get_commands(),
            Self::DashboardReport(s) => s.get_commands(),
            Self::PastAudits(s) => s.get_commands(),
        }
    }

    fn notice(&self) -> Option<&Notice> {
        match self {
            Self::Splash(_) | Self::Welcome(_) | Self::EngineRecording(_) => None,
            Self::VinEntry(s) => s.notice(),
            Self::EngineAnalysis(s) => s.notice(),
            Self::ListingVerification(s) => s.notice(),
            Self::DashboardReport(s) => s.notice(),
            Self::PastAudits(s) => s.notice(),
        }
    }

    fn captures_text(&self) -> bool {
        match self {
            Self::VinEntry(s) => s.captures_text(),
            Self::ListingVerification(s) => s.captures_text(),
            _ => false,
        }
    }
}

/// Results gathered while the audit progresses.
#[derive(Debug, Default)]
struct AuditResults {
    analysis: Option<EngineAnalysis>,
    listing: Option<ListingReport>,
}

const fn screen_title(screen: Screen) -> &'static str {
    match screen {
        Screen::Splash => "",
        Screen::Welcome => "Welcome",
        Screen::VinEntry => "VIN Entry",
        Screen::EngineRecording => "Engine Recording",
        Screen::EngineAnalysis => "Engine Analysis",
        Screen::ListingVerification => "Listing Verification",
        Screen::DashboardReport => "Report",
        Screen::PastAudits => "Past Audits",
    }
}

pub struct App {
    state: AppState,
    flow: FlowController,
    screen: CurrentScreen,
    ctx: ScreenContext,
    timer_rx: mpsc::UnboundedReceiver<ScreenTimer>,
    backend: Option<Backend>,
    command_tx: mpsc::UnboundedSender<BackendCommand>,
    action_rx: mpsc::UnboundedReceiver<Action>,
    commands: CommandRegistry,
    results: AuditResults,
}

impl App {
    /// Creates the application at the splash screen.
    ///
    /// Must be called inside a tokio runtime: the splash schedules its timer
    /// right away.
    #[must_use]
    pub fn new<S>(config: &AppConfig, services: Arc<S>) -> Self
    where
        S: EngineAnalysisPort
            + ListingVerificationPort
            + VehicleLookupPort
            + AuditHistoryPort
            + 'static,
    {
        let (scheduler, timer_rx) = Scheduler::new();
        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        let ctx = ScreenContext::new(
            scheduler,
            config.timing,
            Theme::new(&config.theme.accent_color),
            config.ui.enable_animations,
        );

        Self {
            state: AppState::Running,
            flow: FlowController::new(),
            screen: CurrentScreen::Splash(SplashScreen::new(ctx.clone())),
            ctx,
            timer_rx,
            backend: Some(Backend::new(services, command_rx, action_tx)),
            command_tx,
            action_rx,
            commands: CommandRegistry::new(),
            results: AuditResults::default(),
        }
    }

    /// # Errors
    /// Returns error if drawing to the terminal fails.
    pub async fn run(mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        if let Some(backend) = self.backend.take() {
            tokio::spawn(backend.run());
        }

        self.run_event_loop(terminal).await?;

        info!("Application exiting normally");
        Ok(())
    }

    async fn run_event_loop(&mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        let mut terminal_events = EventStream::new();
        let mut animation_interval = interval(ANIMATION_TICK_RATE);

        terminal.draw(|frame| self.render(frame))?;

        while self.state != AppState::Exiting {
            let terminal_event = terminal_events.next();

            tokio::select! {
                biased;

                Some(action) = self.action_rx.recv() => {
                    self.handle_action(action);
                    terminal.draw(|frame| self.render(frame))?;
                }

                Some(fired) = self.timer_rx.recv() => {
                    self.handle_timer(&fired);
                    terminal.draw(|frame| self.render(frame))?;
                }

                _ = animation_interval.tick() => {
                    if let CurrentScreen::Splash(splash) = &mut self.screen
                        && self.ctx.animations
                    {
                        splash.tick(ANIMATION_TICK_RATE);
                        terminal.draw(|frame| self.render(frame))?;
                    }
                }

                Some(Ok(event)) = terminal_event => {
                    self.handle_terminal_event(event);
                    if self.state != AppState::Exiting {
                        terminal.draw(|frame| self.render(frame))?;
                    }
                }
            }
        }

        Ok(())
    }

    fn handle_terminal_event(&mut self, event: Event) {
        if let Event::Key(key) = event
            && key.kind == KeyEventKind::Press
        {
            self.handle_key(key);
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        match self.commands.find_action(key) {
            Some(Command::Quit)
                if EventHandler::is_force_quit_event(&key) || !self.screen.captures_text() =>
            {
                info!("Quit requested");
                self.state = AppState::Exiting;
                return;
            }
            Some(command) => {
                if let Some(item) = command.nav_item()
                    && self.flow.current_screen().shows_nav_bar()
                {
                    self.dispatch(FlowEvent::Jump(item));
                    return;
                }
            }
            None => {}
        }

        if let Some(event) = self.route_key_to_screen(key) {
            self.dispatch(event);
        }
    }

    /// Lets the current screen handle a key and maps its action to a flow event.
    fn route_key_to_screen(&mut self, key: KeyEvent) -> Option<FlowEvent> {
        match &mut self.screen {
            CurrentScreen::Splash(_) => None,
            CurrentScreen::Welcome(screen) => match screen.handle_key(key) {
                WelcomeAction::None => None,
                WelcomeAction::StartAudit => Some(FlowEvent::StartAudit),
                WelcomeAction::LearnMore => Some(FlowEvent::LearnMore),
            },
            CurrentScreen::VinEntry(screen) => match screen.handle_key(key) {
                VinEntryAction::None => None,
                VinEntryAction::Back => Some(FlowEvent::Back),
                VinEntryAction::Proceed(vin) => Some(FlowEvent::ProceedWithVin(vin)),
            },
            CurrentScreen::EngineRecording(screen) => match screen.handle_key(key) {
                EngineRecordingAction::None => None,
                EngineRecordingAction::Back => Some(FlowEvent::Back),
                EngineRecordingAction::Submit(clip) => {
                    self.send(BackendCommand::AnalyzeEngine(clip));
                    None
                }
                EngineRecordingAction::AnalysisComplete => Some(FlowEvent::AnalysisComplete),
            },
            CurrentScreen::EngineAnalysis(screen) => match screen.handle_key(key) {
                EngineAnalysisAction::None => None,
                EngineAnalysisAction::Back => Some(FlowEvent::Back),
                EngineAnalysisAction::Proceed => Some(FlowEvent::Proceed),
            },
            CurrentScreen::ListingVerification(screen) => match screen.handle_key(key) {
                ListingVerificationAction::None => None,
                ListingVerificationAction::Back => Some(FlowEvent::Back),
                ListingVerificationAction::Verify(request) => {
                    self.results.listing = None;
                    self.send(BackendCommand::VerifyListing(request));
                    None
                }
                ListingVerificationAction::Proceed => Some(FlowEvent::Proceed),
            },
            CurrentScreen::DashboardReport(screen) => match screen.handle_key(key) {
                DashboardAction::None => None,
                DashboardAction::Back => Some(FlowEvent::Back),
                DashboardAction::GoHome => Some(FlowEvent::GoHome),
            },
            CurrentScreen::PastAudits(screen) => match screen.handle_key(key) {
                PastAuditsAction::None => None,
                PastAuditsAction::Back => Some(FlowEvent::Back),
                PastAuditsAction::StartNew => Some(FlowEvent::StartNew),
            },
        }
    }

    fn handle_timer(&mut self, fired: &ScreenTimer) {
        let event = match &mut self.screen {
            CurrentScreen::Splash(screen) => match screen.handle_timer(fired) {
                SplashAction::Complete => Some(FlowEvent::Complete),
                SplashAction::None => None,
            },
            CurrentScreen::VinEntry(screen) => {
                screen.handle_timer(fired);
                None
            }
            CurrentScreen::EngineRecording(screen) => {
                screen.handle_timer(fired);
                None
            }
            CurrentScreen::ListingVerification(screen) => {
                screen.handle_timer(fired);
                None
            }
            _ => {
                debug!(id = %fired.id, kind = ?fired.kind, "Timer has no owner on this screen");
                None
            }
        };

        if let Some(event) = event {
            self.dispatch(event);
        }
    }

    fn handle_action(&mut self, action: Action) {
        match action {
            Action::EngineAnalyzed(analysis) => {
                if let CurrentScreen::EngineAnalysis(screen) = &mut self.screen {
                    screen.set_analysis(analysis.clone());
                }
                self.results.analysis = Some(analysis);
            }
            Action::EngineAnalysisFailed(message) => {
                if let CurrentScreen::EngineAnalysis(screen) = &mut self.screen {
                    screen.set_error(&message);
                }
                self.results.analysis = None;
            }
            Action::ListingVerified(report) => {
                if let CurrentScreen::ListingVerification(screen) = &mut self.screen {
                    screen.set_report(report.clone());
                }
                self.results.listing = Some(report);
            }
            Action::ListingVerificationFailed(message) => {
                if let CurrentScreen::ListingVerification(screen) = &mut self.screen {
                    screen.set_error(&message);
                }
            }
            Action::ReportBuilt(report) => {
                if let CurrentScreen::DashboardReport(screen) = &mut self.screen {
                    screen.set_report(report);
                }
            }
            Action::ReportFailed(message) => {
                if let CurrentScreen::DashboardReport(screen) = &mut self.screen {
                    screen.set_error(&message);
                }
            }
            Action::HistoryLoaded(audits) => {
                if let CurrentScreen::PastAudits(screen) = &mut self.screen {
                    screen.set_audits(audits);
                }
            }
            Action::HistoryLoadFailed(message) => {
                if let CurrentScreen::PastAudits(screen) = &mut self.screen {
                    screen.set_error(&message);
                }
            }
        }
    }

    fn dispatch(&mut self, event: FlowEvent) {
        let new_vin = matches!(event, FlowEvent::ProceedWithVin(_));
        let transition = self.flow.dispatch(event);

        if !transition.changed_screen() {
            return;
        }

        if new_vin {
            self.results = AuditResults::default();
        }
        self.screen = self.build_screen(self.flow.current_screen());
    }

    /// Builds the screen for `screen`, replacing the previous one drops its timers.
    fn build_screen(&self, screen: Screen) -> CurrentScreen {
        let ctx = self.ctx.clone();
        let vin = self.flow.session().vin().cloned();

        match screen {
            Screen::Splash => CurrentScreen::Splash(SplashScreen::new(ctx)),
            Screen::Welcome => CurrentScreen::Welcome(WelcomeScreen::new(ctx.theme)),
            Screen::VinEntry => CurrentScreen::VinEntry(VinEntryScreen::new(ctx)),
            Screen::EngineRecording => {
                CurrentScreen::EngineRecording(EngineRecordingScreen::new(ctx, vin))
            }
            Screen::EngineAnalysis => CurrentScreen::EngineAnalysis(EngineAnalysisScreen::new(
                ctx.theme,
                self.results.analysis.clone(),
            )),
            Screen::ListingVerification => {
                CurrentScreen::ListingVerification(ListingVerificationScreen::new(ctx))
            }
            Screen::DashboardReport => {
                let mut dashboard = DashboardReportScreen::new(ctx.theme, vin.clone());
                match (vin, &self.results.analysis, &self.results.listing) {
                    (Some(vin), Some(analysis), Some(listing)) => {
                        self.send(BackendCommand::BuildReport(ReportRequest::new(
                            vin,
                            analysis.overall_score,
                            listing.reliability_score,
                        )));
                    }
                    _ => {
                        warn!("Report requested before the audit steps finished");
                        dashboard.set_error(
                            "engine analysis and listing verification are required",
                        );
                    }
                }
                CurrentScreen::DashboardReport(dashboard)
            }
            Screen::PastAudits => {
                self.send(BackendCommand::LoadHistory);
                CurrentScreen::PastAudits(PastAuditsScreen::new(ctx.theme))
            }
        }
    }

    fn send(&self, command: BackendCommand) {
        debug!(command = ?command, "Sending backend command");
        if self.command_tx.send(command).is_err() {
            warn!("Backend worker is not running");
        }
    }

    fn render(&mut self, frame: &mut Frame) {
        let current = self.flow.current_screen();
        let chrome = u16::from(current != Screen::Splash);
        let nav_height = u16::from(current.shows_nav_bar());

        let [header_area, body_area, status_area, nav_area, footer_area] = Layout::vertical([
            Constraint::Length(chrome),
            Constraint::Fill(1),
            Constraint::Length(chrome),
            Constraint::Length(nav_height),
            Constraint::Length(chrome),
        ])
        .areas(frame.area());

        match &mut self.screen {
            CurrentScreen::Splash(screen) => frame.render_widget(screen, body_area),
            CurrentScreen::Welcome(screen) => frame.render_widget(&*screen, body_area),
            CurrentScreen::VinEntry(screen) => frame.render_widget(&*screen, body_area),
            CurrentScreen::EngineRecording(screen) => frame.render_widget(&*screen, body_area),
            CurrentScreen::EngineAnalysis(screen) => frame.render_widget(&*screen, body_area),
            CurrentScreen::ListingVerification(screen) => {
                frame.render_widget(&*screen, body_area);
            }
            CurrentScreen::DashboardReport(screen) => frame.render_widget(&*screen, body_area),
            CurrentScreen::PastAudits(screen) => frame.render_widget(&*screen, body_area),
        }

        if chrome == 0 {
            return;
        }

        let theme = &self.ctx.theme;
        frame.render_widget(
            HeaderBar::new(crate::NAME, crate::VERSION)
                .title(screen_title(current))
                .vin(self.flow.session().vin_str())
                .style(HeaderBarStyle::from_theme(theme)),
            header_area,
        );
        frame.render_widget(
            StatusBar::new(self.screen.notice()).right(current.tag()),
            status_area,
        );
        if current.shows_nav_bar() {
            frame.render_widget(NavBar::new(current, &self.commands, theme), nav_area);
        }

        let mut keys = self.screen.commands();
        keys.extend(self.commands.quit_hint());
        frame.render_widget(
            FooterBar::new(&keys).style(FooterBarStyle::from_theme(theme)),
            footer_area,
        );
    }
}
