use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};
use tracing::{debug, info};

use crate::domain::entities::{Vin, is_vin_char};
use crate::domain::keybinding::{Action, Keybind};
use crate::infrastructure::demo::{DEMO_VINS, SCANNED_VIN};
use crate::infrastructure::scheduler::TaskHandle;
use crate::presentation::commands::HasCommands;
use crate::presentation::events::EventHandler;
use crate::presentation::widgets::{Notice, TextInput};

use super::context::{ScreenContext, ScreenTimer, TimerKind};
use super::utils::{button, button_row, centered_column, panel};

const HELP_TEXT: &str = "A 17-character code unique to every vehicle. Find it on the dashboard \
(driver side), door jamb, or vehicle registration.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VinEntryAction {
    None,
    Back,
    Proceed(Vin),
}

pub struct VinEntryScreen {
    input: TextInput,
    scan: Option<TaskHandle>,
    demo_index: usize,
    notice: Option<Notice>,
    ctx: ScreenContext,
}

impl VinEntryScreen {
    #[must_use]
    pub fn new(ctx: ScreenContext) -> Self {
        let mut input = TextInput::new(" Vehicle Identification Number ")
            .uppercase()
            .max_len(Vin::LENGTH)
            .accept(is_vin_char)
            .placeholder("Enter 17-character VIN")
            .accent(ctx.theme.accent);
        input.set_focused(true);

        Self {
            input,
            scan: None,
            demo_index: 0,
            notice: None,
            ctx,
        }
    }

    #[must_use]
    pub fn value(&self) -> &str {
        self.input.value()
    }

    #[must_use]
    pub fn is_scanning(&self) -> bool {
        self.scan.is_some()
    }

    #[must_use]
    pub fn can_proceed(&self) -> bool {
        self.input.len() == Vin::LENGTH
    }

    #[must_use]
    pub const fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// The VIN field takes printable keys.
    #[must_use]
    pub const fn captures_text(&self) -> bool {
        true
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> VinEntryAction {
        if EventHandler::is_back_event(&key) {
            return VinEntryAction::Back;
        }

        if EventHandler::is_ctrl_char(&key, 's') {
            self.start_scan();
            return VinEntryAction::None;
        }

        if EventHandler::is_ctrl_char(&key, 'd') {
            self.insert_demo();
            return VinEntryAction::None;
        }

        if EventHandler::is_submit_event(&key) {
            return self.proceed();
        }

        if !self.is_scanning() && self.input.handle_edit_key(key) {
            self.notice = None;
        }

        VinEntryAction::None
    }

    pub fn handle_timer(&mut self, fired: &ScreenTimer) {
        if self.scan.as_ref().is_some_and(|h| h.owns(fired)) {
            self.scan = None;
            self.input.set_value(SCANNED_VIN);
            info!(vin = SCANNED_VIN, "VIN scan finished");
            self.notice = Some(Notice::success("VIN scanned"));
        }
    }

    fn start_scan(&mut self) {
        if self.is_scanning() {
            debug!("Scan already running");
            return;
        }

        debug!("Starting VIN scan");
        self.scan = Some(
            self.ctx
                .scheduler
                .once(self.ctx.timing.vin_scan_delay(), TimerKind::VinScan),
        );
        self.notice = Some(Notice::info("Scanning VIN..."));
    }

    fn insert_demo(&mut self) {
        if self.is_scanning() {
            return;
        }

        let demo = DEMO_VINS[self.demo_index % DEMO_VINS.len()];
        self.demo_index = self.demo_index.wrapping_add(1);
        self.input.set_value(demo);
        self.notice = None;
    }

    fn proceed(&mut self) -> VinEntryAction {
        if !self.can_proceed() {
            self.notice = Some(Notice::warning(format!(
                "VIN must be {} characters",
                Vin::LENGTH
            )));
            return VinEntryAction::None;
        }

        match Vin::parse(self.input.value()) {
            Ok(vin) => VinEntryAction::Proceed(vin),
            Err(e) => {
                self.notice = Some(Notice::error(e.to_string()));
                VinEntryAction::None
            }
        }
    }
}

impl HasCommands for VinEntryScreen {
    fn get_commands(&self) -> Vec<Keybind> {
        let mut commands = vec![
            Keybind::new(
                KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE),
                Action::Back,
                "Back",
            ),
            Keybind::new(
                KeyEvent::new(KeyCode::Char('d'), KeyModifiers::CONTROL),
                Action::InsertDemo,
                "Demo VIN",
            ),
        ];

        if !self.is_scanning() {
            commands.push(Keybind::new(
                KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL),
                Action::Scan,
                "Scan",
            ));
        }

        if self.can_proceed() {
            commands.push(Keybind::new(
                KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE),
                Action::Confirm,
                "Proceed",
            ));
        }

        commands
    }
}

impl Widget for &VinEntryScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let theme = &self.ctx.theme;
        let column = centered_column(64, area);
        let [_, title_area, _, input_area, counter_area, _, actions_area, _, help_area, _] =
            Layout::vertical([
                Constraint::Fill(1),
                Constraint::Length(2),
                Constraint::Length(1),
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(2),
                Constraint::Length(1),
                Constraint::Length(5),
                Constraint::Fill(1),
            ])
            .areas(column);

        Paragraph::new(vec![
            Line::from(Span::styled("Enter Vehicle VIN", theme.title_style)),
            Line::from(Span::styled(
                "Type it in, scan it, or insert a demo VIN",
                theme.dimmed_style,
            )),
        ])
        .centered()
        .render(title_area, buf);

        (&self.input).render(input_area, buf);

        let length = self.input.len();
        let (hint, hint_color) = if self.can_proceed() {
            ("valid length", theme.good)
        } else {
            ("incomplete", theme.caution)
        };
        Paragraph::new(Line::from(vec![
            Span::styled(format!("{length}/{}", Vin::LENGTH), theme.dimmed_style),
            Span::raw("  "),
            Span::styled(hint, Style::default().fg(hint_color)),
        ]))
        .right_aligned()
        .render(counter_area, buf);

        let scan_label = if self.is_scanning() {
            "Scanning..."
        } else {
            "Scan VIN"
        };
        Paragraph::new(vec![
            button_row(
                [
                    button(scan_label, false, !self.is_scanning(), theme),
                    button("Proceed", self.can_proceed(), self.can_proceed(), theme),
                ],
                "   ",
            ),
            Line::from(Span::styled(
                format!("Demo VINs: {}", DEMO_VINS.join(", ")),
                theme.dimmed_style,
            )),
        ])
        .centered()
        .render(actions_area, buf);

        Paragraph::new(HELP_TEXT)
            .style(theme.dimmed_style)
            .wrap(Wrap { trim: true })
            .block(panel("What is a VIN?", theme))
            .render(help_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::presentation::ui::context::test_support::{context, render_text};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn type_str(screen: &mut VinEntryScreen, text: &str) {
        for c in text.chars() {
            screen.handle_key(key(KeyCode::Char(c)));
        }
    }

    #[tokio::test]
    async fn test_proceed_disabled_until_seventeen_chars() {
        let (ctx, _rx) = context();
        let mut screen = VinEntryScreen::new(ctx);

        type_str(&mut screen, "1hgbh41jxmn10918");
        assert_eq!(screen.value(), "1HGBH41JXMN10918");
        assert!(!screen.can_proceed());
        assert_eq!(screen.handle_key(key(KeyCode::Enter)), VinEntryAction::None);
        assert!(screen.notice().is_some());

        type_str(&mut screen, "6");
        assert!(screen.can_proceed());
        let expected = Vin::parse("1HGBH41JXMN109186").unwrap();
        assert_eq!(
            screen.handle_key(key(KeyCode::Enter)),
            VinEntryAction::Proceed(expected)
        );
    }

    #[tokio::test]
    async fn test_input_truncates_at_seventeen() {
        let (ctx, _rx) = context();
        let mut screen = VinEntryScreen::new(ctx);

        type_str(&mut screen, "1HGBH41JXMN109186EXTRA");
        assert_eq!(screen.value(), "1HGBH41JXMN109186");
    }

    #[tokio::test]
    async fn test_escape_goes_back() {
        let (ctx, _rx) = context();
        let mut screen = VinEntryScreen::new(ctx);
        assert_eq!(screen.handle_key(key(KeyCode::Esc)), VinEntryAction::Back);
    }

    #[tokio::test]
    async fn test_demo_vins_cycle() {
        let (ctx, _rx) = context();
        let mut screen = VinEntryScreen::new(ctx);

        screen.handle_key(ctrl('d'));
        assert_eq!(screen.value(), DEMO_VINS[0]);
        screen.handle_key(ctrl('d'));
        assert_eq!(screen.value(), DEMO_VINS[1]);
        screen.handle_key(ctrl('d'));
        assert_eq!(screen.value(), DEMO_VINS[0]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_scan_fills_vin_after_delay() {
        let (ctx, mut rx) = context();
        let mut screen = VinEntryScreen::new(ctx);

        screen.handle_key(ctrl('s'));
        assert!(screen.is_scanning());
        assert!(screen.get_commands().iter().all(|k| k.action != Action::Scan));

        let started = tokio::time::Instant::now();
        let fired = rx.recv().await.unwrap();
        assert_eq!(fired.kind, TimerKind::VinScan);
        assert_eq!(started.elapsed(), Duration::from_millis(1500));

        screen.handle_timer(&fired);
        assert!(!screen.is_scanning());
        assert_eq!(screen.value(), SCANNED_VIN);
        assert!(screen.can_proceed());
    }

    #[tokio::test(start_paused = true)]
    async fn test_second_scan_ignored_while_scanning() {
        let (ctx, mut rx) = context();
        let mut screen = VinEntryScreen::new(ctx);

        screen.handle_key(ctrl('s'));
        screen.handle_key(ctrl('s'));

        let fired = rx.recv().await.unwrap();
        screen.handle_timer(&fired);
        tokio::time::sleep(Duration::from_secs(5)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_typing_ignored_while_scanning() {
        let (ctx, _rx) = context();
        let mut screen = VinEntryScreen::new(ctx);

        screen.handle_key(ctrl('s'));
        type_str(&mut screen, "abc");
        assert_eq!(screen.value(), "");
    }

    #[tokio::test]
    async fn test_render_shows_counter() {
        let (ctx, _rx) = context();
        let mut screen = VinEntryScreen::new(ctx);
        type_str(&mut screen, "1HGBH");

        let text = render_text(|area, buf| (&screen).render(area, buf), 70, 24);
        assert!(text.contains("5/17"));
        assert!(text.contains("incomplete"));
        assert!(text.contains("What is a VIN?"));
    }

    #[tokio::test]
    async fn test_render_shows_scan_and_proceed_buttons() {
        let (ctx, _rx) = context();
        let mut screen = VinEntryScreen::new(ctx);

        let text = render_text(|area, buf| (&screen).render(area, buf), 70, 24);
        assert!(text.contains("Scan VIN"));
        assert!(text.contains("Proceed"));
        assert!(!text.contains("▸ Proceed"));

        type_str(&mut screen, "1HGBH41JXMN109186");
        let text = render_text(|area, buf| (&screen).render(area, buf), 70, 24);
        assert!(text.contains("▸ Proceed"));
        assert!(text.contains("valid length"));
    }

    #[tokio::test]
    async fn test_blanks_are_dropped_while_typing() {
        let (ctx, _rx) = context();
        let mut screen = VinEntryScreen::new(ctx);

        type_str(&mut screen, "1hg bh41 jxmn109186");
        assert_eq!(screen.value(), "1HGBH41JXMN109186");
        assert!(screen.can_proceed());
    }
}
