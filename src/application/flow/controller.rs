//! Screen-flow controller.

use tracing::{debug, info, warn};

use crate::domain::entities::{NavItem, Screen, Session, Vin};

use super::{FlowEvent, transition};

/// Outcome of dispatching an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The event was applied.
    Applied {
        /// Screen before the event.
        from: Screen,
        /// Screen after the event.
        to: Screen,
    },
    /// The event is not legal for the current screen; the session is unchanged.
    Ignored,
}

impl Transition {
    /// Returns whether the current screen changed.
    #[must_use]
    pub fn changed_screen(self) -> bool {
        matches!(self, Self::Applied { from, to } if from != to)
    }
}

/// Owns the session and applies transitions in response to screen events.
#[derive(Debug, Default)]
pub struct FlowController {
    session: Session,
}

impl FlowController {
    /// Creates a controller at the splash screen.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a controller for an existing session.
    #[must_use]
    pub const fn with_session(session: Session) -> Self {
        Self { session }
    }

    /// Returns the session.
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Returns the current screen.
    #[must_use]
    pub const fn current_screen(&self) -> Screen {
        self.session.current_screen()
    }

    /// Applies an event to the session.
    pub fn dispatch(&mut self, event: FlowEvent) -> Transition {
        let from = self.session.current_screen();
        let label = event.to_string();

        match transition::apply(self.session.clone(), event) {
            Some(next) => {
                let to = next.current_screen();
                self.session = next;
                if from == to {
                    debug!(screen = %to, event = %label, "Event kept current screen");
                } else {
                    info!(from = %from, to = %to, event = %label, "Screen transition");
                }
                Transition::Applied { from, to }
            }
            None => {
                warn!(screen = %from, event = %label, "Event not legal for current screen");
                Transition::Ignored
            }
        }
    }

    /// Splash finished.
    pub fn complete(&mut self) -> Transition {
        self.dispatch(FlowEvent::Complete)
    }

    /// Welcome: start audit.
    pub fn start_audit(&mut self) -> Transition {
        self.dispatch(FlowEvent::StartAudit)
    }

    /// Welcome: learn more.
    pub fn learn_more(&mut self) -> Transition {
        self.dispatch(FlowEvent::LearnMore)
    }

    /// Go back one step.
    pub fn back(&mut self) -> Transition {
        self.dispatch(FlowEvent::Back)
    }

    /// Continue to the next step.
    pub fn proceed(&mut self) -> Transition {
        self.dispatch(FlowEvent::Proceed)
    }

    /// VIN entry: continue with `vin`.
    pub fn proceed_with_vin(&mut self, vin: Vin) -> Transition {
        self.dispatch(FlowEvent::ProceedWithVin(vin))
    }

    /// Engine recording finished.
    pub fn analysis_complete(&mut self) -> Transition {
        self.dispatch(FlowEvent::AnalysisComplete)
    }

    /// Report: return home and forget the VIN.
    pub fn go_home(&mut self) -> Transition {
        self.dispatch(FlowEvent::GoHome)
    }

    /// Past audits: start a new audit.
    pub fn start_new(&mut self) -> Transition {
        self.dispatch(FlowEvent::StartNew)
    }

    /// Navigation bar shortcut.
    pub fn jump(&mut self, item: NavItem) -> Transition {
        self.dispatch(FlowEvent::Jump(item))
    }
}
