//! Named events raised by screens.

use std::fmt;

use crate::domain::entities::{NavItem, Vin};

/// An event raised by the active screen, or by the navigation bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowEvent {
    /// Splash finished loading.
    Complete,
    /// Welcome: begin a new audit.
    StartAudit,
    /// Welcome: open the history hub.
    LearnMore,
    /// Return to the previous step.
    Back,
    /// Continue to the next step.
    Proceed,
    /// VIN entry: continue with a validated VIN.
    ProceedWithVin(Vin),
    /// Engine recording finished analysing.
    AnalysisComplete,
    /// Report: start over from the welcome hub.
    GoHome,
    /// Past audits: begin a new audit.
    StartNew,
    /// Navigation bar shortcut.
    Jump(NavItem),
}

impl FlowEvent {
    /// Returns the kebab-case event name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Complete => "complete",
            Self::StartAudit => "start-audit",
            Self::LearnMore => "learn-more",
            Self::Back => "back",
            Self::Proceed | Self::ProceedWithVin(_) => "proceed",
            Self::AnalysisComplete => "analysis-complete",
            Self::GoHome => "go-home",
            Self::StartNew => "start-new",
            Self::Jump(_) => "jump",
        }
    }
}

impl fmt::Display for FlowEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Jump(item) => write!(f, "jump({})", item.label()),
            other => f.write_str(other.name()),
        }
    }
}
