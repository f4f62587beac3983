//! Screen identifiers and navigation bar targets.

use std::fmt;

/// One discrete full-viewport view in the audit flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Screen {
    /// Logo and loading progress.
    #[default]
    Splash,
    /// Landing hub.
    Welcome,
    /// VIN input.
    VinEntry,
    /// Engine sound capture.
    EngineRecording,
    /// Engine health findings.
    EngineAnalysis,
    /// Listing cross-check.
    ListingVerification,
    /// Combined vehicle report.
    DashboardReport,
    /// Audit history and settings hub.
    PastAudits,
}

impl Screen {
    /// Every screen, in flow order.
    pub const ALL: [Self; 8] = [
        Self::Splash,
        Self::Welcome,
        Self::VinEntry,
        Self::EngineRecording,
        Self::EngineAnalysis,
        Self::ListingVerification,
        Self::DashboardReport,
        Self::PastAudits,
    ];

    /// Returns the kebab-case tag.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Splash => "splash",
            Self::Welcome => "welcome",
            Self::VinEntry => "vin-entry",
            Self::EngineRecording => "engine-recording",
            Self::EngineAnalysis => "engine-analysis",
            Self::ListingVerification => "listing-verification",
            Self::DashboardReport => "dashboard-report",
            Self::PastAudits => "past-audits",
        }
    }

    /// Returns whether the navigation bar is visible on this screen.
    #[must_use]
    pub const fn shows_nav_bar(self) -> bool {
        !matches!(self, Self::Splash | Self::Welcome)
    }

    /// Returns whether the screen is a step of an audit in progress.
    #[must_use]
    pub const fn is_audit_step(self) -> bool {
        matches!(
            self,
            Self::VinEntry
                | Self::EngineRecording
                | Self::EngineAnalysis
                | Self::ListingVerification
                | Self::DashboardReport
        )
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Navigation bar entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavItem {
    /// Jump to the welcome hub.
    Home,
    /// Jump to VIN entry.
    Audit,
    /// Jump to past audits.
    History,
    /// Jump to the profile view, currently shared with past audits.
    Profile,
}

impl NavItem {
    /// Bar entries in display order.
    pub const ALL: [Self; 4] = [Self::Home, Self::Audit, Self::History, Self::Profile];

    /// Returns display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Audit => "Audit",
            Self::History => "History",
            Self::Profile => "Profile",
        }
    }

    /// Returns the screen a tap on this entry jumps to.
    #[must_use]
    pub const fn target(self) -> Screen {
        match self {
            Self::Home => Screen::Welcome,
            Self::Audit => Screen::VinEntry,
            Self::History | Self::Profile => Screen::PastAudits,
        }
    }

    /// Returns whether the entry is highlighted while `current` is shown.
    #[must_use]
    pub fn is_active(self, current: Screen) -> bool {
        match self {
            Self::Audit => current.is_audit_step(),
            _ => self.target() == current,
        }
    }
}
