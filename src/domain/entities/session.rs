//! Cross-screen session state.

use super::{Screen, Vin};

/// Minimal state threaded across screens: the current screen and the VIN
/// under audit.
///
/// Sessions are ephemeral and only live as long as the process.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Session {
    current_screen: Screen,
    vin: Option<Vin>,
}

impl Session {
    /// Creates a session at the splash screen with no VIN.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a session at an arbitrary point of the flow.
    #[must_use]
    pub fn at(current_screen: Screen, vin: Option<Vin>) -> Self {
        Self {
            current_screen,
            vin,
        }
    }

    /// Returns the current screen.
    #[must_use]
    pub const fn current_screen(&self) -> Screen {
        self.current_screen
    }

    /// Returns the VIN, if set.
    #[must_use]
    pub const fn vin(&self) -> Option<&Vin> {
        self.vin.as_ref()
    }

    /// Returns the VIN for display, empty when unset.
    #[must_use]
    pub fn vin_str(&self) -> &str {
        self.vin.as_ref().map_or("", Vin::as_str)
    }

    /// Returns a copy showing `screen`.
    #[must_use]
    pub fn with_screen(mut self, screen: Screen) -> Self {
        self.current_screen = screen;
        self
    }

    /// Returns a copy carrying `vin`.
    #[must_use]
    pub fn with_vin(mut self, vin: Option<Vin>) -> Self {
        self.vin = vin;
        self
    }
}
