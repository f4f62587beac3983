use crossterm::event::KeyEvent;
use std::borrow::Cow;

use crate::domain::entities::NavItem;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Quit,
    Back,
    Confirm,
    Navigate,

    // Navigation bar
    JumpHome,
    JumpAudit,
    JumpHistory,
    JumpProfile,

    // Screen specific
    Record,
    Stop,
    Scan,
    InsertDemo,
    Download,
    Share,
}

impl Action {
    /// Returns the navigation bar entry a jump action targets.
    #[must_use]
    pub const fn nav_item(self) -> Option<NavItem> {
        match self {
            Self::JumpHome => Some(NavItem::Home),
            Self::JumpAudit => Some(NavItem::Audit),
            Self::JumpHistory => Some(NavItem::History),
            Self::JumpProfile => Some(NavItem::Profile),
            _ => None,
        }
    }

    /// Returns the jump action for a navigation bar entry.
    #[must_use]
    pub const fn jump_to(item: NavItem) -> Self {
        match item {
            NavItem::Home => Self::JumpHome,
            NavItem::Audit => Self::JumpAudit,
            NavItem::History => Self::JumpHistory,
            NavItem::Profile => Self::JumpProfile,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keybind {
    pub key: KeyEvent,
    pub action: Action,
    pub label: Cow<'static, str>,
    pub key_display: Option<Cow<'static, str>>,
}

impl Keybind {
    pub fn new(key: KeyEvent, action: Action, label: impl Into<Cow<'static, str>>) -> Self {
        Self {
            key,
            action,
            label: label.into(),
            key_display: None,
        }
    }

    #[must_use]
    pub fn with_key_display(mut self, display: impl Into<Cow<'static, str>>) -> Self {
        self.key_display = Some(display.into());
        self
    }
}
