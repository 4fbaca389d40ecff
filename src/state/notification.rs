//! Transient notification banner state.
//!
//! DESIGN
//! ======
//! At most one banner exists. `show` purges the current banner before
//! inserting the next one. Every banner carries an id, and each scheduled
//! step (reveal, hide, detach) names the id it was scheduled for, so timers
//! left behind by a purged banner turn into no-ops instead of touching its
//! successor.

#[cfg(test)]
#[path = "notification_test.rs"]
mod notification_test;

use serde::{Deserialize, Serialize};

/// Banner category; selects the icon and the CSS modifier class.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
    #[default]
    Info,
}

impl NotificationKind {
    /// Parse a kind given as a string, e.g. from markup or config. Unknown
    /// values fall back to `Info`. Rust callers pass the enum directly.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "success" => Self::Success,
            "error" => Self::Error,
            _ => Self::Info,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Info => "info",
        }
    }

    pub fn icon_class(self) -> &'static str {
        match self {
            Self::Success => "fas fa-check-circle",
            Self::Error => "fas fa-exclamation-circle",
            Self::Info => "fas fa-info-circle",
        }
    }

    /// Full class attribute of the banner root element.
    pub fn banner_class(self) -> String {
        format!("notification notification-{}", self.as_str())
    }
}

/// Banner lifecycle timings, in milliseconds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationTimings {
    /// Delay between insertion and the `show` class.
    pub reveal_ms: u32,
    /// Time on screen before the automatic hide.
    pub display_ms: u32,
    /// Hide transition length; the element detaches afterwards.
    pub transition_ms: u32,
}

impl Default for NotificationTimings {
    fn default() -> Self {
        Self { reveal_ms: 100, display_ms: 5000, transition_ms: 300 }
    }
}

/// One banner instance.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub message: String,
    pub kind: NotificationKind,
    pub visible: bool,
}

/// The single notification slot.
#[derive(Clone, Debug, Default)]
pub struct NotificationState {
    current: Option<Notification>,
    next_id: u64,
}

impl NotificationState {
    /// Replace whatever is on screen with a new, not yet visible banner.
    pub fn show(&mut self, message: impl Into<String>, kind: NotificationKind) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.current = Some(Notification { id, message: message.into(), kind, visible: false });
        id
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    pub fn is_visible(&self, id: u64) -> bool {
        self.get(id).is_some_and(|n| n.visible)
    }

    /// Add the visible state. Returns `false` when `id` is gone.
    pub fn reveal(&mut self, id: u64) -> bool {
        self.set_visible(id, true)
    }

    /// Start the hide transition. Returns `true` when the caller should
    /// schedule a detach for `id`.
    pub fn hide(&mut self, id: u64) -> bool {
        self.set_visible(id, false)
    }

    /// Remove the banner if it is still `id`.
    pub fn detach(&mut self, id: u64) -> bool {
        if self.get(id).is_none() {
            return false;
        }
        self.current = None;
        true
    }

    fn get(&self, id: u64) -> Option<&Notification> {
        self.current.as_ref().filter(|n| n.id == id)
    }

    fn set_visible(&mut self, id: u64, visible: bool) -> bool {
        match self.current.as_mut() {
            Some(n) if n.id == id => {
                n.visible = visible;
                true
            }
            _ => false,
        }
    }
}
