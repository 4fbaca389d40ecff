//! Dark/light theme state and transition bookkeeping.
//!
//! DESIGN
//! ======
//! `ThemeController` owns the current theme and the preference store. Every
//! mutating operation returns the `ThemeView` the browser layer must mirror
//! onto the document (`data-theme`, toggle icon, `theme-color` meta tag), so
//! the DOM never drifts from the last value passed to `set_theme`.
//!
//! A theme resolved from the system preference or the built-in default is
//! applied without being persisted. Only `set_theme` (and therefore
//! `toggle`) writes to the store, which keeps the system-change listener
//! live until the user makes an explicit choice.
//!
//! TRADE-OFFS
//! ==========
//! Toggling adds a transient body class that a timer removes later. Rapid
//! toggles overlap; each toggle bumps a generation counter and only the
//! timer holding the newest ticket may remove the class.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::util::preference::PreferenceStore;

/// Key the theme is persisted under unless configured otherwise.
pub const DEFAULT_STORAGE_KEY: &str = "theme";

/// Media query consulted for the operating system preference.
pub const SYSTEM_DARK_QUERY: &str = "(prefers-color-scheme: dark)";

/// Body class present while a toggle transition runs.
pub const TRANSITION_CLASS: &str = "theme-transition";

/// Visual mode of the page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Parse a persisted value. Anything but `dark`/`light` is rejected.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }

    pub fn from_system(prefers_dark: bool) -> Self {
        if prefers_dark { Self::Dark } else { Self::Light }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Browser chrome color published through `<meta name="theme-color">`.
    pub fn meta_color(self) -> &'static str {
        match self {
            Self::Dark => "#212529",
            Self::Light => "#ffffff",
        }
    }

    /// Icon class for the toggle button: it shows the theme a click switches to.
    pub fn toggle_icon(self) -> &'static str {
        match self {
            Self::Dark => "fas fa-sun",
            Self::Light => "fas fa-moon",
        }
    }

    pub fn view(self) -> ThemeView {
        ThemeView { marker: self.as_str(), meta_color: self.meta_color(), toggle_icon: self.toggle_icon() }
    }
}

/// Everything the document must reflect for a given theme.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThemeView {
    /// Value of the `data-theme` attribute on `<html>`.
    pub marker: &'static str,
    pub meta_color: &'static str,
    pub toggle_icon: &'static str,
}

/// Identifies one toggle's transition window.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TransitionTicket(u64);

/// Returns `true` for the Ctrl/Cmd + J toggle shortcut.
pub fn is_toggle_shortcut(ctrl: bool, meta: bool, key: &str) -> bool {
    (ctrl || meta) && key == "j"
}

/// Theme state bound to a preference store.
pub struct ThemeController<S> {
    store: S,
    key: String,
    current: Theme,
    chosen: bool,
    transition_generation: u64,
    transition_active: bool,
}

impl<S: PreferenceStore> ThemeController<S> {
    /// Resolve the initial theme: persisted value, then the system
    /// preference when known, then dark.
    pub fn resolve(store: S, key: &str, system_prefers_dark: Option<bool>) -> Self {
        let current = store
            .get(key)
            .as_deref()
            .and_then(Theme::parse)
            .or_else(|| system_prefers_dark.map(Theme::from_system))
            .unwrap_or_default();
        Self { store, key: key.to_owned(), current, chosen: false, transition_generation: 0, transition_active: false }
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    pub fn view(&self) -> ThemeView {
        self.current.view()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// True once the user picked a theme, in this session or a persisted
    /// earlier one. The session flag covers stores that drop writes.
    pub fn has_explicit_choice(&self) -> bool {
        self.chosen || self.store.get(&self.key).as_deref().and_then(Theme::parse).is_some()
    }

    /// Switch to `theme` and persist it.
    pub fn set_theme(&mut self, theme: Theme) -> ThemeView {
        self.current = theme;
        self.chosen = true;
        self.store.set(&self.key, theme.as_str());
        self.view()
    }

    /// Switch to the opposite theme and open a transition window.
    pub fn toggle(&mut self) -> (ThemeView, TransitionTicket) {
        let view = self.set_theme(self.current.opposite());
        self.transition_generation += 1;
        self.transition_active = true;
        (view, TransitionTicket(self.transition_generation))
    }

    /// Close the transition window for `ticket`.
    ///
    /// Returns `true` when the caller should remove the transition class,
    /// i.e. when no newer toggle has started since `ticket` was issued.
    pub fn end_transition(&mut self, ticket: TransitionTicket) -> bool {
        if ticket.0 != self.transition_generation || !self.transition_active {
            return false;
        }
        self.transition_active = false;
        true
    }

    pub fn transition_active(&self) -> bool {
        self.transition_active
    }

    /// React to an operating-system color scheme change.
    ///
    /// Applies the system theme only while the user has made no choice.
    pub fn on_system_change(&mut self, prefers_dark: bool) -> Option<ThemeView> {
        if self.has_explicit_choice() {
            return None;
        }
        self.current = Theme::from_system(prefers_dark);
        Some(self.view())
    }
}
