//! Page configuration with built-in defaults.
//!
//! The page may embed a JSON object in
//! `<script type="application/json" id="gamehub-config">`; any field it sets
//! overrides the default below. Everything is optional.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::state::notification::NotificationTimings;
use crate::state::search::DEFAULT_SUGGESTIONS;
use crate::state::theme::DEFAULT_STORAGE_KEY;
use crate::util::hover::CARD_SELECTOR;
use crate::util::scroll::ScrollConfig;

/// Id of the inline JSON configuration element.
pub const CONFIG_ELEMENT_ID: &str = "gamehub-config";

pub const DEFAULT_WELCOME_MESSAGE: &str = "Welcome to GameHub! 🎮";
pub const DEFAULT_LOG_LEVEL: &str = "info";

const LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid config value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Search overlay tuning.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Delay before the modal gets `show` and the input is focused.
    pub reveal_ms: u32,
    /// Close transition length; the modal detaches afterwards.
    pub transition_ms: u32,
    pub suggestions: Vec<String>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            reveal_ms: 100,
            transition_ms: 300,
            suggestions: DEFAULT_SUGGESTIONS.iter().map(|s| (*s).to_owned()).collect(),
        }
    }
}

/// Top-level page configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// `localStorage` key holding the theme.
    pub storage_key: String,
    pub theme_transition_ms: u32,
    pub welcome_message: String,
    pub welcome_delay_ms: u32,
    pub card_selector: String,
    pub log_level: String,
    pub notification: NotificationTimings,
    pub search: SearchConfig,
    pub scroll: ScrollConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            theme_transition_ms: 300,
            welcome_message: DEFAULT_WELCOME_MESSAGE.to_owned(),
            welcome_delay_ms: 1000,
            card_selector: CARD_SELECTOR.to_owned(),
            log_level: DEFAULT_LOG_LEVEL.to_owned(),
            notification: NotificationTimings::default(),
            search: SearchConfig::default(),
            scroll: ScrollConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Parse and validate an inline JSON override.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.storage_key.trim().is_empty() {
            return Err(invalid("storage_key", "must not be empty"));
        }
        if self.card_selector.trim().is_empty() {
            return Err(invalid("card_selector", "must not be empty"));
        }
        if !LOG_LEVELS.contains(&self.log_level.as_str()) {
            return Err(invalid("log_level", format!("unknown level '{}'", self.log_level)));
        }
        if !self.scroll.header_threshold.is_finite() {
            return Err(invalid("scroll.header_threshold", "must be finite"));
        }
        if !self.scroll.nav_margin.is_finite() {
            return Err(invalid("scroll.nav_margin", "must be finite"));
        }
        if self.search.suggestions.is_empty() {
            return Err(invalid("search.suggestions", "must list at least one suggestion"));
        }
        if self.search.suggestions.iter().any(|s| s.trim().is_empty()) {
            return Err(invalid("search.suggestions", "suggestions must not be blank"));
        }
        Ok(())
    }
}

fn invalid(field: &'static str, reason: impl Into<String>) -> ConfigError {
    ConfigError::Invalid { field, reason: reason.into() }
}
