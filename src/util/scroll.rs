//! Scroll geometry for the header effect and in-page navigation.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

use serde::{Deserialize, Serialize};

/// Class toggled on the header once the page is scrolled.
pub const SCROLLED_CLASS: &str = "scrolled";
pub const HEADER_SELECTOR: &str = ".header";
pub const FRAGMENT_LINK_SELECTOR: &str = r##"a[href^="#"]"##;

/// Scroll-related tuning.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollConfig {
    /// Quiet period before the header effect runs.
    pub debounce_ms: u32,
    /// Vertical offset beyond which the header counts as scrolled.
    pub header_threshold: f64,
    /// Gap kept between the fixed header and a navigation target.
    pub nav_margin: f64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self { debounce_ms: 10, header_threshold: 100.0, nav_margin: 20.0 }
    }
}

/// Whether the header should carry the `scrolled` class at `offset`.
pub fn header_scrolled(offset: f64, threshold: f64) -> bool {
    offset > threshold
}

/// Window offset that puts `target_top` just below a header of
/// `header_height`.
pub fn nav_scroll_target(target_top: f64, header_height: f64, margin: f64) -> f64 {
    target_top - header_height - margin
}

/// Selector for the element an in-page link points at.
///
/// Returns `None` for a bare `#` or anything that is not a fragment.
pub fn fragment_selector(href: &str) -> Option<&str> {
    let id = href.strip_prefix('#')?;
    if id.trim().is_empty() {
        return None;
    }
    Some(href)
}
