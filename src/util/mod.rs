//! Utility helpers shared across the page components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules hold page geometry, selectors, and browser storage so the
//! DOM wiring in `web` stays a thin mapping from events to these helpers.

pub mod debounce;
pub mod hover;
pub mod lazy_image;
pub mod preference;
pub mod ready;
pub mod scroll;
pub mod timer;
