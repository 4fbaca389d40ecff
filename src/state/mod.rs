//! Page component state.
//!
//! DESIGN
//! ======
//! Each interactive component owns one state model here. The models hold no
//! browser handles, so every rule (theme resolution, banner lifecycle,
//! search submission) is testable natively.

pub mod form;
pub mod notification;
pub mod search;
pub mod theme;
