//! Leptos components mounted onto the static page.
//!
//! SYSTEM CONTEXT
//! ==============
//! The storefront markup is server-authored HTML. Only the overlays that the
//! page builds at runtime (notification banner, search modal) are rendered
//! here; each host is mounted once at the end of `<body>` and reacts to its
//! state signal.

pub mod notification;
pub mod search_modal;
