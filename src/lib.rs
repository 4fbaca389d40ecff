//! # gamehub-ui
//!
//! Client-side behavior for the GameHub storefront page, compiled to WASM
//! and attached to server-authored HTML: theme switching, smooth in-page
//! navigation, simulated form and search feedback, lazy images, card hover
//! effects, and the header scroll effect.
//!
//! `state`, `util`, and `config` are plain Rust and test natively. The
//! `csr` feature adds the Leptos overlays and the `web-sys` wiring in `web`.

pub mod components;
pub mod config;
pub mod state;
pub mod util;
#[cfg(feature = "csr")]
pub mod web;
