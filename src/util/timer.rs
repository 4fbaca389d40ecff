//! One-shot timers.
//!
//! TRADE-OFFS
//! ==========
//! Scheduled callbacks are fire-and-forget. Callers that need to cancel keep
//! a `gloo_timers::callback::Timeout` themselves; state modules make stale
//! callbacks harmless by checking ids or tickets when they fire.

/// Run `f` once after `ms` milliseconds on the UI thread.
///
/// Outside the browser build there is no event loop and `f` is dropped.
pub fn after(ms: u32, f: impl FnOnce() + 'static) {
    #[cfg(feature = "csr")]
    {
        gloo_timers::callback::Timeout::new(ms, f).forget();
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (ms, f);
    }
}
