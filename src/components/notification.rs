//! Notification banner host and the handle used to raise banners.
//!
//! SYSTEM CONTEXT
//! ==============
//! `NotificationHost` is mounted once at the end of `<body>`. Other
//! components never touch the banner DOM; they call `Notifier::show`, which
//! updates `NotificationState` and schedules the reveal/hide/detach steps.

#[cfg(test)]
#[path = "notification_test.rs"]
mod notification_test;

use leptos::prelude::*;

use crate::state::notification::{Notification, NotificationKind, NotificationState, NotificationTimings};
use crate::util::timer::after;

/// Copyable handle for raising notifications.
#[derive(Clone, Copy)]
pub struct Notifier {
    state: RwSignal<NotificationState>,
    timings: NotificationTimings,
}

impl Notifier {
    pub fn new(timings: NotificationTimings) -> Self {
        Self { state: RwSignal::new(NotificationState::default()), timings }
    }

    pub fn state(self) -> RwSignal<NotificationState> {
        self.state
    }

    /// Replace the current banner with `message`.
    pub fn show(self, message: impl Into<String>, kind: NotificationKind) {
        let message = message.into();
        log::debug!("notification ({}): {message}", kind.as_str());
        let Some(id) = self.state.try_update(|s| s.show(message, kind)) else {
            return;
        };

        let state = self.state;
        after(self.timings.reveal_ms, move || {
            state.maybe_update(|s| s.reveal(id));
        });
        after(self.timings.display_ms, move || self.dismiss(id));
    }

    /// Hide banner `id` now and detach it after the transition.
    pub fn dismiss(self, id: u64) {
        if !self.state.try_update(|s| s.hide(id)).unwrap_or(false) {
            return;
        }
        let state = self.state;
        after(self.timings.transition_ms, move || {
            state.maybe_update(|s| s.detach(id));
        });
    }
}

/// Renders the current banner, if any.
#[component]
pub fn NotificationHost(notifier: Notifier) -> impl IntoView {
    let state = notifier.state();

    view! {
        <For
            each=move || state.with(|s| s.current().cloned())
            key=|n| n.id
            children=move |n: Notification| view! { <Banner notifier=notifier notification=n/> }
        />
    }
}

#[component]
fn Banner(notifier: Notifier, notification: Notification) -> impl IntoView {
    let state = notifier.state();
    let id = notification.id;

    view! {
        <div
            class=notification.kind.banner_class()
            class:show=move || state.with(|s| s.is_visible(id))
        >
            <div class="notification-content">
                <i class=notification.kind.icon_class()></i>
                <span>{notification.message}</span>
                <button
                    class="notification-close"
                    aria-label="Close notification"
                    on:click=move |_| notifier.dismiss(id)
                >
                    <i class="fas fa-times"></i>
                </button>
            </div>
        </div>
    }
}
