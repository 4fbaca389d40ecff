//! Search overlay: modal dialog with a text input and suggestion tags.
//!
//! DESIGN
//! ======
//! `SearchOverlay` is the controller handle (open, close, submit) and
//! `SearchModalHost` renders whatever modal `SearchState` currently holds.
//! The host is mounted once; opening the overlay only mutates state.

#[cfg(test)]
#[path = "search_modal_test.rs"]
mod search_modal_test;

use leptos::prelude::*;

use crate::components::notification::Notifier;
use crate::config::SearchConfig;
use crate::state::notification::NotificationKind;
use crate::state::search::{SEARCH_PLACEHOLDER, SEARCH_TITLE, SUGGESTIONS_TITLE, SearchState, SubmitOutcome};
use crate::util::timer::after;

/// Copyable controller for the search modal.
#[derive(Clone, Copy)]
pub struct SearchOverlay {
    state: RwSignal<SearchState>,
    suggestions: StoredValue<Vec<String>>,
    notifier: Notifier,
    reveal_ms: u32,
    transition_ms: u32,
}

impl SearchOverlay {
    pub fn new(config: &SearchConfig, notifier: Notifier) -> Self {
        Self {
            state: RwSignal::new(SearchState::default()),
            suggestions: StoredValue::new(config.suggestions.clone()),
            notifier,
            reveal_ms: config.reveal_ms,
            transition_ms: config.transition_ms,
        }
    }

    pub fn state(self) -> RwSignal<SearchState> {
        self.state
    }

    pub fn suggestions(self) -> Vec<String> {
        self.suggestions.get_value()
    }

    /// Insert a new modal and reveal it after the configured delay.
    pub fn open(self) {
        let Some(id) = self.state.try_update(SearchState::open) else {
            return;
        };
        let state = self.state;
        after(self.reveal_ms, move || {
            state.maybe_update(|s| s.reveal(id));
        });
    }

    /// Close modal `id`: hide now, detach after the transition.
    pub fn close(self, id: u64) {
        if self.state.try_update(|s| s.begin_close(id)).unwrap_or(false) {
            self.schedule_detach(id);
        }
    }

    pub fn submit(self, id: u64) {
        let outcome = self.state.try_update(|s| s.submit(id)).unwrap_or(SubmitOutcome::Rejected);
        self.finish(id, &outcome);
    }

    pub fn pick(self, id: u64, label: &str) {
        let outcome = self.state.try_update(|s| s.pick_suggestion(id, label)).unwrap_or(SubmitOutcome::Rejected);
        self.finish(id, &outcome);
    }

    fn finish(self, id: u64, outcome: &SubmitOutcome) {
        let Some(message) = outcome.message() else {
            return;
        };
        self.notifier.show(message, NotificationKind::Info);
        self.schedule_detach(id);
    }

    fn schedule_detach(self, id: u64) {
        let state = self.state;
        after(self.transition_ms, move || {
            state.maybe_update(|s| s.detach(id));
        });
    }
}

/// Renders the open search modal, if any.
#[component]
pub fn SearchModalHost(overlay: SearchOverlay) -> impl IntoView {
    let state = overlay.state();

    view! {
        <For
            each=move || state.with(|s| s.modal().map(|m| m.id))
            key=|id| *id
            children=move |id: u64| view! { <SearchDialog overlay=overlay id=id/> }
        />
    }
}

#[component]
fn SearchDialog(overlay: SearchOverlay, id: u64) -> impl IntoView {
    let state = overlay.state();
    let input_ref = NodeRef::<leptos::html::Input>::new();

    // Focus the input once the reveal step has run.
    #[cfg(feature = "csr")]
    Effect::new(move || {
        if !state.with(|s| s.is_visible(id)) {
            return;
        }
        if let Some(input) = input_ref.get_untracked() {
            if let Err(e) = input.focus() {
                log::debug!("search input focus failed: {e:?}");
            }
        }
    });

    let tags = overlay
        .suggestions()
        .into_iter()
        .map(|label| {
            let picked = label.clone();
            view! {
                <span class="suggestion-tag" on:click=move |_| overlay.pick(id, &picked)>
                    {label}
                </span>
            }
        })
        .collect_view();

    view! {
        <div
            class="search-modal"
            class:show=move || state.with(|s| s.is_visible(id))
            on:click=move |_| overlay.close(id)
        >
            <div class="search-modal-content" on:click=move |ev| ev.stop_propagation()>
                <div class="search-header">
                    <h3>{SEARCH_TITLE}</h3>
                    <button class="search-close" aria-label="Close search" on:click=move |_| overlay.close(id)>
                        <i class="fas fa-times"></i>
                    </button>
                </div>
                <div class="search-input-container">
                    <input
                        type="text"
                        class="search-input"
                        placeholder=SEARCH_PLACEHOLDER
                        node_ref=input_ref
                        prop:value=move || state.with(|s| s.query(id).unwrap_or_default().to_owned())
                        on:input=move |ev| state.update(|s| s.set_query(id, event_target_value(&ev)))
                        on:keypress=move |ev| {
                            if ev.key() == "Enter" {
                                overlay.submit(id);
                            }
                        }
                    />
                    <button class="search-submit" on:click=move |_| overlay.submit(id)>
                        <i class="fas fa-search"></i>
                    </button>
                </div>
                <div class="search-suggestions">
                    <h4>{SUGGESTIONS_TITLE}</h4>
                    <div class="suggestion-tags">{tags}</div>
                </div>
            </div>
        </div>
    }
}
