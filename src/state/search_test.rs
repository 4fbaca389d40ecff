use super::*;

fn opened() -> (SearchState, u64) {
    let mut state = SearchState::default();
    let id = state.open();
    state.reveal(id);
    (state, id)
}

#[test]
fn open_inserts_hidden_empty_modal() {
    let mut state = SearchState::default();
    let id = state.open();
    assert!(state.is_open());
    assert!(!state.is_visible(id));
    assert_eq!(state.query(id), Some(""));
}

#[test]
fn reveal_makes_modal_visible() {
    let (state, id) = opened();
    assert!(state.is_visible(id));
}

#[test]
fn empty_query_is_rejected_and_modal_stays_open() {
    for raw in ["", " ", "\t", "   \n  "] {
        let (mut state, id) = opened();
        state.set_query(id, raw);
        let outcome = state.submit(id);
        assert_eq!(outcome, SubmitOutcome::Rejected, "query {raw:?}");
        assert_eq!(outcome.message(), None);
        assert!(state.is_open());
        assert!(state.is_visible(id));
    }
}

#[test]
fn submit_trims_and_starts_closing() {
    let (mut state, id) = opened();
    state.set_query(id, "  zelda  ");
    let outcome = state.submit(id);
    assert_eq!(outcome, SubmitOutcome::Accepted { query: "zelda".to_owned() });
    assert_eq!(outcome.message().as_deref(), Some("Searching for: zelda"));
    assert!(!state.is_visible(id));
    assert!(state.detach(id));
    assert!(!state.is_open());
}

#[test]
fn suggestion_copies_label_and_submits() {
    let (mut state, id) = opened();
    let outcome = state.pick_suggestion(id, "Xbox Series X");
    assert_eq!(state.query(id), Some("Xbox Series X"));
    assert_eq!(outcome.message().as_deref(), Some("Searching for: Xbox Series X"));
    assert!(!state.is_visible(id));
}

#[test]
fn default_suggestions_are_the_popular_searches() {
    assert_eq!(DEFAULT_SUGGESTIONS.len(), 5);
    assert!(DEFAULT_SUGGESTIONS.contains(&"Xbox Series X"));
}

#[test]
fn begin_close_then_detach() {
    let (mut state, id) = opened();
    assert!(state.begin_close(id));
    assert!(state.is_open());
    assert!(state.detach(id));
    assert!(!state.is_open());
    assert!(!state.detach(id));
}

#[test]
fn reopening_replaces_modal_and_ignores_old_timers() {
    let (mut state, first) = opened();
    state.begin_close(first);
    let second = state.open();
    assert_ne!(first, second);

    // The first modal's detach timer fires after the second opened.
    assert!(!state.detach(first));
    assert!(state.is_open());
    assert!(!state.reveal(first));
    assert!(state.reveal(second));
}

#[test]
fn submit_unknown_id_is_rejected() {
    let (mut state, id) = opened();
    state.set_query(id, "mario");
    assert_eq!(state.submit(id + 1), SubmitOutcome::Rejected);
    assert!(state.is_visible(id));
}
