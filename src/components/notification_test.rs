use super::*;

// Outside the browser build `after` drops its callback, so only the
// synchronous half of each operation runs here. Scheduled steps are driven
// by hand through the state signal.

fn notifier() -> Notifier {
    Notifier::new(NotificationTimings::default())
}

fn current(notifier: Notifier) -> Option<Notification> {
    notifier.state().with_untracked(|s| s.current().cloned())
}

// =============================================================
// show
// =============================================================

#[test]
fn show_inserts_hidden_banner() {
    let n = notifier();
    n.show("Welcome to GameHub!", NotificationKind::Success);

    let banner = current(n).expect("banner");
    assert_eq!(banner.message, "Welcome to GameHub!");
    assert_eq!(banner.kind, NotificationKind::Success);
    assert!(!banner.visible);
}

#[test]
fn show_replaces_previous_banner() {
    let n = notifier();
    n.show("first", NotificationKind::Info);
    let first = current(n).expect("first").id;
    n.show("second", NotificationKind::Error);

    let banner = current(n).expect("second");
    assert_ne!(banner.id, first);
    assert_eq!(banner.message, "second");
    assert_eq!(banner.kind, NotificationKind::Error);
}

// =============================================================
// dismiss
// =============================================================

#[test]
fn dismiss_hides_current_banner() {
    let n = notifier();
    n.show("hello", NotificationKind::Info);
    let id = current(n).expect("banner").id;
    n.state().update(|s| {
        s.reveal(id);
    });

    n.dismiss(id);

    let banner = current(n).expect("still attached until the transition ends");
    assert_eq!(banner.id, id);
    assert!(!banner.visible);
}

#[test]
fn dismiss_with_stale_id_leaves_successor_alone() {
    let n = notifier();
    n.show("old", NotificationKind::Info);
    let old = current(n).expect("old").id;
    n.show("new", NotificationKind::Success);
    let new = current(n).expect("new").id;
    n.state().update(|s| {
        s.reveal(new);
    });

    // The display timer of the purged banner fires late.
    n.dismiss(old);

    let banner = current(n).expect("successor");
    assert_eq!(banner.id, new);
    assert_eq!(banner.message, "new");
    assert!(banner.visible);
}

#[test]
fn dismiss_on_empty_slot_is_noop() {
    let n = notifier();
    n.dismiss(7);
    assert!(current(n).is_none());
}
