use super::*;

#[test]
fn single_field_submission_reports_success() {
    let submission = FormSubmission::from_fields([("name", "A")]);
    assert_eq!(submission.field("name"), Some("A"));
    assert_eq!(submission.notification(), ("Form submitted successfully!", NotificationKind::Success));
}

#[test]
fn empty_form_still_reports_success() {
    let submission = FormSubmission::from_fields(Vec::<(String, String)>::new());
    assert!(submission.fields().is_empty());
    assert_eq!(submission.notification().1, NotificationKind::Success);
}

#[test]
fn repeated_field_keeps_last_value() {
    let submission = FormSubmission::from_fields([("topic", "games"), ("topic", "consoles")]);
    assert_eq!(submission.fields().len(), 1);
    assert_eq!(submission.field("topic"), Some("consoles"));
}

#[test]
fn to_json_serializes_fields() {
    let submission = FormSubmission::from_fields([("email", "a@b.c")]);
    let parsed: serde_json::Value = serde_json::from_str(&submission.to_json()).expect("valid json");
    assert_eq!(parsed, serde_json::json!({ "email": "a@b.c" }));
}
