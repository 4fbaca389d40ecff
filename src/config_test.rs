use super::*;

#[test]
fn defaults_match_page_behavior() {
    let c = SiteConfig::default();
    assert_eq!(c.storage_key, "theme");
    assert_eq!(c.theme_transition_ms, 300);
    assert_eq!(c.welcome_message, "Welcome to GameHub! 🎮");
    assert_eq!(c.welcome_delay_ms, 1000);
    assert_eq!(c.search.reveal_ms, 100);
    assert_eq!(c.search.transition_ms, 300);
    assert_eq!(c.search.suggestions.len(), 5);
    assert_eq!(c.notification, NotificationTimings::default());
    assert!(c.validate().is_ok());
}

#[test]
fn empty_object_yields_defaults() {
    let c = SiteConfig::from_json("{}").expect("empty config should parse");
    assert_eq!(c, SiteConfig::default());
}

#[test]
fn partial_override_keeps_other_defaults() {
    let c = SiteConfig::from_json(r#"{ "storage_key": "gamehub-theme", "scroll": { "debounce_ms": 25 } }"#)
        .expect("partial config should parse");
    assert_eq!(c.storage_key, "gamehub-theme");
    assert_eq!(c.scroll.debounce_ms, 25);
    assert_eq!(c.scroll.header_threshold, 100.0);
    assert_eq!(c.welcome_delay_ms, 1000);
}

#[test]
fn nested_notification_override() {
    let c = SiteConfig::from_json(r#"{ "notification": { "display_ms": 8000 } }"#).expect("should parse");
    assert_eq!(c.notification.display_ms, 8000);
    assert_eq!(c.notification.reveal_ms, 100);
}

#[test]
fn malformed_json_is_rejected() {
    let err = SiteConfig::from_json("{ storage_key: ").expect_err("should fail");
    assert!(matches!(err, ConfigError::Json(_)));
}

#[test]
fn negative_timing_is_rejected_by_type() {
    let err = SiteConfig::from_json(r#"{ "welcome_delay_ms": -5 }"#).expect_err("should fail");
    assert!(matches!(err, ConfigError::Json(_)));
}

#[test]
fn blank_storage_key_is_rejected() {
    let err = SiteConfig::from_json(r#"{ "storage_key": "  " }"#).expect_err("should fail");
    assert!(matches!(err, ConfigError::Invalid { field: "storage_key", .. }));
}

#[test]
fn unknown_log_level_is_rejected() {
    let err = SiteConfig::from_json(r#"{ "log_level": "verbose" }"#).expect_err("should fail");
    assert!(matches!(err, ConfigError::Invalid { field: "log_level", .. }));
    assert!(err.to_string().contains("verbose"));
}

#[test]
fn empty_suggestions_are_rejected() {
    let err = SiteConfig::from_json(r#"{ "search": { "suggestions": [] } }"#).expect_err("should fail");
    assert!(matches!(err, ConfigError::Invalid { field: "search.suggestions", .. }));
}

#[test]
fn blank_suggestion_is_rejected() {
    let err = SiteConfig::from_json(r#"{ "search": { "suggestions": ["Controllers", " "] } }"#).expect_err("should fail");
    assert!(matches!(err, ConfigError::Invalid { field: "search.suggestions", .. }));
}
