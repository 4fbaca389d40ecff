//! Document readiness.

/// `document.readyState` while the parser is still running.
pub const LOADING: &str = "loading";

/// True once the markup has been parsed (`interactive` or `complete`), so
/// startup may run immediately instead of waiting for `DOMContentLoaded`.
pub fn is_parsed(ready_state: &str) -> bool {
    ready_state != LOADING
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loading_waits_for_dom_content_loaded() {
        assert!(!is_parsed("loading"));
    }

    #[test]
    fn interactive_and_complete_run_immediately() {
        assert!(is_parsed("interactive"));
        assert!(is_parsed("complete"));
    }
}
