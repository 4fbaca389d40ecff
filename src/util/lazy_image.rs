//! Deferred image source resolution.

#[cfg(test)]
#[path = "lazy_image_test.rs"]
mod lazy_image_test;

/// Images opted into deferred loading.
pub const LAZY_IMAGE_SELECTOR: &str = r#"img[loading="lazy"]"#;
/// Marker class removed once the real source is assigned.
pub const LAZY_CLASS: &str = "lazy";
pub const DEFERRED_SOURCE_ATTR: &str = "data-src";

/// Source to assign when an image enters the viewport.
///
/// Uses the deferred source when it is present and non-empty, otherwise
/// keeps the current one.
pub fn resolve_source(deferred: Option<&str>, current: &str) -> String {
    deferred.filter(|src| !src.is_empty()).unwrap_or(current).to_owned()
}
