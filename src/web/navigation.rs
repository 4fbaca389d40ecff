//! Smooth scrolling for in-page fragment links.

use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlElement, ScrollBehavior, ScrollToOptions};

use crate::util::scroll::{FRAGMENT_LINK_SELECTOR, HEADER_SELECTOR, fragment_selector, nav_scroll_target};
use crate::web::dom::{self, DomError, Listener};

/// Intercept every `a[href^="#"]` click and glide to its target, leaving
/// room for the fixed header.
pub fn install(nav_margin: f64) -> Result<Vec<Listener>, DomError> {
    let document = dom::document()?;
    let links = dom::query_all(&document, FRAGMENT_LINK_SELECTOR)?;
    log::debug!("smooth scrolling bound to {} links", links.len());

    links
        .into_iter()
        .map(|link| {
            let href = link.get_attribute("href").unwrap_or_default();
            Listener::new(&link, "click", move |ev: Event| {
                ev.prevent_default();
                if let Err(e) = scroll_to_fragment(&href, nav_margin) {
                    log::debug!("smooth scroll to {href} skipped: {e}");
                }
            })
        })
        .collect()
}

fn scroll_to_fragment(href: &str, nav_margin: f64) -> Result<(), DomError> {
    let selector = fragment_selector(href).ok_or(DomError::MissingElement("fragment target"))?;
    let document = dom::document()?;
    let target = dom::query(&document, selector)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        .ok_or(DomError::MissingElement("fragment target"))?;

    let header_height = dom::offset_height(&document, HEADER_SELECTOR);
    let top = nav_scroll_target(f64::from(target.offset_top()), header_height, nav_margin);

    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    dom::window()?.scroll_to_with_scroll_to_options(&options);
    Ok(())
}
