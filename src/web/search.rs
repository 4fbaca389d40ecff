//! Search link wiring.

use web_sys::Event;

use crate::components::search_modal::SearchOverlay;
use crate::web::dom::{self, DomError, Listener};

const SEARCH_LINK_SELECTOR: &str = r##"a[href="#search"]"##;

/// Open the overlay from the header's search link, if the page has one.
pub fn install(overlay: SearchOverlay) -> Result<Option<Listener>, DomError> {
    let document = dom::document()?;
    let Some(link) = dom::query(&document, SEARCH_LINK_SELECTOR) else {
        log::debug!("no search link on page");
        return Ok(None);
    };
    let listener = Listener::new(&link, "click", move |ev: Event| {
        ev.prevent_default();
        overlay.open();
    })?;
    Ok(Some(listener))
}
