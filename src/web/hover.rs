//! Card lift effect on pointer enter/leave.

use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlElement};

use crate::util::hover::HoverPhase;
use crate::web::dom::{self, DomError, Listener};

pub fn install(card_selector: &str) -> Result<Vec<Listener>, DomError> {
    let document = dom::document()?;
    let cards: Vec<HtmlElement> = dom::query_all(&document, card_selector)?
        .into_iter()
        .filter_map(|el| el.dyn_into::<HtmlElement>().ok())
        .collect();
    log::debug!("hover effect bound to {} cards", cards.len());

    let mut listeners = Vec::with_capacity(cards.len() * 2);
    for card in cards {
        for phase in [HoverPhase::Enter, HoverPhase::Leave] {
            let target = card.clone();
            listeners.push(Listener::new(&card, phase.event(), move |_: Event| {
                if let Err(e) = target.style().set_property("transform", phase.transform()) {
                    log::debug!("hover transform failed: {e:?}");
                }
            })?);
        }
    }
    Ok(listeners)
}
