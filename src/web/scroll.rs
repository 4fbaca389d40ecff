//! Header `scrolled` class, driven by a trailing debounce on window scroll.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use web_sys::Event;

use crate::util::debounce::Debounce;
use crate::util::scroll::{HEADER_SELECTOR, SCROLLED_CLASS, ScrollConfig, header_scrolled};
use crate::web::dom::{self, DomError, Listener};

pub fn install(config: ScrollConfig) -> Result<Listener, DomError> {
    let window = dom::window()?;
    let debounce = Rc::new(RefCell::new(Debounce::<f64>::new()));
    let pending: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));

    let source = window.clone();
    Listener::new(&window, "scroll", move |_: Event| {
        let offset = source.scroll_y().unwrap_or(0.0);
        let ticket = debounce.borrow_mut().push(offset);
        let debounce = Rc::clone(&debounce);
        let timeout = Timeout::new(config.debounce_ms, move || {
            if let Some(offset) = debounce.borrow_mut().settle(ticket) {
                apply_header(header_scrolled(offset, config.header_threshold));
            }
        });
        // Replacing the handle drops, and so cancels, the previous timer.
        pending.borrow_mut().replace(timeout);
    })
}

fn apply_header(scrolled: bool) {
    let Ok(document) = dom::document() else {
        return;
    };
    let Some(header) = dom::query(&document, HEADER_SELECTOR) else {
        return;
    };
    let classes = header.class_list();
    let result = if scrolled { classes.add_1(SCROLLED_CLASS) } else { classes.remove_1(SCROLLED_CLASS) };
    if let Err(e) = result {
        log::debug!("header scroll class update failed: {e:?}");
    }
}
