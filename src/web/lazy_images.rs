//! Deferred image loading through `IntersectionObserver`.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{IntersectionObserver, IntersectionObserverEntry};

use crate::util::lazy_image::{DEFERRED_SOURCE_ATTR, LAZY_CLASS, LAZY_IMAGE_SELECTOR, resolve_source};
use crate::web::dom::{self, DomError};

/// Live observer. Dropping it disconnects the observer.
pub struct LazyImages {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl Drop for LazyImages {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Observe every `img[loading="lazy"]`. Returns `None` when the browser has
/// no `IntersectionObserver`; images then load however the markup says.
pub fn install() -> Result<Option<LazyImages>, DomError> {
    let window = dom::window()?;
    if !js_sys::Reflect::has(&window, &JsValue::from_str("IntersectionObserver")).unwrap_or(false) {
        log::info!("IntersectionObserver unavailable; lazy loading disabled");
        return Ok(None);
    }

    let document = dom::document()?;
    let images = dom::query_all(&document, LAZY_IMAGE_SELECTOR)?;

    let callback = Closure::wrap(Box::new(|entries: js_sys::Array, observer: IntersectionObserver| {
        for entry in entries.iter() {
            let entry: IntersectionObserverEntry = entry.unchecked_into();
            if !entry.is_intersecting() {
                continue;
            }
            let img = entry.target();
            let current = img.get_attribute("src").unwrap_or_default();
            let source = resolve_source(img.get_attribute(DEFERRED_SOURCE_ATTR).as_deref(), &current);
            if let Err(e) = img.set_attribute("src", &source) {
                log::warn!("failed to load deferred image: {e:?}");
            }
            if let Err(e) = img.class_list().remove_1(LAZY_CLASS) {
                log::debug!("failed to clear lazy marker: {e:?}");
            }
            observer.unobserve(&img);
        }
    }) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let observer = IntersectionObserver::new(callback.as_ref().unchecked_ref())?;
    for img in &images {
        observer.observe(img);
    }
    log::debug!("lazy loading {} images", images.len());
    Ok(Some(LazyImages { observer, _callback: callback }))
}
