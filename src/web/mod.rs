//! Browser entry point and DOM wiring.
//!
//! SYSTEM CONTEXT
//! ==============
//! `start` runs when the wasm module loads. It waits for the document to be
//! parsed, then installs every page behavior in a fixed order. Each installer
//! returns the listener handles it registered; a failing installer is logged
//! and skipped so the rest of the page keeps working.

pub mod dom;
pub mod forms;
pub mod hover;
pub mod lazy_images;
pub mod navigation;
pub mod scroll;
pub mod search;
pub mod theme;

use leptos::mount::mount_to_body;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::wasm_bindgen;

use crate::components::notification::{NotificationHost, Notifier};
use crate::components::search_modal::{SearchModalHost, SearchOverlay};
use crate::config::{CONFIG_ELEMENT_ID, ConfigError, SiteConfig};
use crate::state::notification::NotificationKind;
use crate::util::timer::after;
use dom::{DomError, Listener};
use lazy_images::LazyImages;

/// Everything registered on the page. Dropping it detaches every listener
/// and disconnects the image observer.
#[derive(Default)]
pub struct Bindings {
    listeners: Vec<Listener>,
    lazy_images: Option<LazyImages>,
}

impl Bindings {
    fn keep<T: IntoIterator<Item = Listener>>(&mut self, component: &str, installed: Result<T, DomError>) {
        match installed {
            Ok(listeners) => {
                let before = self.listeners.len();
                self.listeners.extend(listeners);
                log::debug!("{component}: {} listeners", self.listeners.len() - before);
            }
            Err(e) => log::warn!("{component} disabled: {e}"),
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    pub fn observes_images(&self) -> bool {
        self.lazy_images.is_some()
    }
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    if let Err(e) = dom::on_ready(|| {
        let config = init();
        // The page never unloads its behaviors, so the bindings live as long
        // as the document.
        std::mem::forget(boot(&config));
    }) {
        web_sys::console::error_1(&format!("page wiring failed: {e}").into());
    }
}

/// Load the inline config and start the logger at its level.
fn init() -> SiteConfig {
    let (config, config_error) = match load_config() {
        Ok(Some(config)) => (config, None),
        Ok(None) => (SiteConfig::default(), None),
        Err(e) => (SiteConfig::default(), Some(e)),
    };
    let level = config.log_level.parse().unwrap_or(log::Level::Info);
    if let Err(e) = console_log::init_with_level(level) {
        web_sys::console::warn_1(&format!("logger already initialized: {e}").into());
    }
    if let Some(e) = config_error {
        log::warn!("ignoring inline config: {e}");
    }
    config
}

/// Install all page behaviors, in page order.
pub fn boot(config: &SiteConfig) -> Bindings {
    let notifier = Notifier::new(config.notification);
    let overlay = SearchOverlay::new(&config.search, notifier);
    mount_to_body(move || view! { <NotificationHost notifier=notifier/> });
    mount_to_body(move || view! { <SearchModalHost overlay=overlay/> });

    let mut bindings = Bindings::default();
    bindings.keep("theme", theme::install(config));
    bindings.keep("smooth scrolling", navigation::install(config.scroll.nav_margin));
    bindings.keep("form feedback", forms::install(notifier));
    match lazy_images::install() {
        Ok(images) => bindings.lazy_images = images,
        Err(e) => log::warn!("lazy loading disabled: {e}"),
    }
    bindings.keep("hover effects", hover::install(&config.card_selector));
    bindings.keep("search", search::install(overlay));
    bindings.keep("scroll effect", scroll::install(config.scroll).map(Some));

    if let Err(e) = dom::body().and_then(|b| b.class_list().add_1("loaded").map_err(DomError::from)) {
        log::warn!("failed to mark page loaded: {e}");
    }

    let welcome = config.welcome_message.clone();
    after(config.welcome_delay_ms, move || notifier.show(welcome, NotificationKind::Info));

    log::info!(
        "page ready: {} listeners, lazy images {}",
        bindings.listener_count(),
        if bindings.observes_images() { "observed" } else { "eager" }
    );
    bindings
}

/// Read the optional inline JSON config.
fn load_config() -> Result<Option<SiteConfig>, ConfigError> {
    let Some(script) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.dyn_into::<web_sys::HtmlScriptElement>().ok())
    else {
        return Ok(None);
    };
    let raw = script.text().unwrap_or_default();
    SiteConfig::from_json(&raw).map(Some)
}
