//! Theme controller wiring: toggle button, shortcut, system preference.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, KeyboardEvent, MediaQueryListEvent};

use crate::config::SiteConfig;
use crate::state::theme::{SYSTEM_DARK_QUERY, TRANSITION_CLASS, ThemeController, ThemeView, is_toggle_shortcut};
use crate::util::preference::LocalPreferences;
use crate::util::timer::after;
use crate::web::dom::{self, DomError, Listener};

const TOGGLE_ID: &str = "theme-toggle";
const TOGGLE_SELECTOR: &str = "#theme-toggle";
const TOGGLE_ICON_SELECTOR: &str = "#theme-toggle i";
const NAV_ACTIONS_SELECTOR: &str = ".nav-actions";
const META_SELECTOR: &str = r#"meta[name="theme-color"]"#;

type SharedController = Rc<RefCell<ThemeController<LocalPreferences>>>;

/// Resolve and apply the initial theme, create the toggle button, and bind
/// click, shortcut, and system-preference listeners.
pub fn install(config: &SiteConfig) -> Result<Vec<Listener>, DomError> {
    let window = dom::window()?;
    let document = dom::document()?;
    let system = window.match_media(SYSTEM_DARK_QUERY).ok().flatten();

    let controller = ThemeController::resolve(
        LocalPreferences::open(),
        &config.storage_key,
        system.as_ref().map(web_sys::MediaQueryList::matches),
    );
    log::info!("theme resolved to {}", controller.current().as_str());
    apply_view(&document, controller.view())?;
    create_toggle(&document, controller.view())?;

    let controller: SharedController = Rc::new(RefCell::new(controller));
    let transition_ms = config.theme_transition_ms;
    let mut listeners = Vec::with_capacity(3);

    {
        let controller = Rc::clone(&controller);
        listeners.push(Listener::new(&document, "click", move |ev: Event| {
            let hit = ev
                .target()
                .and_then(|t| t.dyn_into::<Element>().ok())
                .and_then(|el| el.closest(TOGGLE_SELECTOR).ok().flatten());
            if hit.is_some() {
                ev.prevent_default();
                toggle(&controller, transition_ms);
            }
        })?);
    }

    {
        let controller = Rc::clone(&controller);
        listeners.push(Listener::new(&document, "keydown", move |ev: Event| {
            let Some(key) = ev.dyn_ref::<KeyboardEvent>() else {
                return;
            };
            if is_toggle_shortcut(key.ctrl_key(), key.meta_key(), &key.key()) {
                ev.prevent_default();
                toggle(&controller, transition_ms);
            }
        })?);
    }

    match system {
        Some(media) => {
            listeners.push(Listener::new(&media, "change", move |ev: Event| {
                let Some(change) = ev.dyn_ref::<MediaQueryListEvent>() else {
                    return;
                };
                let Some(view) = controller.borrow_mut().on_system_change(change.matches()) else {
                    return;
                };
                log::info!("system color scheme changed; theme now {}", view.marker);
                if let Err(e) = dom::document().and_then(|d| apply_view(&d, view)) {
                    log::warn!("failed to apply system theme: {e}");
                }
            })?);
        }
        None => log::debug!("color scheme media query unavailable"),
    }

    Ok(listeners)
}

fn toggle(controller: &SharedController, transition_ms: u32) {
    let (view, ticket) = controller.borrow_mut().toggle();
    log::debug!("theme toggled to {}", view.marker);
    let result = dom::document().and_then(|d| apply_view(&d, view)).and_then(|()| {
        dom::body()?.class_list().add_1(TRANSITION_CLASS)?;
        Ok(())
    });
    if let Err(e) = result {
        log::warn!("failed to apply theme: {e}");
        return;
    }

    let controller = Rc::clone(controller);
    after(transition_ms, move || {
        if !controller.borrow_mut().end_transition(ticket) {
            return;
        }
        if let Err(e) = dom::body().and_then(|b| b.class_list().remove_1(TRANSITION_CLASS).map_err(DomError::from)) {
            log::debug!("failed to clear theme transition: {e}");
        }
    });
}

/// Mirror `view` onto `data-theme`, the toggle icon, and the meta tag.
fn apply_view(document: &Document, view: ThemeView) -> Result<(), DomError> {
    let root = document.document_element().ok_or(DomError::MissingElement("html"))?;
    root.set_attribute("data-theme", view.marker)?;

    if let Some(icon) = dom::query(document, TOGGLE_ICON_SELECTOR) {
        icon.set_class_name(view.toggle_icon);
    }

    let meta = match dom::query(document, META_SELECTOR) {
        Some(meta) => meta,
        None => {
            let meta = document.create_element("meta")?;
            meta.set_attribute("name", "theme-color")?;
            document.head().ok_or(DomError::MissingElement("head"))?.append_child(&meta)?;
            meta
        }
    };
    meta.set_attribute("content", view.meta_color)?;
    Ok(())
}

/// Append the toggle button to `.nav-actions`; skipped when the page has no
/// such container.
fn create_toggle(document: &Document, view: ThemeView) -> Result<(), DomError> {
    let Some(nav) = dom::query(document, NAV_ACTIONS_SELECTOR) else {
        log::debug!("no {NAV_ACTIONS_SELECTOR}; theme toggle button not created");
        return Ok(());
    };
    let button = document.create_element("button")?;
    button.set_id(TOGGLE_ID);
    button.set_class_name("theme-toggle");
    button.set_attribute("aria-label", "Toggle theme")?;

    let icon = document.create_element("i")?;
    icon.set_class_name(view.toggle_icon);
    button.append_child(&icon)?;
    nav.append_child(&button)?;
    Ok(())
}
