//! web-sys bindings and the WASM entry point.
//!
//! SYSTEM CONTEXT
//! ==============
//! The script loads before the DOM is parsed. The marker-class observer is
//! attached immediately so it sees the controller's first attribute write;
//! every other feature starts on `DOMContentLoaded` (or at once if the
//! document has already loaded).
//!
//! Callbacks registered here live for the page lifetime; their closures are
//! leaked with `forget` on purpose.


mod bulletin;
mod countdown;
mod fade;
mod snow;
mod theme;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, DocumentReadyState, Element, NodeList, Window};

use crate::app::{Feature, PageSession, SetupError};
use crate::config::{CONFIG_ELEMENT_ID, PageConfig};

impl From<JsValue> for SetupError {
    fn from(e: JsValue) -> Self {
        Self::Js(js_message(&e))
    }
}

/// WASM entry point.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    if console_log::init_with_level(level).is_err() {
        log::debug!("logger already installed");
    }

    let Ok(document) = document() else {
        return;
    };
    let mut session = PageSession::new(load_config(&document));
    session.start(Feature::ThemeObserver, theme::observe_marker_class);

    if let Err(e) = on_dom_ready(&document, move || start_page(session)) {
        log::error!("page enhancements not started: {e}");
    }
}

fn start_page(mut session: PageSession) {
    session.start(Feature::Theme, theme::mount);
    session.start(Feature::Countdown, countdown::mount);
    session.start(Feature::ScrollFade, fade::mount);
    session.start(Feature::Bulletin, bulletin::mount);
    if session.config().snow.enabled {
        session.start(Feature::Snow, snow::mount);
    } else {
        session.disable(Feature::Snow);
    }

    let report = session.report();
    log::info!("page enhancements started: {} ok, {} failed", report.started().len(), report.failures().len());
}

fn load_config(document: &Document) -> PageConfig {
    document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content())
        .map_or_else(PageConfig::default, |raw| PageConfig::from_json_or_default(&raw))
}

fn on_dom_ready(document: &Document, run: impl FnOnce() + 'static) -> Result<(), SetupError> {
    if waits_for_dom(document.ready_state()) {
        let callback = Closure::once_into_js(run);
        document.add_event_listener_with_callback("DOMContentLoaded", callback.unchecked_ref())?;
    } else {
        run();
    }
    Ok(())
}

/// Only a document still parsing will fire `DOMContentLoaded` later.
fn waits_for_dom(state: DocumentReadyState) -> bool {
    state == DocumentReadyState::Loading
}

pub(crate) fn window() -> Result<Window, SetupError> {
    web_sys::window().ok_or(SetupError::NoWindow)
}

pub(crate) fn document() -> Result<Document, SetupError> {
    window()?.document().ok_or(SetupError::NoDocument)
}

pub(crate) fn missing(what: &'static str, selector: &str) -> SetupError {
    SetupError::MissingElement { what, selector: selector.to_owned() }
}

/// Collect the element nodes of a `querySelectorAll` result.
pub(crate) fn elements(nodes: &NodeList) -> Vec<Element> {
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Best-effort readable text for a thrown JavaScript value.
pub(crate) fn js_message(value: &JsValue) -> String {
    if let Some(s) = value.as_string() {
        return s;
    }
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    format!("{value:?}")
}
