//! Browser host for the theme controller and marker-class observer.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, MediaQueryList, MediaQueryListEvent, MutationObserver, MutationObserverInit, Storage};

use super::{document, js_message, missing, window};
use crate::app::SetupError;
use crate::config::{PageConfig, ThemeConfig};
use crate::theme::{
    AttributeObserver, Icon, PreferenceStore, RootElement, StorageError, Theme, ThemeController, ThemeEvent,
    ToggleControl,
};

const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

/// `localStorage` under a fixed key.
pub struct LocalStorageStore {
    key: String,
}

impl LocalStorageStore {
    pub fn new(key: &str) -> Self {
        Self { key: key.to_owned() }
    }
}

fn local_storage() -> Result<Storage, StorageError> {
    let window = web_sys::window().ok_or(StorageError::Unavailable)?;
    match window.local_storage() {
        Ok(Some(storage)) => Ok(storage),
        Ok(None) => Err(StorageError::Unavailable),
        Err(e) => Err(StorageError::Access(js_message(&e))),
    }
}

impl PreferenceStore for LocalStorageStore {
    fn load(&self) -> Result<Option<Theme>, StorageError> {
        let raw = local_storage()?
            .get_item(&self.key)
            .map_err(|e| StorageError::Access(js_message(&e)))?;
        Ok(raw.and_then(|value| {
            let theme = Theme::parse(&value);
            if theme.is_none() {
                log::warn!("ignoring stored theme {value:?}");
            }
            theme
        }))
    }

    fn save(&mut self, theme: Theme) -> Result<(), StorageError> {
        local_storage()?
            .set_item(&self.key, theme.as_str())
            .map_err(|e| StorageError::Access(js_message(&e)))
    }
}

/// The `<html>` element.
pub struct DocumentRoot {
    element: Element,
    attribute: String,
    marker_class: String,
}

impl DocumentRoot {
    fn from_document(document: &Document, config: &ThemeConfig) -> Result<Self, SetupError> {
        let element = document.document_element().ok_or_else(|| missing("root", "html"))?;
        Ok(Self { element, attribute: config.attribute.clone(), marker_class: config.marker_class.clone() })
    }
}

impl RootElement for DocumentRoot {
    fn theme_attribute(&self) -> Option<String> {
        self.element.get_attribute(&self.attribute)
    }

    fn set_theme_attribute(&mut self, value: &str) {
        if let Err(e) = self.element.set_attribute(&self.attribute, value) {
            log::warn!("failed to set {}: {}", self.attribute, js_message(&e));
        }
    }

    fn has_marker_class(&self) -> bool {
        self.element.class_list().contains(&self.marker_class)
    }

    fn set_marker_class(&mut self, present: bool) {
        let classes = self.element.class_list();
        let result = if present { classes.add_1(&self.marker_class) } else { classes.remove_1(&self.marker_class) };
        if let Err(e) = result {
            log::warn!("failed to update {}: {}", self.marker_class, js_message(&e));
        }
    }
}

/// The injected toggle `<button>`.
pub struct ToggleButton {
    element: Element,
}

impl ToggleControl for ToggleButton {
    fn render_icon(&mut self, icon: Icon) {
        self.element.set_inner_html(&icon.placeholder_html());
        replace_feather_icons();
    }
}

/// Ask the page's Feather icon library to swap `<i data-feather>` placeholders
/// for SVGs. Pages without the library keep the placeholders.
fn replace_feather_icons() {
    let Ok(feather) = js_sys::Reflect::get(&js_sys::global(), &JsValue::from_str("feather")) else {
        return;
    };
    if feather.is_undefined() || feather.is_null() {
        log::debug!("feather icons not loaded");
        return;
    }
    let Some(replace) = js_sys::Reflect::get(&feather, &JsValue::from_str("replace"))
        .ok()
        .and_then(|f| f.dyn_into::<js_sys::Function>().ok())
    else {
        return;
    };
    if let Err(e) = replace.call0(&feather) {
        log::warn!("feather.replace failed: {}", js_message(&e));
    }
}

/// Insert the toggle, pick the initial theme and subscribe to clicks and OS
/// preference changes.
pub fn mount(config: &PageConfig) -> Result<(), SetupError> {
    let window = window()?;
    let document = window.document().ok_or(SetupError::NoDocument)?;
    let root = DocumentRoot::from_document(&document, &config.theme)?;
    let body = document.body().ok_or_else(|| missing("body", "body"))?;

    let button = document.create_element("button")?;
    button.set_class_name(&config.theme.toggle_class);
    button.set_attribute("aria-label", &config.theme.toggle_label)?;
    body.append_child(&button)?;

    let media = window.match_media(DARK_SCHEME_QUERY).ok().flatten();
    let system = Theme::from_prefers_dark(media.as_ref().is_some_and(MediaQueryList::matches));

    let store = LocalStorageStore::new(&config.theme.storage_key);
    let mut controller = ThemeController::new(store, root, ToggleButton { element: button.clone() });
    controller.init(system)?;
    let controller = Rc::new(RefCell::new(controller));

    let on_click = {
        let controller = Rc::clone(&controller);
        Closure::<dyn FnMut()>::new(move || {
            if let Err(e) = controller.borrow_mut().toggle() {
                log::error!("theme toggle failed: {e}");
            }
        })
    };
    button.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
    on_click.forget();

    match media {
        Some(media) => {
            let on_change = Closure::<dyn FnMut(MediaQueryListEvent)>::new(move |event: MediaQueryListEvent| {
                let event = ThemeEvent::SystemPreferenceChanged { value: Theme::from_prefers_dark(event.matches()) };
                if let Err(e) = controller.borrow_mut().handle(&event) {
                    log::error!("system theme change not applied: {e}");
                }
            });
            media.add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref())?;
            on_change.forget();
        }
        None => log::debug!("{DARK_SCHEME_QUERY} unsupported; system changes not tracked"),
    }
    Ok(())
}

/// Mirror the theme attribute onto the marker class for the page lifetime.
pub fn observe_marker_class(config: &PageConfig) -> Result<(), SetupError> {
    let document = document()?;
    let mut root = DocumentRoot::from_document(&document, &config.theme)?;
    let target = root.element.clone();
    let observer = AttributeObserver::new();
    observer.sync(&mut root);

    let callback = Closure::<dyn FnMut(js_sys::Array, MutationObserver)>::new(
        move |_records: js_sys::Array, _observer: MutationObserver| {
            let new_value = root.theme_attribute().as_deref().and_then(Theme::parse);
            observer.handle(&mut root, &ThemeEvent::AttributeChanged { new_value });
        },
    );
    let mutations = MutationObserver::new(callback.as_ref().unchecked_ref())?;
    let options = MutationObserverInit::new();
    options.set_attributes(true);
    options.set_attribute_filter(&js_sys::Array::of1(&JsValue::from_str(&config.theme.attribute)));
    mutations.observe_with_options(&target, &options)?;
    callback.forget();
    Ok(())
}
