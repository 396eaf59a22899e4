//! Scroll-triggered fade-in via `IntersectionObserver`.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use super::{document, elements, js_message};
use crate::app::SetupError;
use crate::config::PageConfig;
use crate::fade::{clamp_threshold, targets_to_reveal};

pub fn mount(config: &PageConfig) -> Result<(), SetupError> {
    let document = document()?;
    let class = config.fade.class.clone();

    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            let batch = entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                .map(|entry| (entry.target(), entry.is_intersecting()));
            for target in targets_to_reveal(batch) {
                if let Err(e) = target.class_list().add_1(&class) {
                    log::warn!("fade-in not applied: {}", js_message(&e));
                }
                observer.unobserve(&target);
            }
        },
    );
    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(clamp_threshold(config.fade.threshold)));
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    callback.forget();

    let targets = elements(&document.query_selector_all(&config.fade.selector)?);
    log::debug!("observing {} fade-in targets", targets.len());
    for target in &targets {
        observer.observe(target);
    }
    Ok(())
}
