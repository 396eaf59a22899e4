//! Snowfall overlay.

use super::{document, missing};
use crate::app::SetupError;
use crate::config::PageConfig;
use crate::snow::{CONTAINER_CLASS, FALL_KEYFRAMES, snowfall};

pub fn mount(config: &PageConfig) -> Result<(), SetupError> {
    let document = document()?;
    let body = document.body().ok_or_else(|| missing("body", "body"))?;
    let head = document.head().ok_or_else(|| missing("head", "head"))?;

    let container = document.create_element("div")?;
    container.set_class_name(CONTAINER_CLASS);
    for flake in snowfall(config.snow.flakes, js_sys::Math::random) {
        let el = document.create_element("div")?;
        el.set_attribute("style", &flake.style())?;
        container.append_child(&el)?;
    }
    body.append_child(&container)?;

    let keyframes = document.create_element("style")?;
    keyframes.set_text_content(Some(FALL_KEYFRAMES));
    head.append_child(&keyframes)?;
    Ok(())
}
