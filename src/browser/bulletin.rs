//! Bulletin download button.

use gloo_net::http::Request;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Blob, BlobPropertyBag, DomParser, Event, HtmlAnchorElement, SupportedType, Url};

use super::{document, elements, js_message};
use crate::app::SetupError;
use crate::bulletin::{BulletinError, FALLBACK_TARGET, TEXT_MIME, check_status, clean_text, cleanup_step};
use crate::config::{BulletinConfig, PageConfig};

/// Attach the download handler to every trigger element.
pub fn mount(config: &PageConfig) -> Result<(), SetupError> {
    let document = document()?;
    let triggers = elements(&document.query_selector_all(&config.bulletin.trigger_selector)?);
    log::debug!("{} bulletin download triggers", triggers.len());

    for trigger in triggers {
        let bulletin = config.bulletin.clone();
        let on_click = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            event.prevent_default();
            let bulletin = bulletin.clone();
            spawn_local(async move {
                if let Err(e) = download(&bulletin).await {
                    log::error!("{e}; opening bulletin page instead");
                    open_fallback(&bulletin.url);
                }
            });
        });
        trigger.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
        on_click.forget();
    }
    Ok(())
}

async fn download(bulletin: &BulletinConfig) -> Result<(), BulletinError> {
    let resp = Request::get(&bulletin.url)
        .send()
        .await
        .map_err(|e| BulletinError::Fetch(e.to_string()))?;
    check_status(resp.status())?;
    let html = resp.text().await.map_err(|e| BulletinError::Fetch(e.to_string()))?;
    let text = extract_text(&html)?;
    save_text_file(&bulletin.file_name, &text)
}

fn extract_text(html: &str) -> Result<String, BulletinError> {
    let parse_error = |e: JsValue| BulletinError::Parse(js_message(&e));
    let parsed = DomParser::new()
        .and_then(|parser| parser.parse_from_string(html, SupportedType::TextHtml))
        .map_err(parse_error)?;
    let body = parsed.body().ok_or(BulletinError::MissingBody)?;
    Ok(clean_text(&body.text_content().unwrap_or_default()))
}

fn save_text_file(file_name: &str, text: &str) -> Result<(), BulletinError> {
    let download_error = |e: JsValue| BulletinError::Download(js_message(&e));
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| BulletinError::Download("document unavailable".to_owned()))?;
    let body = document
        .body()
        .ok_or_else(|| BulletinError::Download("document has no body".to_owned()))?;

    let options = BlobPropertyBag::new();
    options.set_type(TEXT_MIME);
    let parts = js_sys::Array::of1(&JsValue::from_str(text));
    let blob = Blob::new_with_str_sequence_and_options(&parts, &options).map_err(download_error)?;
    let url = Url::create_object_url_with_blob(&blob).map_err(download_error)?;

    let clicked = document
        .create_element("a")
        .map_err(download_error)
        .and_then(|el| {
            el.dyn_into::<HtmlAnchorElement>()
                .map_err(|_| BulletinError::Download("created element is not an anchor".to_owned()))
        })
        .and_then(|anchor| {
            anchor.set_href(&url);
            anchor.set_download(file_name);
            body.append_child(&anchor).map_err(download_error)?;
            anchor.click();
            cleanup_step("remove anchor", body.remove_child(&anchor).map_err(|e| js_message(&e)));
            Ok(())
        });

    cleanup_step("revoke object URL", Url::revoke_object_url(&url).map_err(|e| js_message(&e)));
    clicked
}

fn open_fallback(url: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(e) = window.open_with_url_and_target(url, FALLBACK_TARGET) {
        log::error!("bulletin fallback navigation failed: {}", js_message(&e));
    }
}
