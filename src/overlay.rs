use crate::constants::{CAPTION_ID, CAPTION_TEXT};
use web_sys as web;

const CAPTION_STYLE: &str = "position:absolute;bottom:24px;left:24px;color:#94a3b8;\
font:500 12px system-ui;text-transform:uppercase;letter-spacing:0.1em;pointer-events:none;";

/// Static "drag to rotate" caption over the canvas' bottom-left corner.
/// Reuses an existing `#globe-caption` element if the page provides one.
pub fn ensure_caption(document: &web::Document, canvas: &web::HtmlCanvasElement) {
    if let Some(el) = document.get_element_by_id(CAPTION_ID) {
        if el.text_content().map_or(true, |t| t.trim().is_empty()) {
            el.set_text_content(Some(CAPTION_TEXT));
        }
        return;
    }
    let Some(parent) = canvas.parent_element() else {
        return;
    };
    let Ok(el) = document.create_element("div") else {
        return;
    };
    el.set_id(CAPTION_ID);
    _ = el.set_attribute("style", CAPTION_STYLE);
    el.set_text_content(Some(CAPTION_TEXT));
    _ = parent.append_child(&el);
}

#[inline]
pub fn hide(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(CAPTION_ID) {
        _ = el.class_list().add_1("hidden");
        // fallback for pages without a `hidden` class
        _ = el.set_attribute("style", "display:none");
    }
}
