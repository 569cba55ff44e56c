use crate::core::Viewport;
use glam::DVec2;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn canvas_by_id(document: &web::Document, id: &str) -> anyhow::Result<web::HtmlCanvasElement> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("missing #{id}"))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))
}

pub fn context_2d(canvas: &web::HtmlCanvasElement) -> anyhow::Result<web::CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?
        .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))
}

/// Pointer gestures belong to the globe, not to page scrolling.
pub fn prepare_canvas_style(canvas: &web::HtmlCanvasElement) {
    let style = canvas.style();
    _ = style.set_property("touch-action", "none");
    _ = style.set_property("user-select", "none");
}

pub fn set_cursor(canvas: &web::HtmlCanvasElement, cursor: &str) {
    _ = canvas.style().set_property("cursor", cursor);
}

pub fn data_attr(el: &web::Element, name: &str) -> Option<String> {
    el.get_attribute(name).filter(|v| !v.trim().is_empty())
}

pub fn load_image(href: &str) -> Option<web::HtmlImageElement> {
    match web::HtmlImageElement::new() {
        Ok(img) => {
            img.set_src(href);
            Some(img)
        }
        Err(e) => {
            log::warn!("[dom] image element error: {:?}", e);
            None
        }
    }
}

/// Match the canvas backing store to its CSS size × devicePixelRatio.
/// Returns the CSS-pixel viewport and the ratio used.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) -> (Viewport, f64) {
    let dpr = web::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0);
    let rect = canvas.get_bounding_client_rect();
    let w_px = (rect.width() * dpr) as u32;
    let h_px = (rect.height() * dpr) as u32;
    canvas.set_width(w_px.max(1));
    canvas.set_height(h_px.max(1));
    (Viewport::new(rect.width(), rect.height()), dpr)
}

/// Pointer position in CSS pixels relative to the canvas.
#[inline]
pub fn pointer_css_px(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> DVec2 {
    let rect = canvas.get_bounding_client_rect();
    DVec2::new(
        ev.client_x() as f64 - rect.left(),
        ev.client_y() as f64 - rect.top(),
    )
}
