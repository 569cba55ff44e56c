use crate::dom;
use crate::globe::{FeatureSelection, Globe};
use crate::render;
use wasm_bindgen::JsValue;
use web_sys as web;

/// Everything a redraw needs: the controller plus the mounted surface.
pub struct FrameContext {
    pub globe: Globe,
    pub canvas: web::HtmlCanvasElement,
    pub ctx: web::CanvasRenderingContext2d,
    pub icon: Option<web::HtmlImageElement>,
    pub on_select: js_sys::Function,
    pub mounted: bool,
}

impl FrameContext {
    /// False once unmounted or when the canvas left the document.
    pub fn is_attached(&self) -> bool {
        self.mounted && self.canvas.is_connected()
    }

    /// Paint the controller's current scene onto the canvas.
    pub fn paint(&self) {
        if !self.is_attached() {
            return;
        }
        let dpr = web::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0);
        render::paint(&self.ctx, self.globe.scene(), dpr, self.icon.as_ref());
    }

    /// Re-read the surface size, redraw with the same rotation and paint.
    pub fn resize(&mut self) {
        if !self.is_attached() {
            return;
        }
        let (viewport, _dpr) = dom::sync_canvas_backing_size(&self.canvas);
        // Resizing the backing store wipes the canvas, so always repaint.
        self.globe.resize(viewport);
        self.paint();
    }

    pub fn sync_cursor(&self) {
        let cursor = if self.globe.is_dragging() {
            "grabbing"
        } else if self.globe.hovered().is_some() {
            "pointer"
        } else {
            "default"
        };
        dom::set_cursor(&self.canvas, cursor);
    }
}

/// Invoke the page's `(name, id)` callback. Called with no `RefCell` borrow
/// held so the callback may call back into the handle.
pub fn dispatch_selection(on_select: &js_sys::Function, selection: &FeatureSelection) {
    if let Err(e) = on_select.call2(
        &JsValue::NULL,
        &JsValue::from_str(&selection.name),
        &JsValue::from_str(&selection.id),
    ) {
        log::warn!("[globe] onCountrySelect threw: {:?}", e);
    }
}
