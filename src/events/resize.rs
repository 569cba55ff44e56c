use crate::frame::FrameContext;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Window resize → new viewport, same rotation.
pub fn wire_resize(frame: Rc<RefCell<FrameContext>>) {
    let closure = Closure::wrap(Box::new(move || {
        let mut f = frame.borrow_mut();
        if !f.is_attached() {
            return;
        }
        f.resize();
        let vp = f.globe.viewport();
        log::debug!("[resize] {}x{}", vp.width, vp.height);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

/// Repaint once the marker icon finishes loading so it replaces the
/// placeholder dot.
pub fn wire_icon_load(frame: Rc<RefCell<FrameContext>>) {
    let Some(icon) = frame.borrow().icon.clone() else {
        return;
    };
    let closure = Closure::wrap(Box::new(move || {
        let f = frame.borrow();
        if f.globe.scene().marker_drawn() {
            f.paint();
        }
    }) as Box<dyn FnMut()>);
    icon.set_onload(Some(closure.as_ref().unchecked_ref()));
    closure.forget();
}
