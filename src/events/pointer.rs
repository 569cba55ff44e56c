use crate::dom;
use crate::frame::{self, FrameContext};
use crate::globe::PointerOutcome;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_pointer_handlers(frame: Rc<RefCell<FrameContext>>) {
    wire_pointerdown(&frame);
    wire_pointermove(&frame);
    wire_pointerup(&frame);
    wire_pointercancel(&frame);
    wire_pointerleave(&frame);
}

fn listen(
    frame: &Rc<RefCell<FrameContext>>,
    event: &str,
    mut handler: impl FnMut(&Rc<RefCell<FrameContext>>, web::PointerEvent) + 'static,
) {
    let canvas = frame.borrow().canvas.clone();
    let frame = frame.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        if !frame.borrow().is_attached() {
            return;
        }
        handler(&frame, ev);
    }) as Box<dyn FnMut(_)>);
    _ = canvas.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

fn finish(f: &FrameContext, outcome: &PointerOutcome) {
    if outcome.redrawn {
        f.paint();
    }
    f.sync_cursor();
}

fn wire_pointerdown(frame: &Rc<RefCell<FrameContext>>) {
    listen(frame, "pointerdown", |frame, ev| {
        if ev.button() != 0 {
            return;
        }
        let mut f = frame.borrow_mut();
        let pos = dom::pointer_css_px(&ev, &f.canvas);
        f.globe.pointer_down(pos);
        _ = f.canvas.set_pointer_capture(ev.pointer_id());
        f.sync_cursor();
        ev.prevent_default();
    });
}

fn wire_pointermove(frame: &Rc<RefCell<FrameContext>>) {
    listen(frame, "pointermove", |frame, ev| {
        let mut f = frame.borrow_mut();
        let pos = dom::pointer_css_px(&ev, &f.canvas);
        let outcome = f.globe.pointer_move(pos);
        finish(&f, &outcome);
    });
}

fn wire_pointerup(frame: &Rc<RefCell<FrameContext>>) {
    listen(frame, "pointerup", |frame, ev| {
        let (selection, on_select) = {
            let mut f = frame.borrow_mut();
            let pos = dom::pointer_css_px(&ev, &f.canvas);
            let outcome = f.globe.pointer_up(pos);
            _ = f.canvas.release_pointer_capture(ev.pointer_id());
            finish(&f, &outcome);
            (outcome.selection, f.on_select.clone())
        };
        // Borrow released: the callback may call back into the handle.
        if let Some(selection) = selection {
            frame::dispatch_selection(&on_select, &selection);
        }
        ev.prevent_default();
    });
}

fn wire_pointercancel(frame: &Rc<RefCell<FrameContext>>) {
    listen(frame, "pointercancel", |frame, _ev| {
        let mut f = frame.borrow_mut();
        f.globe.cancel_gesture();
        log::debug!("[pointer] gesture cancelled");
        f.sync_cursor();
    });
}

fn wire_pointerleave(frame: &Rc<RefCell<FrameContext>>) {
    listen(frame, "pointerleave", |frame, _ev| {
        let mut f = frame.borrow_mut();
        let outcome = f.globe.pointer_leave();
        finish(&f, &outcome);
    });
}
