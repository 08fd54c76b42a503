use crate::core::PointerState;
use crate::dom;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct PointerWiring {
    pub canvas: web::HtmlCanvasElement,
    pub pointer: Rc<RefCell<PointerState>>,
}

/// Attach mouse and touch listeners feeding the shared pointer state.
pub fn wire_pointer_handlers(w: PointerWiring) {
    wire_pointermove(&w);
    wire_touch(&w, "touchstart");
    wire_touch(&w, "touchmove");
}

#[inline]
fn surface_px(canvas: &web::HtmlCanvasElement) -> Vec2 {
    Vec2::new(canvas.width() as f32, canvas.height() as f32)
}

fn wire_pointermove(w: &PointerWiring) {
    let w = w.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let page = Vec2::new(ev.page_x() as f32, ev.page_y() as f32);
        w.pointer
            .borrow_mut()
            .sample(page, surface_px(&w.canvas), dom::now_ms());
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }

    closure.forget();
}

fn wire_touch(w: &PointerWiring, kind: &'static str) {
    let w = w.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::TouchEvent| {
        // Best-effort extraction: a touch event without changed touches is dropped
        let Some(touch) = ev.changed_touches().get(0) else {
            return;
        };
        let page = Vec2::new(touch.page_x() as f32, touch.page_y() as f32);
        w.pointer
            .borrow_mut()
            .sample(page, surface_px(&w.canvas), dom::now_ms());
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref());
    }

    closure.forget();
}
