use crate::dom::{self, Listener};
use crate::frame::SharedComposer;
use hero_core::normalize_client;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Feed every pointer move into the composer's pointer tracker as a
/// window-normalized sample.
pub fn wire_pointermove(window: &web::Window, composer: SharedComposer) -> Option<Listener> {
    let wnd = window.clone();
    Listener::attach(window.as_ref(), "pointermove", move |ev: web::Event| {
        let Some(ev) = ev.dyn_ref::<web::PointerEvent>() else {
            return;
        };
        let Some((w, h)) = dom::window_inner_size(&wnd) else {
            return;
        };
        let [x, y] = normalize_client(ev.client_x() as f32, ev.client_y() as f32, w, h);
        composer.borrow_mut().on_pointer(x, y);
    })
}
