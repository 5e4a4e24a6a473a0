use crate::dom::{self, Listener};
use crate::frame::{SharedComposer, SharedViewport};
use smallvec::SmallVec;
use web_sys as web;

pub type ViewportListeners = SmallVec<[Listener; 2]>;

#[derive(Clone)]
pub struct ViewportWiring {
    pub window: web::Window,
    pub canvas: web::HtmlCanvasElement,
    pub viewport: SharedViewport,
    pub composer: SharedComposer,
}

/// Measure the window and push the result through monitor, canvas and layout.
pub fn apply_window_size(w: &ViewportWiring) {
    let Some((width, height)) = dom::window_inner_size(&w.window) else {
        return;
    };
    let state = {
        let mut monitor = w.viewport.borrow_mut();
        monitor.update(width, height);
        monitor.measured_state()
    };
    dom::sync_canvas_backing_size(&w.canvas);
    w.composer.borrow_mut().set_viewport(state.as_ref());
}

/// Recompute on every resize and orientation change.
pub fn wire_viewport_handlers(w: &ViewportWiring) -> ViewportListeners {
    apply_window_size(w);
    ["resize", "orientationchange"]
        .into_iter()
        .filter_map(|event| {
            let w2 = w.clone();
            Listener::attach(w.window.as_ref(), event, move |_ev: web::Event| {
                apply_window_size(&w2);
            })
        })
        .collect()
}
