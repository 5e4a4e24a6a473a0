use crate::camera::OrthoCamera;
use crate::constants::CAMERA_Z;
use crate::render;
use hero_core::{ObjectPose, SceneComposer, ViewportMonitor};
use instant::Instant;
use rand::rngs::StdRng;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type Composer = SceneComposer<StdRng>;
pub type SharedComposer = Rc<RefCell<Composer>>;
pub type SharedViewport = Rc<RefCell<ViewportMonitor>>;

pub struct FrameContext<'a> {
    pub composer: SharedComposer,
    pub viewport: SharedViewport,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: Option<render::GpuState<'a>>,
    pub poses: Vec<ObjectPose>,
    pub last_instant: Instant,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;

        {
            let mut composer = self.composer.borrow_mut();
            composer.tick(dt);
            composer.compose_into(&mut self.poses);
        }

        if let Some(g) = &mut self.gpu {
            let vp = self.viewport.borrow().state();
            let camera = OrthoCamera::new(CAMERA_Z, vp.width, vp.height, vp.zoom);
            g.resize_if_needed(self.canvas.width(), self.canvas.height());
            match g.render(&camera, &self.poses) {
                Ok(()) => {}
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => g.reconfigure(),
                Err(e) => log::error!("render error: {:?}", e),
            }
        }
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

type TickSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Running `requestAnimationFrame` loop. Dropping it cancels the pending frame
/// and releases the tick closure.
pub struct FrameLoop {
    tick: TickSlot,
    pending: Rc<Cell<Option<i32>>>,
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        if let (Some(id), Some(w)) = (self.pending.take(), web::window()) {
            _ = w.cancel_animation_frame(id);
        }
        // breaks the closure's reference cycle back to its own slot
        self.tick.borrow_mut().take();
    }
}

fn request_frame(tick: &TickSlot, pending: &Cell<Option<i32>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        pending.set(w.request_animation_frame(cb.as_ref().unchecked_ref()).ok());
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) -> FrameLoop {
    let tick: TickSlot = Rc::new(RefCell::new(None));
    let pending = Rc::new(Cell::new(None));
    let tick_clone = tick.clone();
    let pending_clone = pending.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        pending_clone.set(None);
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone, &pending_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick, &pending);
    FrameLoop { tick, pending }
}
