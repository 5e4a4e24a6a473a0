#![cfg(target_arch = "wasm32")]
use crate::constants::CANVAS_ID;
use hero_core::{SceneComposer, SceneManifest, SceneObjects, ViewportMonitor};
use instant::Instant;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod camera;
mod constants;
mod dom;
mod events;
mod frame;
mod mount;
mod render;

static SCENE_JSON: &str = include_str!("../assets/scene.json");

/// Everything that keeps the scene alive. Dropping it removes every listener
/// and stops the frame loop in one go.
struct RunningScene {
    _frame_loop: frame::FrameLoop,
    _pointer: Option<dom::Listener>,
    _viewport: events::ViewportListeners,
}

thread_local! {
    static SCENE: RefCell<Option<RunningScene>> = const { RefCell::new(None) };
    static MOUNT: mount::MountGeneration = const { mount::MountGeneration::new() };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("hero-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

/// Tear the scene down: listeners, animation frame and GPU state.
#[wasm_bindgen]
pub fn unmount() {
    // also cancels an init still waiting on the GPU
    MOUNT.with(|m| m.cancel());
    let running = SCENE.with(|s| s.borrow_mut().take());
    if running.is_some() {
        log::info!("hero-web unmounted");
    }
}

fn load_scene() -> anyhow::Result<SceneObjects> {
    let manifest = SceneManifest::from_json(SCENE_JSON)?;
    let objects = SceneObjects::from_manifest(&manifest)?;
    log::info!(
        "[scene] floating={} logo={} cycle={}",
        objects.floating.len(),
        objects
            .logo
            .as_ref()
            .map(|l| l.name.as_str())
            .unwrap_or("none"),
        objects.cycle_len
    );
    Ok(objects)
}

async fn init() -> anyhow::Result<()> {
    let ticket = MOUNT.with(|m| m.begin());
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_ID))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    let objects = load_scene()?;
    let viewport = Rc::new(RefCell::new(ViewportMonitor::new()));
    let composer = Rc::new(RefCell::new(SceneComposer::new(
        objects,
        StdRng::from_entropy(),
    )));

    // Measures once immediately, then on every resize/orientation change
    let viewport_listeners = events::wire_viewport_handlers(&events::ViewportWiring {
        window: window.clone(),
        canvas: canvas.clone(),
        viewport: viewport.clone(),
        composer: composer.clone(),
    });
    let pointer_listener = events::wire_pointermove(&window, composer.clone());

    let gpu = frame::init_gpu(&canvas).await;
    if !MOUNT.with(|m| m.is_current(ticket)) {
        // listeners and GPU state drop here; the frame loop never starts
        log::info!("hero-web unmounted before the GPU was ready");
        return Ok(());
    }

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        composer,
        viewport,
        canvas,
        gpu,
        poses: Vec::new(),
        last_instant: Instant::now(),
    }));
    let frame_loop = frame::start_loop(frame_ctx);

    SCENE.with(|s| {
        *s.borrow_mut() = Some(RunningScene {
            _frame_loop: frame_loop,
            _pointer: pointer_listener,
            _viewport: viewport_listeners,
        })
    });
    Ok(())
}
