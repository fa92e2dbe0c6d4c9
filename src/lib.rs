#![cfg(target_arch = "wasm32")]
use crate::core::constants::SNAP_THRESHOLD_VIEWPORT_FRACTION;
use crate::core::{SceneConfig, SnapController, Tunables};
use crate::render::TextureKind;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod assets;
mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod panel;
mod render;

// Resize only touches the backing store; the frame loop reconfigures the
// surface, depth target and camera aspect on its next tick.
fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

fn request_assets(config: &SceneConfig, pending: &assets::PendingImages) {
    assets::request(
        config.planet.albedo_path.clone(),
        TextureKind::Albedo,
        pending.clone(),
    );
    assets::request(
        config.ring.alpha_path.clone(),
        TextureKind::Mask,
        pending.clone(),
    );
    for path in &config.sprite_paths {
        assets::request(path.clone(), TextureKind::Sprite, pending.clone());
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("planet-scroll starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .query_selector(constants::CANVAS_SELECTOR)
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?
        .ok_or_else(|| anyhow::anyhow!("missing {}", constants::CANVAS_SELECTOR))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Maintain canvas internal pixel size to match CSS size * min(dpr, 2)
    wire_canvas_resize(&canvas);

    let config = SceneConfig::default();
    let mut rng = StdRng::from_entropy();
    let graph = crate::core::assemble(&config, &mut rng);
    log::info!(
        "[scene] planet tris={} ring tris={} near batches={} far batches={}",
        graph.planet.triangle_count(),
        graph.ring.triangle_count(),
        graph.near.len(),
        graph.far.len()
    );
    let scene = crate::core::SceneState::new(&config.keyframes, graph.near.len());

    // Live tuning: panel writes, frame loop reads
    let tunables = Rc::new(RefCell::new(Tunables::default()));
    if let Err(e) = panel::build(&document, &tunables) {
        log::warn!("[panel] build failed: {:?}", e);
    }
    events::wire_panel_toggle_h(&document);

    // Wheel snapping and the explicit scroll-down affordance
    let (_, viewport) = dom::scroll_metrics(&window);
    let snap = Rc::new(RefCell::new(SnapController::for_viewport(
        viewport,
        SNAP_THRESHOLD_VIEWPORT_FRACTION,
    )));
    events::wire_wheel_snap(snap);
    events::wire_scroll_down_button(&document);

    let gpu = frame::init_gpu(&canvas, &graph, &config).await;

    // Assets arrive asynchronously and are uploaded by the frame loop
    let pending: assets::PendingImages = Rc::new(RefCell::new(Vec::new()));
    request_assets(&config, &pending);

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        config,
        scene,
        tunables,
        pending,
        window,
        document,
        canvas,
        gpu,
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
