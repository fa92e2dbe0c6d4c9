use crate::assets::PendingImages;
use crate::core::scroll::scroll_progress;
use crate::core::{SceneConfig, SceneGraph, SceneState, Tunables};
use crate::dom;
use crate::render;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext<'a> {
    pub config: SceneConfig,
    pub scene: SceneState,
    pub tunables: Rc<RefCell<Tunables>>,
    pub pending: PendingImages,

    pub window: web::Window,
    pub document: web::Document,
    pub canvas: web::HtmlCanvasElement,

    pub gpu: Option<render::GpuState<'a>>,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        self.upload_pending();

        // Latest committed panel values for this frame
        let tunables = *self.tunables.borrow();

        let (scroll_y, viewport) = dom::scroll_metrics(&self.window);
        let doc_height = dom::document_height(&self.document);
        let progress = scroll_progress(scroll_y, doc_height, viewport);
        self.scene.update(&self.config.keyframes, &tunables, progress);

        if let Some(g) = &mut self.gpu {
            let w = self.canvas.width();
            let h = self.canvas.height();
            g.resize_if_needed(w, h);
            if let Err(e) = g.render(&self.scene, &tunables) {
                log::error!("render error: {:?}", e);
            }
        }
    }

    fn upload_pending(&mut self) {
        let loaded = std::mem::take(&mut *self.pending.borrow_mut());
        if loaded.is_empty() {
            return;
        }
        let Some(g) = &mut self.gpu else {
            return;
        };
        for item in loaded {
            g.upload_texture(
                &item.path,
                item.image.width(),
                item.image.height(),
                item.image.as_raw(),
                item.kind,
            );
        }
        if g.planet_ready() && self.scene.planet_rotation_y.is_none() {
            self.scene.planet_ready(&self.config.keyframes);
            log::info!("[scene] planet available");
        }
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    graph: &SceneGraph,
    config: &SceneConfig,
) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas, graph, config).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            if let Some(cb) = tick_clone.borrow().as_ref() {
                _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
            }
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        if let Some(cb) = tick.borrow().as_ref() {
            _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }
}
