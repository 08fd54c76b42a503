use crate::core::{ease_alpha, ease_flow_velocity, PointerState, PointerTrails, Preset, ALPHA_TARGET};
use crate::render;
use glam::Vec2;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Per-frame state owned by the animation loop.
///
/// Everything the tick touches lives here so [`FrameContext::frame`] can be
/// driven directly, without a browser loop behind it.
pub struct FrameContext {
    pub canvas: web::HtmlCanvasElement,
    pub pointer: Rc<RefCell<PointerState>>,
    pub gpu: Option<render::GpuState<'static>>,

    pub trails: PointerTrails,
    pub flow_velocity: Vec2,
    pub alpha: f32,
    pub last_instant: Instant,
}

impl FrameContext {
    /// One tick: consume pointer movement, advance the flow field and the
    /// trails, ease the fade-in and draw.
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;

        // Reset velocity when the pointer did not move since the last tick
        let (uv, raw_velocity) = {
            let mut p = self.pointer.borrow_mut();
            p.begin_frame();
            (p.uv, p.velocity)
        };

        self.flow_velocity = ease_flow_velocity(self.flow_velocity, raw_velocity);
        self.trails.advance_all(uv);
        self.alpha = ease_alpha(self.alpha, ALPHA_TARGET);

        if let Some(g) = &mut self.gpu {
            g.resize_if_needed(self.canvas.width(), self.canvas.height());
            g.set_flow_inputs(uv, self.flow_velocity);
            g.set_trails([
                self.trails.fast.value,
                self.trails.medium.value,
                self.trails.slow.value,
            ]);
            g.set_alpha(self.alpha);
            if let Err(e) = g.render(dt_sec) {
                log::error!("render error: {:?}", e);
            }
        }
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    preset: Preset,
) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas, preset).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

/// Schedule [`FrameContext::frame`] via requestAnimationFrame, forever.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
