use crate::core::{CameraRig, OrbitControls};
use crate::dom;
use crate::render;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub rig: Rc<RefCell<CameraRig>>,
    pub orbit: Rc<RefCell<Option<OrbitControls>>>,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: Option<render::GpuState<'static>>,

    /// Clock origin for the rig's tween timeline.
    pub start: Instant,
    pub last_instant: Instant,
    pub was_input_enabled: bool,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now_instant = Instant::now();
        let dt_sec = (now_instant - self.last_instant).as_secs_f32();
        self.last_instant = now_instant;
        let now = self.start.elapsed().as_secs_f64();

        let sample = self.rig.borrow_mut().tick(now);

        // Apply the rig's input gate to the orbit controls if they exist yet;
        // a missing handle is skipped, camera motion proceeds regardless.
        {
            let mut orbit = self.orbit.borrow_mut();
            if let Some(controls) = orbit.as_mut() {
                if sample.input_enabled && !self.was_input_enabled {
                    // Hand control back where the tween left the camera.
                    controls.sync_from_pose(sample.eye, sample.target);
                }
                controls.enabled = sample.input_enabled;
            }
        }
        self.was_input_enabled = sample.input_enabled;

        // While free input is live, the orbit controls own the camera and the
        // rig shadows them so the next transition starts from the real pose.
        let driven = {
            let orbit = self.orbit.borrow();
            orbit.as_ref().map(|c| (c.eye(), c.target()))
        };
        let (eye, target) = match driven {
            Some((eye, target)) if sample.input_enabled => {
                self.rig.borrow_mut().follow(eye, target);
                (eye, target)
            }
            _ => (sample.eye, sample.target),
        };

        dom::sync_canvas_backing_size(&self.canvas);
        if let Some(gpu) = &mut self.gpu {
            gpu.set_camera(eye, target);
            gpu.resize_if_needed(self.canvas.width(), self.canvas.height());
            if let Err(e) = gpu.render(dt_sec) {
                log::error!("render error: {:?}", e);
            }
        }
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas).await {
        Ok(gpu) => Some(gpu),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

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
