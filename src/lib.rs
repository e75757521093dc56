#![cfg(target_arch = "wasm32")]
use crate::constants::{
    CANVAS_ID, EXIT_BUTTON_ID, HUD_ID, NEXT_BUTTON_ID, PREV_BUTTON_ID, SCREEN_PANEL_ID,
};
use crate::core::{CameraRig, OrbitControls, ViewStore, OVERVIEW_POSE, PROJECTS};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod camera;
mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod input;
mod overlay;
mod render;

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

/// Wire the DOM side of the HUD: backdrop and exit button leave focus, the
/// carousel buttons step the catalog, and the screen panel traps clicks so
/// interacting with it never falls through to the backdrop.
fn wire_hud_controls(document: &web::Document, store: &Rc<RefCell<ViewStore>>) {
    let store_backdrop = store.clone();
    dom::add_click_listener(document, HUD_ID, move || {
        store_backdrop.borrow_mut().enter_overview();
    });

    let store_exit = store.clone();
    dom::add_click_listener(document, EXIT_BUTTON_ID, move || {
        store_exit.borrow_mut().enter_overview();
    });

    let store_prev = store.clone();
    dom::add_click_listener_ev(document, PREV_BUTTON_ID, move |ev| {
        ev.stop_propagation();
        store_prev.borrow_mut().prev_project();
    });

    let store_next = store.clone();
    dom::add_click_listener_ev(document, NEXT_BUTTON_ID, move |ev| {
        ev.stop_propagation();
        store_next.borrow_mut().next_project();
    });

    dom::add_click_listener_ev(document, SCREEN_PANEL_ID, move |ev| {
        ev.stop_propagation();
    });
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("desk-portfolio starting");

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
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_ID))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    wire_canvas_resize(&canvas);

    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) == false {
        let canvas_inner = canvas.clone();
        spawn_local(async move {
            let store = Rc::new(RefCell::new(ViewStore::new(PROJECTS.len())));
            let rig = Rc::new(RefCell::new(CameraRig::with_defaults()));
            // Created only after the renderer is up; until then mode changes
            // skip the input toggle and just move the camera.
            let orbit: Rc<RefCell<Option<OrbitControls>>> = Rc::new(RefCell::new(None));
            let start = Instant::now();

            // Coordinator and overlay react to every store change.
            {
                let rig_sub = rig.clone();
                let orbit_sub = orbit.clone();
                store.borrow_mut().subscribe(move |mode, index| {
                    let now = start.elapsed().as_secs_f64();
                    let enabled = {
                        let mut rig = rig_sub.borrow_mut();
                        rig.set_mode(mode, now);
                        rig.input_enabled()
                    };
                    if let Some(controls) = orbit_sub.borrow_mut().as_mut() {
                        controls.enabled = enabled;
                    }
                    if let Some(doc) = dom::window_document() {
                        overlay::sync_mode(&doc, mode);
                        if let Some(project) = PROJECTS.get(index) {
                            overlay::set_project(&doc, project, index, PROJECTS.len());
                        }
                    }
                });
            }

            if let Some(doc) = dom::window_document() {
                wire_hud_controls(&doc, &store);
            }
            events::wire_global_keydown(store.clone());

            let pointer = Rc::new(RefCell::new(input::PointerState::default()));
            let hover_laptop = Rc::new(RefCell::new(false));
            events::wire_input_handlers(events::InputWiring {
                canvas: canvas_inner.clone(),
                store: store.clone(),
                rig: rig.clone(),
                orbit: orbit.clone(),
                pointer: pointer.clone(),
                hover_laptop: hover_laptop.clone(),
            });

            let gpu: Option<render::GpuState> = frame::init_gpu(&canvas_inner).await;

            *orbit.borrow_mut() = Some(OrbitControls::from_pose(
                OVERVIEW_POSE.eye,
                OVERVIEW_POSE.target,
            ));

            let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
                rig: rig.clone(),
                orbit: orbit.clone(),
                canvas: canvas_inner.clone(),
                gpu,
                start,
                last_instant: Instant::now(),
                // false so the first frame hands the settled overview pose
                // to the freshly created orbit controls
                was_input_enabled: false,
            }));
            frame::start_loop(frame_ctx);
        });
    }

    Ok(())
}
