use crate::camera;
use crate::constants::CLICK_SLOP_PX;
use crate::core::{
    CameraRig, OrbitControls, ViewMode, ViewStore, FLOOR_Y, LAPTOP_AABB_MAX, LAPTOP_AABB_MIN,
};
use crate::dom;
use crate::input::{self, PickTarget, PointerState};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub store: Rc<RefCell<ViewStore>>,
    pub rig: Rc<RefCell<CameraRig>>,
    pub orbit: Rc<RefCell<Option<OrbitControls>>>,
    pub pointer: Rc<RefCell<PointerState>>,
    pub hover_laptop: Rc<RefCell<bool>>,
}

pub fn wire_input_handlers(w: InputWiring) {
    wire_pointermove(&w);
    wire_pointerdown(&w);
    wire_pointerup(&w);
    wire_wheel(&w);
}

/// Pick whatever is under the pointer using the live camera pose.
fn pick_under_pointer(w: &InputWiring, sx: f32, sy: f32) -> Option<PickTarget> {
    let pose = w.rig.borrow().pose();
    let (ro, rd) = camera::screen_to_world_ray(&w.canvas, sx, sy, pose.eye, pose.target);
    input::pick_scene(ro, rd, LAPTOP_AABB_MIN, LAPTOP_AABB_MAX, FLOOR_Y).map(|(hit, _t)| hit)
}

fn wire_pointermove(w: &InputWiring) {
    let w = w.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let pos = input::pointer_canvas_px(&ev, &w.canvas);

        let (was_down, last_x, last_y, down_x, down_y) = {
            let ps = w.pointer.borrow();
            (ps.down, ps.x, ps.y, ps.down_x, ps.down_y)
        };
        {
            let mut ps = w.pointer.borrow_mut();
            ps.x = pos.x;
            ps.y = pos.y;
            if was_down {
                let moved = ((pos.x - down_x).powi(2) + (pos.y - down_y).powi(2)).sqrt();
                if moved > CLICK_SLOP_PX {
                    ps.dragged = true;
                }
            }
        }

        if was_down {
            // Drag rotates the orbit camera; the controls themselves refuse
            // the input while disabled. Deltas are converted to css pixels
            // so sensitivity matches across devicePixelRatio.
            let dpr = web::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0);
            let delta = input::css_delta(pos - glam::Vec2::new(last_x, last_y), dpr);
            if let Some(orbit) = w.orbit.borrow_mut().as_mut() {
                orbit.rotate(delta.x, delta.y);
            }
            return;
        }

        // Hover affordance: pointer cursor over the laptop while in overview
        let hovering = w.store.borrow().mode() == ViewMode::Overview
            && matches!(pick_under_pointer(&w, pos.x, pos.y), Some(PickTarget::Laptop));
        let changed = {
            let mut hover = w.hover_laptop.borrow_mut();
            let changed = *hover != hovering;
            *hover = hovering;
            changed
        };
        if changed {
            if let Some(doc) = dom::window_document() {
                dom::set_body_cursor(&doc, if hovering { "pointer" } else { "auto" });
            }
        }
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }

    closure.forget();
}

fn wire_pointerdown(w: &InputWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let pos = input::pointer_canvas_px(&ev, &w.canvas);
        {
            let mut ps = w.pointer.borrow_mut();
            ps.down = true;
            ps.down_x = pos.x;
            ps.down_y = pos.y;
            ps.x = pos.x;
            ps.y = pos.y;
            ps.dragged = false;
        }
        _ = w.canvas.set_pointer_capture(ev.pointer_id());
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointerup(w: &InputWiring) {
    let w = w.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let (was_down, dragged) = {
            let ps = w.pointer.borrow();
            (ps.down, ps.dragged)
        };
        w.pointer.borrow_mut().down = false;
        if !was_down || dragged {
            return;
        }

        let pos = input::pointer_canvas_px(&ev, &w.canvas);
        let mode = w.store.borrow().mode();
        let hit = pick_under_pointer(&w, pos.x, pos.y);
        match (mode, hit) {
            (ViewMode::Overview, Some(PickTarget::Laptop)) => {
                log::info!("[click] laptop -> focus");
                w.store.borrow_mut().enter_focus();
            }
            (ViewMode::Focus, Some(PickTarget::Floor)) => {
                log::info!("[click] floor -> overview");
                w.store.borrow_mut().enter_overview();
            }
            _ => {}
        }
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointerup", closure.as_ref().unchecked_ref());
    }

    closure.forget();
}

fn wire_wheel(w: &InputWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::WheelEvent| {
        if let Some(orbit) = w.orbit.borrow_mut().as_mut() {
            if orbit.enabled {
                orbit.zoom(ev.delta_y() as f32);
                ev.prevent_default();
            }
        }
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("wheel", closure.as_ref().unchecked_ref());
    closure.forget();
}
