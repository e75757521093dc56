use glam::{Vec2, Vec3};
use web_sys as web;

/// Pointer tracking across move/down/up, in canvas backing-store pixels.
#[derive(Default, Clone, Copy)]
pub struct PointerState {
    pub x: f32,
    pub y: f32,
    pub down: bool,
    pub down_x: f32,
    pub down_y: f32,
    pub dragged: bool,
}

/// What a picking ray hit in the scene.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PickTarget {
    Laptop,
    Floor,
}

#[inline]
pub fn pointer_canvas_px(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    let x_css = ev.client_x() as f32 - rect.left() as f32;
    let y_css = ev.client_y() as f32 - rect.top() as f32;
    let sx = (x_css / rect.width() as f32) * canvas.width() as f32;
    let sy = (y_css / rect.height() as f32) * canvas.height() as f32;
    Vec2::new(sx, sy)
}

/// Convert a backing-store pixel delta back to css pixels, so drag
/// sensitivity does not scale with devicePixelRatio.
#[inline]
pub fn css_delta(backing_delta: Vec2, device_pixel_ratio: f64) -> Vec2 {
    backing_delta / (device_pixel_ratio as f32).max(f32::EPSILON)
}

/// Slab-method ray/AABB intersection; returns the nearest non-negative t.
#[inline]
pub fn ray_aabb(ray_origin: Vec3, ray_dir: Vec3, min: Vec3, max: Vec3) -> Option<f32> {
    let inv = ray_dir.recip();
    let t0 = (min - ray_origin) * inv;
    let t1 = (max - ray_origin) * inv;
    let tmin = t0.min(t1);
    let tmax = t0.max(t1);
    let t_enter = tmin.max_element();
    let t_exit = tmax.min_element();
    if t_exit < t_enter || t_exit < 0.0 {
        return None;
    }
    let t = if t_enter >= 0.0 { t_enter } else { t_exit };
    Some(t)
}

/// Intersect with the horizontal plane `y = plane_y`.
#[inline]
pub fn ray_plane_y(ray_origin: Vec3, ray_dir: Vec3, plane_y: f32) -> Option<f32> {
    if ray_dir.y.abs() < 1e-6 {
        return None;
    }
    let t = (plane_y - ray_origin.y) / ray_dir.y;
    (t >= 0.0).then_some(t)
}

/// Nearest scene hit for a picking ray. Resolving the laptop and the floor
/// in one place means a laptop click can never also count as a floor click.
pub fn pick_scene(
    ray_origin: Vec3,
    ray_dir: Vec3,
    laptop_min: Vec3,
    laptop_max: Vec3,
    floor_y: f32,
) -> Option<(PickTarget, f32)> {
    let laptop = ray_aabb(ray_origin, ray_dir, laptop_min, laptop_max);
    let floor = ray_plane_y(ray_origin, ray_dir, floor_y);
    match (laptop, floor) {
        (Some(tl), Some(tf)) if tl <= tf => Some((PickTarget::Laptop, tl)),
        (Some(tl), None) => Some((PickTarget::Laptop, tl)),
        (_, Some(tf)) => Some((PickTarget::Floor, tf)),
        (None, None) => None,
    }
}
