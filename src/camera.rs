use crate::core::{CAMERA_FOVY_RADIANS, CAMERA_ZFAR, CAMERA_ZNEAR};
use glam::{Mat4, Vec3, Vec4};
use web_sys as web;

/// Perspective projection for the current canvas aspect ratio.
#[inline]
pub fn projection_matrix(width: f32, height: f32) -> Mat4 {
    let aspect = width / height.max(1.0);
    Mat4::perspective_rh(CAMERA_FOVY_RADIANS, aspect, CAMERA_ZNEAR, CAMERA_ZFAR)
}

/// Compute a world-space picking ray from canvas backing-store coordinates,
/// using the live camera pose.
///
/// Returns `(ray_origin, ray_direction)` in world space.
pub fn screen_to_world_ray(
    canvas: &web::HtmlCanvasElement,
    sx: f32,
    sy: f32,
    eye: Vec3,
    target: Vec3,
) -> (Vec3, Vec3) {
    let width = canvas.width() as f32;
    let height = canvas.height() as f32;
    let ndc_x = (2.0 * sx / width) - 1.0;
    let ndc_y = 1.0 - (2.0 * sy / height);
    let proj = projection_matrix(width, height);
    let view = Mat4::look_at_rh(eye, target, Vec3::Y);
    let inv = (proj * view).inverse();
    let p_far = inv * Vec4::new(ndc_x, ndc_y, 1.0, 1.0);
    let far: Vec3 = p_far.truncate() / p_far.w;
    (eye, (far - eye).normalize())
}
