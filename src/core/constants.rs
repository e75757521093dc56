use glam::Vec3;

// Shared camera/scene tuning constants used by the rig, picking and render.

// Camera framings. The focus pose is authored to line up with the laptop
// screen placement in the scene; treat both as configuration, not geometry.
pub const OVERVIEW_EYE: Vec3 = Vec3::new(3.0, 2.0, 4.0);
pub const OVERVIEW_TARGET: Vec3 = Vec3::ZERO;
pub const FOCUS_EYE: Vec3 = Vec3::new(0.0, 0.6, 1.2);
pub const FOCUS_TARGET: Vec3 = Vec3::new(0.0, 0.4, 0.0);

// Tween duration for both transition directions (seconds)
pub const TRANSITION_DURATION_SEC: f64 = 1.5;

// Projection
pub const CAMERA_FOVY_RADIANS: f32 = std::f32::consts::FRAC_PI_4;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 100.0;

// Orbit limits (polar angle measured from +Y)
pub const ORBIT_MIN_DISTANCE: f32 = 2.0;
pub const ORBIT_MAX_DISTANCE: f32 = 8.0;
pub const ORBIT_MIN_POLAR: f32 = 0.05;
pub const ORBIT_MAX_POLAR: f32 = std::f32::consts::PI / 2.2;
pub const ORBIT_ROTATE_SPEED: f32 = 0.005; // radians per css pixel
pub const ORBIT_ZOOM_SPEED: f32 = 0.0015; // fractional distance per wheel unit

// Scene layout (world units)
pub const FLOOR_Y: f32 = -0.05;
pub const DESK_TOP_Y: f32 = 0.08;

// Picking volume enclosing the laptop base and lid
pub const LAPTOP_AABB_MIN: Vec3 = Vec3::new(-0.62, 0.05, -0.42);
pub const LAPTOP_AABB_MAX: Vec3 = Vec3::new(0.62, 0.85, 0.37);

// Procedural wood texture
pub const WOOD_TEX_SIZE: u32 = 512;
pub const WOOD_TEX_SEED: u64 = 42;
