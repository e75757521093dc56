// Free orbit/zoom camera around a fixed target.
//
// Pan is intentionally unsupported. The polar angle is clamped so the
// camera never dips below the desk plane, and the distance is clamped to
// keep the scene framed.

use glam::Vec3;

use super::constants::{
    ORBIT_MAX_DISTANCE, ORBIT_MAX_POLAR, ORBIT_MIN_DISTANCE, ORBIT_MIN_POLAR, ORBIT_ROTATE_SPEED,
    ORBIT_ZOOM_SPEED,
};

pub struct OrbitControls {
    pub enabled: bool,
    target: Vec3,
    yaw: f32,
    polar: f32,
    distance: f32,
}

impl OrbitControls {
    pub fn from_pose(eye: Vec3, target: Vec3) -> Self {
        let mut controls = Self {
            enabled: false,
            target,
            yaw: 0.0,
            polar: ORBIT_MAX_POLAR,
            distance: ORBIT_MIN_DISTANCE,
        };
        controls.sync_from_pose(eye, target);
        controls
    }

    /// Re-derive spherical coordinates from a live pose, clamped into the
    /// legal orbit range. Called when control is handed back after a tween.
    pub fn sync_from_pose(&mut self, eye: Vec3, target: Vec3) {
        let offset = eye - target;
        let len = offset.length().max(1e-6);
        self.distance = len.clamp(ORBIT_MIN_DISTANCE, ORBIT_MAX_DISTANCE);
        self.yaw = offset.x.atan2(offset.z);
        self.polar = (offset.y / len).clamp(-1.0, 1.0).acos();
        self.polar = self.polar.clamp(ORBIT_MIN_POLAR, ORBIT_MAX_POLAR);
        self.target = target;
    }

    /// Drag rotation; deltas in css pixels. No-op while disabled.
    pub fn rotate(&mut self, dx_px: f32, dy_px: f32) {
        if !self.enabled {
            return;
        }
        self.yaw -= dx_px * ORBIT_ROTATE_SPEED;
        self.polar = (self.polar - dy_px * ORBIT_ROTATE_SPEED).clamp(ORBIT_MIN_POLAR, ORBIT_MAX_POLAR);
    }

    /// Wheel zoom; positive delta moves away. No-op while disabled.
    pub fn zoom(&mut self, wheel_delta: f32) {
        if !self.enabled {
            return;
        }
        self.distance = (self.distance * (1.0 + wheel_delta * ORBIT_ZOOM_SPEED))
            .clamp(ORBIT_MIN_DISTANCE, ORBIT_MAX_DISTANCE);
    }

    pub fn target(&self) -> Vec3 {
        self.target
    }

    pub fn distance(&self) -> f32 {
        self.distance
    }

    pub fn polar(&self) -> f32 {
        self.polar
    }

    pub fn eye(&self) -> Vec3 {
        let sp = self.polar.sin();
        self.target
            + Vec3::new(
                self.distance * sp * self.yaw.sin(),
                self.distance * self.polar.cos(),
                self.distance * sp * self.yaw.cos(),
            )
    }
}
