// Camera rig coordinator.
//
// Translates view-mode changes into tweened camera motion between the
// overview and focus framings, and gates whether free orbit/zoom input is
// accepted. Time is passed in explicitly (seconds on any monotonic clock)
// so the rig stays platform-free and host-testable; the frame loop feeds it
// wall-clock elapsed time, which makes the apparent duration independent of
// frame rate.

use glam::{Mat4, Vec3};

use super::constants::{
    FOCUS_EYE, FOCUS_TARGET, OVERVIEW_EYE, OVERVIEW_TARGET, TRANSITION_DURATION_SEC,
};
use super::state::ViewMode;

/// A camera placement: eye position plus look-at target.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraPose {
    pub eye: Vec3,
    pub target: Vec3,
}

impl CameraPose {
    pub const fn new(eye: Vec3, target: Vec3) -> Self {
        Self { eye, target }
    }

    /// World-to-view transform looking from `eye` at `target`.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, Vec3::Y)
    }
}

pub const OVERVIEW_POSE: CameraPose = CameraPose::new(OVERVIEW_EYE, OVERVIEW_TARGET);
pub const FOCUS_POSE: CameraPose = CameraPose::new(FOCUS_EYE, FOCUS_TARGET);

/// Quadratic ease-in-out (the `power2.inOut` curve).
#[inline]
pub fn ease_in_out_quad(t: f32) -> f32 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        let u = -2.0 * t + 2.0;
        1.0 - u * u / 2.0
    }
}

/// In-flight interpolation of one vector quantity toward a destination.
/// Starting a new transition replaces the tween wholesale; there is no queue.
#[derive(Clone, Copy, Debug)]
struct Tween {
    from: Vec3,
    to: Vec3,
    start: f64,
    duration: f64,
}

impl Tween {
    /// Sample the eased value at `now`; the flag is true once the tween has
    /// reached its destination.
    fn sample(&self, now: f64) -> (Vec3, bool) {
        let t = ((now - self.start) / self.duration).clamp(0.0, 1.0);
        (self.from.lerp(self.to, ease_in_out_quad(t as f32)), t >= 1.0)
    }
}

/// Per-frame rig output consumed by the renderer and the input layer.
#[derive(Clone, Copy, Debug)]
pub struct RigFrame {
    pub eye: Vec3,
    pub target: Vec3,
    pub input_enabled: bool,
}

pub struct CameraRig {
    mode: ViewMode,
    // Live pose; the look-at is recomputed from the interpolated target every
    // tick, never snapped at the end of a tween.
    eye: Vec3,
    target: Vec3,
    eye_tween: Option<Tween>,
    target_tween: Option<Tween>,
    input_enabled: bool,
    reenable_on_complete: bool,
    duration: f64,
    overview: CameraPose,
    focus: CameraPose,
}

impl CameraRig {
    pub fn new(overview: CameraPose, focus: CameraPose, duration: f64) -> Self {
        Self {
            mode: ViewMode::Overview,
            eye: overview.eye,
            target: overview.target,
            eye_tween: None,
            target_tween: None,
            input_enabled: true,
            reenable_on_complete: false,
            duration,
            overview,
            focus,
        }
    }

    pub fn with_defaults() -> Self {
        Self::new(OVERVIEW_POSE, FOCUS_POSE, TRANSITION_DURATION_SEC)
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    pub fn pose(&self) -> CameraPose {
        CameraPose::new(self.eye, self.target)
    }

    /// True while free orbit/zoom input should be accepted. Holds exactly
    /// when the rig is settled in overview.
    pub fn input_enabled(&self) -> bool {
        self.input_enabled
    }

    pub fn in_flight(&self) -> bool {
        self.eye_tween.is_some() || self.target_tween.is_some()
    }

    /// Adopt an externally driven pose (the orbit controls) as the live one,
    /// so the next transition interpolates from wherever the user orbited to.
    /// Ignored while a tween owns the camera.
    pub fn follow(&mut self, eye: Vec3, target: Vec3) {
        if self.in_flight() {
            return;
        }
        self.eye = eye;
        self.target = target;
    }

    /// React to a view-mode change. Idempotent: a mode equal to the current
    /// one leaves any settled pose or in-flight tween untouched. A real
    /// change supersedes both in-flight tweens, interpolating from the live
    /// mid-tween pose rather than resetting to either endpoint.
    pub fn set_mode(&mut self, mode: ViewMode, now: f64) {
        if mode == self.mode {
            return;
        }
        self.mode = mode;
        let dest = match mode {
            ViewMode::Focus => self.focus,
            ViewMode::Overview => self.overview,
        };
        self.eye_tween = Some(Tween {
            from: self.eye,
            to: dest.eye,
            start: now,
            duration: self.duration,
        });
        self.target_tween = Some(Tween {
            from: self.target,
            to: dest.target,
            start: now,
            duration: self.duration,
        });
        match mode {
            ViewMode::Focus => {
                // Input goes dead before the tween starts so a drag gesture
                // cannot fight the animation; it stays dead throughout focus.
                self.input_enabled = false;
                self.reenable_on_complete = false;
            }
            ViewMode::Overview => {
                // Input comes back only once the return animation completes.
                self.input_enabled = false;
                self.reenable_on_complete = true;
            }
        }
    }

    /// Advance the rig; call once per frame.
    pub fn tick(&mut self, now: f64) -> RigFrame {
        if let Some(tw) = self.eye_tween {
            let (eye, done) = tw.sample(now);
            self.eye = eye;
            if done {
                self.eye_tween = None;
                if self.reenable_on_complete {
                    self.input_enabled = true;
                    self.reenable_on_complete = false;
                }
            }
        }
        if let Some(tw) = self.target_tween {
            let (target, done) = tw.sample(now);
            self.target = target;
            if done {
                self.target_tween = None;
            }
        }
        RigFrame {
            eye: self.eye,
            target: self.target,
            input_enabled: self.input_enabled,
        }
    }
}
