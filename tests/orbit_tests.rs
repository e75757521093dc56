// Host-side tests for the orbit controls.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod orbit {
    include!("../src/core/orbit.rs");
}

use constants::*;
use orbit::OrbitControls;

#[test]
fn sync_from_pose_round_trips() {
    let controls = OrbitControls::from_pose(OVERVIEW_EYE, OVERVIEW_TARGET);
    let eye = controls.eye();
    assert!((eye - OVERVIEW_EYE).length() < 1e-3, "got {:?}", eye);
    assert!((controls.target() - OVERVIEW_TARGET).length() < 1e-6);
}

#[test]
fn rotate_and_zoom_are_refused_while_disabled() {
    let mut controls = OrbitControls::from_pose(OVERVIEW_EYE, OVERVIEW_TARGET);
    assert!(!controls.enabled);
    let before = controls.eye();
    controls.rotate(120.0, -80.0);
    controls.zoom(500.0);
    assert!((controls.eye() - before).length() < 1e-6);
}

#[test]
fn polar_angle_is_clamped() {
    let mut controls = OrbitControls::from_pose(OVERVIEW_EYE, OVERVIEW_TARGET);
    controls.enabled = true;
    controls.rotate(0.0, 10_000.0);
    assert!(controls.polar() >= ORBIT_MIN_POLAR - 1e-6);
    controls.rotate(0.0, -10_000.0);
    assert!(controls.polar() <= ORBIT_MAX_POLAR + 1e-6);
    // the camera never dips below the desk plane
    assert!(controls.eye().y >= controls.target().y - 1e-4);
}

#[test]
fn zoom_is_clamped_to_distance_limits() {
    let mut controls = OrbitControls::from_pose(OVERVIEW_EYE, OVERVIEW_TARGET);
    controls.enabled = true;
    for _ in 0..100 {
        controls.zoom(1_000.0);
    }
    assert!((controls.distance() - ORBIT_MAX_DISTANCE).abs() < 1e-4);
    for _ in 0..100 {
        controls.zoom(-1_000.0);
    }
    assert!((controls.distance() - ORBIT_MIN_DISTANCE).abs() < 1e-4);
}

#[test]
fn zoom_direction_matches_wheel_sign() {
    let mut controls = OrbitControls::from_pose(OVERVIEW_EYE, OVERVIEW_TARGET);
    controls.enabled = true;
    let before = controls.distance();
    controls.zoom(100.0);
    assert!(controls.distance() > before);
    controls.zoom(-100.0);
    controls.zoom(-100.0);
    assert!(controls.distance() < before);
}

#[test]
fn sync_clamps_an_out_of_range_pose() {
    // the focus pose is closer than the orbit minimum distance
    let mut controls = OrbitControls::from_pose(OVERVIEW_EYE, OVERVIEW_TARGET);
    controls.sync_from_pose(FOCUS_EYE, FOCUS_TARGET);
    assert!(controls.distance() >= ORBIT_MIN_DISTANCE);
    assert!(controls.distance() <= ORBIT_MAX_DISTANCE);
    assert!(controls.polar() >= ORBIT_MIN_POLAR);
    assert!(controls.polar() <= ORBIT_MAX_POLAR);
}

#[test]
fn yaw_rate_is_per_css_pixel() {
    let mut controls = OrbitControls::from_pose(OVERVIEW_EYE, OVERVIEW_TARGET);
    controls.enabled = true;
    let azimuth = |controls: &OrbitControls| {
        let offset = controls.eye() - controls.target();
        offset.x.atan2(offset.z)
    };
    let before = azimuth(&controls);
    controls.rotate(10.0, 0.0);
    // 10 css pixels of drag swing the azimuth by exactly 10 * rotate speed
    let turned = (azimuth(&controls) - before).abs();
    assert!((turned - 10.0 * ORBIT_ROTATE_SPEED).abs() < 1e-4);
}

#[test]
fn rotation_keeps_the_distance_fixed() {
    let mut controls = OrbitControls::from_pose(OVERVIEW_EYE, OVERVIEW_TARGET);
    controls.enabled = true;
    let d = controls.distance();
    controls.rotate(35.0, 12.0);
    let offset = controls.eye() - controls.target();
    assert!((offset.length() - d).abs() < 1e-4);
}
