// Host-side tests for the camera rig coordinator.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod state {
    include!("../src/core/state.rs");
}
mod rig {
    include!("../src/core/rig.rs");
}

use constants::TRANSITION_DURATION_SEC;
use rig::*;
use state::ViewMode;

const EPS: f32 = 1e-5;

fn assert_invariant(rig: &CameraRig) {
    assert_eq!(
        rig.input_enabled(),
        rig.mode() == ViewMode::Overview && !rig.in_flight(),
        "input enabled iff overview and settled"
    );
}

#[test]
fn starts_settled_in_overview_with_input_enabled() {
    let mut rig = CameraRig::with_defaults();
    let frame = rig.tick(0.0);
    assert!((frame.eye - OVERVIEW_POSE.eye).length() < EPS);
    assert!((frame.target - OVERVIEW_POSE.target).length() < EPS);
    assert!(frame.input_enabled);
    assert!(!rig.in_flight());
}

#[test]
fn focus_transition_disables_input_before_motion() {
    let mut rig = CameraRig::with_defaults();
    rig.tick(0.0);
    rig.set_mode(ViewMode::Focus, 0.0);
    // disabled before the first animation step runs
    assert!(!rig.input_enabled());
    let frame = rig.tick(0.0);
    assert!(!frame.input_enabled);
    assert!((frame.eye - OVERVIEW_POSE.eye).length() < EPS);
}

#[test]
fn focus_completes_with_input_still_disabled() {
    let mut rig = CameraRig::with_defaults();
    rig.set_mode(ViewMode::Focus, 0.0);
    let frame = rig.tick(TRANSITION_DURATION_SEC + 0.1);
    assert!((frame.eye - FOCUS_POSE.eye).length() < EPS);
    assert!((frame.target - FOCUS_POSE.target).length() < EPS);
    assert!(!rig.in_flight());
    assert!(!frame.input_enabled);
    assert_invariant(&rig);
}

#[test]
fn overview_return_reenables_only_on_completion() {
    let mut rig = CameraRig::with_defaults();
    rig.set_mode(ViewMode::Focus, 0.0);
    rig.tick(2.0);
    rig.set_mode(ViewMode::Overview, 10.0);
    assert!(!rig.tick(10.0).input_enabled);
    assert!(!rig.tick(10.7).input_enabled);
    assert!(!rig.tick(11.4).input_enabled);
    let done = rig.tick(10.0 + TRANSITION_DURATION_SEC);
    assert!(done.input_enabled);
    assert!((done.eye - OVERVIEW_POSE.eye).length() < EPS);
    assert_invariant(&rig);
}

#[test]
fn input_gate_invariant_holds_across_a_session() {
    let mut rig = CameraRig::with_defaults();
    let script: &[(f64, Option<ViewMode>)] = &[
        (0.0, None),
        (0.5, Some(ViewMode::Focus)),
        (0.6, None),
        (1.0, Some(ViewMode::Overview)),
        (1.2, None),
        (1.3, Some(ViewMode::Focus)),
        (4.0, None),
        (5.0, Some(ViewMode::Overview)),
        (9.0, None),
    ];
    for &(now, change) in script {
        if let Some(mode) = change {
            rig.set_mode(mode, now);
        }
        rig.tick(now);
        assert_invariant(&rig);
    }
}

#[test]
fn eased_midpoint_is_halfway() {
    let mut rig = CameraRig::with_defaults();
    rig.set_mode(ViewMode::Focus, 0.0);
    let frame = rig.tick(TRANSITION_DURATION_SEC / 2.0);
    let expect = OVERVIEW_POSE.eye.lerp(FOCUS_POSE.eye, 0.5);
    assert!((frame.eye - expect).length() < 1e-4);
}

#[test]
fn ease_curve_shape() {
    assert!((ease_in_out_quad(0.0) - 0.0).abs() < EPS);
    assert!((ease_in_out_quad(1.0) - 1.0).abs() < EPS);
    assert!((ease_in_out_quad(0.5) - 0.5).abs() < EPS);
    // symmetric about the midpoint
    for i in 0..=10 {
        let t = i as f32 / 10.0;
        assert!((ease_in_out_quad(t) + ease_in_out_quad(1.0 - t) - 1.0).abs() < 1e-4);
    }
    // monotonic
    let mut prev = 0.0f32;
    for i in 1..=100 {
        let v = ease_in_out_quad(i as f32 / 100.0);
        assert!(v >= prev);
        prev = v;
    }
}

#[test]
fn reversal_mid_flight_continues_from_live_pose() {
    let mut rig = CameraRig::with_defaults();
    rig.set_mode(ViewMode::Focus, 0.0);
    let mid = rig.tick(0.5);
    rig.set_mode(ViewMode::Overview, 0.5);
    // superseding tween starts exactly where the camera was, no jump
    let frame = rig.tick(0.5);
    assert!((frame.eye - mid.eye).length() < EPS);
    assert!((frame.target - mid.target).length() < EPS);
    // and heads back toward the overview pose, never reaching focus first
    let later = rig.tick(0.9);
    let d_mid = (mid.eye - OVERVIEW_POSE.eye).length();
    let d_later = (later.eye - OVERVIEW_POSE.eye).length();
    assert!(d_later < d_mid);
    assert!((later.eye - FOCUS_POSE.eye).length() > 0.1);
    let settled = rig.tick(0.5 + TRANSITION_DURATION_SEC);
    assert!((settled.eye - OVERVIEW_POSE.eye).length() < EPS);
    assert!(settled.input_enabled);
}

#[test]
fn idempotent_set_mode_does_not_perturb_settled_pose() {
    let mut rig = CameraRig::with_defaults();
    rig.tick(0.0);
    rig.set_mode(ViewMode::Overview, 3.0);
    assert!(!rig.in_flight());
    assert!(rig.input_enabled());
    let frame = rig.tick(3.0);
    assert!((frame.eye - OVERVIEW_POSE.eye).length() < EPS);
}

#[test]
fn idempotent_set_mode_does_not_restart_in_flight_tween() {
    let mut rig = CameraRig::with_defaults();
    rig.set_mode(ViewMode::Focus, 0.0);
    rig.tick(0.5);
    rig.set_mode(ViewMode::Focus, 0.5);
    let frame = rig.tick(TRANSITION_DURATION_SEC);
    // the first tween's timeline completed; a restart would still be moving
    assert!((frame.eye - FOCUS_POSE.eye).length() < EPS);
    assert!(!rig.in_flight());
}

#[test]
fn follow_feeds_the_next_transition_start() {
    let mut rig = CameraRig::with_defaults();
    rig.tick(0.0);
    let orbited = glam::Vec3::new(-2.0, 3.0, 5.0);
    rig.follow(orbited, glam::Vec3::ZERO);
    rig.set_mode(ViewMode::Focus, 1.0);
    let frame = rig.tick(1.0);
    assert!((frame.eye - orbited).length() < EPS);
}

#[test]
fn follow_is_ignored_while_a_tween_owns_the_camera() {
    let mut rig = CameraRig::with_defaults();
    rig.set_mode(ViewMode::Focus, 0.0);
    let mid = rig.tick(0.5);
    rig.follow(glam::Vec3::splat(9.0), glam::Vec3::splat(9.0));
    let frame = rig.tick(0.5);
    assert!((frame.eye - mid.eye).length() < EPS);
}

#[test]
fn look_at_target_tracks_continuously() {
    let mut rig = CameraRig::with_defaults();
    rig.set_mode(ViewMode::Focus, 0.0);
    let mut prev = rig.tick(0.0).target;
    let mut max_step = 0.0f32;
    for i in 1..=30 {
        let now = TRANSITION_DURATION_SEC * i as f64 / 30.0;
        let target = rig.tick(now).target;
        max_step = max_step.max((target - prev).length());
        prev = target;
    }
    assert!((prev - FOCUS_POSE.target).length() < EPS);
    // no snap: each step is a small fraction of the full travel
    let travel = (FOCUS_POSE.target - OVERVIEW_POSE.target).length();
    assert!(max_step < travel * 0.25);
}

#[test]
fn view_matrix_is_finite_through_a_tween() {
    let mut rig = CameraRig::with_defaults();
    rig.set_mode(ViewMode::Focus, 0.0);
    for i in 0..=10 {
        let now = TRANSITION_DURATION_SEC * i as f64 / 10.0;
        rig.tick(now);
        let m = rig.pose().view_matrix();
        assert!(m.to_cols_array().iter().all(|v| v.is_finite()));
    }
}
