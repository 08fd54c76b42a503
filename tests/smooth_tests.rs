// Host-side tests for the pure smoothing helpers.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
#[path = "../src/core/constants.rs"]
mod constants;
#[path = "../src/core/smooth.rs"]
mod smooth;

use constants::*;
use glam::Vec2;
use smooth::*;

#[test]
fn lag_track_converges_without_overshoot() {
    // Any decay in (0, 1] must approach the target monotonically and never
    // pass it.
    for decay in [0.01_f32, 0.025, 0.05, 0.5, 1.0] {
        let mut track = LagTrack::new(decay);
        let target = Vec2::new(1.0, -2.0);
        let mut prev_dist = track.value.distance(target);
        for _ in 0..500 {
            track.advance(target);
            let dist = track.value.distance(target);
            assert!(dist <= prev_dist + 1e-6, "decay {} diverged", decay);
            assert!(track.value.x <= target.x + 1e-6);
            assert!(track.value.y >= target.y - 1e-6);
            prev_dist = dist;
        }
        assert!(prev_dist < 1e-4, "decay {} did not converge", decay);
    }
}

#[test]
fn lag_track_is_stable_at_the_target() {
    let mut track = LagTrack::new(0.05);
    let target = Vec2::new(0.3, 0.7);
    track.value = target;
    for _ in 0..10 {
        track.advance(target);
    }
    assert_eq!(track.value, target);
}

#[test]
fn trails_are_ordered_fast_to_slow() {
    let mut trails = PointerTrails::default();
    let target = Vec2::splat(1.0);
    for _ in 0..50 {
        trails.advance_all(target);
    }
    let d_fast = trails.fast.value.distance(target);
    let d_medium = trails.medium.value.distance(target);
    let d_slow = trails.slow.value.distance(target);
    assert!(d_fast < d_medium);
    assert!(d_medium < d_slow);
}

#[test]
fn alpha_after_n_frames_matches_closed_form() {
    // alpha_N = 1 - (1 - decay)^N when starting from zero
    let mut alpha = 0.0_f32;
    let n = 60;
    for _ in 0..n {
        alpha = ease_alpha(alpha, ALPHA_TARGET);
    }
    let expected = 1.0 - (1.0 - ALPHA_DECAY).powi(n);
    assert!((alpha - expected).abs() < 1e-4, "{} vs {}", alpha, expected);
}

#[test]
fn flow_velocity_eases_fast_while_moving() {
    let current = Vec2::new(1.0, 0.0);
    let raw = Vec2::new(2.0, 0.0);
    let next = ease_flow_velocity(current, raw);
    let expected = current + (raw - current) * FLOW_EASE_MOVING;
    assert!((next - expected).length() < 1e-6);
}

#[test]
fn flow_velocity_decays_slowly_at_rest() {
    let current = Vec2::new(1.0, -0.5);
    let next = ease_flow_velocity(current, Vec2::ZERO);
    let expected = current * (1.0 - FLOW_EASE_RESTING);
    assert!((next - expected).length() < 1e-6);
    // Never reaches zero in one step, so the trail fades out gradually
    assert!(next.length() > 0.0);
}
