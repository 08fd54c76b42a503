// Host-side tests for pointer tracking.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
#[path = "../src/core/constants.rs"]
mod constants;
#[path = "../src/core/pointer.rs"]
mod pointer;

use constants::*;
use glam::Vec2;
use pointer::*;

const SURFACE: Vec2 = Vec2::new(800.0, 600.0);

#[test]
fn first_sample_seeds_without_velocity() {
    let mut p = PointerState::default();
    p.sample(Vec2::new(400.0, 300.0), SURFACE, 1000.0);

    assert!(p.uv.x.is_finite() && p.uv.y.is_finite());
    assert_eq!(p.uv, Vec2::new(0.5, 0.5));
    assert_eq!(p.velocity, Vec2::ZERO);
    assert!(p.moved_since_last_frame());
}

#[test]
fn uv_is_normalized_and_y_flipped() {
    let mut p = PointerState::default();
    p.sample(Vec2::new(0.0, 600.0), SURFACE, 0.0);
    assert_eq!(p.uv, Vec2::new(0.0, 0.0));

    p.sample(Vec2::new(800.0, 0.0), SURFACE, 100.0);
    assert_eq!(p.uv, Vec2::new(1.0, 1.0));
}

#[test]
fn velocity_is_delta_over_floored_elapsed() {
    let mut p = PointerState::default();
    p.sample(Vec2::new(0.0, 0.0), SURFACE, 1000.0);
    p.sample(Vec2::new(10.0, -20.0), SURFACE, 1100.0);

    // 100 ms elapsed, well above the floor
    assert!((p.velocity.x - 10.0 / 100.0).abs() < 1e-6);
    assert!((p.velocity.y - -20.0 / 100.0).abs() < 1e-6);
}

#[test]
fn velocity_elapsed_is_floored_on_event_bursts() {
    let mut p = PointerState::default();
    p.sample(Vec2::new(0.0, 0.0), SURFACE, 1000.0);
    // 5 ms elapsed, below the 14 ms floor
    p.sample(Vec2::new(7.0, 0.0), SURFACE, 1005.0);

    let expected = 7.0 / VELOCITY_MIN_ELAPSED_MS as f32;
    assert!((p.velocity.x - expected).abs() < 1e-6);
    assert!(p.velocity.x.is_finite());
}

#[test]
fn same_timestamp_does_not_divide_by_zero() {
    let mut p = PointerState::default();
    p.sample(Vec2::new(0.0, 0.0), SURFACE, 1000.0);
    p.sample(Vec2::new(3.0, 4.0), SURFACE, 1000.0);

    assert!(p.velocity.x.is_finite() && p.velocity.y.is_finite());
    assert!((p.velocity.x - 3.0 / VELOCITY_MIN_ELAPSED_MS as f32).abs() < 1e-6);
}

#[test]
fn begin_frame_keeps_velocity_after_movement_then_zeroes_it() {
    let mut p = PointerState::default();
    p.sample(Vec2::new(0.0, 0.0), SURFACE, 1000.0);
    p.sample(Vec2::new(50.0, 0.0), SURFACE, 1050.0);

    // First tick after the move: velocity survives, flag is consumed
    p.begin_frame();
    assert!(p.velocity.x > 0.0);
    assert!(!p.moved_since_last_frame());

    // Second tick with no movement in between: velocity resets to zero
    p.begin_frame();
    assert_eq!(p.velocity, Vec2::ZERO);
}

#[test]
fn degenerate_surface_keeps_previous_uv() {
    let mut p = PointerState::default();
    p.sample(Vec2::new(400.0, 300.0), SURFACE, 0.0);
    let uv = p.uv;

    p.sample(Vec2::new(500.0, 300.0), Vec2::ZERO, 20.0);
    assert_eq!(p.uv, uv);
    assert!(p.velocity.x.is_finite());
}
