// Host-side tests for tuning constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
#[path = "../src/core/constants.rs"]
mod constants;

use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn decays_are_valid_easing_factors() {
    for d in [TRAIL_DECAY_FAST, TRAIL_DECAY_MEDIUM, TRAIL_DECAY_SLOW, ALPHA_DECAY] {
        assert!(d > 0.0 && d <= 1.0);
    }
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn trail_decays_are_ordered_fast_to_slow() {
    assert!(TRAIL_DECAY_FAST > TRAIL_DECAY_MEDIUM);
    assert!(TRAIL_DECAY_MEDIUM > TRAIL_DECAY_SLOW);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn velocity_floor_is_positive() {
    assert!(VELOCITY_MIN_ELAPSED_MS > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn flow_easing_is_snappier_while_moving() {
    assert!(FLOW_EASE_MOVING > FLOW_EASE_RESTING);
    assert!(FLOW_EASE_MOVING > 0.0 && FLOW_EASE_MOVING <= 1.0);
    assert!(FLOW_EASE_RESTING > 0.0 && FLOW_EASE_RESTING <= 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn flow_field_parameters_are_in_range() {
    // Dissipation below 1 so the field decays; falloff is a uv-space radius
    assert!(FLOW_DISSIPATION > 0.0 && FLOW_DISSIPATION < 1.0);
    assert!(FLOW_FALLOFF > 0.0 && FLOW_FALLOFF <= 1.0);
    assert!(FLOW_STAMP_ALPHA > 0.0 && FLOW_STAMP_ALPHA <= 1.0);
    assert!(FLOW_MAP_SIZE > 0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn fade_targets_full_opacity() {
    assert_eq!(ALPHA_TARGET, 1.0);
}
