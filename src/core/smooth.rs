//! Exponential easing for the layered cursor trail and the fade-in opacity.
//!
//! These helpers are pure and deterministic so the host-side tests can drive
//! them with synthetic targets instead of a live pointer.

use glam::Vec2;

use super::constants::{
    ALPHA_DECAY, FLOW_EASE_MOVING, FLOW_EASE_RESTING, TRAIL_DECAY_FAST, TRAIL_DECAY_MEDIUM,
    TRAIL_DECAY_SLOW,
};

#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// One exponentially-lagged copy of a 2D target.
#[derive(Clone, Copy, Debug, Default)]
pub struct LagTrack {
    pub value: Vec2,
    pub decay: f32,
}

impl LagTrack {
    pub fn new(decay: f32) -> Self {
        Self {
            value: Vec2::ZERO,
            decay,
        }
    }

    /// `value += decay * (target - value)`, independently per axis.
    /// Converges toward the target without overshoot for decay in (0, 1].
    pub fn advance(&mut self, target: Vec2) {
        self.value.x = lerp(self.value.x, target.x, self.decay);
        self.value.y = lerp(self.value.y, target.y, self.decay);
    }
}

/// Fast/medium/slow lagged copies of the pointer position.
#[derive(Clone, Copy, Debug)]
pub struct PointerTrails {
    pub fast: LagTrack,
    pub medium: LagTrack,
    pub slow: LagTrack,
}

impl Default for PointerTrails {
    fn default() -> Self {
        Self {
            fast: LagTrack::new(TRAIL_DECAY_FAST),
            medium: LagTrack::new(TRAIL_DECAY_MEDIUM),
            slow: LagTrack::new(TRAIL_DECAY_SLOW),
        }
    }
}

impl PointerTrails {
    /// Run once per frame with the current pointer position.
    pub fn advance_all(&mut self, target: Vec2) {
        self.fast.advance(target);
        self.medium.advance(target);
        self.slow.advance(target);
    }
}

/// One fade-in step for the global opacity uniform.
#[inline]
pub fn ease_alpha(alpha: f32, target: f32) -> f32 {
    lerp(alpha, target, ALPHA_DECAY)
}

/// Ease the flow-map velocity input toward the raw pointer velocity.
/// A non-zero raw velocity is chased quickly; once the pointer rests the
/// input decays slowly so the flow trail fades out rather than snapping off.
#[inline]
pub fn ease_flow_velocity(current: Vec2, raw: Vec2) -> Vec2 {
    let blend = if raw.length_squared() > 0.0 {
        FLOW_EASE_MOVING
    } else {
        FLOW_EASE_RESTING
    };
    current.lerp(raw, blend)
}
