//! Pointer tracking: normalized position, instantaneous velocity and the
//! moved-since-last-frame flag consumed by the frame driver.

use glam::Vec2;

use super::constants::VELOCITY_MIN_ELAPSED_MS;

/// Shared pointer state. Mutated only by the event handlers; read once per
/// frame by the frame driver via [`PointerState::begin_frame`].
#[derive(Clone, Copy, Debug, Default)]
pub struct PointerState {
    /// Position in UV space, [0,1]x[0,1], Y flipped from page space.
    pub uv: Vec2,
    /// Velocity in page pixels per millisecond.
    pub velocity: Vec2,
    last_px: Vec2,
    last_ms: f64,
    seen_input: bool,
    needs_update: bool,
}

impl PointerState {
    /// Feed one pointer/touch sample in absolute page pixels.
    ///
    /// `surface_px` is the current drawing-buffer size; a degenerate size
    /// leaves the previous UV untouched. The first sample only seeds the
    /// history, so a single point never produces a velocity.
    pub fn sample(&mut self, page_px: Vec2, surface_px: Vec2, now_ms: f64) {
        if surface_px.x > 0.0 && surface_px.y > 0.0 {
            self.uv = Vec2::new(
                page_px.x / surface_px.x,
                1.0 - page_px.y / surface_px.y,
            );
        }
        if !self.seen_input {
            self.last_px = page_px;
            self.last_ms = now_ms;
            self.seen_input = true;
        }
        let delta = page_px - self.last_px;
        self.last_px = page_px;
        let elapsed = (now_ms - self.last_ms).max(VELOCITY_MIN_ELAPSED_MS);
        self.last_ms = now_ms;
        self.velocity = delta / elapsed as f32;
        self.needs_update = true;
    }

    /// Consumed once per tick by the frame driver: zero the velocity if no
    /// movement arrived since the previous tick, then clear the moved flag.
    /// Keeps a stale velocity from perpetually animating the flow field.
    pub fn begin_frame(&mut self) {
        if !self.needs_update {
            self.velocity = Vec2::ZERO;
        }
        self.needs_update = false;
    }

    pub fn moved_since_last_frame(&self) -> bool {
        self.needs_update
    }
}
