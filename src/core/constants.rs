// Smoothing and flow-map tuning constants shared with the host-side tests.

// Lag-track decay factors, applied once per frame. The fast track chases the
// cursor, the slow one drifts well behind it.
pub const TRAIL_DECAY_FAST: f32 = 0.05;
pub const TRAIL_DECAY_MEDIUM: f32 = 0.025;
pub const TRAIL_DECAY_SLOW: f32 = 0.01;

// Fade-in easing toward full opacity
pub const ALPHA_DECAY: f32 = 0.05;
pub const ALPHA_TARGET: f32 = 1.0;

// Elapsed-time floor (ms) when deriving velocity from two pointer samples.
// Event bursts can arrive closer together than this; the floor keeps the
// velocity bounded and the division well-defined.
pub const VELOCITY_MIN_ELAPSED_MS: f64 = 14.0;

// Flow-map velocity input easing: snappy while the pointer moves, a slower
// blend back to rest so the trail fades out instead of cutting off.
pub const FLOW_EASE_MOVING: f32 = 0.5;
pub const FLOW_EASE_RESTING: f32 = 0.1;

// Flow-map stamp shape and field persistence
pub const FLOW_FALLOFF: f32 = 0.3;
pub const FLOW_DISSIPATION: f32 = 0.98;
pub const FLOW_STAMP_ALPHA: f32 = 1.0;

// Side length of the square ping-pong flow textures
pub const FLOW_MAP_SIZE: u32 = 128;
