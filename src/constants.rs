// Wiring constants for the web front-end.

// The effect binds to this canvas; initialization fails without it.
pub const CANVAS_SELECTOR: &str = "canvas.metaball";

// Optional canvas attribute choosing the fragment preset.
pub const PRESET_ATTRIBUTE: &str = "data-preset";
