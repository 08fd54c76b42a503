pub mod constants;
pub mod pointer;
pub mod preset;
pub mod smooth;

pub use constants::*;
pub use pointer::*;
pub use preset::*;
pub use smooth::*;

// Shaders bundled as string constants
pub static METABALL_WGSL: &str = include_str!("../../shaders/metaball.wgsl");
pub static FLOWMAP_WGSL: &str = include_str!("../../shaders/flowmap.wgsl");
