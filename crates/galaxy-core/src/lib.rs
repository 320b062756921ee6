pub mod constants;
pub mod error;
pub mod galaxy;
pub mod params;
pub mod scene;

pub static POINTS_WGSL: &str = include_str!("../shaders/points.wgsl");

pub use error::*;
pub use galaxy::*;
pub use params::*;
pub use scene::*;
