pub mod camera;
pub mod config;
pub mod constants;
pub mod drive;
pub mod elements;
pub mod entry;
pub mod error;
pub mod lyrics;
pub mod playback;
pub mod pointcloud;
pub mod scheduler;
pub mod session;
pub mod spectrum;
pub mod tracks;
pub mod transform;
pub mod tween;

pub use camera::*;
pub use config::*;
pub use drive::*;
pub use elements::*;
pub use entry::*;
pub use error::*;
pub use lyrics::*;
pub use playback::*;
pub use pointcloud::*;
pub use scheduler::*;
pub use session::*;
pub use spectrum::*;
pub use tracks::*;
pub use transform::*;
pub use tween::*;

// Shaders bundled as string constants
pub static PARTICLES_WGSL: &str = include_str!("../shaders/particles.wgsl");
