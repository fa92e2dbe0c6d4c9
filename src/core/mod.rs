pub mod camera;
pub mod config;
pub mod constants;
pub mod geometry;
pub mod particles;
pub mod ring_uv;
pub mod scene;
pub mod scroll;
pub mod snap;
pub mod tunables;

pub use camera::Camera;
pub use config::SceneConfig;
pub use scene::{assemble, SceneGraph, SceneState};
pub use snap::{SnapController, WheelDecision};
pub use tunables::Tunables;

// Shaders bundled as string constants
pub static MESH_WGSL: &str = include_str!("../../shaders/mesh.wgsl");
pub static POINTS_WGSL: &str = include_str!("../../shaders/points.wgsl");
