//! CPU voxel renderer
//!
//! Renders a static [`voxel::VoxelGrid`] by casting one ray per pixel from an
//! orbiting pinhole camera and walking each ray through the grid with 3D DDA.
//!
//! # Architecture
//!
//! - **camera**: orbit path, camera basis and incremental ray fan
//! - **frame**: per-pixel trace, shade and stats loop
//! - **lighting**: hit and sky shading
//! - **materials**: material id palette
//! - **session**: frame clock, freeze and quit toggles
//! - **stats**: per-frame traversal counters
//! - **diagnostics**: text summary of the last frame
//! - **config**: RON configuration and loading errors
//! - **scenes**: built-in and RON-described scenes

pub mod camera;
pub mod config;
pub mod diagnostics;
pub mod frame;
pub mod lighting;
pub mod materials;
pub mod scenes;
pub mod session;
pub mod stats;

pub use camera::{Camera, DEFAULT_FOV_DEGREES, OrbitConfig, RayFan};
pub use config::{ConfigError, IMG_H, IMG_W, RendererConfig};
pub use frame::{Frame, FrameRenderer, RenderContext, TraceResult};
pub use lighting::{LIGHT_DIR, shade_hit, shade_miss, to_rgba8};
pub use scenes::{SceneConfig, create_ground_plane, create_tutorial_scene};
pub use session::RenderSession;
pub use stats::FrameStats;
