//! Scenes for rendering

pub mod scene_config;
pub mod tutorial;

pub use scene_config::{SceneBox, SceneConfig};
pub use tutorial::{create_ground_plane, create_tutorial_scene};
