//! Renderer configuration
//!
//! Defaults reproduce the built-in 320x180 image with a 55 degree field of
//! view. A RON file can override any subset of fields:
//!
//! ```ron
//! (
//!     resolution: (640, 360),
//!     orbit: (radius: 22.0),
//! )
//! ```

use crate::camera::{DEFAULT_FOV_DEGREES, OrbitConfig};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default output width in pixels
pub const IMG_W: u32 = 320;
/// Default output height in pixels
pub const IMG_H: u32 = 180;

/// Errors raised while loading configuration or scene files
#[derive(Error, Debug)]
pub enum ConfigError {
    /// File could not be read
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// RON syntax or schema error
    #[error("RON parse error: {0}")]
    Parse(#[from] ron::error::SpannedError),

    /// Parsed but unusable value
    #[error("invalid configuration: {0}")]
    Invalid(String),

    /// Scene description places voxels outside the grid
    #[error("scene error: {0}")]
    Scene(#[from] voxel::VoxelError),
}

/// Read a whole file, tagging errors with the path.
pub(crate) fn read_file(path: &Path) -> Result<String, ConfigError> {
    fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Image and camera parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RendererConfig {
    /// Output resolution [width, height]
    pub resolution: [u32; 2],
    /// Field of view in degrees
    pub fov_degrees: f32,
    /// Orbiting eye parameters
    pub orbit: OrbitConfig,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            resolution: [IMG_W, IMG_H],
            fov_degrees: DEFAULT_FOV_DEGREES,
            orbit: OrbitConfig::default(),
        }
    }
}

impl RendererConfig {
    /// Parse and validate a RON document.
    pub fn from_ron_str(content: &str) -> Result<Self, ConfigError> {
        let config: RendererConfig = ron::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a RON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = read_file(path.as_ref())?;
        Self::from_ron_str(&content)
    }

    /// Reject values the renderer cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let [width, height] = self.resolution;
        if width == 0 || height == 0 {
            return Err(ConfigError::Invalid(format!(
                "resolution must be non-zero, got {width}x{height}"
            )));
        }
        if !(self.fov_degrees > 0.0 && self.fov_degrees < 180.0) {
            return Err(ConfigError::Invalid(format!(
                "fov_degrees must be in (0, 180), got {}",
                self.fov_degrees
            )));
        }
        if !(self.orbit.radius > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "orbit radius must be positive, got {}",
                self.orbit.radius
            )));
        }
        Ok(())
    }

    pub fn width(&self) -> u32 {
        self.resolution[0]
    }

    pub fn height(&self) -> u32 {
        self.resolution[1]
    }
}
