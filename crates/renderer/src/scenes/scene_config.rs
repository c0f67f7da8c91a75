use crate::config::{ConfigError, read_file};
use glam::IVec3;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;
use voxel::{GRID_X, GRID_Y, GRID_Z, VoxelGrid};

/// Inclusive box of cells sharing one material
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SceneBox {
    pub min: [i32; 3],
    pub max: [i32; 3],
    pub material: u8,
}

/// Scene description loaded from RON
///
/// Boxes are applied in order, so later boxes overwrite earlier ones and
/// material `0` carves cells back out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SceneConfig {
    /// Grid size in cells
    #[serde(default = "default_size")]
    pub size: [i32; 3],
    pub boxes: Vec<SceneBox>,
}

fn default_size() -> [i32; 3] {
    [GRID_X, GRID_Y, GRID_Z]
}

impl SceneConfig {
    /// Parse a scene from a RON string
    pub fn from_ron_str(content: &str) -> Result<Self, ConfigError> {
        Ok(ron::from_str(content)?)
    }

    /// Load a scene from a RON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = read_file(path.as_ref())?;
        Self::from_ron_str(&content)
    }

    /// Build the grid. Any box reaching outside the grid is an error.
    pub fn build(&self) -> Result<VoxelGrid, ConfigError> {
        let mut grid = VoxelGrid::with_size(IVec3::from_array(self.size))?;

        for scene_box in &self.boxes {
            let min = IVec3::from_array(scene_box.min);
            let max = IVec3::from_array(scene_box.max);
            let (lo, hi) = (min.min(max), min.max(max));
            for z in lo.z..=hi.z {
                for y in lo.y..=hi.y {
                    for x in lo.x..=hi.x {
                        grid.try_set(x, y, z, scene_box.material)?;
                    }
                }
            }
        }

        debug!(
            boxes = self.boxes.len(),
            solid = grid.solid_count(),
            "built scene"
        );
        Ok(grid)
    }
}
