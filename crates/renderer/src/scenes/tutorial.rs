//! Built-in demo scenes

use glam::IVec3;
use voxel::VoxelGrid;

/// Create the demo scene on a default-size grid
///
/// - material 1: ground plane filling the whole `y = 0` layer
/// - material 2: red 2x2 column at x 8..=9, z 8..=9, five cells tall
/// - material 3: green wall along x 14..=18 at z = 14, three cells tall
/// - material 4: blue single-cell column at x = 17, z = 6, seven cells tall
pub fn create_tutorial_scene() -> VoxelGrid {
    let mut grid = create_ground_plane(1);

    grid.fill_box(IVec3::new(8, 1, 8), IVec3::new(9, 5, 9), 2);
    grid.fill_box(IVec3::new(14, 1, 14), IVec3::new(18, 3, 14), 3);
    grid.fill_box(IVec3::new(17, 1, 6), IVec3::new(17, 7, 6), 4);

    grid
}

/// Create a default-size grid whose `y = 0` layer is filled with `material`
pub fn create_ground_plane(material: u8) -> VoxelGrid {
    let mut grid = VoxelGrid::new();
    let size = grid.size();
    grid.fill_box(IVec3::ZERO, IVec3::new(size.x - 1, 0, size.z - 1), material);
    grid
}
