//! Error types for grid construction

use thiserror::Error;

/// Result type for voxel grid operations
pub type Result<T> = std::result::Result<T, VoxelError>;

/// Errors reported by the strict grid-building API
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoxelError {
    /// Write targeted a cell outside the grid
    #[error("voxel ({x}, {y}, {z}) is outside the {size_x}x{size_y}x{size_z} grid")]
    OutOfBounds {
        x: i32,
        y: i32,
        z: i32,
        size_x: i32,
        size_y: i32,
        size_z: i32,
    },

    /// Grid dimensions must all be at least one cell
    #[error("invalid grid size {x}x{y}x{z}")]
    InvalidSize { x: i32, y: i32, z: i32 },
}
