//! Dense voxel grid with DDA ray traversal
//!
//! - **grid**: fixed-size material grid with bounds-checked access
//! - **ray**: rays and slab-method clipping against the grid box
//! - **traversal**: Amanatides-Woo walk from the clip entry to the first solid cell

mod axis;
pub mod error;
pub mod grid;
pub mod ray;
pub mod traversal;

pub use axis::Axis;
pub use error::VoxelError;
pub use grid::{VoxelGrid, EMPTY, GRID_X, GRID_Y, GRID_Z, MAX_CELLS};
pub use ray::{ClipInterval, Ray};
pub use traversal::{TraceOutcome, TraversalDebugState, TraversalState, MAX_STEPS};

// Re-export glam for convenience
pub use glam;
