//! VoxelGrid - a dense, fixed-size grid of material ids
//!
//! The grid stores one `u8` material per unit cell. Material `0` is empty,
//! anything else is opaque. Dimensions are fixed when the grid is created.

use crate::error::{Result, VoxelError};
use glam::{IVec3, Vec3};

/// Default grid width (x)
pub const GRID_X: i32 = 24;
/// Default grid height (y)
pub const GRID_Y: i32 = 16;
/// Default grid depth (z)
pub const GRID_Z: i32 = 24;

/// Material id of an empty cell
pub const EMPTY: u8 = 0;

/// Largest cell count `with_size` accepts (16 Mi cells, one byte each)
pub const MAX_CELLS: i32 = 1 << 24;

/// A dense 3-D grid of material ids.
///
/// # Layout
///
/// Cells live in one flat array. The mapping from cell coordinates to array
/// slot is
///
/// ```text
/// index(x, y, z) = x + y * size.x + z * size.x * size.y
/// ```
///
/// Every reader and writer goes through [`VoxelGrid::index`], so a different
/// layout only needs to change that one function.
///
/// # Example
///
/// ```
/// use voxel::VoxelGrid;
///
/// let mut grid = VoxelGrid::new();
/// grid.set(8, 0, 8, 2);
/// assert_eq!(grid.get(8, 0, 8), 2);
///
/// // Out-of-range writes are dropped, out-of-range reads are empty
/// grid.set(-1, 0, 0, 5);
/// assert_eq!(grid.get(-1, 0, 0), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoxelGrid {
    size: IVec3,
    voxels: Vec<u8>,
}

impl Default for VoxelGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl VoxelGrid {
    /// Create an empty grid with the default `GRID_X x GRID_Y x GRID_Z` size.
    pub fn new() -> Self {
        Self {
            size: IVec3::new(GRID_X, GRID_Y, GRID_Z),
            voxels: vec![EMPTY; (GRID_X * GRID_Y * GRID_Z) as usize],
        }
    }

    /// Create an empty grid with a custom size.
    ///
    /// Every dimension must be at least one cell and the total cell count
    /// at most [`MAX_CELLS`], which also keeps [`VoxelGrid::index`] within `i32`.
    pub fn with_size(size: IVec3) -> Result<Self> {
        let cells = size
            .x
            .checked_mul(size.y)
            .and_then(|xy| xy.checked_mul(size.z));

        let len = match cells {
            Some(n) if size.min_element() >= 1 && n <= MAX_CELLS => n as usize,
            _ => {
                return Err(VoxelError::InvalidSize {
                    x: size.x,
                    y: size.y,
                    z: size.z,
                })
            }
        };

        Ok(Self {
            size,
            voxels: vec![EMPTY; len],
        })
    }

    /// Grid dimensions in cells.
    pub fn size(&self) -> IVec3 {
        self.size
    }

    /// Upper corner of the grid bounding box. The lower corner is the origin.
    pub fn bounds_max(&self) -> Vec3 {
        self.size.as_vec3()
    }

    /// Flat array slot of a cell. The caller guarantees the cell is in bounds.
    #[inline]
    pub fn index(&self, x: i32, y: i32, z: i32) -> usize {
        (x + y * self.size.x + z * self.size.x * self.size.y) as usize
    }

    /// Check if a cell lies inside the grid.
    #[inline]
    pub fn in_bounds(&self, x: i32, y: i32, z: i32) -> bool {
        x >= 0 && x < self.size.x && y >= 0 && y < self.size.y && z >= 0 && z < self.size.z
    }

    /// Check if a cell lies inside the grid.
    #[inline]
    pub fn contains(&self, cell: IVec3) -> bool {
        self.in_bounds(cell.x, cell.y, cell.z)
    }

    /// Read a cell. Out-of-range cells read as [`EMPTY`].
    #[inline]
    pub fn get(&self, x: i32, y: i32, z: i32) -> u8 {
        if self.in_bounds(x, y, z) {
            self.voxels[self.index(x, y, z)]
        } else {
            EMPTY
        }
    }

    /// Read a cell by vector coordinate.
    #[inline]
    pub fn get_cell(&self, cell: IVec3) -> u8 {
        self.get(cell.x, cell.y, cell.z)
    }

    /// Write a cell. Out-of-range writes are silently ignored.
    pub fn set(&mut self, x: i32, y: i32, z: i32, material: u8) {
        if self.in_bounds(x, y, z) {
            let index = self.index(x, y, z);
            self.voxels[index] = material;
        }
    }

    /// Write a cell, reporting out-of-range coordinates instead of dropping them.
    pub fn try_set(&mut self, x: i32, y: i32, z: i32, material: u8) -> Result<()> {
        if !self.in_bounds(x, y, z) {
            return Err(VoxelError::OutOfBounds {
                x,
                y,
                z,
                size_x: self.size.x,
                size_y: self.size.y,
                size_z: self.size.z,
            });
        }
        self.set(x, y, z, material);
        Ok(())
    }

    /// Fill the inclusive box `min..=max`. Cells outside the grid are skipped.
    pub fn fill_box(&mut self, min: IVec3, max: IVec3, material: u8) {
        let lo = min.min(max);
        let hi = min.max(max);
        for z in lo.z..=hi.z {
            for y in lo.y..=hi.y {
                for x in lo.x..=hi.x {
                    self.set(x, y, z, material);
                }
            }
        }
    }

    /// Reset every cell to [`EMPTY`].
    pub fn clear(&mut self) {
        self.voxels.fill(EMPTY);
    }

    /// Number of non-empty cells.
    pub fn solid_count(&self) -> usize {
        self.voxels.iter().filter(|&&v| v != EMPTY).count()
    }

    /// Raw cell storage in `index` order.
    pub fn as_slice(&self) -> &[u8] {
        &self.voxels
    }
}
