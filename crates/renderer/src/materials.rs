//! Material palette for the voxel scene
//!
//! ## Material Indices
//!
//! - 0: Empty (never shaded as a hit)
//! - 1: Slate ground
//! - 2: Red
//! - 3: Green
//! - 4: Blue
//!
//! Any other index renders white. Colors are linear RGB in `[0.0, 1.0]`.

use glam::Vec3;

/// Base colors for materials 1-4 (index 0 is the empty slot)
pub const MATERIAL_PALETTE: [Vec3; 5] = [
    Vec3::new(1.0, 1.0, 1.0),    // 0: Empty (not used in rendering)
    Vec3::new(0.28, 0.30, 0.33), // 1: Slate
    Vec3::new(0.95, 0.30, 0.18), // 2: Red
    Vec3::new(0.15, 0.75, 0.35), // 3: Green
    Vec3::new(0.20, 0.45, 0.95), // 4: Blue
];

/// Color for unknown material ids
pub const FALLBACK_COLOR: Vec3 = Vec3::ONE;

/// Get the base color for a voxel material
///
/// # Examples
///
/// ```
/// use renderer::materials::get_material_color;
/// use glam::Vec3;
///
/// assert_eq!(get_material_color(2), Vec3::new(0.95, 0.30, 0.18));
/// assert_eq!(get_material_color(200), Vec3::ONE);
/// ```
pub fn get_material_color(material: u8) -> Vec3 {
    match material {
        1..=4 => MATERIAL_PALETTE[material as usize],
        _ => FALLBACK_COLOR,
    }
}
