//! Shading model
//!
//! Hits get one directional Lambert term scaled by a height-based ambient
//! factor. Misses get a vertical sky gradient that is slightly darker for rays
//! that passed through the grid than for rays that never touched it.

use crate::materials::get_material_color;
use glam::Vec3;
use voxel::Axis;

/// Directional light direction (normalized)
///
/// Pre-normalized: normalize(0.55, 1.0, 0.3)
pub const LIGHT_DIR: Vec3 = Vec3::new(0.46608496, 0.8474272, 0.25422817);

/// Light every hit receives regardless of orientation
pub const AMBIENT: f32 = 0.2;

/// Weight of the Lambert term
pub const DIFFUSE_STRENGTH: f32 = 0.8;

/// Height occlusion at the grid floor; rises linearly to 1.0 at the ceiling
pub const AO_FLOOR: f32 = 0.7;
pub const AO_RANGE: f32 = 0.3;

/// Color of a surface hit.
///
/// `cell_y` is the hit cell's row and `grid_height` the grid's y size.
pub fn shade_hit(material: u8, normal: Axis, cell_y: i32, grid_height: i32) -> Vec3 {
    let base = get_material_color(material);
    let ndotl = normal.as_vec3().dot(LIGHT_DIR).max(0.0);
    let ao = AO_FLOOR + AO_RANGE * (cell_y as f32 / grid_height as f32);
    base * (AMBIENT + DIFFUSE_STRENGTH * ndotl * ao)
}

/// Background color for a ray that hit nothing.
pub fn shade_miss(direction: Vec3, entered_grid: bool) -> Vec3 {
    let sky = (0.5 * (direction.y + 1.0)).clamp(0.0, 1.0);
    if entered_grid {
        Vec3::new(0.5 + 0.3 * sky, 0.65 + 0.2 * sky, 0.95)
    } else {
        Vec3::new(0.55 + 0.2 * sky, 0.7 + 0.15 * sky, 0.95)
    }
}

/// Quantize a linear color to opaque RGBA8.
#[inline]
pub fn to_rgba8(color: Vec3) -> [u8; 4] {
    let channel = |c: f32| ((c * 255.0) as i32).clamp(0, 255) as u8;
    [channel(color.x), channel(color.y), channel(color.z), 255]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_light_dir_is_normalized() {
        assert!((LIGHT_DIR.length() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_top_face_on_floor() {
        let color = shade_hit(1, Axis::PosY, 0, 16);
        let expected = Vec3::new(0.28, 0.30, 0.33) * (0.2 + 0.8 * 0.8474272 * 0.7);
        assert!((color - expected).abs().max_element() < 1e-6);
    }

    #[test]
    fn test_faces_away_from_light_get_ambient_only() {
        for normal in [Axis::NegX, Axis::NegY, Axis::NegZ] {
            let color = shade_hit(2, normal, 5, 16);
            assert_eq!(color, Vec3::new(0.95, 0.30, 0.18) * 0.2);
        }
    }

    #[test]
    fn test_higher_cells_are_brighter() {
        let low = shade_hit(3, Axis::PosX, 1, 16);
        let high = shade_hit(3, Axis::PosX, 10, 16);
        assert!(high.y > low.y);
    }

    #[test]
    fn test_miss_gradient() {
        let outside_up = shade_miss(Vec3::Y, false);
        assert!((outside_up - Vec3::new(0.75, 0.85, 0.95)).abs().max_element() < 1e-6);

        let exited_down = shade_miss(Vec3::NEG_Y, true);
        assert_eq!(exited_down, Vec3::new(0.5, 0.65, 0.95));

        // Exited rays are darker than rays that never entered
        let dir = Vec3::new(0.3, 0.2, 0.9).normalize();
        assert!(shade_miss(dir, true).x < shade_miss(dir, false).x);
    }

    #[test]
    fn test_to_rgba8_clamps() {
        assert_eq!(to_rgba8(Vec3::new(0.0, 0.5, 1.0)), [0, 127, 255, 255]);
        assert_eq!(to_rgba8(Vec3::new(-0.5, 2.0, 1.0)), [0, 255, 255, 255]);
    }
}
