use glam::Vec3;

/// Axis-aligned face normal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    PosX,
    NegX,
    PosY,
    NegY,
    PosZ,
    NegZ,
}

impl Axis {
    /// Convert to Vec3 normal
    pub fn as_vec3(&self) -> Vec3 {
        match self {
            Axis::PosX => Vec3::X,
            Axis::NegX => -Vec3::X,
            Axis::PosY => Vec3::Y,
            Axis::NegY => -Vec3::Y,
            Axis::PosZ => Vec3::Z,
            Axis::NegZ => -Vec3::Z,
        }
    }

    /// Normal of the face crossed when stepping along `index` (0 = x, 1 = y, 2 = z)
    /// in direction `step`.
    ///
    /// The normal points back against the step: moving down (`step < 0` on y)
    /// enters the next cell through its top face, so the normal is `PosY`.
    pub fn crossed_face(index: usize, step: i32) -> Self {
        let positive = step < 0;
        match (index, positive) {
            (0, true) => Axis::PosX,
            (0, false) => Axis::NegX,
            (1, true) => Axis::PosY,
            (1, false) => Axis::NegY,
            (_, true) => Axis::PosZ,
            (_, false) => Axis::NegZ,
        }
    }
}
