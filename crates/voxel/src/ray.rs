//! Rays and ray/box clipping
//!
//! Clipping uses the slab method: each axis narrows a running `[tmin, tmax]`
//! interval independently. Rays nearly parallel to a slab skip the division
//! and instead require the origin to already lie between the two planes.

use glam::Vec3;

/// Direction components with magnitude below this are treated as zero
pub const PARALLEL_EPSILON: f32 = 1e-6;

/// Stand-in for infinity in clip and traversal distances
pub const FAR: f32 = 1e30;

/// A ray in grid space (one unit per voxel)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    /// Create a ray. The direction is stored as given.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// Same ray with a unit-length direction.
    pub fn normalized(self) -> Self {
        Self {
            origin: self.origin,
            direction: self.direction.normalize(),
        }
    }

    /// Point at parametric distance `t`.
    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Clip the ray against the box `[min, max]`.
    ///
    /// Returns `None` when the ray misses the box or the box lies entirely
    /// behind the origin.
    pub fn clip_to_box(&self, min: Vec3, max: Vec3) -> Option<ClipInterval> {
        let mut tmin = -FAR;
        let mut tmax = FAR;

        for axis in 0..3 {
            if !axis_slab(
                self.origin[axis],
                self.direction[axis],
                min[axis],
                max[axis],
                &mut tmin,
                &mut tmax,
            ) {
                return None;
            }
        }

        if tmax < tmin.max(0.0) {
            return None;
        }

        Some(ClipInterval {
            t_enter: tmin,
            t_exit: tmax,
        })
    }
}

/// Parametric entry/exit distances of a ray through a box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClipInterval {
    pub t_enter: f32,
    pub t_exit: f32,
}

impl ClipInterval {
    /// Distance at which traversal starts; zero when the origin is inside.
    #[inline]
    pub fn start(&self) -> f32 {
        self.t_enter.max(0.0)
    }

    /// Length of the clipped segment in front of the origin.
    pub fn length(&self) -> f32 {
        (self.t_exit - self.start()).max(0.0)
    }
}

/// Narrow `[tmin, tmax]` by one axis-aligned slab.
///
/// Returns `false` only for a parallel ray whose origin is outside the slab.
#[inline]
fn axis_slab(orig: f32, dir: f32, mn: f32, mx: f32, tmin: &mut f32, tmax: &mut f32) -> bool {
    if dir.abs() < PARALLEL_EPSILON {
        return !(orig < mn || orig > mx);
    }

    let inv = 1.0 / dir;
    let mut t_a = (mn - orig) * inv;
    let mut t_b = (mx - orig) * inv;
    if t_a > t_b {
        std::mem::swap(&mut t_a, &mut t_b);
    }

    *tmin = tmin.max(t_a);
    *tmax = tmax.min(t_b);
    true
}
