//! Pinhole camera orbiting the voxel scene
//!
//! The eye circles a fixed target above the grid centre with a slow vertical
//! bob. Ray directions for a whole image are produced incrementally by
//! [`RayFan`]: one basis-vector step per pixel across a row and one per row,
//! instead of re-evaluating the projection for every pixel.

use glam::{IVec3, Vec3};
use serde::{Deserialize, Serialize};

/// Default field of view in degrees
pub const DEFAULT_FOV_DEGREES: f32 = 55.0;

/// Parameters of the orbiting eye
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrbitConfig {
    /// Height of the look-at target
    pub target_height: f32,
    /// Horizontal distance from eye to target
    pub radius: f32,
    /// Eye height at the middle of the bob
    pub eye_height: f32,
    /// Vertical bob amplitude
    pub bob_amplitude: f32,
    /// Bob frequency relative to the orbit angle
    pub bob_rate: f32,
    /// Orbit angle advanced per second of scene time
    pub angular_rate: f32,
}

impl Default for OrbitConfig {
    fn default() -> Self {
        Self {
            target_height: 3.0,
            radius: 18.0,
            eye_height: 8.5,
            bob_amplitude: 1.5,
            bob_rate: 0.7,
            angular_rate: 0.6,
        }
    }
}

impl OrbitConfig {
    /// Look-at target: the middle of the grid floor plan, lifted to `target_height`.
    pub fn target(&self, grid_size: IVec3) -> Vec3 {
        Vec3::new(
            grid_size.x as f32 * 0.5,
            self.target_height,
            grid_size.z as f32 * 0.5,
        )
    }

    /// Eye position at scene time `time_s`.
    ///
    /// A frozen camera sits on the +x side of the target at `eye_height`.
    pub fn eye(&self, grid_size: IVec3, time_s: f32, frozen: bool) -> Vec3 {
        let center = self.target(grid_size);
        if frozen {
            return Vec3::new(center.x + self.radius, self.eye_height, center.z);
        }

        let orbit_t = time_s * self.angular_rate;
        Vec3::new(
            center.x + orbit_t.cos() * self.radius,
            self.eye_height + (orbit_t * self.bob_rate).sin() * self.bob_amplitude,
            center.z + orbit_t.sin() * self.radius,
        )
    }
}

/// Camera with an orthonormal basis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub eye: Vec3,
    pub forward: Vec3,
    pub right: Vec3,
    pub up: Vec3,
    /// `tan(fov / 2)`
    pub fov_scale: f32,
}

impl Camera {
    /// Build a camera at `eye` looking at `target` with world up `+Y`.
    ///
    /// Looking straight up or down leaves `right` undefined; orbit paths
    /// never do that.
    pub fn look_at(eye: Vec3, target: Vec3, fov_degrees: f32) -> Self {
        let forward = (target - eye).normalize();
        let right = forward.cross(Vec3::Y).normalize();
        let up = right.cross(forward).normalize();
        let fov_scale = (fov_degrees * 0.5 * (std::f32::consts::PI / 180.0)).tan();

        Self {
            eye,
            forward,
            right,
            up,
            fov_scale,
        }
    }

    /// Camera on the orbit at scene time `time_s`.
    pub fn orbit(
        orbit: &OrbitConfig,
        grid_size: IVec3,
        time_s: f32,
        frozen: bool,
        fov_degrees: f32,
    ) -> Self {
        Self::look_at(
            orbit.eye(grid_size, time_s, frozen),
            orbit.target(grid_size),
            fov_degrees,
        )
    }

    /// Unnormalized pinhole direction through the centre of pixel `(x, y)`.
    ///
    /// Row 0 is the top of the image.
    pub fn direction_at(&self, x: u32, y: u32, width: u32, height: u32) -> Vec3 {
        let aspect = width as f32 / height as f32;
        let u = (-1.0 + (2.0 * x as f32 + 1.0) / width as f32) * aspect * self.fov_scale;
        let v = (1.0 - (2.0 * y as f32 + 1.0) / height as f32) * self.fov_scale;
        self.forward + self.right * u + self.up * v
    }

    /// Incremental ray generator for a `width x height` image.
    pub fn ray_fan(&self, width: u32, height: u32) -> RayFan {
        let aspect = width as f32 / height as f32;
        let inv_w = 1.0 / width as f32;
        let inv_h = 1.0 / height as f32;

        let u_step = 2.0 * aspect * self.fov_scale * inv_w;
        let v_step = -2.0 * self.fov_scale * inv_h;
        let u_start = (-1.0 + inv_w) * aspect * self.fov_scale;
        let v_start = (1.0 - inv_h) * self.fov_scale;

        RayFan {
            forward: self.forward,
            right: self.right,
            up: self.up,
            u_start,
            v_start,
            v_step,
            step_x: self.right * u_step,
        }
    }
}

/// Precomputed per-pixel basis steps for one image
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayFan {
    forward: Vec3,
    right: Vec3,
    up: Vec3,
    u_start: f32,
    v_start: f32,
    v_step: f32,
    step_x: Vec3,
}

impl RayFan {
    /// Unnormalized direction of the first (leftmost) pixel in row `y`.
    #[inline]
    pub fn row_start(&self, y: u32) -> Vec3 {
        let v = self.v_start + y as f32 * self.v_step;
        let row_base = self.forward + self.up * v;
        row_base + self.right * self.u_start
    }

    /// Iterate the unnormalized directions of row `y`, left to right.
    pub fn row(&self, y: u32, width: u32) -> impl Iterator<Item = Vec3> + '_ {
        let mut ray = self.row_start(y);
        (0..width).map(move |_| {
            let current = ray;
            ray += self.step_x;
            current
        })
    }
}
