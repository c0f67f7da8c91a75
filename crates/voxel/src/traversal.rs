//! Voxel traversal along a ray
//!
//! Implements the Amanatides-Woo 3D DDA. After clipping the ray to the grid
//! box, the walk keeps one "next boundary" distance per axis (`t_max`) and
//! the distance needed to cross a whole cell on that axis (`t_delta`). Each
//! step moves into the neighbouring cell across whichever boundary is nearest,
//! so cells are visited in ray order, each at most once, none skipped.
//!
//! # Termination
//!
//! The walk stops at the first non-empty cell, when the current cell leaves
//! the grid, when `t` passes the clip exit distance, or after [`MAX_STEPS`]
//! iterations, whichever comes first.

use crate::ray::{ClipInterval, Ray, FAR, PARALLEL_EPSILON};
use crate::{Axis, VoxelGrid, EMPTY};
use glam::{IVec3, Vec3};

/// Hard cap on loop iterations per ray
pub const MAX_STEPS: u32 = 256;

/// Outcome of walking one ray through the grid
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TraceOutcome {
    /// The ray never touched the grid box
    Outside,
    /// The ray entered the grid but left it (or ran out of steps) without a hit
    Miss { steps: u32 },
    /// The ray stopped in a non-empty cell
    Hit {
        /// Material id of the hit cell
        material: u8,
        /// Face the ray entered the hit cell through
        normal: Axis,
        /// Hit cell coordinates
        cell: IVec3,
        /// Cells tested, including the hit cell
        steps: u32,
    },
}

impl TraceOutcome {
    /// True when the ray stopped in a non-empty cell.
    pub fn is_hit(&self) -> bool {
        matches!(self, TraceOutcome::Hit { .. })
    }

    /// True unless the ray missed the grid box entirely.
    pub fn entered_grid(&self) -> bool {
        !matches!(self, TraceOutcome::Outside)
    }

    /// Number of cells tested.
    pub fn steps(&self) -> u32 {
        match *self {
            TraceOutcome::Outside => 0,
            TraceOutcome::Miss { steps } | TraceOutcome::Hit { steps, .. } => steps,
        }
    }
}

/// Per-ray DDA bookkeeping
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TraversalState {
    cell: IVec3,
    step: IVec3,
    t_max: Vec3,
    t_delta: Vec3,
    t: f32,
    normal: Axis,
}

impl TraversalState {
    /// Set up the walk at the start of the clipped segment.
    ///
    /// The starting cell is clamped into the grid so that points lying
    /// exactly on the far faces of the box (or a rounding error past them)
    /// still start inside.
    pub fn new(ray: &Ray, clip: &ClipInterval, size: IVec3) -> Self {
        let t = clip.start();
        let p = ray.at(t);

        let cell = p.floor().as_ivec3().clamp(IVec3::ZERO, size - IVec3::ONE);

        // Zero components step -1; their t_max stays at FAR so the sign never applies
        let step = IVec3::new(
            if ray.direction.x > 0.0 { 1 } else { -1 },
            if ray.direction.y > 0.0 { 1 } else { -1 },
            if ray.direction.z > 0.0 { 1 } else { -1 },
        );

        let mut t_max = Vec3::splat(FAR);
        let mut t_delta = Vec3::splat(FAR);
        for axis in 0..3 {
            let d = ray.direction[axis];
            if d.abs() > PARALLEL_EPSILON {
                let next_boundary = (cell[axis] + if step[axis] > 0 { 1 } else { 0 }) as f32;
                t_max[axis] = t + (next_boundary - p[axis]) / d;
                t_delta[axis] = (1.0 / d).abs();
            }
        }

        Self {
            cell,
            step,
            t_max,
            t_delta,
            t,
            normal: Axis::PosY,
        }
    }

    /// Move into the next cell along the ray and return the crossed face.
    ///
    /// The axis with the smallest `t_max` is chosen; ties go to x, then y.
    #[inline]
    pub fn advance(&mut self) -> Axis {
        let axis = if self.t_max.x <= self.t_max.y && self.t_max.x <= self.t_max.z {
            0
        } else if self.t_max.y <= self.t_max.z {
            1
        } else {
            2
        };

        self.cell[axis] += self.step[axis];
        self.t = self.t_max[axis];
        self.t_max[axis] += self.t_delta[axis];
        self.normal = Axis::crossed_face(axis, self.step[axis]);
        self.normal
    }

    /// Current cell.
    pub fn cell(&self) -> IVec3 {
        self.cell
    }

    /// Per-axis step direction, each `+1` or `-1`.
    pub fn step(&self) -> IVec3 {
        self.step
    }

    /// Per-axis distance to the next boundary crossing.
    pub fn t_max(&self) -> Vec3 {
        self.t_max
    }

    /// Per-axis distance to cross one full cell.
    pub fn t_delta(&self) -> Vec3 {
        self.t_delta
    }

    /// Distance at which the current cell was entered.
    pub fn t(&self) -> f32 {
        self.t
    }

    /// Face through which the current cell was entered.
    pub fn normal(&self) -> Axis {
        self.normal
    }
}

/// Record of every cell a walk tested
#[derive(Debug, Clone, Default)]
pub struct TraversalDebugState {
    /// Cells in visit order
    pub visited: Vec<IVec3>,
    /// `t_max` at the time each cell was tested
    pub t_max_history: Vec<Vec3>,
}

impl TraversalDebugState {
    pub fn new() -> Self {
        Self::default()
    }

    fn record(&mut self, state: &TraversalState) {
        self.visited.push(state.cell);
        self.t_max_history.push(state.t_max);
    }
}

impl VoxelGrid {
    /// Walk a ray through the grid and report the first non-empty cell.
    ///
    /// `ray.direction` should be normalized; distances are then in voxels.
    pub fn trace(&self, ray: &Ray) -> TraceOutcome {
        self.trace_debug(ray, None)
    }

    /// Walk a ray, optionally recording each tested cell.
    pub fn trace_debug(
        &self,
        ray: &Ray,
        mut debug: Option<&mut TraversalDebugState>,
    ) -> TraceOutcome {
        let Some(clip) = ray.clip_to_box(Vec3::ZERO, self.bounds_max()) else {
            return TraceOutcome::Outside;
        };

        let mut state = TraversalState::new(ray, &clip, self.size());
        let mut steps = 0;

        for _ in 0..MAX_STEPS {
            if !self.contains(state.cell) || state.t > clip.t_exit {
                break;
            }
            steps += 1;

            if let Some(d) = debug.as_deref_mut() {
                d.record(&state);
            }

            let material = self.get_cell(state.cell);
            if material != EMPTY {
                return TraceOutcome::Hit {
                    material,
                    normal: state.normal,
                    cell: state.cell,
                    steps,
                };
            }

            state.advance();
        }

        TraceOutcome::Miss { steps }
    }
}
