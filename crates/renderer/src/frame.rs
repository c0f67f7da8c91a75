//! CPU frame renderer: one DDA-traced ray per pixel

use crate::camera::Camera;
use crate::config::RendererConfig;
use crate::lighting::{shade_hit, shade_miss, to_rgba8};
use crate::stats::FrameStats;
use glam::Vec3;
use image::{Rgba, RgbaImage};
use tracing::debug;
use voxel::{Ray, TraceOutcome, VoxelGrid};

/// Scene time and camera mode for one frame
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RenderContext {
    /// Scene time in seconds; drives the camera orbit
    pub time_s: f32,
    /// Hold the camera at its fixed frozen position
    pub camera_frozen: bool,
}

/// Traversal outcome of one pixel plus its shaded color
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TraceResult {
    pub outcome: TraceOutcome,
    /// Linear RGB before quantization
    pub color: Vec3,
}

/// A rendered image with the statistics gathered while producing it
#[derive(Debug, Clone)]
pub struct Frame {
    pub image: RgbaImage,
    pub stats: FrameStats,
}

/// Renders a static voxel grid from an orbiting pinhole camera
#[derive(Debug, Clone)]
pub struct FrameRenderer {
    grid: VoxelGrid,
    config: RendererConfig,
}

impl FrameRenderer {
    /// Renderer with the default configuration
    pub fn new(grid: VoxelGrid) -> Self {
        Self::with_config(grid, RendererConfig::default())
    }

    pub fn with_config(grid: VoxelGrid, config: RendererConfig) -> Self {
        Self { grid, config }
    }

    pub fn grid(&self) -> &VoxelGrid {
        &self.grid
    }

    pub fn config(&self) -> &RendererConfig {
        &self.config
    }

    /// Camera for the given frame context
    pub fn camera(&self, ctx: &RenderContext) -> Camera {
        Camera::orbit(
            &self.config.orbit,
            self.grid.size(),
            ctx.time_s,
            ctx.camera_frozen,
            self.config.fov_degrees,
        )
    }

    /// Trace and shade a single ray. `direction` must be normalized.
    pub fn trace_pixel(&self, origin: Vec3, direction: Vec3) -> TraceResult {
        let outcome = self.grid.trace(&Ray::new(origin, direction));
        let color = match outcome {
            TraceOutcome::Outside => shade_miss(direction, false),
            TraceOutcome::Miss { .. } => shade_miss(direction, true),
            TraceOutcome::Hit {
                material,
                normal,
                cell,
                ..
            } => shade_hit(material, normal, cell.y, self.grid.size().y),
        };
        TraceResult { outcome, color }
    }

    /// Render a frame into a newly allocated image.
    ///
    /// `frame_dt` is the wall time of the frame and only feeds the
    /// throughput figures in [`FrameStats`].
    pub fn render_frame(&self, ctx: &RenderContext, frame_dt: f32) -> Frame {
        let mut image = RgbaImage::new(self.config.width(), self.config.height());
        let stats = self.render_into(ctx, frame_dt, &mut image);
        Frame { image, stats }
    }

    /// Render a frame into an existing image, reallocating it if the size is wrong.
    pub fn render_into(
        &self,
        ctx: &RenderContext,
        frame_dt: f32,
        image: &mut RgbaImage,
    ) -> FrameStats {
        let (width, height) = (self.config.width(), self.config.height());
        if image.dimensions() != (width, height) {
            debug!(
                from = ?image.dimensions(),
                to = ?(width, height),
                "resizing frame buffer"
            );
            *image = RgbaImage::new(width, height);
        }

        let camera = self.camera(ctx);
        let fan = camera.ray_fan(width, height);
        let mut stats = FrameStats::default();

        for y in 0..height {
            for (x, ray) in fan.row(y, width).enumerate() {
                let result = self.trace_pixel(camera.eye, ray.normalize());
                stats.record(&result.outcome);
                image.put_pixel(x as u32, y, Rgba(to_rgba8(result.color)));
            }
        }

        stats.finish(frame_dt);
        debug!(
            rays = stats.rays,
            hits = stats.hits,
            avg_steps = stats.avg_steps_per_ray,
            max_steps = stats.max_steps,
            "frame rendered"
        );
        stats
    }
}
