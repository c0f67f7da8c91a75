//! Human-readable frame diagnostics

use crate::session::RenderSession;
use crate::stats::FrameStats;
use glam::IVec3;
use voxel::MAX_STEPS;

/// Text lines describing the last frame, top to bottom.
pub fn overlay_lines(
    stats: &FrameStats,
    session: &RenderSession,
    grid_size: IVec3,
    (width, height): (u32, u32),
) -> Vec<String> {
    let camera_mode = if session.is_frozen() { "frozen" } else { "orbiting" };

    vec![
        "Technique: Fast Voxel Traversal (3D DDA)".to_string(),
        format!("Grid: {}x{}x{} voxels", grid_size.x, grid_size.y, grid_size.z),
        format!("Ray buffer: {width}x{height} ({} rays/frame)", stats.rays),
        format!("Camera: {camera_mode}"),
        "DDA: AABB entry -> tMax/tDelta stepping per axis".to_string(),
        format!("Exit: first solid voxel, grid boundary, or {MAX_STEPS} steps"),
        format!(
            "Frame: {:.2} ms | FPS(avg): {:.1}",
            session.frame_ms(),
            session.fps_smooth()
        ),
        format!(
            "Rays/s: {:.2} M | Steps/s: {:.2} M",
            stats.rays_per_sec / 1_000_000.0,
            stats.steps_per_sec / 1_000_000.0
        ),
        format!("AABB entered: {} / {}", stats.rays_entered_grid, stats.rays),
        format!("Hits: {} ({:.1}%)", stats.hits, stats.hit_ratio * 100.0),
        format!(
            "Traversal steps: avg {:.2} | max {}",
            stats.avg_steps_per_ray, stats.max_steps
        ),
    ]
}
