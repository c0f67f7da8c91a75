//! Frame clock and user toggles that sit between the renderer and the display

use crate::frame::RenderContext;

/// Shortest frame time accepted, in seconds
pub const MIN_FRAME_DT: f32 = 1e-5;
/// Longest frame time accepted; longer stalls advance the scene by this much
pub const MAX_FRAME_DT: f32 = 0.25;

/// Weight of the previous value in the smoothed FPS readout
const FPS_SMOOTHING: f32 = 0.9;

/// Running state of an interactive render loop
#[derive(Debug, Clone, Default)]
pub struct RenderSession {
    context: RenderContext,
    quit_requested: bool,
    frame_ms: f32,
    fps_smooth: f32,
}

impl RenderSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the clock by one frame and return the clamped frame time.
    ///
    /// Scene time only moves while the camera is not frozen.
    pub fn tick(&mut self, raw_dt: f32) -> f32 {
        let dt = raw_dt.clamp(MIN_FRAME_DT, MAX_FRAME_DT);

        if !self.context.camera_frozen {
            self.context.time_s += dt;
        }

        self.frame_ms = dt * 1000.0;
        let fps = if dt > 1e-6 { 1.0 / dt } else { 0.0 };
        if self.fps_smooth <= 0.0 {
            self.fps_smooth = fps;
        } else {
            self.fps_smooth = self.fps_smooth * FPS_SMOOTHING + fps * (1.0 - FPS_SMOOTHING);
        }

        dt
    }

    /// Context to pass to the renderer for the current frame
    pub fn context(&self) -> &RenderContext {
        &self.context
    }

    pub fn is_frozen(&self) -> bool {
        self.context.camera_frozen
    }

    pub fn set_frozen(&mut self, frozen: bool) {
        self.context.camera_frozen = frozen;
    }

    pub fn toggle_freeze(&mut self) {
        self.context.camera_frozen = !self.context.camera_frozen;
    }

    /// Ask the loop to stop after the current frame
    pub fn request_quit(&mut self) {
        self.quit_requested = true;
    }

    pub fn should_quit(&self) -> bool {
        self.quit_requested
    }

    /// Duration of the last frame in milliseconds
    pub fn frame_ms(&self) -> f32 {
        self.frame_ms
    }

    /// Exponentially smoothed frames per second
    pub fn fps_smooth(&self) -> f32 {
        self.fps_smooth
    }
}
