//! Per-frame traversal statistics

use voxel::TraceOutcome;

/// Counters gathered over every ray of one frame
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameStats {
    pub rays: u32,
    pub rays_entered_grid: u32,
    pub hits: u32,
    pub total_steps: u64,
    pub max_steps: u32,
    pub avg_steps_per_ray: f32,
    pub hit_ratio: f32,
    pub rays_per_sec: f32,
    pub steps_per_sec: f32,
}

impl FrameStats {
    /// Count one traced ray.
    #[inline]
    pub fn record(&mut self, outcome: &TraceOutcome) {
        self.rays += 1;
        if outcome.entered_grid() {
            self.rays_entered_grid += 1;
        }
        if outcome.is_hit() {
            self.hits += 1;
        }
        let steps = outcome.steps();
        self.total_steps += steps as u64;
        self.max_steps = self.max_steps.max(steps);
    }

    /// Compute averages and throughput once all rays are recorded.
    ///
    /// `frame_dt` is the wall time of the frame in seconds; rates stay zero
    /// when it is too small to divide by.
    pub fn finish(&mut self, frame_dt: f32) {
        self.compute_averages();
        self.set_frame_time(frame_dt);
    }

    /// Per-ray averages. Left at zero for an empty frame.
    pub fn compute_averages(&mut self) {
        if self.rays > 0 {
            self.avg_steps_per_ray = self.total_steps as f32 / self.rays as f32;
            self.hit_ratio = self.hits as f32 / self.rays as f32;
        }
    }

    /// Throughput for a frame that took `frame_dt` seconds.
    pub fn set_frame_time(&mut self, frame_dt: f32) {
        if frame_dt > 1e-6 {
            self.rays_per_sec = self.rays as f32 / frame_dt;
            self.steps_per_sec = self.total_steps as f32 / frame_dt;
        } else {
            self.rays_per_sec = 0.0;
            self.steps_per_sec = 0.0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::IVec3;
    use voxel::Axis;

    fn sample_stats() -> FrameStats {
        let mut stats = FrameStats::default();
        stats.record(&TraceOutcome::Outside);
        stats.record(&TraceOutcome::Miss { steps: 10 });
        stats.record(&TraceOutcome::Hit {
            material: 1,
            normal: Axis::PosY,
            cell: IVec3::ZERO,
            steps: 30,
        });
        stats.record(&TraceOutcome::Miss { steps: 20 });
        stats
    }

    #[test]
    fn test_record_counts() {
        let stats = sample_stats();
        assert_eq!(stats.rays, 4);
        assert_eq!(stats.rays_entered_grid, 3);
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.total_steps, 60);
        assert_eq!(stats.max_steps, 30);
    }

    #[test]
    fn test_finish_derives_rates() {
        let mut stats = sample_stats();
        stats.finish(0.5);
        assert_eq!(stats.avg_steps_per_ray, 15.0);
        assert_eq!(stats.hit_ratio, 0.25);
        assert_eq!(stats.rays_per_sec, 8.0);
        assert_eq!(stats.steps_per_sec, 120.0);
    }

    #[test]
    fn test_finish_with_zero_time_skips_rates() {
        let mut stats = sample_stats();
        stats.finish(0.0);
        assert_eq!(stats.rays_per_sec, 0.0);
        assert_eq!(stats.steps_per_sec, 0.0);

        let mut empty = FrameStats::default();
        empty.finish(1.0);
        assert_eq!(empty.avg_steps_per_ray, 0.0);
        assert_eq!(empty.hit_ratio, 0.0);
    }

    #[test]
    fn test_frame_time_set_after_sweep() {
        let mut stats = sample_stats();
        stats.finish(0.0);
        assert_eq!(stats.avg_steps_per_ray, 15.0);
        assert_eq!(stats.rays_per_sec, 0.0);

        stats.set_frame_time(2.0);
        assert_eq!(stats.rays_per_sec, 2.0);
        assert_eq!(stats.steps_per_sec, 30.0);
        assert_eq!(stats.avg_steps_per_ray, 15.0);
    }
}
