/// Decides how many simulation ticks an animation frame runs.
///
/// The trail decays per tick, not per second, so `PerFrame` ties the fade to
/// the display refresh rate. `Fixed` decouples it by accumulating real frame
/// time into fixed-size ticks.
#[derive(Debug, Clone, PartialEq)]
pub enum FramePacer {
    /// One tick per animation frame, whatever the frame time.
    PerFrame,
    /// Fixed-size ticks fed from an accumulator.
    Fixed {
        /// Seconds per tick.
        dt: f32,
        /// Frame time not yet consumed by a tick.
        accumulator: f32,
    },
}

impl FramePacer {
    /// Upper bound on ticks per frame, so a long stall can't spiral.
    pub const MAX_TICKS_PER_FRAME: u32 = 10;

    pub fn fixed(dt: f32) -> Self {
        FramePacer::Fixed { dt, accumulator: 0.0 }
    }

    /// Pacer for an optional fixed tick length.
    pub fn from_fixed_dt(fixed_dt: Option<f32>) -> Self {
        match fixed_dt {
            Some(dt) => Self::fixed(dt),
            None => FramePacer::PerFrame,
        }
    }

    /// Add one frame's elapsed seconds. Returns the number of ticks to run.
    pub fn ticks(&mut self, frame_dt: f32) -> u32 {
        match self {
            FramePacer::PerFrame => 1,
            FramePacer::Fixed { dt, accumulator } => {
                *accumulator += frame_dt.max(0.0);
                *accumulator = accumulator.min(*dt * Self::MAX_TICKS_PER_FRAME as f32);
                let steps = (*accumulator / *dt) as u32;
                *accumulator -= steps as f32 * *dt;
                steps
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn per_frame_ignores_frame_time() {
        let mut pacer = FramePacer::PerFrame;
        assert_eq!(pacer.ticks(0.0), 1);
        assert_eq!(pacer.ticks(1.0), 1);
    }

    #[test]
    fn fixed_accumulates_partial_frames() {
        let mut pacer = FramePacer::fixed(1.0 / 60.0);
        assert_eq!(pacer.ticks(0.008), 0); // half a tick
        assert_eq!(pacer.ticks(0.010), 1); // over one tick total
    }

    #[test]
    fn fixed_runs_two_ticks_on_a_30hz_frame() {
        let mut pacer = FramePacer::fixed(0.01);
        assert_eq!(pacer.ticks(0.0205), 2);
    }

    #[test]
    fn fixed_caps_ticks_after_a_stall() {
        let mut pacer = FramePacer::fixed(1.0 / 60.0);
        assert_eq!(pacer.ticks(5.0), FramePacer::MAX_TICKS_PER_FRAME);
    }

    #[test]
    fn negative_frame_time_is_ignored() {
        let mut pacer = FramePacer::fixed(0.01);
        assert_eq!(pacer.ticks(-1.0), 0);
        assert_eq!(pacer.ticks(0.011), 1);
    }

    #[test]
    fn from_fixed_dt_picks_variant() {
        assert_eq!(FramePacer::from_fixed_dt(None), FramePacer::PerFrame);
        assert!(matches!(FramePacer::from_fixed_dt(Some(0.02)), FramePacer::Fixed { .. }));
    }
}
