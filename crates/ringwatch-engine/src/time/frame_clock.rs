use std::time::{Duration, Instant};

/// Timing snapshot handed to the frame callback.
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Seconds since the previous tick, clamped to sane bounds.
    pub dt: f32,
    /// Monotonic timestamp taken at the tick.
    pub now: Instant,
    /// Frames ticked before this one.
    pub frame_index: u64,
}

/// Per-window frame clock.
///
/// Raw deltas get clamped: a stall (debugger, minimized window) would
/// otherwise arrive as one giant dt, and back-to-back ticks on some
/// platforms report zero.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Instant,
    frames: u64,
}

impl FrameClock {
    const MIN_DT: Duration = Duration::from_micros(100);
    const MAX_DT: Duration = Duration::from_millis(250);

    pub fn new() -> Self {
        Self { last: Instant::now(), frames: 0 }
    }

    /// Re-baselines the clock so the next dt does not span a suspension.
    pub fn reset(&mut self) {
        self.last = Instant::now();
    }

    /// Advances the clock and reports the elapsed frame time.
    pub fn tick(&mut self) -> FrameTime {
        let now = Instant::now();
        let dt = now
            .saturating_duration_since(self.last)
            .clamp(Self::MIN_DT, Self::MAX_DT);
        self.last = now;

        let snapshot = FrameTime { dt: dt.as_secs_f32(), now, frame_index: self.frames };
        self.frames = self.frames.wrapping_add(1);
        snapshot
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn immediate_tick_reports_at_least_the_minimum_dt() {
        let mut clock = FrameClock::new();
        assert!(clock.tick().dt >= FrameClock::MIN_DT.as_secs_f32());
    }

    #[test]
    fn stalls_are_clamped() {
        let mut clock = FrameClock::new();
        clock.last = Instant::now() - Duration::from_secs(5);
        assert!(clock.tick().dt <= FrameClock::MAX_DT.as_secs_f32() + f32::EPSILON);
    }

    #[test]
    fn frame_index_counts_up_from_zero() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.tick().frame_index, 0);
        assert_eq!(clock.tick().frame_index, 1);
    }
}
