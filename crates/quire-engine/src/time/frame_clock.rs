use std::time::{Duration, Instant};

/// Frame timing snapshot.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FrameTime {
    /// Time elapsed since the previous frame, in seconds.
    pub dt: f32,

    /// Seconds since the clock was created, summed from clamped deltas.
    pub elapsed: f64,

    /// Monotonic frame counter.
    pub frame_index: u64,
}

/// Frame clock producing `FrameTime` snapshots.
///
/// One clock drives one UI context. The clock is either ticked from the
/// wall clock ([`tick`](Self::tick)) or stepped by hand
/// ([`advance`](Self::advance)) for deterministic tests and replays.
///
/// Delta time is clamped to avoid pathological values when the application
/// is paused by the debugger, minimized, or stalls.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Instant,
    elapsed: f64,
    frame_index: u64,
    dt_min: Duration,
    dt_max: Duration,
}

impl FrameClock {
    /// Creates a new clock clamping deltas to 100µs..=250ms.
    pub fn new() -> Self {
        Self::with_clamps(Duration::from_micros(100), Duration::from_millis(250))
    }

    /// Creates a clock with custom delta-time clamps.
    pub fn with_clamps(dt_min: Duration, dt_max: Duration) -> Self {
        debug_assert!(dt_min <= dt_max);
        Self {
            last: Instant::now(),
            elapsed: 0.0,
            frame_index: 0,
            dt_min,
            dt_max,
        }
    }

    /// Resets the wall-clock baseline without touching elapsed time.
    ///
    /// Useful when resuming from suspension.
    pub fn reset(&mut self) {
        self.last = Instant::now();
    }

    /// Advances the clock by the wall time since the previous tick.
    pub fn tick(&mut self) -> FrameTime {
        let now = Instant::now();
        let dt = now.saturating_duration_since(self.last);
        self.last = now;
        self.step(dt)
    }

    /// Advances the clock by `dt` seconds instead of reading the wall clock.
    pub fn advance(&mut self, dt: f32) -> FrameTime {
        self.last = Instant::now();
        self.step(Duration::from_secs_f32(dt.max(0.0)))
    }

    /// Elapsed seconds as of the last step.
    #[inline]
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    fn step(&mut self, dt: Duration) -> FrameTime {
        let dt = dt.clamp(self.dt_min, self.dt_max);
        self.elapsed += dt.as_secs_f64();

        let ft = FrameTime {
            dt: dt.as_secs_f32(),
            elapsed: self.elapsed,
            frame_index: self.frame_index,
        };

        self.frame_index = self.frame_index.wrapping_add(1);
        ft
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
    fn advance_accumulates_elapsed_and_counts_frames() {
        let mut clock = FrameClock::new();
        let a = clock.advance(0.1);
        let b = clock.advance(0.2);
        assert_eq!(a.frame_index, 0);
        assert_eq!(b.frame_index, 1);
        assert!((b.elapsed - 0.3).abs() < 1e-6);
    }

    #[test]
    fn deltas_are_clamped() {
        let mut clock = FrameClock::new();
        assert!((clock.advance(5.0).dt - 0.25).abs() < 1e-6);
        assert!(clock.advance(0.0).dt > 0.0);
    }
}
