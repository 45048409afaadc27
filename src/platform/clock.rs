//! Frame pacing
//!
//! The browser hands us variable frame times; the simulation wants whole
//! ticks at a fixed rate.

use crate::consts::MAX_SUBSTEPS;

/// Longest frame we will try to catch up on (seconds)
const MAX_FRAME_DT: f32 = 0.1;

/// Fixed-rate accumulator clock
#[derive(Debug, Clone)]
pub struct FixedClock {
    step: f32,
    accumulator: f32,
    max_substeps: u32,
}

impl FixedClock {
    pub fn new(rate_hz: u32) -> Self {
        Self {
            step: 1.0 / rate_hz.max(1) as f32,
            accumulator: 0.0,
            max_substeps: MAX_SUBSTEPS,
        }
    }

    /// Seconds per tick
    pub fn step(&self) -> f32 {
        self.step
    }

    /// Add elapsed wall time and return how many ticks to run now
    pub fn advance(&mut self, dt: f32) -> u32 {
        if !dt.is_finite() {
            return 0;
        }
        self.accumulator += dt.clamp(0.0, MAX_FRAME_DT);

        let mut ticks = 0;
        while self.accumulator >= self.step && ticks < self.max_substeps {
            self.accumulator -= self.step;
            ticks += 1;
        }

        // Too far behind: drop the backlog rather than spiral
        if ticks == self.max_substeps {
            self.accumulator = self.accumulator.min(self.step);
        }
        ticks
    }

    /// Drop any partial tick, e.g. after the page loses focus
    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }
}

/// Frames per second over a sliding window of frame timestamps
#[derive(Debug, Clone)]
pub struct FpsCounter {
    frame_times: [f64; 60],
    frame_index: usize,
    recorded: usize,
    fps: u32,
}

impl Default for FpsCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl FpsCounter {
    pub fn new() -> Self {
        Self {
            frame_times: [0.0; 60],
            frame_index: 0,
            recorded: 0,
            fps: 0,
        }
    }

    /// Record a frame timestamp (ms) and return the current estimate
    pub fn record(&mut self, time_ms: f64) -> u32 {
        let window = self.frame_times.len();
        self.frame_times[self.frame_index] = time_ms;
        self.frame_index = (self.frame_index + 1) % window;
        self.recorded = (self.recorded + 1).min(window);

        if self.recorded >= 2 {
            // Oldest sample still in the window
            let oldest_idx = (self.frame_index + window - self.recorded) % window;
            let elapsed = time_ms - self.frame_times[oldest_idx];
            if elapsed > 0.0 {
                self.fps = ((self.recorded - 1) as f64 * 1000.0 / elapsed).round() as u32;
            }
        }
        self.fps
    }

    pub fn fps(&self) -> u32 {
        self.fps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticks_from_elapsed_time() {
        let mut clock = FixedClock::new(50);
        assert_eq!(clock.advance(0.05), 2);
        // 0.01 carried over
        assert_eq!(clock.advance(0.015), 1);
        assert_eq!(clock.advance(0.001), 0);
    }

    #[test]
    fn test_substeps_are_capped() {
        let mut clock = FixedClock::new(240);
        // 0.1s at 240 Hz would be 24 ticks
        assert_eq!(clock.advance(5.0), MAX_SUBSTEPS);
        // Backlog dropped
        assert!(clock.advance(0.0) <= 1);
    }

    #[test]
    fn test_negative_dt_ignored() {
        let mut clock = FixedClock::new(60);
        assert_eq!(clock.advance(-1.0), 0);
        assert!((clock.step() - 1.0 / 60.0).abs() < 1e-7);
    }

    #[test]
    fn test_non_finite_dt_does_not_stall() {
        let mut clock = FixedClock::new(50);
        assert_eq!(clock.advance(f32::NAN), 0);
        assert_eq!(clock.advance(f32::INFINITY), 0);
        assert_eq!(clock.advance(0.02), 1);
    }

    #[test]
    fn test_reset_drops_partial_tick() {
        let mut clock = FixedClock::new(50);
        assert_eq!(clock.advance(0.015), 0);
        clock.reset();
        assert_eq!(clock.advance(0.015), 0);
        // 0.03 owed since the reset; 0.045 without it would be two ticks
        assert_eq!(clock.advance(0.015), 1);
    }

    #[test]
    fn test_fps_counter() {
        let mut fps = FpsCounter::new();
        assert_eq!(fps.record(0.0), 0);
        let mut t = 0.0;
        for _ in 0..120 {
            t += 1000.0 / 60.0;
            fps.record(t);
        }
        assert_eq!(fps.fps(), 60);
    }
}
