//! # Frame Timing
//!
//! [`FrameClock`] hands the frame loop the elapsed time since the previous
//! frame, which scales every movement and rotation, and keeps a short history
//! of frame times for FPS reporting.
//!
//! ## Usage
//!
//! ```rust
//! use compound_viewer::performance::FrameClock;
//!
//! let mut clock = FrameClock::new(Some(0.25));
//! assert_eq!(clock.tick(), 0.0); // the first frame never moves anything
//! let delta = clock.tick();
//! assert!(delta >= 0.0 && delta <= 0.25);
//! ```

use std::collections::VecDeque;
use std::time::{Duration, Instant};

const DEFAULT_SAMPLES: usize = 120; // ~2 seconds at 60fps

/// Frame time statistics over the sample window
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameMetrics {
    pub fps: f32,
    /// Average frame time in milliseconds
    pub frame_time_ms: f32,
    pub min_frame_time_ms: f32,
    pub max_frame_time_ms: f32,
}

pub struct FrameClock {
    last_tick: Option<Instant>,
    /// Upper bound on a single delta, in seconds
    max_delta: Option<f32>,
    frame_times: VecDeque<Duration>,
    max_samples: usize,
    frames: u64,
}

impl FrameClock {
    pub fn new(max_delta: Option<f32>) -> Self {
        Self::with_samples(max_delta, DEFAULT_SAMPLES)
    }

    pub fn with_samples(max_delta: Option<f32>, max_samples: usize) -> Self {
        let max_samples = max_samples.max(1);
        Self {
            last_tick: None,
            max_delta,
            frame_times: VecDeque::with_capacity(max_samples),
            max_samples,
            frames: 0,
        }
    }

    /// Seconds since the previous tick
    pub fn tick(&mut self) -> f32 {
        self.tick_at(Instant::now())
    }

    /// [`tick`](Self::tick) against an explicit timestamp
    ///
    /// The first tick returns 0. A timestamp earlier than the previous one
    /// also yields 0. The result is clamped to `max_delta` when one is set.
    pub fn tick_at(&mut self, now: Instant) -> f32 {
        self.frames += 1;

        let Some(last) = self.last_tick.replace(now) else {
            return 0.0;
        };

        let elapsed = now.saturating_duration_since(last);
        self.add_frame_time(elapsed);

        let delta = elapsed.as_secs_f32();
        match self.max_delta {
            Some(max) if delta > max => {
                log::trace!("Clamping frame delta {delta:.3}s to {max:.3}s");
                max
            }
            _ => delta,
        }
    }

    fn add_frame_time(&mut self, frame_time: Duration) {
        if self.frame_times.len() >= self.max_samples {
            self.frame_times.pop_front();
        }
        self.frame_times.push_back(frame_time);
    }

    /// Number of ticks so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Unclamped frame time statistics over the sample window
    pub fn metrics(&self) -> FrameMetrics {
        if self.frame_times.is_empty() {
            return FrameMetrics::default();
        }

        let to_ms = |d: &Duration| d.as_secs_f32() * 1000.0;
        let total: Duration = self.frame_times.iter().sum();
        let frame_time_ms = to_ms(&total) / self.frame_times.len() as f32;

        FrameMetrics {
            fps: if frame_time_ms > 0.0 {
                1000.0 / frame_time_ms
            } else {
                0.0
            },
            frame_time_ms,
            min_frame_time_ms: self.frame_times.iter().min().map(to_ms).unwrap_or(0.0),
            max_frame_time_ms: self.frame_times.iter().max().map(to_ms).unwrap_or(0.0),
        }
    }

    /// Forgets the previous tick and the history, e.g. after the window regains focus
    pub fn reset(&mut self) {
        self.last_tick = None;
        self.frame_times.clear();
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    #[test]
    fn test_first_tick_is_zero() {
        let mut clock = FrameClock::default();
        assert_eq!(clock.tick_at(Instant::now()), 0.0);
        assert_eq!(clock.metrics(), FrameMetrics::default());
    }

    #[test]
    fn test_delta_between_ticks() {
        let mut clock = FrameClock::default();
        let start = Instant::now();
        clock.tick_at(start);
        let delta = clock.tick_at(start + ms(20));
        assert!((delta - 0.02).abs() < 1e-6);
        assert_eq!(clock.frames(), 2);
    }

    #[test]
    fn test_delta_clamped_to_max() {
        let mut clock = FrameClock::new(Some(0.1));
        let start = Instant::now();
        clock.tick_at(start);
        assert_eq!(clock.tick_at(start + ms(2000)), 0.1);
        // Metrics still see the real frame time
        assert!((clock.metrics().max_frame_time_ms - 2000.0).abs() < 1e-2);
    }

    #[test]
    fn test_backwards_timestamp_is_zero() {
        let mut clock = FrameClock::default();
        let start = Instant::now();
        clock.tick_at(start + ms(50));
        assert_eq!(clock.tick_at(start), 0.0);
    }

    #[test]
    fn test_metrics_over_window() {
        let mut clock = FrameClock::with_samples(None, 2);
        let start = Instant::now();
        for (i, offset) in [0, 100, 110, 130].into_iter().enumerate() {
            let delta = clock.tick_at(start + ms(offset));
            if i == 0 {
                assert_eq!(delta, 0.0);
            }
        }

        // Only the last two frames (10ms, 20ms) are kept
        let metrics = clock.metrics();
        assert!((metrics.frame_time_ms - 15.0).abs() < 1e-3);
        assert!((metrics.min_frame_time_ms - 10.0).abs() < 1e-3);
        assert!((metrics.max_frame_time_ms - 20.0).abs() < 1e-3);
        assert!((metrics.fps - 1000.0 / 15.0).abs() < 1e-2);
    }

    #[test]
    fn test_reset_restarts_from_zero() {
        let mut clock = FrameClock::default();
        let start = Instant::now();
        clock.tick_at(start);
        clock.tick_at(start + ms(16));
        clock.reset();
        assert_eq!(clock.tick_at(start + ms(5000)), 0.0);
    }
}
