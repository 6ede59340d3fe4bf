//! Fixed-rate frame pacer.
//!
//! The game loop calls [`FramePacer::tick`] once per iteration. It blocks until
//! at least one frame interval has passed since the previous tick, which caps
//! the loop at the target rate. A slow frame is not paid back: the next
//! interval starts from when the late tick returned.

use std::thread;
use std::time::{Duration, Instant};

pub struct FramePacer {
    frame: Duration,
    last_tick: Option<Instant>,
}

impl FramePacer {
    /// Pacer for `fps` iterations per second. `fps` of 0 is treated as 1.
    pub fn new(fps: u32) -> Self {
        Self {
            frame: Duration::from_secs(1) / fps.max(1),
            last_tick: None,
        }
    }

    pub fn frame_duration(&self) -> Duration {
        self.frame
    }

    /// How long to wait when `elapsed` has passed since the last tick.
    pub fn remaining(&self, elapsed: Duration) -> Duration {
        self.frame.saturating_sub(elapsed)
    }

    /// Block until the next frame boundary. Returns the time since the
    /// previous tick (zero on the first call).
    pub fn tick(&mut self) -> Duration {
        let Some(last) = self.last_tick else {
            self.last_tick = Some(Instant::now());
            return Duration::ZERO;
        };

        let wait = self.remaining(last.elapsed());
        if !wait.is_zero() {
            thread::sleep(wait);
        }

        let now = Instant::now();
        self.last_tick = Some(now);
        now.duration_since(last)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sixty_fps_frame_duration() {
        let pacer = FramePacer::new(60);
        assert_eq!(pacer.frame_duration(), Duration::from_nanos(16_666_666));
    }

    #[test]
    fn test_zero_fps_does_not_divide_by_zero() {
        let pacer = FramePacer::new(0);
        assert_eq!(pacer.frame_duration(), Duration::from_secs(1));
    }

    #[test]
    fn test_remaining_never_exceeds_one_frame() {
        let pacer = FramePacer::new(60);
        assert_eq!(pacer.remaining(Duration::ZERO), pacer.frame_duration());
        assert_eq!(
            pacer.remaining(Duration::from_millis(10)),
            pacer.frame_duration() - Duration::from_millis(10)
        );
        // Late frames wait zero, never negative
        assert_eq!(pacer.remaining(Duration::from_millis(50)), Duration::ZERO);
    }

    #[test]
    fn test_first_tick_returns_immediately() {
        let mut pacer = FramePacer::new(60);
        assert_eq!(pacer.tick(), Duration::ZERO);
    }

    #[test]
    fn test_second_tick_waits_for_frame_boundary() {
        let mut pacer = FramePacer::new(100);
        pacer.tick();
        let dt = pacer.tick();
        assert!(dt >= Duration::from_millis(10));
    }
}
