//! Randomized obstacle spawn timer.

use super::types::Obstacle;
use crate::core::config::GameConfig;
use rand::Rng;

/// Counts running frames and emits an obstacle once the count passes a
/// threshold drawn uniformly from the configured spawn range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spawner {
    /// Frames since the last spawn (or since the run began).
    pub timer: u32,
    /// Spawn fires once `timer` exceeds this.
    pub threshold: u32,
}

impl Spawner {
    pub fn new<R: Rng>(config: &GameConfig, rng: &mut R) -> Self {
        Self {
            timer: 0,
            threshold: draw_threshold(config, rng),
        }
    }

    /// Advance one running frame. Returns the new obstacle when the timer
    /// passes the threshold, then starts a fresh interval.
    pub fn tick<R: Rng>(&mut self, config: &GameConfig, rng: &mut R) -> Option<Obstacle> {
        self.timer += 1;
        if self.timer <= self.threshold {
            return None;
        }

        self.timer = 0;
        self.threshold = draw_threshold(config, rng);
        Some(Obstacle::new(config, rng))
    }
}

fn draw_threshold<R: Rng>(config: &GameConfig, rng: &mut R) -> u32 {
    rng.gen_range(config.spawn_min_frames..=config.spawn_max_frames)
}
