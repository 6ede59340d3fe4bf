//! Simulation configuration.

use crate::core::config::GameConfig;

/// Configuration for a batch of simulated runs.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of runs to perform. Run `i` uses seed `seed + i`.
    pub num_runs: u32,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,

    /// Frames per run before giving up (60 frames = 1 second)
    pub max_frames: u64,

    /// Autopilot jumps when the next obstacle is this many frames away
    pub lead_frames: f64,

    /// Disable to measure how long a player who never jumps survives
    pub autopilot: bool,

    /// Game rules for every run
    pub game: GameConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_runs: 1,
            seed: Some(42),
            max_frames: 3_600,
            lead_frames: 6.0,
            autopilot: true,
            game: GameConfig::default(),
        }
    }
}
