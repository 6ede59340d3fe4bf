//! Immutable tuning for a game session.
//!
//! Every number the simulation reads lives here. A session copies the config
//! at construction and never mutates it, so restarts and simulator runs all
//! play by the same rules.

use super::constants::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Velocity added every frame, positive = downward.
    pub gravity: f64,
    /// Velocity set by a jump, negative = upward.
    pub jump_impulse: f64,
    /// Scroll speed at the start of every run.
    pub base_speed: f64,
    /// Added to the scroll speed once per running frame. Never capped.
    pub speed_ramp: f64,
    /// Inclusive range for the spawn threshold, in frames.
    pub spawn_min_frames: u32,
    pub spawn_max_frames: u32,
    /// Inclusive range for obstacle heights.
    pub obstacle_min_height: u32,
    pub obstacle_max_height: u32,
    pub obstacle_width: f64,

    pub player_x: f64,
    pub player_width: f64,
    pub player_height: f64,

    pub screen_width: f64,
    pub screen_height: f64,
    pub ground_height: f64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            jump_impulse: JUMP_IMPULSE,
            base_speed: BASE_SPEED,
            speed_ramp: SPEED_RAMP,
            spawn_min_frames: SPAWN_MIN_FRAMES,
            spawn_max_frames: SPAWN_MAX_FRAMES,
            obstacle_min_height: OBSTACLE_MIN_HEIGHT,
            obstacle_max_height: OBSTACLE_MAX_HEIGHT,
            obstacle_width: OBSTACLE_WIDTH,
            player_x: PLAYER_X,
            player_width: PLAYER_WIDTH,
            player_height: PLAYER_HEIGHT,
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            ground_height: GROUND_HEIGHT,
        }
    }
}

impl GameConfig {
    /// Y coordinate of the ground surface. Everything rests on this line.
    pub fn ground_line(&self) -> f64 {
        self.screen_height - self.ground_height
    }

    /// Resting y of the player's top edge.
    pub fn player_ground_y(&self) -> f64 {
        self.ground_line() - self.player_height
    }
}
