//! Running Boy data structures: the player, ground obstacles, and run phase.
//!
//! Coordinates are world units with the origin at the top-left of the
//! 800x400 play area and y growing downward. Every entity is an axis-aligned
//! box described by its top-left corner and size.

use crate::core::config::GameConfig;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Phase of the current run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    Running,
    GameOver,
}

/// The running boy.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    /// Left edge. Fixed for the whole run.
    pub x: f64,
    /// Top edge (lower values = higher on screen).
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Vertical velocity in units/frame (negative = upward).
    pub velocity_y: f64,
    pub is_airborne: bool,
    /// Resting y. `y` never ends an update below this.
    pub ground_y: f64,
    gravity: f64,
    jump_impulse: f64,
}

impl Player {
    /// A player standing on the ground at the configured column.
    pub fn new(config: &GameConfig) -> Self {
        let ground_y = config.player_ground_y();
        Self {
            x: config.player_x,
            y: ground_y,
            width: config.player_width,
            height: config.player_height,
            velocity_y: 0.0,
            is_airborne: false,
            ground_y,
            gravity: config.gravity,
            jump_impulse: config.jump_impulse,
        }
    }

    /// Launch upward. Does nothing while already airborne.
    pub fn jump(&mut self) {
        if !self.is_airborne {
            self.velocity_y = self.jump_impulse;
            self.is_airborne = true;
        }
    }

    /// One explicit-Euler step with a one-sided ground clamp (no bounce).
    pub fn update(&mut self) {
        self.velocity_y += self.gravity;
        self.y += self.velocity_y;

        if self.y >= self.ground_y {
            self.y = self.ground_y;
            self.velocity_y = 0.0;
            self.is_airborne = false;
        }
    }

    pub fn is_on_ground(&self) -> bool {
        !self.is_airborne && self.y >= self.ground_y
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

/// A cactus standing on the ground line.
#[derive(Debug, Clone, PartialEq)]
pub struct Obstacle {
    /// Left edge. Decreases every running frame.
    pub x: f64,
    /// Top edge. Fixed at spawn so the base rests on the ground line.
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Obstacle {
    /// Spawn at the right edge of the play area with a random height.
    pub fn new<R: Rng>(config: &GameConfig, rng: &mut R) -> Self {
        let height =
            rng.gen_range(config.obstacle_min_height..=config.obstacle_max_height) as f64;
        Self::with_height(config, height)
    }

    /// Spawn at the right edge with a known height.
    pub fn with_height(config: &GameConfig, height: f64) -> Self {
        Self::at(config.screen_width, config.ground_line(), config.obstacle_width, height)
    }

    /// Obstacle of the given size whose base sits on `ground_line`.
    pub fn at(x: f64, ground_line: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y: ground_line - height,
            width,
            height,
        }
    }

    /// Scroll left by the session's current speed.
    pub fn update(&mut self, speed: f64) {
        self.x -= speed;
    }

    /// True once the trailing edge has fully left the play area.
    pub fn off_screen(&self) -> bool {
        self.x + self.width < 0.0
    }

    /// Box overlap test against the player.
    ///
    /// There is deliberately no `player.y < self.y + self.height` term: any
    /// player whose bottom is below the obstacle's top counts as a hit while
    /// the x-ranges overlap.
    pub fn collides_with(&self, player: &Player) -> bool {
        player.x + player.width > self.x
            && player.x < self.x + self.width
            && player.y + player.height > self.y
    }
}
