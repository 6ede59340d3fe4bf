//! Running Boy - Terminal Endless Runner Library
//!
//! This module exposes the game logic for testing and the headless simulator.

// Allow dead code in library - some functions are only used by the binaries
#![allow(dead_code)]

pub mod build_info;
pub mod core;
pub mod input;
pub mod logging;
pub mod runner;
pub mod simulator;
pub mod ui;

pub use crate::core::{FramePacer, GameConfig};
pub use crate::runner::{
    process_input, step, FrameOutcome, GameSession, InputResponse, Obstacle, Phase, Player,
    RunnerInput, Spawner,
};
