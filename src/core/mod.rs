//! Core timing and configuration shared by the game and the simulator.

pub mod config;
pub mod constants;
pub mod pacer;

pub use config::GameConfig;
pub use pacer::FramePacer;
