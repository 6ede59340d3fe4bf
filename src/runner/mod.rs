//! Running Boy: jump the cacti, survive the speed ramp.

pub mod logic;
pub mod spawner;
pub mod types;

pub use logic::{process_input, step, FrameOutcome, GameSession, InputResponse, RunnerInput};
pub use spawner::Spawner;
pub use types::{Obstacle, Phase, Player};
