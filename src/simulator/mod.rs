//! Headless runner simulator.
//!
//! Plays whole runs without a terminal using the same `process_input` and
//! `step` as the interactive game, driven by a simple autopilot, to check
//! how the spawn cadence and speed ramp play out over long sessions.

mod config;
mod report;
mod runner;

pub use config::SimConfig;
pub use report::{RunStats, SimReport};
pub use runner::{autopilot_wants_jump, run_simulation, simulate_single_run};
