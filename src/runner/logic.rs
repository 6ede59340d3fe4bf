//! Running Boy game logic: session state machine, input, per-frame update.

use super::spawner::Spawner;
use super::types::{Obstacle, Phase, Player};
use crate::core::config::GameConfig;
use rand::Rng;

/// UI-agnostic input actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunnerInput {
    Action, // Space: jump while running, restart after game over
    Quit,   // Esc, q, Ctrl-C
    Other,  // Any other key
}

/// What an input did to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResponse {
    Jumped,
    Restarted,
    Quit,
    Ignored,
}

/// Events from a single frame step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameOutcome {
    /// An obstacle hit the player this frame; the session is now over.
    pub collided: bool,
    /// Obstacles that left the screen (and scored) this frame.
    pub passed: u32,
    /// A new obstacle entered at the right edge.
    pub spawned: bool,
}

/// Everything belonging to one run. Replaced wholesale on restart.
#[derive(Debug, Clone)]
pub struct GameSession {
    pub config: GameConfig,
    pub phase: Phase,
    pub player: Player,
    /// Live obstacles in spawn order.
    pub obstacles: Vec<Obstacle>,
    /// Obstacles that scrolled fully past the left edge.
    pub score: u32,
    /// Scroll speed in units/frame. Only grows within a run.
    pub current_speed: f64,
    pub spawner: Spawner,
    /// Running frames stepped since the run began.
    pub frame_count: u64,
}

impl GameSession {
    pub fn new<R: Rng>(config: GameConfig, rng: &mut R) -> Self {
        Self {
            phase: Phase::Running,
            player: Player::new(&config),
            obstacles: Vec::new(),
            score: 0,
            current_speed: config.base_speed,
            spawner: Spawner::new(&config, rng),
            frame_count: 0,
            config,
        }
    }

    pub fn is_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    /// Start a fresh run with the same config.
    pub fn restart<R: Rng>(&mut self, rng: &mut R) {
        *self = Self::new(self.config, rng);
    }
}

/// Apply one input. The action key jumps while running and restarts once
/// the run is over.
pub fn process_input<R: Rng>(
    session: &mut GameSession,
    input: RunnerInput,
    rng: &mut R,
) -> InputResponse {
    match input {
        RunnerInput::Quit => InputResponse::Quit,
        RunnerInput::Other => InputResponse::Ignored,
        RunnerInput::Action => match session.phase {
            Phase::GameOver => {
                session.restart(rng);
                InputResponse::Restarted
            }
            Phase::Running if session.player.is_airborne => InputResponse::Ignored,
            Phase::Running => {
                session.player.jump();
                InputResponse::Jumped
            }
        },
    }
}

/// Advance the session by one frame. Frozen once the run is over.
pub fn step<R: Rng>(session: &mut GameSession, rng: &mut R) -> FrameOutcome {
    let mut outcome = FrameOutcome::default();
    if session.is_over() {
        return outcome;
    }

    session.frame_count += 1;

    // 1. Gravity and ground clamp
    session.player.update();

    // 2. Spawn timer
    if let Some(obstacle) = session.spawner.tick(&session.config, rng) {
        session.obstacles.push(obstacle);
        outcome.spawned = true;
    }

    // 3. Scroll every obstacle at the shared speed and test for hits. The
    //    whole pass completes even after a hit.
    let speed = session.current_speed;
    let player = &session.player;
    for obstacle in &mut session.obstacles {
        obstacle.update(speed);
        if obstacle.collides_with(player) {
            outcome.collided = true;
        }
    }

    // 4. Compact: drop everything past the left edge, one point each
    let before = session.obstacles.len();
    session.obstacles.retain(|o| !o.off_screen());
    outcome.passed = (before - session.obstacles.len()) as u32;
    session.score += outcome.passed;

    // 5. Difficulty ramp, no cap
    session.current_speed += session.config.speed_ramp;

    if outcome.collided {
        session.phase = Phase::GameOver;
    }

    outcome
}
