//! Simulation runner: drives `GameSession` frame by frame.

use super::config::SimConfig;
use super::report::{RunStats, SimReport};
use crate::runner::{process_input, step, GameSession, InputResponse, RunnerInput};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Run every configured run and aggregate the results.
pub fn run_simulation(config: &SimConfig) -> SimReport {
    let mut runs = Vec::with_capacity(config.num_runs as usize);

    for run_idx in 0..config.num_runs {
        let seed = config.seed.map(|seed| seed.wrapping_add(run_idx as u64));
        let mut rng = match seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };

        let mut stats = simulate_single_run(config, &mut rng);
        stats.seed = seed;

        log::debug!(
            "run {}/{}: score={} frames={} speed={:.3} crashed={}",
            run_idx + 1,
            config.num_runs,
            stats.score,
            stats.frames,
            stats.final_speed,
            stats.crashed
        );
        runs.push(stats);
    }

    SimReport::from_runs(runs, config.game)
}

/// Play one run until a crash or `max_frames`.
pub fn simulate_single_run<R: Rng>(config: &SimConfig, rng: &mut R) -> RunStats {
    let mut session = GameSession::new(config.game, rng);
    let mut stats = RunStats::default();

    for _ in 0..config.max_frames {
        if config.autopilot
            && autopilot_wants_jump(&session, config.lead_frames)
            && process_input(&mut session, RunnerInput::Action, rng) == InputResponse::Jumped
        {
            stats.jumps += 1;
        }

        let outcome = step(&mut session, rng);
        if outcome.spawned {
            stats.obstacles_spawned += 1;
        }
        if outcome.collided {
            stats.crashed = true;
            break;
        }
    }

    stats.score = session.score;
    stats.frames = session.frame_count;
    stats.final_speed = session.current_speed;
    stats
}

/// True when the player is grounded and the nearest obstacle ahead will reach
/// the player's front edge within `lead_frames` at the current speed.
pub fn autopilot_wants_jump(session: &GameSession, lead_frames: f64) -> bool {
    if session.is_over() || session.player.is_airborne {
        return false;
    }

    let front = session.player.right();
    let nearest_gap = session
        .obstacles
        .iter()
        .filter(|o| o.x >= front)
        .map(|o| o.x - front)
        .fold(f64::INFINITY, f64::min);

    nearest_gap <= session.current_speed * lead_frames
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::GameConfig;
    use crate::runner::{Obstacle, Phase};

    fn session() -> GameSession {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        GameSession::new(GameConfig::default(), &mut rng)
    }

    #[test]
    fn test_autopilot_waits_for_close_obstacle() {
        let mut session = session();
        assert!(!autopilot_wants_jump(&session, 6.0));

        // 100 units ahead at speed 6: ~17 frames away
        session.obstacles.push(Obstacle::at(240.0, 300.0, 30.0, 50.0));
        assert!(!autopilot_wants_jump(&session, 6.0));

        // 30 units ahead: 5 frames away
        session.obstacles.push(Obstacle::at(170.0, 300.0, 30.0, 50.0));
        assert!(autopilot_wants_jump(&session, 6.0));
    }

    #[test]
    fn test_autopilot_ignores_obstacles_behind() {
        let mut session = session();
        session.obstacles.push(Obstacle::at(50.0, 300.0, 30.0, 50.0));
        assert!(!autopilot_wants_jump(&session, 6.0));
    }

    #[test]
    fn test_autopilot_idle_while_airborne_or_over() {
        let mut session = session();
        session.obstacles.push(Obstacle::at(150.0, 300.0, 30.0, 50.0));
        session.player.jump();
        assert!(!autopilot_wants_jump(&session, 6.0));

        let mut session = self::session();
        session.obstacles.push(Obstacle::at(150.0, 300.0, 30.0, 50.0));
        session.phase = Phase::GameOver;
        assert!(!autopilot_wants_jump(&session, 6.0));
    }

    #[test]
    fn test_run_without_autopilot_crashes() {
        let config = SimConfig {
            autopilot: false,
            ..Default::default()
        };
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let stats = simulate_single_run(&config, &mut rng);

        assert!(stats.crashed);
        assert_eq!(stats.jumps, 0);
        assert_eq!(stats.score, 0);
        assert!(stats.frames < config.max_frames);
    }

    #[test]
    fn test_autopilot_clears_obstacles() {
        let config = SimConfig {
            max_frames: 1_200,
            ..Default::default()
        };
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let stats = simulate_single_run(&config, &mut rng);

        assert!(!stats.crashed, "autopilot crashed: {stats:?}");
        assert_eq!(stats.frames, 1_200);
        assert!(stats.score >= 1);
        assert!(stats.jumps >= stats.score);
    }
}
