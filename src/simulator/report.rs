//! Simulation report generation.

use crate::core::config::GameConfig;
use serde::Serialize;

/// Statistics for one simulated run.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RunStats {
    /// Seed the run was played with (None = entropy)
    pub seed: Option<u64>,
    pub score: u32,
    pub frames: u64,
    pub final_speed: f64,
    pub jumps: u32,
    pub obstacles_spawned: u32,
    pub crashed: bool,
}

/// Aggregated results from multiple runs.
#[derive(Debug, Clone, Serialize)]
pub struct SimReport {
    pub num_runs: u32,
    pub runs_crashed: u32,
    pub avg_score: f64,
    pub min_score: u32,
    pub max_score: u32,
    pub avg_frames: f64,
    pub avg_final_speed: f64,
    pub game: GameConfig,
    pub runs: Vec<RunStats>,
}

impl SimReport {
    pub fn from_runs(runs: Vec<RunStats>, game: GameConfig) -> Self {
        let num_runs = runs.len() as u32;
        let divisor = num_runs.max(1) as f64;

        Self {
            num_runs,
            runs_crashed: runs.iter().filter(|r| r.crashed).count() as u32,
            avg_score: runs.iter().map(|r| r.score as f64).sum::<f64>() / divisor,
            min_score: runs.iter().map(|r| r.score).min().unwrap_or(0),
            max_score: runs.iter().map(|r| r.score).max().unwrap_or(0),
            avg_frames: runs.iter().map(|r| r.frames as f64).sum::<f64>() / divisor,
            avg_final_speed: runs.iter().map(|r| r.final_speed).sum::<f64>() / divisor,
            game,
            runs,
        }
    }

    /// One-line summary for quiet mode.
    pub fn summary_line(&self) -> String {
        format!(
            "runs={} crashed={} score avg={:.1} min={} max={} frames avg={:.0} speed avg={:.3}",
            self.num_runs,
            self.runs_crashed,
            self.avg_score,
            self.min_score,
            self.max_score,
            self.avg_frames,
            self.avg_final_speed
        )
    }

    /// Human-readable multi-line report.
    pub fn generate_text_report(&self) -> String {
        let mut report = String::new();
        report.push_str("═══════════════════════════════════════════════\n");
        report.push_str("  RUNNING BOY SIMULATION\n");
        report.push_str("═══════════════════════════════════════════════\n\n");

        report.push_str(&format!(
            "  Runs:        {} ({} crashed)\n",
            self.num_runs, self.runs_crashed
        ));
        report.push_str(&format!(
            "  Score:       avg {:.1}, min {}, max {}\n",
            self.avg_score, self.min_score, self.max_score
        ));
        report.push_str(&format!(
            "  Survived:    avg {:.0} frames ({:.1}s)\n",
            self.avg_frames,
            self.avg_frames / crate::core::constants::FPS as f64
        ));
        report.push_str(&format!(
            "  Final speed: avg {:.3} (base {:.1})\n",
            self.avg_final_speed, self.game.base_speed
        ));

        if self.num_runs > 1 {
            report.push_str("\n  Per run:\n");
            for (i, run) in self.runs.iter().enumerate() {
                let seed = run
                    .seed
                    .map_or_else(|| "random".to_string(), |s| s.to_string());
                report.push_str(&format!(
                    "    #{:<3} seed {:<8} score {:<4} frames {:<6} {}\n",
                    i + 1,
                    seed,
                    run.score,
                    run.frames,
                    if run.crashed { "crashed" } else { "survived" }
                ));
            }
        }

        report.push_str("\n═══════════════════════════════════════════════\n");
        report
    }

    /// Generate a JSON report for further analysis.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}
