//! Running Boy Headless Simulator
//!
//! Plays runs without any UI using an autopilot, collecting survival and
//! score statistics. Uses the exact same `step()` function as the real game.
//!
//! Usage:
//!   cargo run --bin simulator -- [OPTIONS]
//!
//! Options:
//!   --frames N      Frames per run (default: 3600 = 1 minute)
//!   --seed N        RNG seed (default: 42)
//!   --runs N        Number of runs with incrementing seeds (default: 1)
//!   --lead N        Autopilot look-ahead in frames (default: 6)
//!   --no-jump       Disable the autopilot
//!   --json          Print the full report as JSON
//!   --verbose       Per-run debug logging on stderr
//!   --quiet         Only final summary line

use running_boy::logging;
use running_boy::simulator::{run_simulation, SimConfig};

// ── CLI Configuration ────────────────────────────────────────────────

struct CliOptions {
    sim: SimConfig,
    json: bool,
    verbose: bool,
    quiet: bool,
}

fn parse_args() -> CliOptions {
    let args: Vec<String> = std::env::args().collect();
    let mut options = CliOptions {
        sim: SimConfig::default(),
        json: false,
        verbose: false,
        quiet: false,
    };
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--frames" => {
                i += 1;
                options.sim.max_frames = args[i].parse().expect("--frames requires a number");
            }
            "--seed" => {
                i += 1;
                options.sim.seed = Some(args[i].parse().expect("--seed requires a number"));
            }
            "--runs" => {
                i += 1;
                options.sim.num_runs = args[i].parse().expect("--runs requires a number");
            }
            "--lead" => {
                i += 1;
                options.sim.lead_frames = args[i].parse().expect("--lead requires a number");
            }
            "--no-jump" => options.sim.autopilot = false,
            "--json" => options.json = true,
            "--verbose" => options.verbose = true,
            "--quiet" => options.quiet = true,
            "--help" | "-h" => {
                print_usage();
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {other}");
                print_usage();
                std::process::exit(1);
            }
        }
        i += 1;
    }
    options
}

fn print_usage() {
    eprintln!(
        "Running Boy Headless Simulator\n\
         \n\
         Usage: simulator [OPTIONS]\n\
         \n\
         Options:\n\
         \x20 --frames N   Frames per run (default: 3600 = 1 minute)\n\
         \x20 --seed N     RNG seed (default: 42)\n\
         \x20 --runs N     Number of runs with incrementing seeds (default: 1)\n\
         \x20 --lead N     Autopilot look-ahead in frames (default: 6)\n\
         \x20 --no-jump    Disable the autopilot\n\
         \x20 --json       Print the full report as JSON\n\
         \x20 --verbose    Per-run debug logging on stderr\n\
         \x20 --quiet      Only final summary line\n\
         \x20 --help, -h   Show this help"
    );
}

fn main() -> std::io::Result<()> {
    let options = parse_args();
    logging::init_stderr_logger(if options.verbose { "debug" } else { "warn" })?;

    log::info!(
        "simulating {} run(s) of {} frames, seed {:?}",
        options.sim.num_runs,
        options.sim.max_frames,
        options.sim.seed
    );
    let report = run_simulation(&options.sim);

    if options.json {
        println!("{}", report.to_json());
    } else if options.quiet {
        println!("{}", report.summary_line());
    } else {
        print!("{}", report.generate_text_report());
    }
    Ok(())
}
