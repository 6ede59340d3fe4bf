use crossterm::event;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::Terminal;
use running_boy::core::constants::FPS;
use running_boy::input::map_event;
use running_boy::{
    build_info, logging, process_input, step, ui, FramePacer, GameConfig, GameSession,
    InputResponse,
};
use std::io;
use std::path::PathBuf;
use std::time::Duration;

struct Options {
    seed: Option<u64>,
    log_path: Option<PathBuf>,
}

fn parse_args() -> Options {
    let args: Vec<String> = std::env::args().collect();
    let mut options = Options {
        seed: None,
        log_path: None,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--version" | "-v" => {
                println!("{}", build_info::version_line());
                std::process::exit(0);
            }
            "--help" | "-h" => {
                println!("Running Boy - Terminal Endless Runner\n");
                print_usage();
                std::process::exit(0);
            }
            "--seed" => {
                i += 1;
                match args.get(i).map(|s| s.parse::<u64>()) {
                    Some(Ok(seed)) => options.seed = Some(seed),
                    _ => usage_error("--seed requires a number"),
                }
            }
            "--log" => {
                i += 1;
                match args.get(i) {
                    Some(path) => options.log_path = Some(PathBuf::from(path)),
                    None => usage_error("--log requires a file path"),
                }
            }
            other => usage_error(&format!("Unknown argument: {}", other)),
        }
        i += 1;
    }
    options
}

fn print_usage() {
    eprintln!(
        "Usage: running-boy [OPTIONS]\n\
         \n\
         Options:\n\
         \x20 --seed N     Seed the obstacle generator\n\
         \x20 --log FILE   Write log output to FILE\n\
         \x20 --version    Show version information\n\
         \x20 --help       Show this help message\n\
         \n\
         Controls: Space jumps (restarts after a crash), Esc or q quits."
    );
}

fn usage_error(message: &str) -> ! {
    eprintln!("{}\n", message);
    print_usage();
    std::process::exit(1);
}

fn main() -> io::Result<()> {
    let options = parse_args();

    if let Some(path) = &options.log_path {
        logging::init_file_logger(path)?;
    }

    // Draw a seed even when none is given so a logged run can be replayed
    let seed = options.seed.unwrap_or_else(rand::random);
    log::info!("{} starting, seed {}", build_info::version_line(), seed);
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.hide_cursor()?;

    let result = run(&mut terminal, &mut rng);

    // Cleanup terminal, even when the loop failed
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        log::error!("terminal error: {}", e);
    }
    result
}

/// Main loop: pace, drain input, advance one frame, draw.
fn run<B: Backend>(terminal: &mut Terminal<B>, rng: &mut ChaCha8Rng) -> io::Result<()> {
    let mut session = GameSession::new(GameConfig::default(), rng);
    let mut pacer = FramePacer::new(FPS);
    log::info!("run started");

    loop {
        pacer.tick();

        while event::poll(Duration::ZERO)? {
            let Some(input) = map_event(event::read()?) else {
                continue;
            };
            match process_input(&mut session, input, rng) {
                InputResponse::Quit => {
                    log::info!(
                        "quit: score={} frames={}",
                        session.score,
                        session.frame_count
                    );
                    return Ok(());
                }
                InputResponse::Restarted => log::info!("restarted"),
                InputResponse::Jumped => log::debug!("jump at frame {}", session.frame_count),
                InputResponse::Ignored => {}
            }
        }

        let outcome = step(&mut session, rng);
        if outcome.spawned {
            log::trace!("obstacle spawned at frame {}", session.frame_count);
        }
        if outcome.collided {
            log::info!(
                "game over: score={} speed={:.3} frames={}",
                session.score,
                session.current_speed,
                session.frame_count
            );
        }

        terminal.draw(|frame| ui::draw_ui(frame, &session))?;
    }
}
