//! Logger setup.
//!
//! The interactive game owns the terminal, so it only logs when pointed at a
//! file with `--log FILE`. The simulator logs to stderr. Both honour
//! `RUST_LOG` and default to `info`.

use env_logger::{Builder, Env, Target};
use std::fs::File;
use std::io;
use std::path::Path;

fn builder(default_filter: &str) -> Builder {
    Builder::from_env(Env::default().default_filter_or(default_filter))
}

/// Send log output to `path`, truncating it.
pub fn init_file_logger(path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    builder("info")
        .target(Target::Pipe(Box::new(file)))
        .try_init()
        .map_err(io::Error::other)
}

/// Send log output to stderr without timestamps.
pub fn init_stderr_logger(default_filter: &str) -> io::Result<()> {
    builder(default_filter)
        .format_timestamp(None)
        .target(Target::Stderr)
        .try_init()
        .map_err(io::Error::other)
}
