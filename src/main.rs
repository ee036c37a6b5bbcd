//! Tetris Stack menu runner (default binary).
//!
//! Prints the piece panel, reads one menu choice per line from stdin and
//! applies it until the player exits or input ends. Logs go to stderr.

use std::io;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use tetris_stack::{run_session, GameConfig};

fn main() -> Result<()> {
    init_tracing();

    let config = GameConfig::from_env();
    let stdin = io::stdin();
    let stdout = io::stdout();

    run_session(&config, stdin.lock(), stdout.lock())?;
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}
