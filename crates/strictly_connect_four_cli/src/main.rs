//! Strictly Connect Four - terminal game
//!
//! Reads moves from standard input and draws the grid on standard output.
//! Logs go to standard error; set `RUST_LOG` to see them.

use anyhow::Result;
use clap::Parser;
use std::io;
use strictly_connect_four_cli::{Cli, Driver};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let config = cli.game_config()?;
    info!(?config, "Starting Connect Four");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut driver = Driver::from_config(&config, stdin.lock(), stdout.lock())?;

    match driver.run()? {
        Some(outcome) => info!(%outcome, "Game complete"),
        None => warn!("Game abandoned"),
    }

    Ok(())
}
