//! Strictly Guessing - interactive number-guessing game.

use anyhow::Result;
use clap::Parser;
use std::io;
use strictly_guessing_cli::{Cli, Console, GameConfig, Session};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so they never interleave with prompts
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let config = GameConfig::resolve(&cli)?;
    info!(?config, "Starting Strictly Guessing");

    let console = Console::new(io::stdin().lock(), io::stdout().lock());
    let (scoreboard, _) = Session::new(console, config).run()?;

    info!(
        rounds_played = scoreboard.rounds_played(),
        best = ?scoreboard.best(),
        "Goodbye"
    );
    Ok(())
}
