//! Actor - match runner for the card battle engine
//!
//! A command-line process that:
//! 1. Loads configuration (config.toml, env overrides, CLI flags)
//! 2. Deals fresh games and drives each seat with MCTS or random play
//! 3. Logs every applied action and the aggregate match results

use anyhow::Result;
use clap::Parser;
use tracing::{error, info};

mod actor;
mod config;
mod mcts_policy;
mod policy;
mod stats;

use crate::actor::Actor;
use crate::config::Config;

fn init_tracing(level: &str) -> Result<()> {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    Ok(())
}

fn main() -> Result<()> {
    // Parse configuration
    let config = Config::parse();

    // Validate configuration
    config.validate()?;

    // Initialize tracing
    init_tracing(&config.log_level)?;
    info!(log_level = %config.log_level, "Tracing initialized");

    let mut actor = Actor::new(config)?;

    match actor.run() {
        Ok(summary) => {
            info!(
                games = summary.games_completed,
                player1_wins = summary.player1_wins,
                player2_wins = summary.player2_wins,
                draws = summary.draws,
                runtime_secs = format!("{:.1}", summary.runtime_seconds),
                "Actor completed successfully"
            );
            Ok(())
        }
        Err(e) => {
            error!("Actor failed: {}", e);
            Err(e)
        }
    }
}
