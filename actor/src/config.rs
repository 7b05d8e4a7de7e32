//! Configuration for the actor binary
//!
//! Configuration is loaded from config.toml with environment variable overrides.
//! CLI arguments take highest priority, followed by env vars, then config.toml.

use anyhow::{anyhow, Result};
use clap::Parser;
use engine_config::{load_config, CentralConfig};
use games_cardbattle::GameSetup;
use once_cell::sync::Lazy;

use crate::policy::PolicyKind;

// Load central config once at startup
static CENTRAL_CONFIG: Lazy<CentralConfig> = Lazy::new(load_config);

// Default value functions that read from central config
fn default_log_level() -> String {
    CENTRAL_CONFIG.common.log_level.clone()
}

fn default_seed() -> u64 {
    CENTRAL_CONFIG.common.seed
}

fn default_num_games() -> u32 {
    CENTRAL_CONFIG.actor.num_games
}

fn default_max_turns() -> u32 {
    CENTRAL_CONFIG.actor.max_turns
}

fn default_log_interval() -> u32 {
    CENTRAL_CONFIG.actor.log_interval
}

fn default_player_one() -> String {
    CENTRAL_CONFIG.actor.player_one.clone()
}

fn default_player_two() -> String {
    CENTRAL_CONFIG.actor.player_two.clone()
}

fn default_iterations() -> u32 {
    CENTRAL_CONFIG.mcts.iterations
}

fn default_exploration_weight() -> f64 {
    CENTRAL_CONFIG.mcts.exploration_weight
}

fn default_rollout_depth() -> u32 {
    CENTRAL_CONFIG.mcts.rollout_depth
}

fn default_starting_health() -> i32 {
    CENTRAL_CONFIG.game.starting_health
}

fn default_starting_mana() -> u32 {
    CENTRAL_CONFIG.game.starting_mana
}

fn default_deck_size() -> usize {
    CENTRAL_CONFIG.game.deck_size
}

#[derive(Parser, Debug, Clone)]
#[command(name = "actor")]
#[command(about = "Card battle actor - plays MCTS-driven matches")]
#[command(
    long_about = "Actor that plays complete two-player card battle matches, choosing
each move with Monte Carlo Tree Search or at random per seat.

Configuration is loaded from config.toml with environment variable overrides.
CLI arguments take highest priority."
)]
pub struct Config {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value_t = default_log_level())]
    pub log_level: String,

    /// RNG seed for decks, rollouts and random players (0 for entropy)
    #[arg(long, default_value_t = default_seed())]
    pub seed: u64,

    /// Number of matches to play
    #[arg(long, default_value_t = default_num_games())]
    pub num_games: u32,

    /// Turn cap after which a match is scored as a draw
    #[arg(long, default_value_t = default_max_turns())]
    pub max_turns: u32,

    /// Log aggregate results every N matches (0 to disable)
    #[arg(long, default_value_t = default_log_interval())]
    pub log_interval: u32,

    /// Policy for the first seat (mcts, random)
    #[arg(long, default_value_t = default_player_one())]
    pub player_one: String,

    /// Policy for the second seat (mcts, random)
    #[arg(long, default_value_t = default_player_two())]
    pub player_two: String,

    /// MCTS iterations per decision
    #[arg(long, default_value_t = default_iterations())]
    pub iterations: u32,

    /// UCT exploration weight
    #[arg(long, default_value_t = default_exploration_weight())]
    pub exploration_weight: f64,

    /// Maximum turns per random rollout
    #[arg(long, default_value_t = default_rollout_depth())]
    pub rollout_depth: u32,

    /// Hero health at the start of a match
    #[arg(long, default_value_t = default_starting_health())]
    pub starting_health: i32,

    /// Mana (and max mana) at the start of a match
    #[arg(long, default_value_t = default_starting_mana())]
    pub starting_mana: u32,

    /// Cards generated into each deck
    #[arg(long, default_value_t = default_deck_size())]
    pub deck_size: usize,
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        self.to_central().validate()?;

        self.player_one
            .parse::<PolicyKind>()
            .map_err(|e| anyhow!("player_one: {e}"))?;
        self.player_two
            .parse::<PolicyKind>()
            .map_err(|e| anyhow!("player_two: {e}"))?;

        Ok(())
    }

    /// The loaded central config with every command-line value applied.
    pub fn to_central(&self) -> CentralConfig {
        let mut central = CENTRAL_CONFIG.clone();
        central.common.log_level = self.log_level.clone();
        central.common.seed = self.seed;
        central.game.starting_health = self.starting_health;
        central.game.starting_mana = self.starting_mana;
        central.game.deck_size = self.deck_size;
        central.mcts.iterations = self.iterations;
        central.mcts.exploration_weight = self.exploration_weight;
        central.mcts.rollout_depth = self.rollout_depth;
        central.actor.num_games = self.num_games;
        central.actor.max_turns = self.max_turns;
        central.actor.log_interval = self.log_interval;
        central.actor.player_one = self.player_one.clone();
        central.actor.player_two = self.player_two.clone();
        central
    }

    /// Search parameters for MCTS-driven seats.
    pub fn mcts_config(&self) -> mcts::MctsConfig {
        mcts::MctsConfig::default()
            .with_iterations(self.iterations)
            .with_exploration_weight(self.exploration_weight)
            .with_rollout_depth(self.rollout_depth)
    }

    /// Starting conditions for every match.
    pub fn game_setup(&self) -> GameSetup {
        GameSetup {
            starting_health: self.starting_health,
            starting_mana: self.starting_mana,
            deck_size: self.deck_size,
            first_player_opening_hand: CENTRAL_CONFIG.game.first_player_opening_hand,
            second_player_opening_hand: CENTRAL_CONFIG.game.second_player_opening_hand,
        }
    }
}
