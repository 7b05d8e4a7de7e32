//! Default configuration values loaded from config.defaults.toml.
//!
//! The shared TOML file is embedded at compile time so every binary and
//! test sees the same defaults.

use once_cell::sync::Lazy;
use serde::Deserialize;

/// The embedded defaults TOML file (loaded at compile time)
const DEFAULTS_TOML: &str = include_str!("../../../config.defaults.toml");

/// Parsed defaults structure (parsed once at first use)
static DEFAULTS: Lazy<DefaultsConfig> = Lazy::new(|| {
    toml::from_str(DEFAULTS_TOML).expect("config.defaults.toml should be valid TOML")
});

// ============================================================================
// Internal structs for parsing config.defaults.toml
// ============================================================================

#[derive(Debug, Deserialize)]
struct DefaultsConfig {
    common: CommonDefaults,
    game: GameDefaults,
    mcts: MctsDefaults,
    actor: ActorDefaults,
}

#[derive(Debug, Deserialize)]
struct CommonDefaults {
    log_level: String,
    seed: u64,
}

#[derive(Debug, Deserialize)]
struct GameDefaults {
    starting_health: i32,
    starting_mana: u32,
    deck_size: usize,
    first_player_opening_hand: usize,
    second_player_opening_hand: usize,
}

#[derive(Debug, Deserialize)]
struct MctsDefaults {
    iterations: u32,
    exploration_weight: f64,
    rollout_depth: u32,
}

#[derive(Debug, Deserialize)]
struct ActorDefaults {
    num_games: u32,
    max_turns: u32,
    log_interval: u32,
    player_one: String,
    player_two: String,
}

// ============================================================================
// Public accessor functions
// ============================================================================

// Common
pub fn log_level() -> &'static str {
    &DEFAULTS.common.log_level
}
pub fn seed() -> u64 {
    DEFAULTS.common.seed
}

// Game
pub fn starting_health() -> i32 {
    DEFAULTS.game.starting_health
}
pub fn starting_mana() -> u32 {
    DEFAULTS.game.starting_mana
}
pub fn deck_size() -> usize {
    DEFAULTS.game.deck_size
}
pub fn first_player_opening_hand() -> usize {
    DEFAULTS.game.first_player_opening_hand
}
pub fn second_player_opening_hand() -> usize {
    DEFAULTS.game.second_player_opening_hand
}

// MCTS
pub fn iterations() -> u32 {
    DEFAULTS.mcts.iterations
}
pub fn exploration_weight() -> f64 {
    DEFAULTS.mcts.exploration_weight
}
pub fn rollout_depth() -> u32 {
    DEFAULTS.mcts.rollout_depth
}

// Actor
pub fn num_games() -> u32 {
    DEFAULTS.actor.num_games
}
pub fn max_turns() -> u32 {
    DEFAULTS.actor.max_turns
}
pub fn log_interval() -> u32 {
    DEFAULTS.actor.log_interval
}
pub fn player_one() -> &'static str {
    &DEFAULTS.actor.player_one
}
pub fn player_two() -> &'static str {
    &DEFAULTS.actor.player_two
}
