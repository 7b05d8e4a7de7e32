//! Configuration struct definitions.
//!
//! All config structs with serde deserialization support and default values.

use crate::defaults;
use serde::Deserialize;
use thiserror::Error;

/// Log levels accepted by `common.log_level`
pub const VALID_LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

// ============================================================================
// Serde default functions (required for #[serde(default = "...")])
// These call the accessor functions from defaults module
// ============================================================================

fn d_log_level() -> String {
    defaults::log_level().into()
}
fn d_seed() -> u64 {
    defaults::seed()
}
fn d_starting_health() -> i32 {
    defaults::starting_health()
}
fn d_starting_mana() -> u32 {
    defaults::starting_mana()
}
fn d_deck_size() -> usize {
    defaults::deck_size()
}
fn d_first_hand() -> usize {
    defaults::first_player_opening_hand()
}
fn d_second_hand() -> usize {
    defaults::second_player_opening_hand()
}
fn d_iterations() -> u32 {
    defaults::iterations()
}
fn d_exploration_weight() -> f64 {
    defaults::exploration_weight()
}
fn d_rollout_depth() -> u32 {
    defaults::rollout_depth()
}
fn d_num_games() -> u32 {
    defaults::num_games()
}
fn d_max_turns() -> u32 {
    defaults::max_turns()
}
fn d_log_interval() -> u32 {
    defaults::log_interval()
}
fn d_player_one() -> String {
    defaults::player_one().into()
}
fn d_player_two() -> String {
    defaults::player_two().into()
}

// ============================================================================
// Configuration Structs
// ============================================================================

/// Root configuration structure matching config.toml
#[derive(Debug, Deserialize, Default, Clone)]
pub struct CentralConfig {
    #[serde(default)]
    pub common: CommonConfig,
    #[serde(default)]
    pub game: GameConfig,
    #[serde(default)]
    pub mcts: MctsConfig,
    #[serde(default)]
    pub actor: ActorConfig,
}

/// Common configuration shared by all components
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct CommonConfig {
    #[serde(default = "d_log_level")]
    pub log_level: String,
    /// RNG seed, 0 means seed from entropy
    #[serde(default = "d_seed")]
    pub seed: u64,
}

impl Default for CommonConfig {
    fn default() -> Self {
        Self {
            log_level: defaults::log_level().into(),
            seed: defaults::seed(),
        }
    }
}

/// Starting conditions of a match
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct GameConfig {
    #[serde(default = "d_starting_health")]
    pub starting_health: i32,
    #[serde(default = "d_starting_mana")]
    pub starting_mana: u32,
    #[serde(default = "d_deck_size")]
    pub deck_size: usize,
    #[serde(default = "d_first_hand")]
    pub first_player_opening_hand: usize,
    #[serde(default = "d_second_hand")]
    pub second_player_opening_hand: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            starting_health: defaults::starting_health(),
            starting_mana: defaults::starting_mana(),
            deck_size: defaults::deck_size(),
            first_player_opening_hand: defaults::first_player_opening_hand(),
            second_player_opening_hand: defaults::second_player_opening_hand(),
        }
    }
}

/// MCTS search parameters
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct MctsConfig {
    #[serde(default = "d_iterations")]
    pub iterations: u32,
    #[serde(default = "d_exploration_weight")]
    pub exploration_weight: f64,
    #[serde(default = "d_rollout_depth")]
    pub rollout_depth: u32,
}

impl Default for MctsConfig {
    fn default() -> Self {
        Self {
            iterations: defaults::iterations(),
            exploration_weight: defaults::exploration_weight(),
            rollout_depth: defaults::rollout_depth(),
        }
    }
}

/// Match runner configuration
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ActorConfig {
    #[serde(default = "d_num_games")]
    pub num_games: u32,
    #[serde(default = "d_max_turns")]
    pub max_turns: u32,
    #[serde(default = "d_log_interval")]
    pub log_interval: u32,
    #[serde(default = "d_player_one")]
    pub player_one: String,
    #[serde(default = "d_player_two")]
    pub player_two: String,
}

impl Default for ActorConfig {
    fn default() -> Self {
        Self {
            num_games: defaults::num_games(),
            max_turns: defaults::max_turns(),
            log_interval: defaults::log_interval(),
            player_one: defaults::player_one().into(),
            player_two: defaults::player_two().into(),
        }
    }
}

// ============================================================================
// Validation
// ============================================================================

/// A configuration value outside its allowed range.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("invalid log level {0:?}, expected one of trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("{0} must be greater than zero")]
    MustBePositive(&'static str),

    #[error("mcts.exploration_weight must be finite and non-negative, got {0}")]
    InvalidExplorationWeight(f64),
}

impl CentralConfig {
    /// Check the values a run cannot start with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let level = self.common.log_level.to_ascii_lowercase();
        if !VALID_LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::InvalidLogLevel(self.common.log_level.clone()));
        }
        if self.game.starting_health <= 0 {
            return Err(ConfigError::MustBePositive("game.starting_health"));
        }
        let weight = self.mcts.exploration_weight;
        if !weight.is_finite() || weight < 0.0 {
            return Err(ConfigError::InvalidExplorationWeight(weight));
        }
        if self.actor.num_games == 0 {
            return Err(ConfigError::MustBePositive("actor.num_games"));
        }
        if self.actor.max_turns == 0 {
            return Err(ConfigError::MustBePositive("actor.max_turns"));
        }
        Ok(())
    }
}
