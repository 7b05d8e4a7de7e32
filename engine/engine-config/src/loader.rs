//! Configuration loading logic.
//!
//! Handles loading config from files and applying environment variable overrides.

use crate::CentralConfig;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Environment variable naming an explicit config file
pub const CONFIG_ENV_VAR: &str = "CARDBATTLE_CONFIG";

/// Standard locations to search for config.toml
pub const CONFIG_SEARCH_PATHS: &[&str] = &[
    "config.toml",    // Current directory
    "../config.toml", // Parent directory (when running from subdirectory)
];

/// Load the central configuration from config.toml.
///
/// Searches for config.toml in the following order:
/// 1. Path specified by CARDBATTLE_CONFIG environment variable
/// 2. Current directory (config.toml)
/// 3. Parent directory (../config.toml)
///
/// After loading, environment variable overrides are applied.
pub fn load_config() -> CentralConfig {
    // Check for explicit config path
    if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
        let path = PathBuf::from(&path);
        if path.exists() {
            info!("Loading config from {CONFIG_ENV_VAR}: {}", path.display());
            return load_from_path(&path);
        }
        warn!(
            "{CONFIG_ENV_VAR}={} not found, searching defaults",
            path.display()
        );
    }

    // Search default locations
    for path_str in CONFIG_SEARCH_PATHS {
        let path = Path::new(path_str);
        if path.exists() {
            info!("Loading config from {}", path.display());
            return load_from_path(path);
        }
    }

    // Fall back to defaults
    debug!("No config.toml found, using built-in defaults");
    apply_env_overrides(CentralConfig::default())
}

/// Load configuration from a specific path.
///
/// Read or parse failures fall back to the built-in defaults.
pub fn load_from_path(path: &Path) -> CentralConfig {
    match std::fs::read_to_string(path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(config) => apply_env_overrides(config),
            Err(e) => {
                warn!("Failed to parse {}: {}, using defaults", path.display(), e);
                apply_env_overrides(CentralConfig::default())
            }
        },
        Err(e) => {
            warn!("Failed to read {}: {}, using defaults", path.display(), e);
            apply_env_overrides(CentralConfig::default())
        }
    }
}

/// Macro to reduce env override boilerplate
macro_rules! env_override {
    // String field
    ($config:expr, $section:ident . $field:ident, $key:expr) => {
        if let Ok(v) = std::env::var($key) {
            $config.$section.$field = v;
        }
    };
    // Parseable field (u32, usize, f64, etc.)
    ($config:expr, $section:ident . $field:ident, $key:expr, parse) => {
        if let Ok(raw) = std::env::var($key) {
            match raw.parse() {
                Ok(v) => $config.$section.$field = v,
                Err(_) => warn!("Ignoring {}={:?}: not a valid value", $key, raw),
            }
        }
    };
}

/// Apply environment variable overrides to a configuration.
///
/// Environment variables follow the pattern: CARDBATTLE_<SECTION>_<KEY>
pub fn apply_env_overrides(mut config: CentralConfig) -> CentralConfig {
    // Common
    env_override!(config, common.log_level, "CARDBATTLE_COMMON_LOG_LEVEL");
    env_override!(config, common.seed, "CARDBATTLE_COMMON_SEED", parse);

    // Game
    env_override!(
        config,
        game.starting_health,
        "CARDBATTLE_GAME_STARTING_HEALTH",
        parse
    );
    env_override!(
        config,
        game.starting_mana,
        "CARDBATTLE_GAME_STARTING_MANA",
        parse
    );
    env_override!(config, game.deck_size, "CARDBATTLE_GAME_DECK_SIZE", parse);
    env_override!(
        config,
        game.first_player_opening_hand,
        "CARDBATTLE_GAME_FIRST_PLAYER_OPENING_HAND",
        parse
    );
    env_override!(
        config,
        game.second_player_opening_hand,
        "CARDBATTLE_GAME_SECOND_PLAYER_OPENING_HAND",
        parse
    );

    // MCTS
    env_override!(
        config,
        mcts.iterations,
        "CARDBATTLE_MCTS_ITERATIONS",
        parse
    );
    env_override!(
        config,
        mcts.exploration_weight,
        "CARDBATTLE_MCTS_EXPLORATION_WEIGHT",
        parse
    );
    env_override!(
        config,
        mcts.rollout_depth,
        "CARDBATTLE_MCTS_ROLLOUT_DEPTH",
        parse
    );

    // Actor
    env_override!(
        config,
        actor.num_games,
        "CARDBATTLE_ACTOR_NUM_GAMES",
        parse
    );
    env_override!(
        config,
        actor.max_turns,
        "CARDBATTLE_ACTOR_MAX_TURNS",
        parse
    );
    env_override!(
        config,
        actor.log_interval,
        "CARDBATTLE_ACTOR_LOG_INTERVAL",
        parse
    );
    env_override!(config, actor.player_one, "CARDBATTLE_ACTOR_PLAYER_ONE");
    env_override!(config, actor.player_two, "CARDBATTLE_ACTOR_PLAYER_TWO");

    config
}
