//! Centralized configuration loading from config.toml.
//!
//! This crate provides configuration structs and loading logic shared
//! across the workspace (game setup, search parameters and the actor).
//!
//! # Configuration Priority
//!
//! Settings are loaded with the following priority (highest to lowest):
//! 1. Environment variables (`CARDBATTLE_<SECTION>_<KEY>`)
//! 2. config.toml file
//! 3. Built-in defaults
//!
//! # Environment Variable Override Pattern
//!
//! ```text
//! CARDBATTLE_<SECTION>_<KEY>=value
//!
//! Examples:
//!     CARDBATTLE_COMMON_LOG_LEVEL=debug
//!     CARDBATTLE_COMMON_SEED=42
//!     CARDBATTLE_MCTS_ITERATIONS=500
//!     CARDBATTLE_ACTOR_PLAYER_TWO=random
//! ```

mod defaults;
mod loader;
mod structs;

pub use defaults::*;
pub use loader::{
    apply_env_overrides, load_config, load_from_path, CONFIG_ENV_VAR, CONFIG_SEARCH_PATHS,
};
pub use structs::*;
