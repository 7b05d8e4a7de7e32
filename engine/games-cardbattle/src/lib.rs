//! Card battle game implementation for the search engine
//!
//! Two heroes, each with mana, a deck, a hand and a board of minions, take
//! turns playing cards and attacking. The crate implements
//! [`engine_core::Game`] for [`GameState`] so the search can plan for the
//! active player.
//!
//! # Usage
//!
//! ```rust
//! use engine_core::Game;
//! use games_cardbattle::{GameSetup, GameState};
//!
//! let mut game = GameState::new(&GameSetup::default(), 42);
//! while !game.is_terminal() && game.turn() < 10 {
//!     for action in game.legal_actions().into_iter().take(1) {
//!         assert!(game.apply(&action));
//!     }
//!     game.end_turn();
//! }
//! ```

pub mod card;
pub mod catalog;
pub mod deck;
pub mod display;
pub mod effects;
pub mod player;
pub mod state;

pub use card::{Card, CardId, CardType};
pub use deck::generate_deck;
pub use effects::{default_registry, EffectRegistry, SpellEffect};
pub use player::PlayerResources;
pub use state::{Action, GameSetup, GameState, Target};

/// Most cards a hand can hold
pub const MAX_HAND_SIZE: usize = 10;

/// Most units a board can hold
pub const MAX_BOARD_SIZE: usize = 7;

/// Mana crystal cap
pub const MAX_MANA: u32 = 10;

#[cfg(test)]
mod tests;
