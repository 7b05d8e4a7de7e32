//! Core traits for the card battle engine
//!
//! This crate provides the contract between a game and the search that plays it:
//! - `Game`: typed trait for action enumeration, in-place transitions,
//!   terminal test, turn switching and deep cloning

pub mod typed;

// Re-export main types for convenience
pub use typed::Game;
