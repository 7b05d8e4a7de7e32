//! Action selection policies for the actor

use std::fmt;
use std::str::FromStr;

use games_cardbattle::{Action, GameState};
use rand::prelude::*;
use rand_chacha::ChaCha20Rng;
use thiserror::Error;

use crate::mcts_policy::MctsPolicy;

/// Errors building a policy from configuration.
#[derive(Debug, Error, PartialEq)]
pub enum PolicyError {
    #[error("unknown policy '{0}', expected one of mcts, random")]
    UnknownPolicy(String),
}

/// Trait for action selection policies.
pub trait Policy: Send {
    /// Short name for logs
    fn name(&self) -> &'static str;

    /// Choose the next action for the active player, or `None` to end the
    /// turn.
    fn select_action(&mut self, state: &GameState) -> Option<Action>;
}

/// Which policy drives a seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyKind {
    Mcts,
    Random,
}

impl FromStr for PolicyKind {
    type Err = PolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mcts" => Ok(Self::Mcts),
            "random" => Ok(Self::Random),
            _ => Err(PolicyError::UnknownPolicy(s.to_string())),
        }
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mcts => f.write_str("mcts"),
            Self::Random => f.write_str("random"),
        }
    }
}

impl PolicyKind {
    /// Build a boxed policy of this kind seeded with `seed`.
    pub fn build(self, mcts_config: &mcts::MctsConfig, seed: u64) -> Box<dyn Policy> {
        match self {
            Self::Mcts => Box::new(MctsPolicy::with_seed(mcts_config.clone(), seed)),
            Self::Random => Box::new(RandomPolicy::with_seed(seed)),
        }
    }
}

/// Random policy that picks uniformly among the legal actions and never
/// ends a turn early.
#[derive(Debug)]
pub struct RandomPolicy {
    rng: ChaCha20Rng,
}

impl RandomPolicy {
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }
}

impl Policy for RandomPolicy {
    fn name(&self) -> &'static str {
        "random"
    }

    fn select_action(&mut self, state: &GameState) -> Option<Action> {
        state.legal_actions().choose(&mut self.rng).copied()
    }
}
