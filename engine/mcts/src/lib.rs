//! Monte Carlo Tree Search (MCTS) with uniform random rollouts.
//!
//! This crate provides a game-agnostic MCTS implementation that works with any
//! game implementing the `engine-core` Game trait.
//!
//! # Overview
//!
//! MCTS builds a search tree by running iterations. Each iteration consists
//! of four phases:
//!
//! 1. **Selection**: descend from the root with UCT while the current node
//!    has children and every legal action there already has a child
//! 2. **Expansion**: add a single child for one untried action, chosen
//!    uniformly at random
//! 3. **Simulation**: play a bounded random game from the new child
//! 4. **Backpropagation**: add one visit and the rollout reward to every node
//!    from the child up to the root
//!
//! The reward is taken from a fixed perspective ([`engine_core::Game::rollout_reward`])
//! and is added unchanged at every depth.
//!
//! # Usage
//!
//! ```rust
//! use games_cardbattle::{Action, Card, GameState, PlayerResources};
//! use mcts::{run_mcts, MctsConfig};
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha20Rng;
//!
//! let one = PlayerResources::new(30, 5).with_hand(vec![Card::minion("Raptor", 2, 3, 2)]);
//! let state = GameState::from_players(one, PlayerResources::new(30, 1));
//! let mut rng = ChaCha20Rng::seed_from_u64(42);
//!
//! let result = run_mcts(&state, MctsConfig::default().with_iterations(100), &mut rng);
//! assert_eq!(result.action, Some(Action::Play(0)));
//! ```
//!
//! # Configuration
//!
//! The [`MctsConfig`] struct controls search behavior:
//!
//! - `iterations`: Number of iterations per search (default: 1000)
//! - `exploration_weight`: UCT exploration weight (default: sqrt(2))
//! - `rollout_depth`: Maximum turns per random rollout (default: 20)
//!
//! # Policies
//!
//! Expansion and rollouts pick actions through an [`ActionPolicy`]:
//!
//! - [`UniformPolicy`]: uniform random choice (the default)
//! - Custom policies can be passed to [`MctsSearch::with_policy`]

pub mod config;
pub mod node;
pub mod policy;
pub mod search;
pub mod tree;

// Re-export main types
pub use config::MctsConfig;
pub use node::{NodeId, SearchNode};
pub use policy::{ActionPolicy, UniformPolicy};
pub use search::{run_mcts, MctsSearch, SearchResult};
pub use tree::{GameNode, SearchTree, TreeStats};
