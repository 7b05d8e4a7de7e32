//! Action selection used during expansion and rollouts.
//!
//! The search never filters or ranks actions itself. Whatever picks an untried
//! action to expand, or the next move of a random playout, goes through an
//! [`ActionPolicy`]. The default [`UniformPolicy`] picks uniformly at random.

use engine_core::Game;
use rand::Rng;
use rand_chacha::ChaCha20Rng;

/// Chooses one action out of a candidate list.
///
/// Implementations could be:
/// - UniformPolicy: uniform random choice (the default)
/// - Heuristic policies that prefer favorable trades or surviving minions
pub trait ActionPolicy<G: Game> {
    /// Pick the index of one of `actions`, available in `state`.
    ///
    /// Returns `None` only when `actions` is empty. A returned index must be
    /// in range.
    fn choose(&self, state: &G, actions: &[G::Action], rng: &mut ChaCha20Rng) -> Option<usize>;
}

/// Uniform random choice over the candidates.
#[derive(Debug, Clone, Copy, Default)]
pub struct UniformPolicy;

impl UniformPolicy {
    pub fn new() -> Self {
        Self
    }
}

impl<G: Game> ActionPolicy<G> for UniformPolicy {
    fn choose(&self, _state: &G, actions: &[G::Action], rng: &mut ChaCha20Rng) -> Option<usize> {
        if actions.is_empty() {
            None
        } else {
            Some(rng.gen_range(0..actions.len()))
        }
    }
}
