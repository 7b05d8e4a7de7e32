//! MCTS-based policy
//!
//! Builds a fresh search tree from a copy of the live game for every
//! decision and plays the most visited root action.

use games_cardbattle::{Action, GameState};
use mcts::{MctsConfig, MctsSearch};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use tracing::debug;

use crate::policy::Policy;

/// MCTS-based policy with uniform random rollouts
#[derive(Debug)]
pub struct MctsPolicy {
    /// MCTS configuration
    config: MctsConfig,
    /// RNG for expansion and rollouts
    rng: ChaCha20Rng,
}

impl MctsPolicy {
    /// Create with a specific seed for determinism
    pub fn with_seed(config: MctsConfig, seed: u64) -> Self {
        Self {
            config,
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }
}

impl Policy for MctsPolicy {
    fn name(&self) -> &'static str {
        "mcts"
    }

    fn select_action(&mut self, state: &GameState) -> Option<Action> {
        let mut search = MctsSearch::new(state, self.config.clone());
        let result = search.search(&mut self.rng);

        debug!(
            iterations = result.iterations,
            tree_size = result.tree_size,
            visits = result.action_visits,
            win_rate = format!("{:.3}", result.action_win_rate),
            action = ?result.action,
            "MCTS decision"
        );

        result.action
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use games_cardbattle::{Card, PlayerResources, Target};

    #[test]
    fn test_mcts_policy_plays_only_card() {
        let one = PlayerResources::new(30, 5).with_hand(vec![Card::minion("Raptor", 2, 3, 2)]);
        let state = GameState::from_players(one, PlayerResources::new(30, 1));

        let mut policy = MctsPolicy::with_seed(MctsConfig::for_testing(), 42);
        assert_eq!(policy.select_action(&state), Some(Action::Play(0)));
    }

    #[test]
    fn test_mcts_policy_ends_turn_without_actions() {
        let state =
            GameState::from_players(PlayerResources::new(30, 0), PlayerResources::new(30, 0));
        let mut policy = MctsPolicy::with_seed(MctsConfig::for_testing(), 42);
        assert_eq!(policy.select_action(&state), None);
    }

    #[test]
    fn test_mcts_policy_takes_lethal() {
        let one = PlayerResources::new(1, 1)
            .with_board(vec![Card::minion("Raider", 1, 5, 1).ready()]);
        let two = PlayerResources::new(5, 1).with_board(vec![Card::minion("Giant", 10, 10, 10)]);
        let state = GameState::from_players(one, two);

        let mut policy = MctsPolicy::with_seed(MctsConfig::for_testing().with_iterations(200), 7);
        assert_eq!(
            policy.select_action(&state),
            Some(Action::Attack {
                attacker: 0,
                target: Target::Hero
            })
        );
    }

    #[test]
    fn test_live_state_untouched() {
        let one = PlayerResources::new(30, 5).with_hand(vec![Card::minion("Raptor", 2, 3, 2)]);
        let state = GameState::from_players(one, PlayerResources::new(30, 1));

        let mut policy = MctsPolicy::with_seed(MctsConfig::for_testing(), 1);
        policy.select_action(&state);

        assert_eq!(state.active().hand().len(), 1);
        assert_eq!(state.turn(), 1);
    }
}
