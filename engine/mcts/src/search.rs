//! MCTS search implementation.
//!
//! Implements the core MCTS algorithm:
//! 1. Selection: descend with UCT while nodes are fully expanded
//! 2. Expansion: add one child for an untried action
//! 3. Simulation: bounded random playout from the new node
//! 4. Backpropagation: add the outcome to every ancestor

use engine_core::Game;
use rand_chacha::ChaCha20Rng;
use tracing::{debug, trace};

use crate::config::MctsConfig;
use crate::node::NodeId;
use crate::policy::{ActionPolicy, UniformPolicy};
use crate::tree::SearchTree;

/// Result of a complete MCTS search.
#[derive(Debug, Clone)]
pub struct SearchResult<A> {
    /// Most visited root action, `None` when the root has no legal action
    pub action: Option<A>,

    /// Visits of the chosen child (0 when there is no action)
    pub action_visits: u32,

    /// Observed win rate of the chosen child
    pub action_win_rate: f64,

    /// Number of iterations performed
    pub iterations: u32,

    /// Total nodes in the tree after the search
    pub tree_size: usize,
}

/// MCTS search state over one decision.
///
/// The root state is cloned once at construction. The tree is meant to be
/// dropped after the decision is made.
pub struct MctsSearch<G: Game, P = UniformPolicy> {
    tree: SearchTree<G>,
    config: MctsConfig,
    policy: P,
}

impl<G: Game> MctsSearch<G> {
    /// Create a new search rooted at a copy of `state`, using uniform random
    /// expansion and rollouts.
    pub fn new(state: &G, config: MctsConfig) -> Self {
        Self::with_policy(state, config, UniformPolicy)
    }
}

impl<G: Game, P: ActionPolicy<G>> MctsSearch<G, P> {
    /// Create a new search with a custom expansion and rollout policy.
    pub fn with_policy(state: &G, config: MctsConfig, policy: P) -> Self {
        Self {
            tree: SearchTree::new(state.clone()),
            config,
            policy,
        }
    }

    /// Descend from the root to the node the next iteration works on.
    pub fn select(&self) -> NodeId {
        self.tree.select(self.config.exploration_weight)
    }

    /// UCT choice among the children of `node_id`.
    pub fn best_child(&self, node_id: NodeId) -> Option<NodeId> {
        self.tree.best_child(node_id, self.config.exploration_weight)
    }

    /// Add a child for one untried action of `node_id` and return it.
    ///
    /// Returns `node_id` itself when every legal action already has a child.
    pub fn expand(&mut self, node_id: NodeId, rng: &mut ChaCha20Rng) -> NodeId {
        let untried = self.tree.untried_actions(node_id);
        let node = self.tree.get(node_id);

        let Some(action) = self
            .policy
            .choose(&node.state, &untried, rng)
            .and_then(|idx| untried.get(idx))
        else {
            return node_id;
        };

        let mut state = node.state.clone();
        if !state.apply(action) {
            // Keep the child so the action counts as tried.
            trace!(parent = node_id.0, ?action, "Expanded action was rejected");
        }

        self.tree.add_child(node_id, action.clone(), state)
    }

    /// Play a bounded random game from a copy of the node's state and return
    /// the rollout reward of where it stopped.
    pub fn simulate(&self, node_id: NodeId, rng: &mut ChaCha20Rng) -> f64 {
        let mut state = self.tree.get(node_id).state.clone();

        for _ in 0..self.config.rollout_depth {
            if state.is_terminal() {
                break;
            }

            let actions = state.legal_actions();
            if let Some(action) = self
                .policy
                .choose(&state, &actions, rng)
                .and_then(|idx| actions.get(idx))
            {
                state.apply(action);
            }

            state.end_turn();
        }

        state.rollout_reward()
    }

    /// Add one visit and `result` to `node_id` and all of its ancestors.
    pub fn backpropagate(&mut self, node_id: NodeId, result: f64) {
        self.tree.backpropagate(node_id, result);
    }

    /// Run `iterations` select/expand/simulate/backpropagate cycles.
    pub fn run(&mut self, iterations: u32, rng: &mut ChaCha20Rng) {
        for iteration in 0..iterations {
            let mut node = self.select();
            if !self.tree.is_fully_expanded(node) {
                node = self.expand(node, rng);
            }

            let result = self.simulate(node, rng);
            self.backpropagate(node, result);

            trace!(
                iteration,
                node = node.0,
                result,
                "MCTS iteration complete"
            );
        }

        let stats = self.tree.stats();
        debug!(
            iterations,
            nodes = stats.total_nodes,
            max_depth = stats.max_depth,
            root_visits = stats.root_visits,
            "MCTS search finished"
        );
    }

    /// Run the configured number of iterations and summarize the outcome.
    pub fn search(&mut self, rng: &mut ChaCha20Rng) -> SearchResult<G::Action> {
        let iterations = self.config.iterations;
        self.run(iterations, rng);

        let chosen = self.best_child_by_visits();
        let (action_visits, action_win_rate) = chosen
            .map(|id| {
                let node = self.tree.get(id);
                (node.visits, node.win_rate())
            })
            .unwrap_or((0, 0.0));

        SearchResult {
            action: self.best_action(),
            action_visits,
            action_win_rate,
            iterations,
            tree_size: self.tree.len(),
        }
    }

    /// Action of the most visited root child, or `None` if nothing was
    /// expanded.
    pub fn best_action(&self) -> Option<G::Action> {
        self.tree.best_action()
    }

    fn best_child_by_visits(&self) -> Option<NodeId> {
        let root = self.tree.get(self.tree.root());
        let mut best: Option<NodeId> = None;
        for &id in &root.children {
            if best.map_or(true, |b| self.tree.get(id).visits > self.tree.get(b).visits) {
                best = Some(id);
            }
        }
        best
    }

    /// Get the tree (for debugging/analysis).
    pub fn tree(&self) -> &SearchTree<G> {
        &self.tree
    }

    pub fn config(&self) -> &MctsConfig {
        &self.config
    }
}

/// Convenience function to run a single uniform MCTS search from `state`.
pub fn run_mcts<G: Game>(
    state: &G,
    config: MctsConfig,
    rng: &mut ChaCha20Rng,
) -> SearchResult<G::Action> {
    let mut search = MctsSearch::new(state, config);
    search.search(rng)
}
