//! MCTS tree structure with arena allocation.
//!
//! Nodes are stored in a contiguous Vec and referenced by NodeId indices, so
//! a child's link to its parent is a plain index rather than a reference.

use engine_core::Game;

use crate::node::{NodeId, SearchNode};

/// Node type stored in a tree over game `G`.
pub type GameNode<G> = SearchNode<G, <G as Game>::Action>;

/// MCTS tree with arena-based node storage.
#[derive(Debug)]
pub struct SearchTree<G: Game> {
    /// Arena storing all nodes
    nodes: Vec<GameNode<G>>,

    /// Root node index (always 0)
    root: NodeId,
}

impl<G: Game> SearchTree<G> {
    /// Create a new tree whose root owns `root_state`.
    pub fn new(root_state: G) -> Self {
        Self {
            nodes: vec![SearchNode::new_root(root_state)],
            root: NodeId(0),
        }
    }

    /// Get the root node ID.
    #[inline]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Get a reference to a node by ID.
    #[inline]
    pub fn get(&self, id: NodeId) -> &GameNode<G> {
        &self.nodes[id.0 as usize]
    }

    /// Get a mutable reference to a node by ID.
    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> &mut GameNode<G> {
        &mut self.nodes[id.0 as usize]
    }

    /// Get the total number of nodes in the tree.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if tree is empty (never true after construction).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Get the arena slice for read access.
    #[inline]
    pub fn arena(&self) -> &[GameNode<G>] {
        &self.nodes
    }

    /// Attach a new child under `parent_id` and return its ID.
    pub fn add_child(&mut self, parent_id: NodeId, action: G::Action, state: G) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(SearchNode::new_child(parent_id, action, state));
        self.get_mut(parent_id).children.push(id);
        id
    }

    /// Whether any child of `node_id` was reached by `action`.
    fn has_child_for(&self, node_id: NodeId, action: &G::Action) -> bool {
        self.get(node_id)
            .children
            .iter()
            .any(|&child| self.get(child).action.as_ref() == Some(action))
    }

    /// Legal actions at `node_id` that no child has explored yet, in
    /// enumeration order.
    pub fn untried_actions(&self, node_id: NodeId) -> Vec<G::Action> {
        self.get(node_id)
            .state
            .legal_actions()
            .into_iter()
            .filter(|action| !self.has_child_for(node_id, action))
            .collect()
    }

    /// True when every currently legal action has a matching child.
    /// A node with no legal actions is trivially fully expanded.
    pub fn is_fully_expanded(&self, node_id: NodeId) -> bool {
        self.get(node_id)
            .state
            .legal_actions()
            .iter()
            .all(|action| self.has_child_for(node_id, action))
    }

    /// Pick the child to descend into.
    ///
    /// The first unvisited child wins outright. Otherwise the child with the
    /// highest UCT score is returned, earliest child on ties. `None` if the
    /// node has no children.
    pub fn best_child(&self, node_id: NodeId, exploration_weight: f64) -> Option<NodeId> {
        let node = self.get(node_id);
        let mut best: Option<NodeId> = None;
        let mut best_score = f64::NEG_INFINITY;

        for &child_id in &node.children {
            let child = self.get(child_id);
            if child.visits == 0 {
                return Some(child_id);
            }
            let score = child.uct_score(node.visits, exploration_weight);
            if score > best_score || best.is_none() {
                best_score = score;
                best = Some(child_id);
            }
        }

        best
    }

    /// Descend from the root while the current node has children and is
    /// fully expanded.
    pub fn select(&self, exploration_weight: f64) -> NodeId {
        let mut current = self.root;

        while self.get(current).has_children() && self.is_fully_expanded(current) {
            match self.best_child(current, exploration_weight) {
                Some(child) => current = child,
                None => break,
            }
        }

        current
    }

    /// Add one visit and `result` to every node from `leaf_id` up to the
    /// root. The result is the same at every depth.
    pub fn backpropagate(&mut self, leaf_id: NodeId, result: f64) {
        let mut current_id = leaf_id;

        while current_id.is_some() {
            let node = self.get_mut(current_id);
            node.visits += 1;
            node.wins += result;
            current_id = node.parent;
        }
    }

    /// Action of the most visited root child, first child on ties.
    /// `None` if the root was never expanded.
    pub fn best_action(&self) -> Option<G::Action> {
        let root = self.get(self.root);
        let mut best: Option<&GameNode<G>> = None;

        for &child_id in &root.children {
            let child = self.get(child_id);
            if best.map_or(true, |b| child.visits > b.visits) {
                best = Some(child);
            }
        }

        best.and_then(|child| child.action.clone())
    }

    /// Get statistics about the tree for debugging.
    pub fn stats(&self) -> TreeStats {
        let root = self.get(self.root);
        TreeStats {
            total_nodes: self.nodes.len(),
            root_visits: root.visits,
            root_win_rate: root.win_rate(),
            max_depth: self.compute_max_depth(self.root, 0),
        }
    }

    fn compute_max_depth(&self, node_id: NodeId, current_depth: u32) -> u32 {
        let node = self.get(node_id);
        if node.children.is_empty() {
            return current_depth;
        }

        node.children
            .iter()
            .map(|id| self.compute_max_depth(*id, current_depth + 1))
            .max()
            .unwrap_or(current_depth)
    }
}

/// Statistics about an MCTS tree.
#[derive(Debug, Clone)]
pub struct TreeStats {
    pub total_nodes: usize,
    pub root_visits: u32,
    pub root_win_rate: f64,
    pub max_depth: u32,
}
