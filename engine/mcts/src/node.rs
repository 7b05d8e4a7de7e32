//! MCTS tree node representation.
//!
//! Each node owns the game state reached by taking `action` from the parent.
//! The state never changes after the node is created.

/// Index into the node arena. Using a newtype for type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub u32);

impl NodeId {
    pub const NONE: NodeId = NodeId(u32::MAX);

    pub fn is_none(self) -> bool {
        self == Self::NONE
    }

    pub fn is_some(self) -> bool {
        !self.is_none()
    }
}

/// A node in the MCTS tree.
#[derive(Debug, Clone)]
pub struct SearchNode<S, A> {
    /// Parent node index (NONE for root)
    pub parent: NodeId,

    /// Action that led to this node from parent (None for root)
    pub action: Option<A>,

    /// Game state snapshot at this node
    pub state: S,

    /// Number of times this node has been visited
    pub visits: u32,

    /// Sum of rollout results backpropagated through this node
    pub wins: f64,

    /// Children in expansion order
    pub children: Vec<NodeId>,
}

impl<S, A> SearchNode<S, A> {
    /// Create a new root node.
    pub fn new_root(state: S) -> Self {
        Self {
            parent: NodeId::NONE,
            action: None,
            state,
            visits: 0,
            wins: 0.0,
            children: Vec::new(),
        }
    }

    /// Create a new child node.
    pub fn new_child(parent: NodeId, action: A, state: S) -> Self {
        Self {
            parent,
            action: Some(action),
            state,
            visits: 0,
            wins: 0.0,
            children: Vec::new(),
        }
    }

    /// Observed win rate, 0.0 if never visited.
    #[inline]
    pub fn win_rate(&self) -> f64 {
        if self.visits == 0 {
            0.0
        } else {
            self.wins / self.visits as f64
        }
    }

    /// UCT score of this node as a child of a parent with `parent_visits`.
    ///
    /// `wins / visits + w * sqrt(2 * sqrt(parent_visits) / visits)`
    ///
    /// Only meaningful for visited nodes; selection handles unvisited
    /// children before scoring.
    #[inline]
    pub fn uct_score(&self, parent_visits: u32, exploration_weight: f64) -> f64 {
        let visits = self.visits as f64;
        let exploration = (2.0 * (parent_visits as f64).sqrt() / visits).sqrt();
        self.wins / visits + exploration_weight * exploration
    }

    #[inline]
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    #[inline]
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}
