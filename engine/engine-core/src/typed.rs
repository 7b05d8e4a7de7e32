//! Typed Game trait describing the minimal contract a search needs
//!
//! A game exposes its legal actions, applies them in place, reports whether it
//! is over, switches turns and can be deep-cloned. Nothing else about the game
//! is visible to the search.

use std::fmt::Debug;

/// Main trait for game implementations
///
/// `Clone` must produce a fully independent deep copy: mutating the clone never
/// changes the original. The search clones states freely and relies on this.
///
/// # Example
///
/// ```rust
/// use engine_core::Game;
///
/// #[derive(Debug, Clone)]
/// struct Countdown {
///     remaining: u32,
/// }
///
/// impl Game for Countdown {
///     type Action = u32;
///
///     fn legal_actions(&self) -> Vec<u32> {
///         (1..=self.remaining.min(2)).collect()
///     }
///
///     fn apply(&mut self, action: &u32) -> bool {
///         if *action == 0 || *action > self.remaining.min(2) {
///             return false;
///         }
///         self.remaining -= action;
///         true
///     }
///
///     fn is_terminal(&self) -> bool {
///         self.remaining == 0
///     }
///
///     fn end_turn(&mut self) {}
///
///     fn rollout_reward(&self) -> f64 {
///         if self.remaining == 0 { 1.0 } else { 0.0 }
///     }
/// }
///
/// let mut game = Countdown { remaining: 3 };
/// assert_eq!(game.legal_actions(), vec![1, 2]);
/// assert!(game.apply(&2));
/// assert!(!game.apply(&2));
/// ```
pub trait Game: Clone + Debug {
    /// Action type. Equality must be structural: two actions built from the
    /// same variant and indices are equal.
    type Action: Clone + PartialEq + Debug;

    /// Enumerate every legal action for the active player, in a stable order.
    fn legal_actions(&self) -> Vec<Self::Action>;

    /// Apply an action in place.
    ///
    /// Returns false and leaves the state untouched when the action is not
    /// valid for this state.
    fn apply(&mut self, action: &Self::Action) -> bool;

    /// Whether the game is over.
    fn is_terminal(&self) -> bool;

    /// Hand control to the other player.
    fn end_turn(&mut self);

    /// Scalar outcome of a finished or truncated playout.
    ///
    /// The value is always read from one fixed point of view; it does not
    /// depend on whose turn it is.
    fn rollout_reward(&self) -> f64;
}
