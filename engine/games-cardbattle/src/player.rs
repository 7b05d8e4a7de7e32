//! Per-player resources: mana, health, deck, hand and board.

use std::collections::VecDeque;

use crate::card::Card;
use crate::{MAX_BOARD_SIZE, MAX_HAND_SIZE, MAX_MANA};

/// Everything one player owns.
///
/// The deck is consumed from the front. Hand and board sizes never exceed
/// [`MAX_HAND_SIZE`] and [`MAX_BOARD_SIZE`].
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerResources {
    pub(crate) mana: u32,
    pub(crate) max_mana: u32,
    pub(crate) health: i32,
    pub(crate) deck: VecDeque<Card>,
    pub(crate) hand: Vec<Card>,
    pub(crate) board: Vec<Card>,
}

impl PlayerResources {
    /// Create a player with empty deck, hand and board.
    /// Current and max mana both start at `mana`.
    pub fn new(health: i32, mana: u32) -> Self {
        let mana = mana.min(MAX_MANA);
        Self {
            mana,
            max_mana: mana,
            health,
            deck: VecDeque::new(),
            hand: Vec::new(),
            board: Vec::new(),
        }
    }

    /// Builder: set the ordered draw sequence.
    pub fn with_deck(mut self, deck: Vec<Card>) -> Self {
        self.deck = deck.into();
        self
    }

    /// Builder: set the hand. Cards past [`MAX_HAND_SIZE`] are dropped.
    pub fn with_hand(mut self, mut hand: Vec<Card>) -> Self {
        hand.truncate(MAX_HAND_SIZE);
        self.hand = hand;
        self
    }

    /// Builder: set the board. Cards past [`MAX_BOARD_SIZE`] are dropped.
    pub fn with_board(mut self, mut board: Vec<Card>) -> Self {
        board.truncate(MAX_BOARD_SIZE);
        self.board = board;
        self
    }

    /// Builder: set current mana, leaving max mana at least as high.
    pub fn with_mana(mut self, mana: u32) -> Self {
        let mana = mana.min(MAX_MANA);
        self.mana = mana;
        self.max_mana = self.max_mana.max(mana);
        self
    }

    #[inline]
    pub fn mana(&self) -> u32 {
        self.mana
    }

    #[inline]
    pub fn max_mana(&self) -> u32 {
        self.max_mana
    }

    #[inline]
    pub fn health(&self) -> i32 {
        self.health
    }

    pub fn set_health(&mut self, health: i32) {
        self.health = health;
    }

    #[inline]
    pub fn deck(&self) -> &VecDeque<Card> {
        &self.deck
    }

    #[inline]
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    #[inline]
    pub fn board(&self) -> &[Card] {
        &self.board
    }

    #[inline]
    pub fn is_dead(&self) -> bool {
        self.health <= 0
    }

    #[inline]
    pub fn board_has_room(&self) -> bool {
        self.board.len() < MAX_BOARD_SIZE
    }

    /// Draw the front card of the deck into the hand.
    ///
    /// Returns false when the deck is empty (hand untouched) or when the hand
    /// is full, in which case the drawn card is burned.
    pub fn draw_card(&mut self) -> bool {
        let Some(card) = self.deck.pop_front() else {
            return false;
        };
        if self.hand.len() >= MAX_HAND_SIZE {
            return false;
        }
        self.hand.push(card);
        true
    }

    /// Grow max mana by one crystal (capped) and refill.
    pub(crate) fn refresh_mana(&mut self) {
        self.max_mana = (self.max_mana + 1).min(MAX_MANA);
        self.mana = self.max_mana;
    }

    /// Let every unit on the board attack again.
    pub(crate) fn ready_board(&mut self) {
        for card in &mut self.board {
            card.can_attack = true;
        }
    }

    /// Deal damage to the board unit at `index`, removing it if it dies.
    /// Returns false when `index` is out of range.
    pub(crate) fn damage_minion(&mut self, index: usize, amount: i32) -> bool {
        let Some(card) = self.board.get_mut(index) else {
            return false;
        };
        card.health -= amount;
        if card.health <= 0 {
            self.board.remove(index);
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filler(n: usize) -> Vec<Card> {
        (0..n).map(|i| Card::minion(format!("Minion {i}"), 1, 1, 1)).collect()
    }

    #[test]
    fn test_draw_takes_front_of_deck() {
        let deck = filler(3);
        let first = deck[0].id;
        let mut player = PlayerResources::new(30, 1).with_deck(deck);

        assert!(player.draw_card());
        assert_eq!(player.hand().len(), 1);
        assert_eq!(player.hand()[0].id, first);
        assert_eq!(player.deck().len(), 2);
    }

    #[test]
    fn test_draw_from_empty_deck_fails() {
        let mut player = PlayerResources::new(30, 1).with_hand(filler(2));
        let hand_before = player.hand().to_vec();

        assert!(!player.draw_card());
        assert_eq!(player.hand(), hand_before.as_slice());
    }

    #[test]
    fn test_draw_into_full_hand_burns_card() {
        let mut player = PlayerResources::new(30, 1)
            .with_hand(filler(MAX_HAND_SIZE))
            .with_deck(filler(2));

        assert!(!player.draw_card());
        assert_eq!(player.hand().len(), MAX_HAND_SIZE);
        assert_eq!(player.deck().len(), 1);
    }

    #[test]
    fn test_builders_respect_limits() {
        let player = PlayerResources::new(30, 1)
            .with_hand(filler(15))
            .with_board(filler(9));
        assert_eq!(player.hand().len(), MAX_HAND_SIZE);
        assert_eq!(player.board().len(), MAX_BOARD_SIZE);
        assert!(!player.board_has_room());
    }

    #[test]
    fn test_with_mana_caps_at_ten() {
        let player = PlayerResources::new(30, 2).with_mana(25);
        assert_eq!((player.mana(), player.max_mana()), (10, 10));

        let player = PlayerResources::new(30, 6).with_mana(3);
        assert_eq!((player.mana(), player.max_mana()), (3, 6));
    }

    #[test]
    fn test_refresh_mana_caps_at_ten() {
        let mut player = PlayerResources::new(30, 9);
        player.mana = 0;
        player.refresh_mana();
        assert_eq!((player.mana(), player.max_mana()), (10, 10));
        player.refresh_mana();
        assert_eq!((player.mana(), player.max_mana()), (10, 10));
    }

    #[test]
    fn test_damage_minion_removes_dead_unit() {
        let mut player = PlayerResources::new(30, 1).with_board(vec![
            Card::minion("A", 1, 1, 2),
            Card::minion("B", 1, 1, 5),
        ]);

        assert!(player.damage_minion(0, 1));
        assert_eq!(player.board()[0].health, 1);
        assert!(player.damage_minion(0, 3));
        assert_eq!(player.board().len(), 1);
        assert_eq!(player.board()[0].name, "B");
        assert!(!player.damage_minion(4, 1));
    }
}
