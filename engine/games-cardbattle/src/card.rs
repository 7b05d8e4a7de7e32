//! Card definitions.

use std::sync::atomic::{AtomicU32, Ordering};

static NEXT_CARD_ID: AtomicU32 = AtomicU32::new(1);

/// Instance identity of a card. Copies of a game state share ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CardId(pub u32);

impl CardId {
    /// Allocate a fresh id, unique within the process.
    pub fn next() -> Self {
        CardId(NEXT_CARD_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// Card category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardType {
    Minion,
    Spell,
    Weapon,
}

/// A single card, in a deck, a hand or on a board.
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub id: CardId,
    pub name: String,
    /// Mana cost to play
    pub cost: u32,
    pub attack: i32,
    pub health: i32,
    pub card_type: CardType,
    /// Whether the card may still attack this turn (board units only)
    pub can_attack: bool,
}

impl Card {
    /// Create a minion card. Minions enter play unable to attack.
    pub fn minion(name: impl Into<String>, cost: u32, attack: i32, health: i32) -> Self {
        Self {
            id: CardId::next(),
            name: name.into(),
            cost,
            attack,
            health,
            card_type: CardType::Minion,
            can_attack: false,
        }
    }

    /// Create a spell card with no body.
    pub fn spell(name: impl Into<String>, cost: u32) -> Self {
        Self {
            id: CardId::next(),
            name: name.into(),
            cost,
            attack: 0,
            health: 0,
            card_type: CardType::Spell,
            can_attack: false,
        }
    }

    /// Create a weapon card.
    pub fn weapon(name: impl Into<String>, cost: u32, attack: i32, durability: i32) -> Self {
        Self {
            id: CardId::next(),
            name: name.into(),
            cost,
            attack,
            health: durability,
            card_type: CardType::Weapon,
            can_attack: false,
        }
    }

    /// A card that lands on the board when played: positive attack and health.
    #[inline]
    pub fn is_unit_like(&self) -> bool {
        self.attack > 0 && self.health > 0
    }

    /// Builder: mark the card ready to attack.
    pub fn ready(mut self) -> Self {
        self.can_attack = true;
        self
    }
}
