//! Deck factory.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::card::Card;

/// Lowest and highest mana cost a generated card can have.
pub const MIN_COST: i32 = 1;
pub const MAX_COST: i32 = 10;

/// Generate `size` random minions following the mana curve rule, shuffled.
///
/// For a card of cost `c`, attack is drawn from `[c - 2, c + 2]` and health
/// from `[c - 3, c + 3]`. Low-cost cards can therefore come out with zero or
/// negative stats; such cards are never offered as plays.
pub fn generate_deck<R: Rng>(size: usize, rng: &mut R) -> Vec<Card> {
    let mut deck: Vec<Card> = (0..size)
        .map(|i| {
            let cost = rng.gen_range(MIN_COST..=MAX_COST);
            let attack = rng.gen_range(cost - 2..=cost + 2);
            let health = rng.gen_range(cost - 3..=cost + 3);
            Card::minion(format!("Minion {i}"), cost as u32, attack, health)
        })
        .collect();

    deck.shuffle(rng);
    deck
}
