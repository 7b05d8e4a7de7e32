//! Built-in card set: mage spells and a pair of neutral minions.

use std::sync::Arc;

use rand::Rng;

use crate::card::Card;
use crate::effects::{EffectRegistry, SpellEffect};
use crate::state::GameState;

pub const ARCANE_EXPLOSION: &str = "Arcane Explosion";
pub const ARCANE_INTELLECT: &str = "Arcane Intellect";
pub const ARCANE_MISSILES: &str = "Arcane Missiles";
pub const FIREBALL: &str = "Fireball";

pub(crate) fn register_spells(registry: &mut EffectRegistry) {
    registry.register(ARCANE_EXPLOSION, Arc::new(ArcaneExplosion));
    registry.register(ARCANE_INTELLECT, Arc::new(ArcaneIntellect));
    registry.register(ARCANE_MISSILES, Arc::new(ArcaneMissiles));
    registry.register(FIREBALL, Arc::new(Fireball));
}

/// 2 mana: deal 1 damage to all enemy minions.
pub fn arcane_explosion() -> Card {
    Card::spell(ARCANE_EXPLOSION, 2)
}

/// 3 mana: draw 2 cards.
pub fn arcane_intellect() -> Card {
    Card::spell(ARCANE_INTELLECT, 3)
}

/// 1 mana: 3 missiles of 1 damage at random enemies.
pub fn arcane_missiles() -> Card {
    Card::spell(ARCANE_MISSILES, 1)
}

/// 4 mana: deal 6 damage to a target.
pub fn fireball() -> Card {
    Card::spell(FIREBALL, 4)
}

pub fn bloodfen_raptor() -> Card {
    Card::minion("Bloodfen Raptor", 2, 3, 2)
}

pub fn boulderfist_ogre() -> Card {
    Card::minion("Boulderfist Ogre", 6, 6, 7)
}

#[derive(Debug)]
struct ArcaneExplosion;

impl SpellEffect for ArcaneExplosion {
    fn resolve(&self, state: &mut GameState, _target: Option<usize>) -> bool {
        state.damage_all_enemy_minions(1);
        true
    }
}

#[derive(Debug)]
struct ArcaneIntellect;

impl SpellEffect for ArcaneIntellect {
    fn resolve(&self, state: &mut GameState, _target: Option<usize>) -> bool {
        for _ in 0..2 {
            if !state.draw_for_active() {
                break;
            }
        }
        true
    }
}

#[derive(Debug)]
struct ArcaneMissiles;

impl SpellEffect for ArcaneMissiles {
    fn resolve(&self, state: &mut GameState, _target: Option<usize>) -> bool {
        for _ in 0..3 {
            // Slot `len` is the hero.
            let minions = state.opponent().board().len();
            let pick = state.rng_mut().gen_range(0..=minions);
            if pick == minions {
                state.damage_enemy_hero(1);
            } else {
                state.damage_enemy_minion(pick, 1);
            }
        }
        true
    }
}

#[derive(Debug)]
struct Fireball;

impl SpellEffect for Fireball {
    fn resolve(&self, state: &mut GameState, target: Option<usize>) -> bool {
        match target {
            None => {
                state.damage_enemy_hero(6);
                true
            }
            Some(index) => state.damage_enemy_minion(index, 6),
        }
    }
}
