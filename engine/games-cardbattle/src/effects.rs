//! Spell effect registry
//!
//! Cards that do not land on the board resolve through a [`SpellEffect`]
//! looked up by card name. The registry is shared between a game state and
//! all of its clones.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use once_cell::sync::Lazy;
use tracing::warn;

use crate::catalog;
use crate::state::GameState;

/// Custom behavior for a non-unit card.
pub trait SpellEffect: Send + Sync {
    /// Resolve the effect for the active player.
    ///
    /// `target` is an index into the opponent's board, or `None` for the
    /// opponent hero or untargeted effects. Return false without touching
    /// `state` when the effect cannot resolve.
    fn resolve(&self, state: &mut GameState, target: Option<usize>) -> bool;
}

/// Name-keyed map of spell effects.
#[derive(Default, Clone)]
pub struct EffectRegistry {
    effects: HashMap<String, Arc<dyn SpellEffect>>,
}

static DEFAULT_REGISTRY: Lazy<Arc<EffectRegistry>> =
    Lazy::new(|| Arc::new(EffectRegistry::with_catalog()));

/// Registry holding the built-in card catalog, shared process-wide.
pub fn default_registry() -> Arc<EffectRegistry> {
    Arc::clone(&DEFAULT_REGISTRY)
}

impl EffectRegistry {
    /// Empty registry: every spell fizzles.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the built-in spells registered.
    pub fn with_catalog() -> Self {
        let mut registry = Self::new();
        catalog::register_spells(&mut registry);
        registry
    }

    /// Register an effect for a card name, replacing any previous one.
    pub fn register(&mut self, card_name: impl Into<String>, effect: Arc<dyn SpellEffect>) {
        let card_name = card_name.into();
        if self.effects.contains_key(&card_name) {
            warn!(card = %card_name, "Overriding existing spell effect");
        }
        self.effects.insert(card_name, effect);
    }

    pub fn get(&self, card_name: &str) -> Option<&Arc<dyn SpellEffect>> {
        self.effects.get(card_name)
    }

    pub fn contains(&self, card_name: &str) -> bool {
        self.effects.contains_key(card_name)
    }

    pub fn len(&self) -> usize {
        self.effects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }

    /// Registered card names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.effects.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl fmt::Debug for EffectRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EffectRegistry")
            .field("cards", &self.names())
            .finish()
    }
}
