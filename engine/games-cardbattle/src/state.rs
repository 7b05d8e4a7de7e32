//! Game state and transitions.

use std::sync::Arc;

use engine_core::Game;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use tracing::trace;

use crate::deck::generate_deck;
use crate::effects::{default_registry, EffectRegistry};
use crate::player::PlayerResources;

/// Attack target: an enemy board unit or the enemy hero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    Minion(usize),
    Hero,
}

/// A player decision. Equality is structural over the variant and indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Play the card at this hand index
    Play(usize),
    /// Attack with the board unit at `attacker`
    Attack { attacker: usize, target: Target },
}

/// Starting conditions for a fresh game.
#[derive(Debug, Clone, PartialEq)]
pub struct GameSetup {
    pub starting_health: i32,
    pub starting_mana: u32,
    pub deck_size: usize,
    pub first_player_opening_hand: usize,
    pub second_player_opening_hand: usize,
}

impl Default for GameSetup {
    fn default() -> Self {
        Self {
            starting_health: 30,
            starting_mana: 1,
            deck_size: 30,
            first_player_opening_hand: 3,
            second_player_opening_hand: 4,
        }
    }
}

/// Complete state of a two-player card battle.
///
/// Cloning produces an independent copy of both players and the RNG; the spell
/// registry is immutable and shared.
#[derive(Debug, Clone)]
pub struct GameState {
    players: [PlayerResources; 2],
    /// Index of the player whose turn it is
    active: usize,
    turn: u32,
    effects: Arc<EffectRegistry>,
    /// Randomness for card effects
    rng: ChaCha20Rng,
}

impl GameState {
    /// Deal a new game: two generated decks, opening hands drawn.
    pub fn new(setup: &GameSetup, seed: u64) -> Self {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let mut one = PlayerResources::new(setup.starting_health, setup.starting_mana)
            .with_deck(generate_deck(setup.deck_size, &mut rng));
        let mut two = PlayerResources::new(setup.starting_health, setup.starting_mana)
            .with_deck(generate_deck(setup.deck_size, &mut rng));

        for _ in 0..setup.first_player_opening_hand {
            one.draw_card();
        }
        for _ in 0..setup.second_player_opening_hand {
            two.draw_card();
        }

        Self {
            players: [one, two],
            active: 0,
            turn: 1,
            effects: default_registry(),
            rng,
        }
    }

    /// Build a state from explicit players. Player one is active, turn 1.
    pub fn from_players(one: PlayerResources, two: PlayerResources) -> Self {
        Self {
            players: [one, two],
            active: 0,
            turn: 1,
            effects: default_registry(),
            rng: ChaCha20Rng::seed_from_u64(0),
        }
    }

    /// Builder: use a custom spell registry.
    pub fn with_effects(mut self, effects: Arc<EffectRegistry>) -> Self {
        self.effects = effects;
        self
    }

    /// Builder: reseed the effect RNG.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = ChaCha20Rng::seed_from_u64(seed);
        self
    }

    #[inline]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// 0 for player one, 1 for player two.
    #[inline]
    pub fn active_index(&self) -> usize {
        self.active
    }

    #[inline]
    pub fn active(&self) -> &PlayerResources {
        &self.players[self.active]
    }

    #[inline]
    pub fn opponent(&self) -> &PlayerResources {
        &self.players[1 - self.active]
    }

    #[inline]
    pub fn player_one(&self) -> &PlayerResources {
        &self.players[0]
    }

    #[inline]
    pub fn player_two(&self) -> &PlayerResources {
        &self.players[1]
    }

    pub fn player_one_mut(&mut self) -> &mut PlayerResources {
        &mut self.players[0]
    }

    pub fn player_two_mut(&mut self) -> &mut PlayerResources {
        &mut self.players[1]
    }

    pub fn effects(&self) -> &EffectRegistry {
        &self.effects
    }

    /// Active player and opponent, both mutable.
    fn sides_mut(&mut self) -> (&mut PlayerResources, &mut PlayerResources) {
        let [one, two] = &mut self.players;
        if self.active == 0 {
            (one, two)
        } else {
            (two, one)
        }
    }

    /// Play the card at `hand_index`, with an optional target for spells.
    ///
    /// Unit-like cards go to the board. Anything else resolves through the
    /// effect registered for its name; a card without an effect is simply
    /// consumed. Returns false, with no change, when the index is out of range,
    /// mana is short, the board is full for a unit, or the effect fails.
    pub fn play_card(&mut self, hand_index: usize, target: Option<usize>) -> bool {
        let player = &self.players[self.active];
        let Some(card) = player.hand.get(hand_index) else {
            return false;
        };
        if card.cost > player.mana {
            return false;
        }
        let unit = card.is_unit_like();
        if unit && !player.board_has_room() {
            return false;
        }

        let player = &mut self.players[self.active];
        let mut card = player.hand.remove(hand_index);
        player.mana -= card.cost;

        if unit {
            card.can_attack = false;
            player.board.push(card);
            return true;
        }

        let effects = Arc::clone(&self.effects);
        let Some(effect) = effects.get(&card.name) else {
            trace!(card = %card.name, "Card has no effect, consumed");
            return true;
        };
        if effect.resolve(self, target) {
            return true;
        }

        let player = &mut self.players[self.active];
        player.mana += card.cost;
        let slot = hand_index.min(player.hand.len());
        player.hand.insert(slot, card);
        false
    }

    /// Attack with the board unit at `attacker`.
    ///
    /// Hero attacks subtract the attacker's attack from the opponent's health.
    /// Unit attacks damage the defender, removing it at zero health or below;
    /// there is no return damage, and the attacker is removed only if its own
    /// health is already at zero or below. The attacker is exhausted either
    /// way. Returns false, with no change, for bad indices or an exhausted
    /// attacker.
    pub fn attack(&mut self, attacker: usize, target: Target) -> bool {
        let (active, opponent) = self.sides_mut();
        let Some(card) = active.board.get(attacker) else {
            return false;
        };
        if !card.can_attack {
            return false;
        }
        let damage = card.attack;

        match target {
            Target::Hero => opponent.health -= damage,
            Target::Minion(defender) => {
                if !opponent.damage_minion(defender, damage) {
                    return false;
                }
            }
        }

        active.board[attacker].can_attack = false;
        if matches!(target, Target::Minion(_)) && active.board[attacker].health <= 0 {
            active.board.remove(attacker);
        }
        true
    }

    /// Apply an action through the matching transition. Plays carry no target.
    pub fn apply_action(&mut self, action: &Action) -> bool {
        match *action {
            Action::Play(index) => self.play_card(index, None),
            Action::Attack { attacker, target } => self.attack(attacker, target),
        }
    }

    /// Every legal action for the active player.
    ///
    /// Plays are offered for affordable unit-like cards while the board has
    /// room. Attacks are offered for each ready unit against each enemy unit
    /// and the enemy hero.
    pub fn legal_actions(&self) -> Vec<Action> {
        let player = self.active();
        let enemy = self.opponent();
        let mut actions = Vec::new();

        for (i, card) in player.hand.iter().enumerate() {
            if card.cost <= player.mana && card.is_unit_like() && player.board_has_room() {
                actions.push(Action::Play(i));
            }
        }

        for (attacker, card) in player.board.iter().enumerate() {
            if !card.can_attack {
                continue;
            }
            for defender in 0..enemy.board.len() {
                actions.push(Action::Attack {
                    attacker,
                    target: Target::Minion(defender),
                });
            }
            actions.push(Action::Attack {
                attacker,
                target: Target::Hero,
            });
        }

        actions
    }

    /// Finish the active player's turn.
    ///
    /// The outgoing player gains a mana crystal (max 10) and refills; control
    /// passes to the other player, who draws a card and readies their board.
    pub fn end_turn(&mut self) {
        self.players[self.active].refresh_mana();
        self.active = 1 - self.active;
        self.turn += 1;

        let player = &mut self.players[self.active];
        player.draw_card();
        player.ready_board();
    }

    /// True once either hero is at zero health or below.
    pub fn is_over(&self) -> bool {
        self.players.iter().any(PlayerResources::is_dead)
    }

    // Narrow mutation surface for spell effects.

    /// Damage the opponent hero.
    pub fn damage_enemy_hero(&mut self, amount: i32) {
        self.players[1 - self.active].health -= amount;
    }

    /// Damage one enemy unit, removing it if it dies. False if out of range.
    pub fn damage_enemy_minion(&mut self, index: usize, amount: i32) -> bool {
        self.players[1 - self.active].damage_minion(index, amount)
    }

    /// Damage every enemy unit, removing the dead ones.
    pub fn damage_all_enemy_minions(&mut self, amount: i32) {
        let board = &mut self.players[1 - self.active].board;
        for card in board.iter_mut() {
            card.health -= amount;
        }
        board.retain(|card| card.health > 0);
    }

    /// Active player draws a card.
    pub fn draw_for_active(&mut self) -> bool {
        self.players[self.active].draw_card()
    }

    pub fn rng_mut(&mut self) -> &mut ChaCha20Rng {
        &mut self.rng
    }
}

impl Game for GameState {
    type Action = Action;

    fn legal_actions(&self) -> Vec<Action> {
        GameState::legal_actions(self)
    }

    fn apply(&mut self, action: &Action) -> bool {
        self.apply_action(action)
    }

    fn is_terminal(&self) -> bool {
        self.is_over()
    }

    fn end_turn(&mut self) {
        GameState::end_turn(self)
    }

    /// 1 when player two is dead, 0 otherwise, regardless of whose turn it is.
    fn rollout_reward(&self) -> f64 {
        if self.players[1].is_dead() {
            1.0
        } else {
            0.0
        }
    }
}
