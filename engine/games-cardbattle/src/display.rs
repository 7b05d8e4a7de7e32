//! Read-only text rendering for logs.

use std::fmt;

use crate::card::Card;
use crate::player::PlayerResources;
use crate::state::{Action, GameState, Target};

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}) {} (Cost: {}, ATK: {}, HP: {}, ready: {})",
            self.id.0, self.name, self.cost, self.attack, self.health, self.can_attack
        )
    }
}

fn write_cards(f: &mut fmt::Formatter<'_>, cards: &[Card]) -> fmt::Result {
    f.write_str("[")?;
    for (i, card) in cards.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{card}")?;
    }
    f.write_str("]")
}

impl fmt::Display for PlayerResources {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Health: {}, Mana: {}/{}, Hand: ",
            self.health(),
            self.mana(),
            self.max_mana()
        )?;
        write_cards(f, self.hand())?;
        f.write_str(", Board: ")?;
        write_cards(f, self.board())?;
        write!(f, ", Deck: {} cards", self.deck().len())
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Turn: {}", self.turn())?;
        writeln!(f, "Active player (P{}):", self.active_index() + 1)?;
        writeln!(f, "{}", self.active())?;
        writeln!(f, "Opponent:")?;
        write!(f, "{}", self.opponent())
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Play(index) => write!(f, "play hand[{index}]"),
            Action::Attack {
                attacker,
                target: Target::Hero,
            } => write!(f, "attack hero with board[{attacker}]"),
            Action::Attack {
                attacker,
                target: Target::Minion(defender),
            } => write!(f, "attack enemy board[{defender}] with board[{attacker}]"),
        }
    }
}

impl GameState {
    /// Human-readable description of `action` against this state, before it
    /// is applied. `None` if the action's indices do not resolve.
    pub fn describe_action(&self, action: &Action) -> Option<String> {
        match *action {
            Action::Play(index) => {
                let card = self.active().hand().get(index)?;
                Some(format!(
                    "Play {} ({}/{})",
                    card.name, card.attack, card.health
                ))
            }
            Action::Attack { attacker, target } => {
                let card = self.active().board().get(attacker)?;
                match target {
                    Target::Hero => Some(format!(
                        "Attack the enemy hero with {} ({}/{})",
                        card.name, card.attack, card.health
                    )),
                    Target::Minion(defender) => {
                        let enemy = self.opponent().board().get(defender)?;
                        Some(format!(
                            "Attack {} ({}/{}) with {} ({}/{})",
                            enemy.name,
                            enemy.attack,
                            enemy.health,
                            card.name,
                            card.attack,
                            card.health
                        ))
                    }
                }
            }
        }
    }
}
