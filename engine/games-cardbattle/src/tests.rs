use super::*;
use engine_core::Game;
use std::sync::Arc;

fn ready(name: &str, attack: i32, health: i32) -> Card {
    Card::minion(name, 1, attack, health).ready()
}

fn deck_of(n: usize) -> Vec<Card> {
    (0..n)
        .map(|i| Card::minion(format!("Deck {i}"), 1, 1, 1))
        .collect()
}

fn duel(one: PlayerResources, two: PlayerResources) -> GameState {
    GameState::from_players(one, two)
}

#[test]
fn test_new_game_setup() {
    let state = GameState::new(&GameSetup::default(), 42);

    assert_eq!(state.turn(), 1);
    assert_eq!(state.active_index(), 0);
    assert_eq!(state.player_one().hand().len(), 3);
    assert_eq!(state.player_two().hand().len(), 4);
    assert_eq!(state.player_one().deck().len(), 27);
    assert_eq!(state.player_two().deck().len(), 26);
    for player in [state.player_one(), state.player_two()] {
        assert_eq!(player.health(), 30);
        assert_eq!((player.mana(), player.max_mana()), (1, 1));
        assert!(player.board().is_empty());
    }
    assert!(!state.is_terminal());
}

#[test]
fn test_custom_setup() {
    let setup = GameSetup {
        starting_health: 10,
        starting_mana: 4,
        deck_size: 5,
        first_player_opening_hand: 1,
        second_player_opening_hand: 2,
    };
    let state = GameState::new(&setup, 1);
    assert_eq!(state.player_one().health(), 10);
    assert_eq!(state.player_one().mana(), 4);
    assert_eq!(state.player_one().deck().len(), 4);
    assert_eq!(state.player_two().hand().len(), 2);
}

#[test]
fn test_legal_actions_plays_and_attacks() {
    let one = PlayerResources::new(30, 3)
        .with_hand(vec![
            Card::minion("Cheap", 2, 2, 2),
            Card::minion("Pricey", 5, 5, 5),
            Card::minion("Dud", 1, 0, 2),
            catalog::fireball(),
        ])
        .with_board(vec![ready("Ready", 2, 2), Card::minion("Sleepy", 1, 1, 1)]);
    let two = PlayerResources::new(30, 1).with_board(vec![
        Card::minion("E0", 1, 1, 1),
        Card::minion("E1", 1, 1, 1),
    ]);
    let state = duel(one, two);

    assert_eq!(
        state.legal_actions(),
        vec![
            Action::Play(0),
            Action::Attack {
                attacker: 0,
                target: Target::Minion(0)
            },
            Action::Attack {
                attacker: 0,
                target: Target::Minion(1)
            },
            Action::Attack {
                attacker: 0,
                target: Target::Hero
            },
        ]
    );
}

#[test]
fn test_full_board_blocks_plays() {
    let board = (0..MAX_BOARD_SIZE)
        .map(|i| Card::minion(format!("B{i}"), 1, 1, 1))
        .collect();
    let one = PlayerResources::new(30, 10)
        .with_hand(vec![Card::minion("Extra", 1, 1, 1)])
        .with_board(board);
    let mut state = duel(one, PlayerResources::new(30, 1));

    assert!(state.legal_actions().is_empty());
    assert!(!state.apply(&Action::Play(0)));
    assert_eq!(state.active().board().len(), MAX_BOARD_SIZE);
}

#[test]
fn test_play_minion() {
    let one = PlayerResources::new(30, 3).with_hand(vec![
        Card::minion("First", 1, 1, 1),
        Card::minion("Second", 2, 3, 2),
    ]);
    let mut state = duel(one, PlayerResources::new(30, 1));

    assert!(state.apply(&Action::Play(1)));
    assert_eq!(state.active().mana(), 1);
    assert_eq!(state.active().hand().len(), 1);
    assert_eq!(state.active().hand()[0].name, "First");
    assert_eq!(state.active().board().len(), 1);
    assert_eq!(state.active().board()[0].name, "Second");
    assert!(!state.active().board()[0].can_attack);
}

#[test]
fn test_weapon_with_stats_lands_on_board() {
    let one = PlayerResources::new(30, 5).with_hand(vec![
        Card::weapon("Fiery War Axe", 2, 3, 2),
        Card::weapon("Dull Blade", 1, 0, 2),
    ]);
    let mut state = duel(one, PlayerResources::new(30, 1))
        .with_effects(Arc::new(EffectRegistry::new()));

    assert!(state.apply(&Action::Play(0)));
    assert_eq!(state.active().board().len(), 1);
    assert_eq!(state.active().board()[0].card_type, CardType::Weapon);
    assert!(!state.active().board()[0].can_attack);

    // No attack, so no board slot: consumed like a spell without an effect.
    assert!(state.apply(&Action::Play(0)));
    assert_eq!(state.active().board().len(), 1);
    assert!(state.active().hand().is_empty());
    assert_eq!(state.active().mana(), 2);
}

#[test]
fn test_play_without_mana_is_a_no_op() {
    let one = PlayerResources::new(30, 2).with_hand(vec![Card::minion("Big", 5, 5, 5)]);
    let mut state = duel(one, PlayerResources::new(30, 1));
    let before = state.active().clone();

    assert!(!state.apply(&Action::Play(0)));
    assert_eq!(state.active(), &before);
}

#[test]
fn test_play_out_of_range_fails() {
    let mut state = duel(PlayerResources::new(30, 5), PlayerResources::new(30, 1));
    assert!(!state.apply(&Action::Play(0)));
}

#[test]
fn test_attack_hero() {
    let one = PlayerResources::new(30, 1).with_board(vec![ready("Hitter", 4, 3)]);
    let mut state = duel(one, PlayerResources::new(30, 1));

    let action = Action::Attack {
        attacker: 0,
        target: Target::Hero,
    };
    assert!(state.apply(&action));
    assert_eq!(state.opponent().health(), 26);
    assert!(!state.active().board()[0].can_attack);
    assert_eq!(state.active().board()[0].health, 3);

    // Exhausted attackers cannot go again.
    assert!(!state.apply(&action));
    assert_eq!(state.opponent().health(), 26);
}

#[test]
fn test_attack_kills_defender_once() {
    let one = PlayerResources::new(30, 1).with_board(vec![ready("Hitter", 3, 1)]);
    let two = PlayerResources::new(30, 1).with_board(vec![
        Card::minion("Victim", 1, 2, 3),
        Card::minion("Bystander", 1, 1, 1),
    ]);
    let mut state = duel(one, two);

    assert!(state.apply(&Action::Attack {
        attacker: 0,
        target: Target::Minion(0)
    }));
    assert_eq!(state.opponent().board().len(), 1);
    assert_eq!(state.opponent().board()[0].name, "Bystander");
    assert_eq!(state.opponent().health(), 30);
}

#[test]
fn test_attack_has_no_return_damage() {
    let one = PlayerResources::new(30, 1).with_board(vec![ready("Glass", 1, 1)]);
    let two = PlayerResources::new(30, 1).with_board(vec![Card::minion("Wall", 1, 9, 9)]);
    let mut state = duel(one, two);

    assert!(state.apply(&Action::Attack {
        attacker: 0,
        target: Target::Minion(0)
    }));
    assert_eq!(state.opponent().board()[0].health, 8);
    assert_eq!(state.active().board().len(), 1);
    assert_eq!(state.active().board()[0].health, 1);
    assert!(!state.active().board()[0].can_attack);
}

#[test]
fn test_dead_attacker_is_removed_after_unit_attack() {
    let mut zombie = ready("Zombie", 2, 1);
    zombie.health = 0;
    let one = PlayerResources::new(30, 1).with_board(vec![zombie]);
    let two = PlayerResources::new(30, 1).with_board(vec![Card::minion("Target", 1, 1, 5)]);
    let mut state = duel(one, two);

    assert!(state.apply(&Action::Attack {
        attacker: 0,
        target: Target::Minion(0)
    }));
    assert!(state.active().board().is_empty());
    assert_eq!(state.opponent().board()[0].health, 3);
}

#[test]
fn test_attack_bad_indices_fail() {
    let one = PlayerResources::new(30, 1).with_board(vec![ready("Hitter", 3, 3)]);
    let mut state = duel(one, PlayerResources::new(30, 1));

    assert!(!state.apply(&Action::Attack {
        attacker: 1,
        target: Target::Hero
    }));
    assert!(!state.apply(&Action::Attack {
        attacker: 0,
        target: Target::Minion(0)
    }));
    assert!(state.active().board()[0].can_attack);
}

#[test]
fn test_end_turn() {
    let one = PlayerResources::new(30, 3).with_mana(0);
    let two = PlayerResources::new(30, 1)
        .with_deck(deck_of(2))
        .with_board(vec![Card::minion("Sleepy", 1, 1, 1)]);
    let mut state = duel(one, two);

    state.end_turn();

    assert_eq!(state.turn(), 2);
    assert_eq!(state.active_index(), 1);
    assert_eq!((state.player_one().mana(), state.player_one().max_mana()), (4, 4));
    assert_eq!(state.player_two().mana(), 1);
    assert_eq!(state.player_two().hand().len(), 1);
    assert_eq!(state.player_two().deck().len(), 1);
    assert!(state.player_two().board()[0].can_attack);
}

#[test]
fn test_end_turn_caps_mana() {
    let mut state = duel(PlayerResources::new(30, 1), PlayerResources::new(30, 1));
    for _ in 0..40 {
        state.end_turn();
        for player in [state.player_one(), state.player_two()] {
            assert!(player.max_mana() <= MAX_MANA);
        }
        assert_eq!(state.opponent().mana(), state.opponent().max_mana());
    }
    assert_eq!(state.player_one().max_mana(), MAX_MANA);
}

#[test]
fn test_end_turn_with_empty_deck_keeps_hand() {
    let two = PlayerResources::new(30, 1).with_hand(vec![Card::minion("Kept", 1, 1, 1)]);
    let mut state = duel(PlayerResources::new(30, 1), two);
    state.end_turn();
    assert_eq!(state.active().hand().len(), 1);
}

#[test]
fn test_terminal_on_negative_health() {
    let mut state = duel(PlayerResources::new(30, 1), PlayerResources::new(30, 1));
    assert!(!state.is_terminal());
    state.player_two_mut().set_health(-3);
    assert!(state.is_terminal());

    let mut state = duel(PlayerResources::new(30, 1), PlayerResources::new(30, 1));
    state.player_one_mut().set_health(0);
    assert!(state.is_terminal());
}

#[test]
fn test_rollout_reward_is_player_two_death() {
    let mut state = duel(PlayerResources::new(30, 1), PlayerResources::new(30, 1));
    assert_eq!(state.rollout_reward(), 0.0);

    state.player_one_mut().set_health(0);
    assert_eq!(state.rollout_reward(), 0.0);

    state.end_turn();
    state.player_two_mut().set_health(-1);
    assert_eq!(state.rollout_reward(), 1.0);
}

#[test]
fn test_clone_is_deep() {
    let one = PlayerResources::new(30, 5)
        .with_deck(deck_of(3))
        .with_hand(vec![Card::minion("H", 1, 2, 2)])
        .with_board(vec![ready("B", 2, 2)]);
    let two = PlayerResources::new(30, 1).with_board(vec![Card::minion("E", 1, 1, 3)]);
    let original = duel(one, two);
    let mut copy = original.clone();

    assert_eq!(copy.player_one(), original.player_one());
    assert_eq!(copy.player_two(), original.player_two());

    assert!(copy.apply(&Action::Play(0)));
    assert!(copy.apply(&Action::Attack {
        attacker: 0,
        target: Target::Minion(0)
    }));
    copy.end_turn();
    copy.end_turn();

    assert_eq!(original.turn(), 1);
    assert_eq!(original.player_one().hand().len(), 1);
    assert_eq!(original.player_one().board().len(), 1);
    assert!(original.player_one().board()[0].can_attack);
    assert_eq!(original.player_one().deck().len(), 3);
    assert_eq!(original.player_one().mana(), 5);
    assert_eq!(original.player_two().board()[0].health, 3);
}

#[test]
fn test_random_playouts_keep_size_invariants() {
    use rand::seq::SliceRandom;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    let mut rng = ChaCha20Rng::seed_from_u64(9);
    for seed in 0..20 {
        let mut state = GameState::new(&GameSetup::default(), seed);
        for _ in 0..120 {
            if state.is_terminal() {
                break;
            }
            for _ in 0..4 {
                let actions = state.legal_actions();
                let Some(action) = actions.choose(&mut rng) else {
                    break;
                };
                assert!(state.apply(action));
            }
            state.end_turn();
            for player in [state.player_one(), state.player_two()] {
                assert!(player.hand().len() <= MAX_HAND_SIZE);
                assert!(player.board().len() <= MAX_BOARD_SIZE);
                assert!(player.max_mana() <= MAX_MANA);
            }
        }
    }
}

#[test]
fn test_spell_resolves_through_registry() {
    let one = PlayerResources::new(30, 10).with_hand(vec![catalog::fireball()]);
    let mut state = duel(one, PlayerResources::new(30, 1));

    assert!(state.apply(&Action::Play(0)));
    assert_eq!(state.opponent().health(), 24);
    assert_eq!(state.active().mana(), 6);
    assert!(state.active().hand().is_empty());
    assert!(state.active().board().is_empty());
}

#[test]
fn test_targeted_fireball() {
    let one = PlayerResources::new(30, 10).with_hand(vec![catalog::fireball()]);
    let two = PlayerResources::new(30, 1).with_board(vec![
        Card::minion("Small", 1, 1, 1),
        Card::minion("Ogre", 6, 6, 7),
    ]);
    let mut state = duel(one, two);

    assert!(state.play_card(0, Some(1)));
    assert_eq!(state.opponent().board()[1].health, 1);
    assert_eq!(state.opponent().health(), 30);
}

#[test]
fn test_failed_spell_is_refunded() {
    let one = PlayerResources::new(30, 10).with_hand(vec![
        Card::minion("Keep", 1, 1, 1),
        catalog::fireball(),
    ]);
    let mut state = duel(one, PlayerResources::new(30, 1));
    let before = state.active().clone();

    assert!(!state.play_card(1, Some(3)));
    assert_eq!(state.active(), &before);
}

#[test]
fn test_arcane_explosion() {
    let one = PlayerResources::new(30, 10).with_hand(vec![catalog::arcane_explosion()]);
    let two = PlayerResources::new(30, 1).with_board(vec![
        Card::minion("A", 1, 1, 1),
        Card::minion("B", 1, 1, 2),
        Card::minion("C", 1, 1, 1),
    ]);
    let mut state = duel(one, two);

    assert!(state.apply(&Action::Play(0)));
    assert_eq!(state.opponent().board().len(), 1);
    assert_eq!(state.opponent().board()[0].name, "B");
    assert_eq!(state.opponent().board()[0].health, 1);
}

#[test]
fn test_arcane_intellect_draws_two() {
    let one = PlayerResources::new(30, 10)
        .with_hand(vec![catalog::arcane_intellect()])
        .with_deck(deck_of(5));
    let mut state = duel(one, PlayerResources::new(30, 1));

    assert!(state.apply(&Action::Play(0)));
    assert_eq!(state.active().hand().len(), 2);
    assert_eq!(state.active().deck().len(), 3);
}

#[test]
fn test_arcane_missiles_deal_three_damage() {
    let one = PlayerResources::new(30, 10).with_hand(vec![catalog::arcane_missiles()]);
    let two = PlayerResources::new(30, 1).with_board(vec![Card::minion("Tank", 1, 1, 10)]);
    let mut state = duel(one, two).with_seed(5);

    assert!(state.apply(&Action::Play(0)));
    let hero_damage = 30 - state.opponent().health();
    let minion_damage = 10 - state.opponent().board()[0].health;
    assert_eq!(hero_damage + minion_damage, 3);
}

#[test]
fn test_spell_without_effect_is_consumed() {
    let one = PlayerResources::new(30, 10).with_hand(vec![Card::spell("Mystery", 3)]);
    let mut state = duel(one, PlayerResources::new(30, 1))
        .with_effects(Arc::new(EffectRegistry::new()));

    assert!(state.apply(&Action::Play(0)));
    assert_eq!(state.active().mana(), 7);
    assert!(state.active().hand().is_empty());
}

#[test]
fn test_custom_effect_is_injected() {
    struct Heal;

    impl SpellEffect for Heal {
        fn resolve(&self, state: &mut GameState, _target: Option<usize>) -> bool {
            let health = state.player_one().health();
            state.player_one_mut().set_health(health + 5);
            true
        }
    }

    let mut registry = EffectRegistry::with_catalog();
    registry.register("Heal", Arc::new(Heal));

    let one = PlayerResources::new(20, 10).with_hand(vec![Card::spell("Heal", 2)]);
    let mut state = duel(one, PlayerResources::new(30, 1)).with_effects(Arc::new(registry));

    assert!(state.apply(&Action::Play(0)));
    assert_eq!(state.player_one().health(), 25);
}

#[test]
fn test_neutral_minions() {
    let raptor = catalog::bloodfen_raptor();
    let ogre = catalog::boulderfist_ogre();
    assert_eq!((raptor.cost, raptor.attack, raptor.health), (2, 3, 2));
    assert_eq!((ogre.cost, ogre.attack, ogre.health), (6, 6, 7));
    assert_eq!(ogre.card_type, CardType::Minion);
}
