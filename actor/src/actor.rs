//! Actor implementation: plays complete matches on the live game

use anyhow::{Context, Result};
use games_cardbattle::{GameSetup, GameState};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::policy::{Policy, PolicyKind};
use crate::stats::{ActorStats, ActorStatsSnapshot, MatchOutcome, MatchResult};

pub struct Actor {
    config: Config,
    setup: GameSetup,
    /// One policy per seat, indexed like the game's players
    seats: [Box<dyn Policy>; 2],
    /// Source of per-match deck seeds
    rng: ChaCha20Rng,
    stats: ActorStats,
}

impl Actor {
    pub fn new(config: Config) -> Result<Self> {
        let mut rng = if config.seed == 0 {
            ChaCha20Rng::from_entropy()
        } else {
            ChaCha20Rng::seed_from_u64(config.seed)
        };

        let one: PolicyKind = config
            .player_one
            .parse()
            .context("Invalid policy for player one")?;
        let two: PolicyKind = config
            .player_two
            .parse()
            .context("Invalid policy for player two")?;

        let mcts_config = config.mcts_config();
        let seats = [
            one.build(&mcts_config, rng.gen()),
            two.build(&mcts_config, rng.gen()),
        ];

        info!(
            player_one = %one,
            player_two = %two,
            iterations = mcts_config.iterations,
            exploration_weight = mcts_config.exploration_weight,
            rollout_depth = mcts_config.rollout_depth,
            "Actor initialized"
        );

        Ok(Self {
            setup: config.game_setup(),
            config,
            seats,
            rng,
            stats: ActorStats::new(),
        })
    }

    /// Play every configured match and return the final statistics.
    pub fn run(&mut self) -> Result<ActorStatsSnapshot> {
        info!(num_games = self.config.num_games, "Actor starting main loop");

        for game in 1..=self.config.num_games {
            let result = self.play_match(game);
            info!(
                game,
                outcome = ?result.outcome,
                turns = result.turns,
                actions = result.actions,
                p1_health = result.final_health[0],
                p2_health = result.final_health[1],
                "Match finished"
            );
            self.stats.record_match(&result);

            if self.config.log_interval > 0 && game % self.config.log_interval == 0 {
                self.stats.log_summary();
            }
        }

        Ok(self.stats.snapshot())
    }

    /// Play one match from a freshly dealt game until a hero dies or the
    /// turn cap is reached.
    pub fn play_match(&mut self, game: u32) -> MatchResult {
        let seed = self.rng.gen();
        let mut state = GameState::new(&self.setup, seed);
        let mut actions = 0u32;

        debug!(game, seed, "Starting match");

        while !state.is_over() && state.turn() <= self.config.max_turns {
            let seat = state.active_index();
            let policy = &mut self.seats[seat];

            let Some(action) = policy.select_action(&state) else {
                debug!(turn = state.turn(), player = seat + 1, "No action, ending turn");
                state.end_turn();
                continue;
            };

            let description = state
                .describe_action(&action)
                .unwrap_or_else(|| action.to_string());

            if state.apply_action(&action) {
                actions += 1;
                info!(
                    game,
                    turn = state.turn(),
                    player = seat + 1,
                    policy = policy.name(),
                    "{description}"
                );
            } else {
                warn!(
                    game,
                    turn = state.turn(),
                    player = seat + 1,
                    %action,
                    "Policy chose a rejected action, ending turn"
                );
                state.end_turn();
            }
        }

        if !state.is_over() {
            debug!(game, max_turns = self.config.max_turns, "Turn cap reached");
        }

        MatchResult {
            outcome: MatchOutcome::from_state(&state),
            turns: state.turn(),
            actions,
            final_health: [state.player_one().health(), state.player_two().health()],
        }
    }
}
