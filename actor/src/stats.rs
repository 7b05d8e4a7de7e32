//! Match statistics tracking.
//!
//! Counts outcomes, turns and actions across the matches an actor plays and
//! reports them through tracing.

use std::time::Instant;

use games_cardbattle::GameState;
use tracing::info;

/// How a single match ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    PlayerOneWin,
    PlayerTwoWin,
    Draw,
}

impl MatchOutcome {
    /// Score a finished (or abandoned) game. Player one wins when player
    /// two's hero is dead, player two wins when player one's is, anything
    /// else is a draw.
    pub fn from_state(state: &GameState) -> Self {
        if state.player_two().is_dead() {
            Self::PlayerOneWin
        } else if state.player_one().is_dead() {
            Self::PlayerTwoWin
        } else {
            Self::Draw
        }
    }
}

/// Summary of one completed match.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchResult {
    pub outcome: MatchOutcome,
    /// Value of the turn counter when the match stopped
    pub turns: u32,
    /// Actions applied to the live game
    pub actions: u32,
    /// Final hero health, player one then player two
    pub final_health: [i32; 2],
}

/// Aggregated actor statistics.
#[derive(Debug)]
pub struct ActorStats {
    games_completed: u32,
    player1_wins: u32,
    player2_wins: u32,
    draws: u32,
    total_turns: u64,
    total_actions: u64,
    /// Start time for rate calculations
    start_time: Instant,
}

/// Point-in-time copy of the statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct ActorStatsSnapshot {
    pub games_completed: u32,
    pub player1_wins: u32,
    pub player2_wins: u32,
    pub draws: u32,
    pub avg_turns: f64,
    pub avg_actions: f64,
    pub games_per_second: f64,
    pub runtime_seconds: f64,
}

impl Default for ActorStats {
    fn default() -> Self {
        Self::new()
    }
}

impl ActorStats {
    /// Create new stats tracker.
    pub fn new() -> Self {
        Self {
            games_completed: 0,
            player1_wins: 0,
            player2_wins: 0,
            draws: 0,
            total_turns: 0,
            total_actions: 0,
            start_time: Instant::now(),
        }
    }

    /// Record a completed match.
    pub fn record_match(&mut self, result: &MatchResult) {
        self.games_completed += 1;
        self.total_turns += result.turns as u64;
        self.total_actions += result.actions as u64;

        match result.outcome {
            MatchOutcome::PlayerOneWin => self.player1_wins += 1,
            MatchOutcome::PlayerTwoWin => self.player2_wins += 1,
            MatchOutcome::Draw => self.draws += 1,
        }
    }

    /// Get a snapshot of current stats.
    pub fn snapshot(&self) -> ActorStatsSnapshot {
        let games = self.games_completed;
        let runtime = self.start_time.elapsed().as_secs_f64();

        let per_game = |total: u64| {
            if games > 0 {
                total as f64 / games as f64
            } else {
                0.0
            }
        };

        let games_per_second = if runtime > 0.0 {
            games as f64 / runtime
        } else {
            0.0
        };

        ActorStatsSnapshot {
            games_completed: games,
            player1_wins: self.player1_wins,
            player2_wins: self.player2_wins,
            draws: self.draws,
            avg_turns: per_game(self.total_turns),
            avg_actions: per_game(self.total_actions),
            games_per_second,
            runtime_seconds: runtime,
        }
    }

    /// Log the aggregate results so far.
    pub fn log_summary(&self) {
        let snapshot = self.snapshot();
        info!(
            games = snapshot.games_completed,
            player1_wins = snapshot.player1_wins,
            player2_wins = snapshot.player2_wins,
            draws = snapshot.draws,
            avg_turns = format!("{:.1}", snapshot.avg_turns),
            avg_actions = format!("{:.1}", snapshot.avg_actions),
            games_per_sec = format!("{:.2}", snapshot.games_per_second),
            "Match statistics"
        );
    }
}
