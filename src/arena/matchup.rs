//! Many games between the same two bots, played in parallel.

use std::thread;
use std::time::Instant;

use log::{error, info, warn};
use parking_lot::Mutex;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{play_game, CancelToken, GameRecord, Outcome, StopFlag};
use crate::board::Board;
use crate::bots::Bot;
use crate::config::ArenaConfig;

/// Lifecycle of a matchup or tournament
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MatchupState {
    Init,
    Running,
    Done,
}

/// Tally of finished games.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MatchupResults {
    pub completed: usize,
    pub white_wins: usize,
    pub black_wins: usize,
    pub draws: usize,
    pub errors: usize,
}

impl MatchupResults {
    pub fn record(&mut self, outcome: Outcome) {
        self.completed += 1;
        match outcome {
            Outcome::WhiteWins => self.white_wins += 1,
            Outcome::BlackWins => self.black_wins += 1,
            Outcome::Draw => self.draws += 1,
            Outcome::Error => self.errors += 1,
        }
    }
}

/// A series of games between one white bot and one black bot.
///
/// Every game owns its own board lineage and deadline; the games share only the bots,
/// the tally and the list of records.
pub struct Matchup {
    config: ArenaConfig,
    white: Box<dyn Bot>,
    black: Box<dyn Bot>,
    start: Board,
    state: Mutex<MatchupState>,
    results: Mutex<MatchupResults>,
    records: Mutex<Vec<GameRecord>>,
}

impl Matchup {
    #[must_use]
    pub fn new(config: ArenaConfig, white: Box<dyn Bot>, black: Box<dyn Bot>) -> Self {
        Matchup {
            config,
            white,
            black,
            start: Board::new(),
            state: Mutex::new(MatchupState::Init),
            results: Mutex::new(MatchupResults::default()),
            records: Mutex::new(Vec::new()),
        }
    }

    /// Start every game from `board` instead of the standard position.
    #[must_use]
    pub fn with_start(mut self, board: Board) -> Self {
        self.start = board;
        self
    }

    #[must_use]
    pub fn config(&self) -> &ArenaConfig {
        &self.config
    }

    #[must_use]
    pub fn state(&self) -> MatchupState {
        *self.state.lock()
    }

    /// Snapshot of the tally; safe to call while games are running.
    #[must_use]
    pub fn results(&self) -> MatchupResults {
        *self.results.lock()
    }

    /// Records of finished games, in completion order.
    #[must_use]
    pub fn records(&self) -> Vec<GameRecord> {
        self.records.lock().clone()
    }

    /// Play all games concurrently and block until each has finished or been cancelled.
    ///
    /// Setting `stop` cancels every game still running; each also gets its own deadline
    /// of `game_timeout` from the moment it starts. A matchup runs only once; later
    /// calls return the existing tally.
    pub fn run(&self, stop: &StopFlag) -> MatchupResults {
        {
            let mut state = self.state.lock();
            if *state != MatchupState::Init {
                warn!("matchup already {:?}, not running again", *state);
                return self.results();
            }
            *state = MatchupState::Running;
        }

        info!(
            "Matchup started: {} (white) vs {} (black), {} games, {:?} per game",
            self.white.name(),
            self.black.name(),
            self.config.games,
            self.config.game_timeout
        );

        thread::scope(|scope| {
            for game in 0..self.config.games {
                let spawned = thread::Builder::new()
                    .name(format!("game-{game}"))
                    .spawn_scoped(scope, move || self.run_game(stop));
                if let Err(err) = spawned {
                    error!("failed to start game {game}: {err}");
                    self.results.lock().record(Outcome::Error);
                }
            }
        });

        *self.state.lock() = MatchupState::Done;
        let results = self.results();
        info!(
            "Matchup finished: {} games, white {} / black {} / draws {} / errors {}",
            results.completed, results.white_wins, results.black_wins, results.draws, results.errors
        );
        results
    }

    fn run_game(&self, stop: &StopFlag) {
        let deadline = Instant::now() + self.config.game_timeout;
        let cancel = CancelToken::new(stop.clone(), Some(deadline));
        let record = play_game(
            self.white.as_ref(),
            self.black.as_ref(),
            self.start,
            &cancel,
            &self.config,
        );
        self.results.lock().record(record.outcome);
        self.records.lock().push(record);
    }
}
