//! Round robin: one matchup for every white/black pairing of a set of bots.

use std::thread;
use std::time::{Duration, Instant};

use log::{debug, error, info, warn};
use parking_lot::Mutex;

use super::{Matchup, MatchupResults, MatchupState, StopFlag};
use crate::bots::BotKind;
use crate::config::ArenaConfig;

/// One pairing of a tournament.
pub struct Pairing {
    pub white: BotKind,
    pub black: BotKind,
    pub matchup: Matchup,
}

/// Every ordered pairing of the entrants, mirrors and self-play included, run at once.
pub struct Tournament {
    pairings: Vec<Pairing>,
    state: Mutex<MatchupState>,
    started_at: Mutex<Option<Instant>>,
    finished_at: Mutex<Option<Instant>>,
}

impl Tournament {
    /// Pair every kind in `entrants` against every kind, itself included.
    ///
    /// Each bot instance gets its own seed derived from `seed`, so two runs with the
    /// same seed choose the same moves.
    #[must_use]
    pub fn new(config: ArenaConfig, entrants: &[BotKind], seed: u64) -> Self {
        let mut pairings = Vec::with_capacity(entrants.len() * entrants.len());
        for &white in entrants {
            for &black in entrants {
                let base = seed.wrapping_add(2 * pairings.len() as u64);
                let matchup = Matchup::new(
                    config.clone(),
                    white.build(base),
                    black.build(base.wrapping_add(1)),
                );
                pairings.push(Pairing {
                    white,
                    black,
                    matchup,
                });
            }
        }
        Tournament {
            pairings,
            state: Mutex::new(MatchupState::Init),
            started_at: Mutex::new(None),
            finished_at: Mutex::new(None),
        }
    }

    /// All built-in bots against each other.
    #[must_use]
    pub fn round_robin(config: ArenaConfig, seed: u64) -> Self {
        Tournament::new(config, &BotKind::ALL, seed)
    }

    #[must_use]
    pub fn pairings(&self) -> &[Pairing] {
        &self.pairings
    }

    #[must_use]
    pub fn state(&self) -> MatchupState {
        *self.state.lock()
    }

    #[must_use]
    pub fn started_at(&self) -> Option<Instant> {
        *self.started_at.lock()
    }

    #[must_use]
    pub fn finished_at(&self) -> Option<Instant> {
        *self.finished_at.lock()
    }

    /// Wall time of a finished tournament
    #[must_use]
    pub fn elapsed(&self) -> Option<Duration> {
        Some(self.finished_at()?.duration_since(self.started_at()?))
    }

    /// Current tally of every pairing, in pairing order.
    #[must_use]
    pub fn results(&self) -> Vec<(BotKind, BotKind, MatchupResults)> {
        self.pairings
            .iter()
            .map(|p| (p.white, p.black, p.matchup.results()))
            .collect()
    }

    /// Run all matchups concurrently and block until every one is done.
    ///
    /// `stop` is shared by every game of every matchup. Like a matchup, a tournament
    /// runs only once.
    pub fn run(&self, stop: &StopFlag) -> Vec<(BotKind, BotKind, MatchupResults)> {
        {
            let mut state = self.state.lock();
            if *state != MatchupState::Init {
                warn!("tournament already {:?}, not running again", *state);
                return self.results();
            }
            *state = MatchupState::Running;
        }
        *self.started_at.lock() = Some(Instant::now());
        info!("Tournament started: {} matchups", self.pairings.len());

        thread::scope(|scope| {
            for pairing in &self.pairings {
                debug!(
                    "starting {} vs {}, {} games",
                    pairing.white,
                    pairing.black,
                    pairing.matchup.config().games
                );
                let spawned = thread::Builder::new()
                    .name(format!("matchup-{}-{}", pairing.white, pairing.black))
                    .spawn_scoped(scope, move || pairing.matchup.run(stop));
                if let Err(err) = spawned {
                    error!("failed to start {} vs {}: {err}", pairing.white, pairing.black);
                }
            }
        });

        *self.finished_at.lock() = Some(Instant::now());
        *self.state.lock() = MatchupState::Done;
        info!("Tournament finished in {:?}", self.elapsed().unwrap_or_default());
        self.results()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quick_config() -> ArenaConfig {
        ArenaConfig::default()
            .with_games(2)
            .with_game_timeout(Duration::from_secs(30))
            .with_max_plies(Some(40))
    }

    #[test]
    fn test_round_robin_covers_every_pairing() {
        let tournament = Tournament::round_robin(quick_config(), 7);
        assert_eq!(tournament.state(), MatchupState::Init);
        assert!(tournament.started_at().is_none());
        assert!(tournament.elapsed().is_none());

        let results = tournament.run(&StopFlag::new());
        assert_eq!(tournament.state(), MatchupState::Done);
        assert_eq!(results.len(), 4);
        for white in BotKind::ALL {
            for black in BotKind::ALL {
                let (_, _, tally) = results
                    .iter()
                    .find(|(w, b, _)| *w == white && *b == black)
                    .unwrap();
                assert_eq!(tally.completed, 2, "{white} vs {black}");
                assert_eq!(tally.errors, 0, "{white} vs {black}");
            }
        }
        assert!(tournament
            .pairings()
            .iter()
            .all(|p| p.matchup.state() == MatchupState::Done));
        assert!(tournament.started_at() <= tournament.finished_at());
        assert!(tournament.elapsed().is_some());
    }

    #[test]
    fn test_stopped_tournament_draws_everything() {
        let tournament = Tournament::new(quick_config(), &[BotKind::Random], 1);
        let results = tournament.run(&StopFlag::stopped());
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].2.draws, 2);
    }

    #[test]
    fn test_runs_only_once() {
        let tournament = Tournament::new(quick_config(), &[BotKind::CheckCapture], 3);
        let first = tournament.run(&StopFlag::new());
        let finished = tournament.finished_at();
        let second = tournament.run(&StopFlag::new());
        assert_eq!(first, second);
        assert_eq!(tournament.finished_at(), finished);
    }
}
