//! Matchup configuration.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default number of games in a matchup
pub const DEFAULT_GAMES: usize = 20;

/// Default wall-clock budget for a single game
pub const DEFAULT_GAME_TIMEOUT: Duration = Duration::from_secs(10);

/// How much of each game is written to the log at `info` level.
///
/// Levels are ordered: `All` reports everything `Result` does, plus every position
/// and the full move list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ReportLevel {
    #[default]
    None,
    Result,
    All,
}

impl fmt::Display for ReportLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ReportLevel::None => "none",
            ReportLevel::Result => "result",
            ReportLevel::All => "all",
        };
        f.write_str(name)
    }
}

impl FromStr for ReportLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "none" => Ok(ReportLevel::None),
            "result" => Ok(ReportLevel::Result),
            "all" => Ok(ReportLevel::All),
            _ => Err(format!(
                "unknown report level '{s}', expected none, result or all"
            )),
        }
    }
}

/// Settings shared by every game of a matchup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArenaConfig {
    /// Number of games to play
    pub games: usize,
    /// Each game is cancelled and scored as a draw once this much time has passed
    pub game_timeout: Duration,
    /// Optional cap on plies per game; reaching it ends the game as a draw
    pub max_plies: Option<usize>,
    pub report: ReportLevel,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        ArenaConfig {
            games: DEFAULT_GAMES,
            game_timeout: DEFAULT_GAME_TIMEOUT,
            max_plies: None,
            report: ReportLevel::None,
        }
    }
}

impl ArenaConfig {
    #[must_use]
    pub fn with_games(mut self, games: usize) -> Self {
        self.games = games;
        self
    }

    #[must_use]
    pub fn with_game_timeout(mut self, timeout: Duration) -> Self {
        self.game_timeout = timeout;
        self
    }

    #[must_use]
    pub fn with_max_plies(mut self, max_plies: Option<usize>) -> Self {
        self.max_plies = max_plies;
        self
    }

    #[must_use]
    pub fn with_report(mut self, report: ReportLevel) -> Self {
        self.report = report;
        self
    }
}
