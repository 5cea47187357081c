//! Automated players.
//!
//! A bot sees the current position and picks one of its legal moves. The arena checks
//! the pick against the legal list, so a bot cannot corrupt a game by misbehaving.

mod check_capture;
mod random;

use std::fmt;
use std::str::FromStr;

use crate::board::{Board, Move};

pub use check_capture::CheckCaptureBot;
pub use random::RandomBot;

/// A player that chooses moves for whichever side is to move.
///
/// Bots are shared between the games of a matchup, which run on separate threads.
pub trait Bot: Send + Sync {
    fn name(&self) -> &str;

    /// Pick a move for the side to move, or `None` when it has no legal move.
    fn select_move(&self, board: &Board) -> Option<Move>;
}

/// The built-in bots, selectable by name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BotKind {
    Random,
    CheckCapture,
}

impl BotKind {
    pub const ALL: [BotKind; 2] = [BotKind::Random, BotKind::CheckCapture];

    /// Instantiate the bot with its random source seeded from `seed`.
    #[must_use]
    pub fn build(self, seed: u64) -> Box<dyn Bot> {
        match self {
            BotKind::Random => Box::new(RandomBot::new(seed)),
            BotKind::CheckCapture => Box::new(CheckCaptureBot::new(seed)),
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            BotKind::Random => "random",
            BotKind::CheckCapture => "check-capture",
        }
    }
}

impl fmt::Display for BotKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BotKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BotKind::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown bot '{s}', expected random or check-capture"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bot_kind_names() {
        for kind in BotKind::ALL {
            assert_eq!(kind.as_str().parse::<BotKind>(), Ok(kind));
            assert_eq!(kind.build(1).name(), kind.as_str());
        }
        assert!("minimax".parse::<BotKind>().is_err());
    }

    #[test]
    fn test_bots_only_pick_legal_moves() {
        let board = Board::new();
        for kind in BotKind::ALL {
            let bot = kind.build(42);
            for _ in 0..10 {
                let mv = bot.select_move(&board).unwrap();
                assert!(board.legal_moves().contains(&mv));
            }
        }
    }

    #[test]
    fn test_bots_pass_without_legal_moves() {
        let stalemate = Board::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1");
        for kind in BotKind::ALL {
            assert_eq!(kind.build(7).select_move(&stalemate), None);
        }
    }
}
