pub mod arena;
pub mod board;
pub mod bots;
pub mod config;

pub use arena::{Matchup, MatchupResults, Outcome, StopFlag, Tournament};
pub use board::{Board, Color, GameStatus, Move, Piece, Square};
pub use bots::{Bot, BotKind};
pub use config::{ArenaConfig, ReportLevel};
