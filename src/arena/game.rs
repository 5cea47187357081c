//! A single game between two bots.

use std::fmt;

use log::{debug, info, trace, warn};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::CancelToken;
use crate::board::{Board, Color, GameStatus, MoveList};
use crate::bots::Bot;
use crate::config::{ArenaConfig, ReportLevel};

/// Result of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Outcome {
    WhiteWins,
    BlackWins,
    Draw,
    /// A bot failed to produce a legal move
    Error,
}

impl Outcome {
    #[must_use]
    pub const fn win_for(color: Color) -> Self {
        match color {
            Color::White => Outcome::WhiteWins,
            Color::Black => Outcome::BlackWins,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Outcome::WhiteWins => "1-0",
            Outcome::BlackWins => "0-1",
            Outcome::Draw => "1/2-1/2",
            Outcome::Error => "*",
        };
        f.write_str(text)
    }
}

/// Why a game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Termination {
    Checkmate,
    Stalemate,
    /// Stop flag or deadline fired; scored as a draw
    Cancelled,
    /// Ply cap reached; scored as a draw
    MoveLimit,
    /// The bot returned a move outside the legal list
    IllegalMove,
    /// The bot returned nothing although legal moves existed
    NoMove,
}

impl fmt::Display for Termination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Termination::Checkmate => "checkmate",
            Termination::Stalemate => "stalemate",
            Termination::Cancelled => "cancellation",
            Termination::MoveLimit => "move limit",
            Termination::IllegalMove => "illegal move",
            Termination::NoMove => "no move",
        };
        f.write_str(text)
    }
}

/// Everything a finished game leaves behind.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameRecord {
    pub moves: MoveList,
    /// Last position reached; always a complete, valid board
    pub final_board: Board,
    pub outcome: Outcome,
    pub termination: Termination,
}

impl GameRecord {
    /// Moves in numbered pairs, e.g. `1. e2e4 e7e5 2. g1f3`.
    ///
    /// Numbering starts from the first position's fullmove clock, and a game that
    /// started with Black to move opens with `N...`.
    #[must_use]
    pub fn move_text(&self, start: &Board) -> String {
        let mut text = String::new();
        let mut number = start.fullmove_clock();
        let mut color = start.turn();
        for (i, mv) in self.moves.iter().enumerate() {
            if i > 0 {
                text.push(' ');
            }
            match color {
                Color::White => text.push_str(&format!("{number}. ")),
                Color::Black if i == 0 => text.push_str(&format!("{number}... ")),
                Color::Black => {}
            }
            text.push_str(&mv.notation());
            if color == Color::Black {
                number += 1;
            }
            color = color.opponent();
        }
        text
    }
}

/// Play one game from `start` until it ends or `cancel` fires.
///
/// The bot for the side to move is asked for a move each ply, and its answer is checked
/// against the legal list before it is applied.
pub fn play_game(
    white: &dyn Bot,
    black: &dyn Bot,
    start: Board,
    cancel: &CancelToken,
    config: &ArenaConfig,
) -> GameRecord {
    let mut board = start;
    let mut moves = MoveList::new();

    let finish = |board: Board, moves: MoveList, outcome: Outcome, termination: Termination| {
        let record = GameRecord {
            moves,
            final_board: board,
            outcome,
            termination,
        };
        debug!(
            "{} vs {}: {} by {} after {} plies",
            white.name(),
            black.name(),
            record.outcome,
            record.termination,
            record.moves.len()
        );
        report(&record, &start, config.report);
        record
    };

    loop {
        match board.status() {
            GameStatus::Checkmate => {
                let winner = board.turn().opponent();
                return finish(board, moves, Outcome::win_for(winner), Termination::Checkmate);
            }
            GameStatus::Stalemate => {
                return finish(board, moves, Outcome::Draw, Termination::Stalemate);
            }
            GameStatus::Normal | GameStatus::Check => {}
        }

        if cancel.is_cancelled() {
            return finish(board, moves, Outcome::Draw, Termination::Cancelled);
        }
        if config.max_plies.is_some_and(|max| moves.len() >= max) {
            return finish(board, moves, Outcome::Draw, Termination::MoveLimit);
        }

        if config.report >= ReportLevel::All {
            info!("\n{board}");
        }

        let bot = match board.turn() {
            Color::White => white,
            Color::Black => black,
        };

        let Some(mv) = bot.select_move(&board) else {
            warn!(
                "{} returned no move in {} with legal moves available",
                bot.name(),
                board.to_fen()
            );
            return finish(board, moves, Outcome::Error, Termination::NoMove);
        };

        if !board.legal_moves().contains(&mv) {
            warn!("{} played illegal move {mv} in {}", bot.name(), board.to_fen());
            return finish(board, moves, Outcome::Error, Termination::IllegalMove);
        }

        trace!("{} ({}) plays {mv}", bot.name(), board.turn());
        board = board.apply_move(&mv);
        moves.push(mv);
    }
}

fn report(record: &GameRecord, start: &Board, level: ReportLevel) {
    if level >= ReportLevel::Result {
        info!("\n{}", record.final_board);
    }
    if level >= ReportLevel::All {
        info!("{}", record.move_text(start));
    }
    if level >= ReportLevel::Result {
        info!(
            "Game complete. Outcome: {}, by {}",
            record.outcome, record.termination
        );
        info!("End position: {}", record.final_board.to_fen());
    }
}
