//! Move type and move notation.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::{Color, Piece};
use super::square::Square;
use crate::board::error::MoveError;

/// A candidate move.
///
/// Carries the piece that stood on `from` and whatever stood on `to` before the move,
/// so captures can be recognised without looking at the board again.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub piece: (Color, Piece),
    pub captured: Option<(Color, Piece)>,
}

impl Move {
    /// True when the destination holds an opponent piece
    #[inline]
    #[must_use]
    pub const fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    #[inline]
    #[must_use]
    pub const fn color(&self) -> Color {
        self.piece.0
    }

    #[inline]
    #[must_use]
    pub const fn piece_kind(&self) -> Piece {
        self.piece.1
    }

    /// A pawn moving two rows from its start row
    #[must_use]
    pub fn is_double_pawn_push(&self) -> bool {
        self.piece_kind() == Piece::Pawn && self.from.row().abs_diff(self.to.row()) == 2
    }

    /// Four-character notation, e.g. `e2e4`
    #[must_use]
    pub fn notation(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

/// Moves in generation order.
pub type MoveList = Vec<Move>;

/// Split a move string of the form `[a-h][1-8][a-h][1-8]` into its two squares.
pub fn parse_notation(notation: &str) -> Result<(Square, Square), MoveError> {
    let invalid = || MoveError::InvalidNotation {
        notation: notation.to_string(),
    };

    if notation.len() != 4 || !notation.is_ascii() {
        return Err(invalid());
    }
    let from = notation[0..2].parse().map_err(|_| invalid())?;
    let to = notation[2..4].parse().map_err(|_| invalid())?;
    Ok((from, to))
}
