//! Error types for board operations.

use std::fmt;

use super::{Color, Square};

/// Error type for square parsing and offset failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Not a lowercase file letter followed by a rank digit
    InvalidNotation { notation: String },
    /// Row or column index outside 0-7
    IndexOutOfRange { row: usize, col: usize },
    /// An offset walked off the board
    OutOfBounds { from: Square, dx: isize, dy: isize },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
            SquareError::IndexOutOfRange { row, col } => {
                write!(f, "Square index ({row}, {col}) out of range (must be 0-7)")
            }
            SquareError::OutOfBounds { from, dx, dy } => {
                write!(f, "Offset ({dx}, {dy}) from {from} leaves the board")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for FEN parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    /// FEN string must have exactly six space-separated fields
    WrongFieldCount { found: usize },
    /// Piece placement must have eight ranks
    RankCount { found: usize },
    /// A rank does not describe exactly eight squares
    RankWidth { rank: usize, width: usize },
    /// Empty-square digit outside 1-8
    InvalidEmptyRun { char: char },
    /// Invalid piece character in placement
    InvalidPiece { char: char },
    /// Invalid side to move (must be 'w' or 'b')
    InvalidSideToMove { found: String },
    /// Invalid en passant square
    InvalidEnPassant { found: String },
    /// Halfmove or fullmove clock is not a non-negative integer
    InvalidClock { field: &'static str, found: String },
    /// Each color needs exactly one king
    KingCount { color: Color, found: usize },
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::WrongFieldCount { found } => {
                write!(f, "FEN must have 6 fields, found {found}")
            }
            FenError::RankCount { found } => {
                write!(f, "FEN placement must have 8 ranks, found {found}")
            }
            FenError::RankWidth { rank, width } => {
                write!(f, "Rank {rank} describes {width} squares, expected 8")
            }
            FenError::InvalidEmptyRun { char } => {
                write!(f, "Empty square count '{char}' out of range (must be 1-8)")
            }
            FenError::InvalidPiece { char } => {
                write!(f, "Invalid piece character '{char}' in FEN")
            }
            FenError::InvalidSideToMove { found } => {
                write!(f, "Invalid side to move '{found}', expected 'w' or 'b'")
            }
            FenError::InvalidEnPassant { found } => {
                write!(f, "Invalid en passant square '{found}'")
            }
            FenError::InvalidClock { field, found } => {
                write!(f, "Invalid {field} clock '{found}', expected a non-negative integer")
            }
            FenError::KingCount { color, found } => {
                write!(f, "{color} must have exactly one king, found {found}")
            }
        }
    }
}

impl std::error::Error for FenError {}

/// Error type for rejected move submissions.
///
/// A rejected move never changes the board it was submitted against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// Not four characters of the form `[a-h][1-8][a-h][1-8]`
    InvalidNotation { notation: String },
    /// Nothing stands on the source square
    EmptySquare { square: Square },
    /// The piece on the source square belongs to the side not on move
    NotYourPiece { square: Square, turn: Color },
    /// The piece cannot reach the destination
    IllegalMove { notation: String },
    /// The move is geometrically valid but leaves the mover's king attacked
    ExposesKing { notation: String },
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::InvalidNotation { notation } => {
                write!(f, "Invalid move notation '{notation}', expected e.g. 'e2e4'")
            }
            MoveError::EmptySquare { square } => {
                write!(f, "No piece on {square}")
            }
            MoveError::NotYourPiece { square, turn } => {
                write!(f, "The piece on {square} does not belong to {turn}")
            }
            MoveError::IllegalMove { notation } => {
                write!(f, "Illegal move '{notation}'")
            }
            MoveError::ExposesKing { notation } => {
                write!(f, "Move '{notation}' would leave the king in check")
            }
        }
    }
}

impl std::error::Error for MoveError {}
