//! Core chess types.
//!
//! - `Piece` and `Color` - piece kinds, colors and the piece catalog
//! - `Square` - board square and algebraic notation
//! - `Move` - move representation and move notation
//! - `CastlingRights` - castling state

mod castling;
mod moves;
mod piece;
mod square;

pub use castling::CastlingRights;
pub(crate) use castling::FEN_ORDER;
pub use moves::{parse_notation, Move, MoveList};
pub use piece::{piece_from_fen_char, Color, Piece};
pub use square::Square;
