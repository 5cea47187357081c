//! Chess board representation and rules.
//!
//! An 8x8 mailbox board with FEN codec, pseudo-legal move generation, the self-check
//! filter and check/checkmate/stalemate detection. Castling, promotion and en passant
//! captures are not played; the en passant target square is only tracked.
//!
//! # Example
//! ```
//! use chess_arena::board::{Board, GameStatus};
//!
//! let board = Board::new();
//! assert_eq!(board.legal_moves().len(), 20);
//!
//! let board = board.try_apply_move("e2e4").unwrap();
//! assert_eq!(board.status(), GameStatus::Normal);
//! assert_eq!(
//!     board.to_fen(),
//!     "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1"
//! );
//! ```

mod error;
mod fen;
mod legality;
mod make_move;
mod movegen;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use error::{FenError, MoveError, SquareError};
pub use state::{Board, GameStatus, StatusFlags, START_FEN};
pub use types::{
    parse_notation, piece_from_fen_char, CastlingRights, Color, Move, MoveList, Piece, Square,
};
