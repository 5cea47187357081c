//! Pseudo-legal move generation.
//!
//! Moves produced here respect piece geometry, blocking and captures, but may still
//! leave the mover's own king attacked. `legality` filters them.

mod kings;
mod knights;
mod pawns;
mod sliders;

use super::{Board, Color, Move, MoveList, Piece, Square};

impl Board {
    /// Pseudo-legal moves for the piece standing on `from`.
    ///
    /// Returns an empty list for an empty square. The piece's own color decides the
    /// direction and which pieces count as opponents, regardless of whose turn it is.
    #[must_use]
    pub fn generate_moves_for_piece(&self, from: Square) -> MoveList {
        let mut moves = MoveList::new();
        self.push_piece_moves(from, &mut moves);
        moves
    }

    /// Pseudo-legal moves for every piece of `color`, in board-scan order.
    #[must_use]
    pub fn generate_moves_for_player(&self, color: Color) -> MoveList {
        let mut moves = MoveList::with_capacity(64);
        for (from, c, _) in self.pieces() {
            if c == color {
                self.push_piece_moves(from, &mut moves);
            }
        }
        moves
    }

    fn push_piece_moves(&self, from: Square, moves: &mut MoveList) {
        let Some((color, piece)) = self.piece_at(from) else {
            return;
        };
        match piece {
            Piece::Pawn => self.generate_pawn_moves(from, color, moves),
            Piece::Knight => self.generate_knight_moves(from, color, moves),
            Piece::Bishop => self.generate_sliding_moves(from, color, &sliders::DIAGONALS, moves),
            Piece::Rook => self.generate_sliding_moves(from, color, &sliders::ORTHOGONALS, moves),
            Piece::Queen => {
                self.generate_sliding_moves(from, color, &sliders::ALL_DIRECTIONS, moves)
            }
            Piece::King => self.generate_king_moves(from, color, moves),
        }
    }

    /// Build a move from `from` to `to`, recording both occupants.
    fn create_move(&self, from: Square, to: Square) -> Option<Move> {
        let piece = self.piece_at(from)?;
        Some(Move {
            from,
            to,
            piece,
            captured: self.piece_at(to),
        })
    }

    /// Push a step onto `to` if it is empty or holds an opponent piece.
    ///
    /// Shared by the knight and king, which jump to fixed offsets.
    fn push_step(&self, from: Square, to: Square, color: Color, moves: &mut MoveList) {
        if self.is_color(to, color) {
            return;
        }
        if let Some(mv) = self.create_move(from, to) {
            moves.push(mv);
        }
    }
}
