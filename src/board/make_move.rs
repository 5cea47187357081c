use super::error::MoveError;
use super::types::FEN_ORDER;
use super::{parse_notation, Board, Color, Move, Piece, Square, StatusFlags};

/// King and rook home squares guarding each castling right.
const fn castling_homes(color: Color, kingside: bool) -> (Square, Square) {
    match (color, kingside) {
        (Color::White, true) => (Square::E1, Square::H1),
        (Color::White, false) => (Square::E1, Square::A1),
        (Color::Black, true) => (Square::E8, Square::H8),
        (Color::Black, false) => (Square::E8, Square::A8),
    }
}

impl Board {
    /// Play `mv` and return the resulting position with fresh check/checkmate flags.
    ///
    /// `mv` must come from this board's move generator; it is not validated here.
    /// Use `try_apply_move` for untrusted input.
    #[must_use]
    pub fn apply_move(&self, mv: &Move) -> Board {
        let mut next = self.scratch_after(mv);
        next.refresh_flags();
        next
    }

    /// Parse a move such as `e2e4`, check it against the legal moves of the side to move
    /// and apply it. On error `self` is unchanged and the reason says why the move was refused.
    pub fn try_apply_move(&self, notation: &str) -> Result<Board, MoveError> {
        let (from, to) = parse_notation(notation)?;

        let Some(mv) = self
            .legal_moves()
            .into_iter()
            .find(|m| m.from == from && m.to == to)
        else {
            return Err(self.explain_rejection(from, to, notation));
        };

        let next = self.apply_move(&mv);
        if next.flags.check(mv.color()) {
            return Err(MoveError::ExposesKing {
                notation: notation.to_string(),
            });
        }
        Ok(next)
    }

    fn explain_rejection(&self, from: Square, to: Square, notation: &str) -> MoveError {
        match self.piece_at(from) {
            None => MoveError::EmptySquare { square: from },
            Some((color, _)) if color != self.turn => MoveError::NotYourPiece {
                square: from,
                turn: self.turn,
            },
            Some(_) => {
                let reachable = self
                    .generate_moves_for_piece(from)
                    .iter()
                    .any(|m| m.to == to);
                if reachable {
                    MoveError::ExposesKing {
                        notation: notation.to_string(),
                    }
                } else {
                    MoveError::IllegalMove {
                        notation: notation.to_string(),
                    }
                }
            }
        }
    }

    /// Copy the board and play `mv` on the copy without recomputing status flags.
    pub(crate) fn scratch_after(&self, mv: &Move) -> Board {
        let mut next = *self;
        next.play_unchecked(mv);
        next
    }

    fn play_unchecked(&mut self, mv: &Move) {
        debug_assert_eq!(self.piece_at(mv.from), Some(mv.piece), "stale move {mv}");

        let (mover, piece) = mv.piece;
        let is_capture = self.piece_at(mv.to).is_some();

        self.clear_square(mv.from);
        self.set_piece(mv.to, mover, piece);

        self.halfmove_clock = if is_capture || piece == Piece::Pawn {
            0
        } else {
            self.halfmove_clock.saturating_add(1)
        };
        if mover == Color::Black {
            self.fullmove_clock = self.fullmove_clock.saturating_add(1);
        }
        self.turn = mover.opponent();

        self.en_passant_target = if mv.is_double_pawn_push() {
            Square::new((mv.from.row() + mv.to.row()) / 2, mv.from.col())
        } else {
            None
        };

        self.update_castling_rights();
        self.flags = StatusFlags::default();
    }

    /// Revoke every right whose king or rook has left its home square.
    fn update_castling_rights(&mut self) {
        for (color, kingside, _) in FEN_ORDER {
            if !self.castling_rights.has(color, kingside) {
                continue;
            }
            let (king_home, rook_home) = castling_homes(color, kingside);
            if self.piece_at(king_home) != Some((color, Piece::King))
                || self.piece_at(rook_home) != Some((color, Piece::Rook))
            {
                self.castling_rights.remove(color, kingside);
            }
        }
    }
}
