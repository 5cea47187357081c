//! King safety: attack detection, the self-check filter and check/checkmate status.

use super::{Board, Color, Move, MoveList, Piece, Square};

impl Board {
    /// True if any pseudo-legal move of `by` lands on `square`.
    ///
    /// Pawns only attack squares holding an opponent piece, so this answers the question
    /// for occupied squares such as a king's square.
    #[must_use]
    pub fn is_square_attacked(&self, square: Square, by: Color) -> bool {
        self.pieces()
            .filter(|&(_, color, _)| color == by)
            .any(|(from, _, _)| {
                self.generate_moves_for_piece(from)
                    .iter()
                    .any(|m| m.to == square)
            })
    }

    /// The square of `color`'s king.
    ///
    /// # Panics
    /// Panics if the king is missing. Every `Board` built through the public API has one
    /// king per color, so a missing king is an engine bug.
    #[must_use]
    pub fn king_square(&self, color: Color) -> Square {
        self.pieces()
            .find(|&(_, c, p)| c == color && p == Piece::King)
            .map(|(sq, _, _)| sq)
            .unwrap_or_else(|| panic!("no {color} king on the board: {}", self.to_fen()))
    }

    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        self.is_square_attacked(self.king_square(color), color.opponent())
    }

    /// Play `mv` on a scratch copy and report whether the mover's king is then attacked.
    #[must_use]
    pub fn would_cause_self_check(&self, mv: &Move) -> bool {
        self.scratch_after(mv).is_in_check(mv.color())
    }

    /// Legal moves of `color`: its pseudo-legal moves minus those exposing its king.
    #[must_use]
    pub fn legal_moves_for(&self, color: Color) -> MoveList {
        self.generate_moves_for_player(color)
            .into_iter()
            .filter(|m| !self.would_cause_self_check(m))
            .collect()
    }

    /// Legal moves of the side to move
    #[must_use]
    pub fn legal_moves(&self) -> MoveList {
        self.legal_moves_for(self.turn)
    }

    pub(crate) fn has_legal_move(&self, color: Color) -> bool {
        self.generate_moves_for_player(color)
            .iter()
            .any(|m| !self.would_cause_self_check(m))
    }

    /// In check with no legal move
    #[must_use]
    pub fn is_checkmate(&self, color: Color) -> bool {
        self.is_in_check(color) && !self.has_legal_move(color)
    }

    /// The side to move has no legal move but is not in check
    #[must_use]
    pub fn is_stalemate(&self) -> bool {
        !self.is_in_check(self.turn) && !self.has_legal_move(self.turn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn test_king_square() {
        let board = Board::new();
        assert_eq!(board.king_square(Color::White), Square::E1);
        assert_eq!(board.king_square(Color::Black), Square::E8);
    }

    #[test]
    #[should_panic(expected = "no White king")]
    fn test_missing_king_panics() {
        let mut board = Board::new();
        board.clear_square(Square::E1);
        let _ = board.king_square(Color::White);
    }

    #[test]
    fn test_rook_gives_check_along_open_file() {
        let board = Board::from_fen("4k3/8/8/8/8/8/8/4RK2 b - - 0 1");
        assert!(board.is_in_check(Color::Black));
        assert!(!board.is_in_check(Color::White));
    }

    #[test]
    fn test_blocked_ray_is_not_check() {
        let board = Board::from_fen("4k3/4p3/8/8/8/8/8/4RK2 b - - 0 1");
        assert!(!board.is_in_check(Color::Black));
        assert!(board.is_square_attacked(sq("e7"), Color::White));
    }

    #[test]
    fn test_pawn_attacks_diagonally_only() {
        let board = Board::from_fen("8/8/4k3/3p4/2K5/8/8/8 w - - 0 1");
        assert!(board.is_in_check(Color::White));
        let board = Board::from_fen("8/8/4k3/3p4/3K4/8/8/8 w - - 0 1");
        assert!(!board.is_in_check(Color::White));
    }

    #[test]
    fn test_pinned_piece_cannot_leave_the_line() {
        let board = Board::from_fen("4r1k1/8/8/8/8/8/4B3/4K3 w - - 0 1");
        let bishop_moves = board.generate_moves_for_piece(sq("e2"));
        assert!(!bishop_moves.is_empty());
        assert!(bishop_moves.iter().all(|m| board.would_cause_self_check(m)));
        assert!(board.legal_moves().iter().all(|m| m.from != sq("e2")));
    }

    #[test]
    fn test_king_cannot_step_next_to_king() {
        let board = Board::from_fen("8/8/8/3k4/8/3K4/8/8 w - - 0 1");
        let legal: Vec<String> = board.legal_moves().iter().map(|m| m.to.to_string()).collect();
        for forbidden in ["c4", "d4", "e4"] {
            assert!(!legal.contains(&forbidden.to_string()));
        }
        assert_eq!(legal.len(), 5);
    }

    #[test]
    fn test_scratch_leaves_board_untouched() {
        let board = Board::new();
        let before = board;
        let mv = board.generate_moves_for_piece(sq("e2"))[0];
        let _ = board.would_cause_self_check(&mv);
        assert_eq!(board, before);
    }

    #[test]
    fn test_back_rank_checkmate() {
        let board = Board::from_fen("R5k1/5ppp/8/8/8/8/8/6K1 b - - 0 1");
        assert!(board.is_in_check(Color::Black));
        assert!(board.is_checkmate(Color::Black));
        assert!(!board.is_stalemate());
        assert!(board.legal_moves().is_empty());
    }

    #[test]
    fn test_check_with_escape_is_not_mate() {
        let board = Board::from_fen("R5k1/5pp1/8/8/8/8/8/6K1 b - - 0 1");
        assert!(board.is_in_check(Color::Black));
        assert!(!board.is_checkmate(Color::Black));
    }

    #[test]
    fn test_stalemate_is_not_checkmate() {
        let board = Board::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1");
        assert!(!board.is_in_check(Color::Black));
        assert!(!board.is_checkmate(Color::Black));
        assert!(board.is_stalemate());
        assert!(board.legal_moves().is_empty());
    }

    #[test]
    fn test_detection_is_pure() {
        let board = Board::from_fen("R5k1/5ppp/8/8/8/8/8/6K1 b - - 0 1");
        assert_eq!(board.is_in_check(Color::Black), board.is_in_check(Color::Black));
        assert_eq!(
            board.is_checkmate(Color::Black),
            board.is_checkmate(Color::Black)
        );
    }
}
