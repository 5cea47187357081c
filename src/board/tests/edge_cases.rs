//! Edge case tests for special positions.

use crate::board::{Board, Color, GameStatus, MoveError, Piece, Square};

fn sq(s: &str) -> Square {
    s.parse().unwrap()
}

#[test]
fn test_stalemate_position() {
    let board = Board::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1");
    assert_eq!(board.status(), GameStatus::Stalemate);
    assert!(board.flags().stalemate());
    assert!(!board.flags().checkmate(Color::Black));
    assert!(board.legal_moves().is_empty());
    assert!(board.status().is_terminal());
}

#[test]
fn test_stalemate_flag_only_for_side_to_move() {
    // Same cells but White to move: Black would be stalemated, White is not
    let board = Board::from_fen("7k/5Q2/6K1/8/8/8/8/8 w - - 0 1");
    assert!(!board.flags().stalemate());
    assert_eq!(board.status(), GameStatus::Normal);
}

#[test]
fn test_pawn_on_last_rank_has_no_moves() {
    // No promotion: a pawn on its far rank is simply stuck
    let board = Board::from_fen("P3k3/8/8/8/8/8/8/4K3 w - - 0 1");
    assert!(board.generate_moves_for_piece(sq("a8")).is_empty());
    let board = Board::from_fen("4k3/8/8/8/8/8/8/p3K3 b - - 0 1");
    assert!(board.generate_moves_for_piece(sq("a1")).is_empty());
}

#[test]
fn test_pawn_reaching_last_rank_stays_a_pawn() {
    let board = Board::from_fen("4k3/P7/8/8/8/8/8/4K3 w - - 0 1");
    let next = board.try_apply_move("a7a8").unwrap();
    assert_eq!(next.piece_at(sq("a8")), Some((Color::White, Piece::Pawn)));
}

#[test]
fn test_no_en_passant_capture() {
    let board = Board::from_fen("4k3/8/8/3Pp3/8/8/8/4K3 w - e6 0 2");
    assert_eq!(board.en_passant_target(), Some(sq("e6")));
    assert!(matches!(
        board.try_apply_move("d5e6"),
        Err(MoveError::IllegalMove { .. })
    ));
}

#[test]
fn test_no_castling_move() {
    let board = Board::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
    assert!(matches!(
        board.try_apply_move("e1g1"),
        Err(MoveError::IllegalMove { .. })
    ));
    assert!(board.castling_rights().has(Color::White, true));
}

#[test]
fn test_discovered_check_from_slider() {
    // Moving the bishop off the e-file uncovers the rook's check
    let board = Board::from_fen("4k3/8/8/8/4B3/8/8/4RK2 w - - 0 1");
    let next = board.try_apply_move("e4d5").unwrap();
    assert_eq!(next.status(), GameStatus::Check);
    assert!(next.flags().check(Color::Black));
}

#[test]
fn test_capturing_the_checker() {
    let board = Board::from_fen("4k3/8/8/8/8/8/3q4/4K3 w - - 0 1");
    assert_eq!(board.status(), GameStatus::Check);
    let legal: Vec<String> = board.legal_moves().iter().map(|m| m.notation()).collect();
    // d2 is guarded by nothing, so the king takes the queen; d1 and f2 stay attacked
    assert!(legal.contains(&"e1d2".to_string()));
    assert!(!legal.contains(&"e1f2".to_string()));
    assert!(!legal.contains(&"e1d1".to_string()));
}

#[test]
fn test_double_push_blocked_on_either_square() {
    let board = Board::from_fen("4k3/8/8/8/8/4n3/4P3/4K3 w - - 0 1");
    assert!(board.generate_moves_for_piece(sq("e2")).is_empty());
    let board = Board::from_fen("4k3/8/8/8/4n3/8/4P3/4K3 w - - 0 1");
    let moves = board.generate_moves_for_piece(sq("e2"));
    assert_eq!(moves.len(), 1);
    assert_eq!(moves[0].to, sq("e3"));
}

#[test]
fn test_display_shows_side_and_rights() {
    let board = Board::new().try_apply_move("e2e4").unwrap();
    let text = board.to_string();
    assert!(text.contains("Black to play."));
    assert!(text.contains("Castling rights: KQkq"));
    assert!(text.contains("En passant target: e3"));
    assert!(text.contains('♔'));
}
