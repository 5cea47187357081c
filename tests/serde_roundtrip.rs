#![cfg(feature = "serde")]

use chess_arena::arena::{MatchupResults, Outcome, Termination};
use chess_arena::board::{Board, CastlingRights, Color, Move, Piece, Square};
use chess_arena::config::ReportLevel;

#[test]
fn move_survives_json() {
    let board = Board::new();
    let mv: Move = board.legal_moves()[0];
    let json = serde_json::to_string(&mv).unwrap();
    let back: Move = serde_json::from_str(&json).unwrap();
    assert_eq!(back, mv);
}

#[test]
fn small_types_survive_json() {
    let square: Square = "e4".parse().unwrap();
    let json = serde_json::to_string(&square).unwrap();
    assert_eq!(serde_json::from_str::<Square>(&json).unwrap(), square);

    let piece = (Color::Black, Piece::Queen);
    let json = serde_json::to_string(&piece).unwrap();
    assert_eq!(serde_json::from_str::<(Color, Piece)>(&json).unwrap(), piece);

    let rights = CastlingRights::from_fen("Kq");
    let json = serde_json::to_string(&rights).unwrap();
    assert_eq!(serde_json::from_str::<CastlingRights>(&json).unwrap(), rights);

    let json = serde_json::to_string(&ReportLevel::All).unwrap();
    assert_eq!(serde_json::from_str::<ReportLevel>(&json).unwrap(), ReportLevel::All);
}

#[test]
fn results_survive_json() {
    let mut results = MatchupResults::default();
    results.record(Outcome::BlackWins);
    results.record(Outcome::Draw);
    let json = serde_json::to_string(&results).unwrap();
    assert!(json.contains("\"black_wins\":1"));
    assert_eq!(serde_json::from_str::<MatchupResults>(&json).unwrap(), results);

    let json = serde_json::to_string(&Termination::Checkmate).unwrap();
    assert_eq!(json, "\"Checkmate\"");
}
