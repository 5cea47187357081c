use std::str::FromStr;

use super::error::FenError;
use super::{piece_from_fen_char, Board, CastlingRights, Color, Piece, Square};

impl Board {
    /// Parse a board position from the six-field FEN notation.
    ///
    /// Castling letters other than `KQkq` are ignored; every other malformed field is an
    /// error. The position must have exactly one king per color.
    pub fn try_from_fen(fen: &str) -> Result<Self, FenError> {
        let mut board = Board::empty();
        let parts: Vec<&str> = fen.split_whitespace().collect();

        if parts.len() != 6 {
            return Err(FenError::WrongFieldCount { found: parts.len() });
        }

        // Piece placement, rank 8 first
        let ranks: Vec<&str> = parts[0].split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::RankCount { found: ranks.len() });
        }
        for (row, rank_str) in ranks.iter().enumerate() {
            let mut col = 0;
            for c in rank_str.chars() {
                if let Some(run) = c.to_digit(10) {
                    if !(1..=8).contains(&run) {
                        return Err(FenError::InvalidEmptyRun { char: c });
                    }
                    col += run as usize;
                } else {
                    let (color, piece) =
                        piece_from_fen_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                    if col >= 8 {
                        return Err(FenError::RankWidth {
                            rank: 8 - row,
                            width: col + 1,
                        });
                    }
                    board.set_piece(Square::at(row, col), color, piece);
                    col += 1;
                }
            }
            if col != 8 {
                return Err(FenError::RankWidth {
                    rank: 8 - row,
                    width: col,
                });
            }
        }

        for color in Color::BOTH {
            let kings = board
                .pieces()
                .filter(|&(_, c, p)| c == color && p == Piece::King)
                .count();
            if kings != 1 {
                return Err(FenError::KingCount {
                    color,
                    found: kings,
                });
            }
        }

        // Side to move
        board.turn = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };

        board.castling_rights = CastlingRights::from_fen(parts[2]);

        board.en_passant_target = if parts[3] == "-" {
            None
        } else {
            Some(parts[3].parse().map_err(|_| FenError::InvalidEnPassant {
                found: parts[3].to_string(),
            })?)
        };

        board.halfmove_clock = parse_clock("halfmove", parts[4])?;
        board.fullmove_clock = parse_clock("fullmove", parts[5])?;

        board.refresh_flags();
        Ok(board)
    }

    /// Parse a board position from FEN notation.
    ///
    /// # Panics
    /// Panics if the FEN string is invalid. Use `try_from_fen` for fallible parsing.
    #[must_use]
    pub fn from_fen(fen: &str) -> Self {
        Self::try_from_fen(fen).expect("Invalid FEN string")
    }

    /// Convert the board position to FEN notation.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut rows: Vec<String> = Vec::with_capacity(8);
        for cells in &self.squares {
            let mut row = String::new();
            let mut empty = 0;
            for cell in cells {
                if let Some((color, piece)) = cell {
                    if empty > 0 {
                        row.push_str(&empty.to_string());
                        empty = 0;
                    }
                    row.push(piece.to_fen_char(*color));
                } else {
                    empty += 1;
                }
            }
            if empty > 0 {
                row.push_str(&empty.to_string());
            }
            rows.push(row);
        }

        let active = match self.turn {
            Color::White => "w",
            Color::Black => "b",
        };
        let ep = self
            .en_passant_target
            .map_or_else(|| "-".to_string(), |sq| sq.to_string());

        format!(
            "{} {} {} {} {} {}",
            rows.join("/"),
            active,
            self.castling_rights.to_fen(),
            ep,
            self.halfmove_clock,
            self.fullmove_clock
        )
    }
}

/// Clocks are plain decimal digits without sign or padding, so they re-encode unchanged.
fn parse_clock(field: &'static str, text: &str) -> Result<u32, FenError> {
    let invalid = || FenError::InvalidClock {
        field,
        found: text.to_string(),
    };
    let canonical = !text.is_empty()
        && text.bytes().all(|b| b.is_ascii_digit())
        && (text == "0" || !text.starts_with('0'));
    if !canonical {
        return Err(invalid());
    }
    text.parse().map_err(|_| invalid())
}

impl FromStr for Board {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::try_from_fen(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::START_FEN;

    #[test]
    fn test_start_position_round_trip() {
        let board = Board::try_from_fen(START_FEN).unwrap();
        assert_eq!(board.to_fen(), START_FEN);
        assert_eq!(Board::new().to_fen(), START_FEN);
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_fen_black_to_move_with_en_passant() {
        let fen = "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1";
        let board = Board::try_from_fen(fen).unwrap();
        assert_eq!(board.turn(), Color::Black);
        assert_eq!(board.en_passant_target(), Some("e3".parse().unwrap()));
        assert_eq!(
            board.piece_at("e4".parse().unwrap()),
            Some((Color::White, Piece::Pawn))
        );
        assert!(board.is_empty("e2".parse().unwrap()));
        assert_eq!(board.to_fen(), fen);
    }

    #[test]
    fn test_fen_error_field_count() {
        let result = Board::try_from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w");
        assert!(matches!(result, Err(FenError::WrongFieldCount { found: 2 })));
    }

    #[test]
    fn test_fen_error_invalid_piece() {
        let result =
            Board::try_from_fen("rnbqkbnr/ppppxppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
        assert!(matches!(result, Err(FenError::InvalidPiece { char: 'x' })));
    }

    #[test]
    fn test_fen_error_empty_run_digits() {
        let result =
            Board::try_from_fen("rnbqkbnr/pppppppp/9/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
        assert!(matches!(result, Err(FenError::InvalidEmptyRun { char: '9' })));

        let result =
            Board::try_from_fen("rnbqkbnr/pppppppp/08/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
        assert!(matches!(result, Err(FenError::InvalidEmptyRun { char: '0' })));
    }

    #[test]
    fn test_fen_error_rank_shape() {
        let result = Board::try_from_fen("rnbqkbnr/pppppppp/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
        assert!(matches!(result, Err(FenError::RankCount { found: 7 })));

        let result =
            Board::try_from_fen("rnbqkbnr/pppppppp/7/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
        assert!(matches!(result, Err(FenError::RankWidth { rank: 6, width: 7 })));

        let result =
            Board::try_from_fen("rnbqkbnr/ppppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
        assert!(matches!(result, Err(FenError::RankWidth { rank: 7, .. })));
    }

    #[test]
    fn test_fen_error_invalid_side_to_move() {
        let result =
            Board::try_from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR x KQkq - 0 1");
        assert!(matches!(result, Err(FenError::InvalidSideToMove { .. })));
    }

    #[test]
    fn test_fen_castling_is_permissive() {
        let board =
            Board::try_from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w XQkz - 0 1")
                .unwrap();
        assert_eq!(board.castling_rights().to_fen(), "Qk");
    }

    #[test]
    fn test_fen_no_castling() {
        let board =
            Board::try_from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w - - 0 1").unwrap();
        assert_eq!(board.castling_rights(), CastlingRights::none());
    }

    #[test]
    fn test_fen_error_invalid_en_passant() {
        let result =
            Board::try_from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq z9 0 1");
        assert!(matches!(result, Err(FenError::InvalidEnPassant { .. })));
    }

    #[test]
    fn test_fen_error_clocks() {
        let result =
            Board::try_from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - -1 1");
        assert!(matches!(
            result,
            Err(FenError::InvalidClock {
                field: "halfmove",
                ..
            })
        ));

        let result =
            Board::try_from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 one");
        assert!(matches!(
            result,
            Err(FenError::InvalidClock {
                field: "fullmove",
                ..
            })
        ));
    }

    #[test]
    fn test_fen_error_missing_king() {
        let result = Board::try_from_fen("8/8/8/8/8/8/8/K7 w - - 0 1");
        assert!(matches!(
            result,
            Err(FenError::KingCount {
                color: Color::Black,
                found: 0
            })
        ));
    }

    #[test]
    fn test_clock_parsing() {
        let board = Board::try_from_fen("8/8/8/8/8/8/8/K1k5 w - - 42 17").unwrap();
        assert_eq!(board.halfmove_clock(), 42);
        assert_eq!(board.fullmove_clock(), 17);
        assert_eq!(board.to_fen(), "8/8/8/8/8/8/8/K1k5 w - - 42 17");
    }

    #[test]
    fn test_clock_must_be_plain_digits() {
        for clocks in ["+3 1", "03 1", "0 +1", "0 007", "0x1 1", "4294967296 1"] {
            let fen = format!("8/8/8/8/8/8/8/K1k5 w - - {clocks}");
            assert!(
                matches!(Board::try_from_fen(&fen), Err(FenError::InvalidClock { .. })),
                "{fen}"
            );
        }
        let fen = "8/8/8/8/8/8/8/K1k5 w - - 0 4294967295";
        assert_eq!(Board::from_fen(fen).to_fen(), fen);
    }

    #[test]
    fn test_from_str_trait() {
        let board: Board = START_FEN.parse().unwrap();
        assert_eq!(board.turn(), Color::White);
    }
}
