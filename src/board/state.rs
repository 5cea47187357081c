use std::fmt;

use super::{CastlingRights, Color, Piece, Square};

/// FEN of the standard starting position
pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Status of the side to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GameStatus {
    Normal,
    Check,
    Checkmate,
    Stalemate,
}

impl GameStatus {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, GameStatus::Checkmate | GameStatus::Stalemate)
    }
}

/// Check/checkmate flags for both colors, recomputed after every transition.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct StatusFlags {
    pub(crate) check: [bool; 2],
    pub(crate) checkmate: [bool; 2],
    pub(crate) stalemate: bool,
}

impl StatusFlags {
    #[must_use]
    pub const fn check(&self, color: Color) -> bool {
        self.check[color.index()]
    }

    #[must_use]
    pub const fn checkmate(&self, color: Color) -> bool {
        self.checkmate[color.index()]
    }

    /// Side to move has no legal move and is not in check
    #[must_use]
    pub const fn stalemate(&self) -> bool {
        self.stalemate
    }
}

/// A complete game position.
///
/// Boards are values: every accepted move produces a new `Board` and leaves the old one
/// untouched, so callers on other threads can keep reading earlier positions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    pub(crate) squares: [[Option<(Color, Piece)>; 8]; 8], // [row][col], row 0 = rank 8
    pub(crate) turn: Color,
    pub(crate) castling_rights: CastlingRights,
    pub(crate) en_passant_target: Option<Square>,
    pub(crate) halfmove_clock: u32,
    pub(crate) fullmove_clock: u32,
    pub(crate) flags: StatusFlags,
}

impl Board {
    /// The standard starting position
    #[must_use]
    pub fn new() -> Self {
        let mut board = Board::empty();
        let back_rank = [
            Piece::Rook,
            Piece::Knight,
            Piece::Bishop,
            Piece::Queen,
            Piece::King,
            Piece::Bishop,
            Piece::Knight,
            Piece::Rook,
        ];
        for (col, piece) in back_rank.iter().enumerate() {
            board.set_piece(Square::at(0, col), Color::Black, *piece);
            board.set_piece(Square::at(1, col), Color::Black, Piece::Pawn);
            board.set_piece(Square::at(6, col), Color::White, Piece::Pawn);
            board.set_piece(Square::at(7, col), Color::White, *piece);
        }

        board.castling_rights = CastlingRights::all();
        board.refresh_flags();
        board
    }

    pub(crate) fn empty() -> Self {
        Board {
            squares: [[None; 8]; 8],
            turn: Color::White,
            castling_rights: CastlingRights::none(),
            en_passant_target: None,
            halfmove_clock: 0,
            fullmove_clock: 1,
            flags: StatusFlags::default(),
        }
    }

    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<(Color, Piece)> {
        self.squares[sq.row()][sq.col()]
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.piece_at(sq).is_none()
    }

    /// True when `sq` holds a piece of `color`
    #[inline]
    #[must_use]
    pub fn is_color(&self, sq: Square, color: Color) -> bool {
        matches!(self.piece_at(sq), Some((c, _)) if c == color)
    }

    #[inline]
    pub(crate) fn set_piece(&mut self, sq: Square, color: Color, piece: Piece) {
        self.squares[sq.row()][sq.col()] = Some((color, piece));
    }

    #[inline]
    pub(crate) fn clear_square(&mut self, sq: Square) {
        self.squares[sq.row()][sq.col()] = None;
    }

    /// Occupied squares with their pieces, in board-scan order
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Color, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.piece_at(sq).map(|(c, p)| (sq, c, p)))
    }

    #[must_use]
    pub fn turn(&self) -> Color {
        self.turn
    }

    #[must_use]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    #[must_use]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    #[must_use]
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    #[must_use]
    pub fn fullmove_clock(&self) -> u32 {
        self.fullmove_clock
    }

    /// Check/checkmate flags as of the last transition
    #[must_use]
    pub fn flags(&self) -> &StatusFlags {
        &self.flags
    }

    /// Status of the side to move
    #[must_use]
    pub fn status(&self) -> GameStatus {
        let turn = self.turn;
        if self.flags.checkmate(turn) {
            GameStatus::Checkmate
        } else if self.flags.stalemate() {
            GameStatus::Stalemate
        } else if self.flags.check(turn) {
            GameStatus::Check
        } else {
            GameStatus::Normal
        }
    }

    /// Recompute the derived flags for both colors from the cells.
    pub(crate) fn refresh_flags(&mut self) {
        let mut flags = StatusFlags::default();
        for color in Color::BOTH {
            let in_check = self.is_in_check(color);
            let has_moves = self.has_legal_move(color);
            flags.check[color.index()] = in_check;
            flags.checkmate[color.index()] = in_check && !has_moves;
            if color == self.turn {
                flags.stalemate = !in_check && !has_moves;
            }
        }
        self.flags = flags;
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..8 {
            write!(f, "{} ", 8 - row)?;
            for col in 0..8 {
                let glyph = self.squares[row][col].map_or('·', |(c, p)| p.symbol(c));
                write!(f, "{glyph} ")?;
            }
            writeln!(f)?;
        }
        writeln!(f, "  a b c d e f g h")?;
        writeln!(f)?;

        writeln!(f, "{} to play.", self.turn)?;
        writeln!(
            f,
            "Halfmoves: {}  Fullmoves: {}",
            self.halfmove_clock, self.fullmove_clock
        )?;
        write!(f, "Castling rights: {}", self.castling_rights.to_fen())?;
        if let Some(ep) = self.en_passant_target {
            write!(f, "\nEn passant target: {ep}")?;
        }
        Ok(())
    }
}
