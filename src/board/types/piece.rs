//! Piece and color types, plus the piece catalog.

use std::collections::HashMap;
use std::fmt;

use once_cell::sync::Lazy;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Chess piece kinds. An empty cell is `None` on the board, so there is no `Empty` kind.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Piece {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl Piece {
    /// All piece kinds in catalog order
    pub const ALL: [Piece; 6] = [
        Piece::Pawn,
        Piece::Knight,
        Piece::Bishop,
        Piece::Rook,
        Piece::Queen,
        Piece::King,
    ];

    /// Parse a piece kind from a FEN letter of either case
    #[must_use]
    pub fn from_char(c: char) -> Option<Piece> {
        match c.to_ascii_lowercase() {
            'p' => Some(Piece::Pawn),
            'n' => Some(Piece::Knight),
            'b' => Some(Piece::Bishop),
            'r' => Some(Piece::Rook),
            'q' => Some(Piece::Queen),
            'k' => Some(Piece::King),
            _ => None,
        }
    }

    /// Lowercase FEN letter
    #[inline]
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            Piece::Pawn => 'p',
            Piece::Knight => 'n',
            Piece::Bishop => 'b',
            Piece::Rook => 'r',
            Piece::Queen => 'q',
            Piece::King => 'k',
        }
    }

    /// FEN letter with case based on color (uppercase for White)
    #[inline]
    #[must_use]
    pub fn to_fen_char(self, color: Color) -> char {
        let c = self.to_char();
        if color == Color::White {
            c.to_ascii_uppercase()
        } else {
            c
        }
    }

    /// Unicode glyph used when drawing the board.
    ///
    /// Uses the filled glyphs for White and the outlined ones for Black, which reads
    /// correctly on a dark terminal background.
    #[must_use]
    pub const fn symbol(self, color: Color) -> char {
        match (color, self) {
            (Color::White, Piece::Pawn) => '♟',
            (Color::White, Piece::Knight) => '♞',
            (Color::White, Piece::Bishop) => '♝',
            (Color::White, Piece::Rook) => '♜',
            (Color::White, Piece::Queen) => '♛',
            (Color::White, Piece::King) => '♚',
            (Color::Black, Piece::Pawn) => '♙',
            (Color::Black, Piece::Knight) => '♘',
            (Color::Black, Piece::Bishop) => '♗',
            (Color::Black, Piece::Rook) => '♖',
            (Color::Black, Piece::Queen) => '♕',
            (Color::Black, Piece::King) => '♔',
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Piece::Pawn => "pawn",
            Piece::Knight => "knight",
            Piece::Bishop => "bishop",
            Piece::Rook => "rook",
            Piece::Queen => "queen",
            Piece::King => "king",
        };
        f.write_str(name)
    }
}

/// Chess colors.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Both colors in index order (White=0, Black=1)
    pub const BOTH: [Color; 2] = [Color::White, Color::Black];

    #[inline]
    #[must_use]
    pub(crate) const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    /// Returns the opposite color
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row offset of a single pawn step (-1 for White, +1 for Black; row 0 is rank 8)
    #[inline]
    #[must_use]
    pub(crate) const fn pawn_direction(self) -> isize {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// Row the pawns start on (6 for White, 1 for Black)
    #[inline]
    #[must_use]
    pub(crate) const fn pawn_start_row(self) -> usize {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

/// FEN letter to piece lookup, built once and never mutated.
static FEN_CATALOG: Lazy<HashMap<char, (Color, Piece)>> = Lazy::new(|| {
    let mut catalog = HashMap::with_capacity(12);
    for color in Color::BOTH {
        for piece in Piece::ALL {
            catalog.insert(piece.to_fen_char(color), (color, piece));
        }
    }
    catalog
});

/// Look up the colored piece for a FEN letter (`'K'` is a white king, `'q'` a black queen).
#[must_use]
pub fn piece_from_fen_char(c: char) -> Option<(Color, Piece)> {
    FEN_CATALOG.get(&c).copied()
}
