//! Square type and algebraic notation codec.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

/// A square on the board as `(row, col)`.
///
/// Row 0 is rank 8 (Black's back rank) and row 7 is rank 1; column 0 is file `a`.
/// Both indices are always in `0..8`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square(u8, u8);

impl Square {
    pub const A1: Square = Square::at(7, 0);
    pub const E1: Square = Square::at(7, 4);
    pub const H1: Square = Square::at(7, 7);
    pub const A8: Square = Square::at(0, 0);
    pub const E8: Square = Square::at(0, 4);
    pub const H8: Square = Square::at(0, 7);

    /// Create a square with bounds checking
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Option<Self> {
        if row < 8 && col < 8 {
            Some(Square(row as u8, col as u8))
        } else {
            None
        }
    }

    /// Create a square from indices known to be on the board.
    ///
    /// # Panics
    /// Panics if either index is outside `0..8`; that is an engine bug, not bad input.
    #[must_use]
    pub const fn at(row: usize, col: usize) -> Self {
        assert!(row < 8 && col < 8, "square index out of range");
        Square(row as u8, col as u8)
    }

    /// Row index (0 = rank 8)
    #[inline]
    #[must_use]
    pub const fn row(self) -> usize {
        self.0 as usize
    }

    /// Column index (0 = file a)
    #[inline]
    #[must_use]
    pub const fn col(self) -> usize {
        self.1 as usize
    }

    /// Rank number as printed in notation (1-8)
    #[inline]
    #[must_use]
    pub const fn rank(self) -> usize {
        8 - self.0 as usize
    }

    /// File letter as printed in notation ('a'-'h')
    #[inline]
    #[must_use]
    pub const fn file_char(self) -> char {
        (b'a' + self.1) as char
    }

    /// The square offset by `dx` columns and `dy` rows.
    ///
    /// Fails with `OutOfBounds` instead of wrapping when the result leaves the board;
    /// move generation relies on that to end rays and drop off-board jumps.
    pub fn relative(self, dx: isize, dy: isize) -> Result<Square, SquareError> {
        let row = self.row() as isize + dy;
        let col = self.col() as isize + dx;
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Ok(Square(row as u8, col as u8))
        } else {
            Err(SquareError::OutOfBounds {
                from: self,
                dx,
                dy,
            })
        }
    }

    /// All 64 squares in board-scan order (row-major from a8 to h1)
    pub fn all() -> impl Iterator<Item = Square> {
        (0..8u8).flat_map(|row| (0..8u8).map(move |col| Square(row, col)))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank())
    }
}

impl TryFrom<(usize, usize)> for Square {
    type Error = SquareError;

    fn try_from((row, col): (usize, usize)) -> Result<Self, Self::Error> {
        Square::new(row, col).ok_or(SquareError::IndexOutOfRange { row, col })
    }
}

impl FromStr for Square {
    type Err = SquareError;

    /// Accepts exactly one lowercase file letter followed by one rank digit.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SquareError::InvalidNotation {
            notation: s.to_string(),
        };

        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(invalid());
        }

        let col = match bytes[0] {
            b @ b'a'..=b'h' => b - b'a',
            _ => return Err(invalid()),
        };
        let row = match bytes[1] {
            b @ b'1'..=b'8' => b'8' - b,
            _ => return Err(invalid()),
        };

        Ok(Square(row, col))
    }
}
