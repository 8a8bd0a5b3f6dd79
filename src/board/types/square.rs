//! Square type and coordinate helpers.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::direction::Direction;
use crate::board::error::SquareError;

/// A square on the chess board, represented as (row, column).
///
/// Row 0 is White's back rank, column 0 is the a-file. Both coordinates are
/// always in `0..8`: every constructor checks its input, so no board lookup
/// can ever index outside the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "(usize, usize)", into = "(usize, usize)")
)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    /// Create a new square with bounds checking
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Option<Self> {
        if row < 8 && col < 8 {
            Some(Square {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// Create a square from coordinates known to be on the board.
    ///
    /// # Panics
    ///
    /// Panics if either coordinate is outside `0..8`.
    #[must_use]
    pub const fn at(row: usize, col: usize) -> Self {
        assert!(row < 8 && col < 8, "square coordinates out of range");
        Square {
            row: row as u8,
            col: col as u8,
        }
    }

    /// Row (0-7, where 0 = rank 1)
    #[inline]
    #[must_use]
    pub const fn row(self) -> usize {
        self.row as usize
    }

    /// Column (0-7, where 0 = file a)
    #[inline]
    #[must_use]
    pub const fn col(self) -> usize {
        self.col as usize
    }

    /// Square index (0-63, a1=0, b1=1, ..., h8=63)
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.row() * 8 + self.col()
    }

    /// Create a square from an index (0-63)
    #[inline]
    #[must_use]
    pub const fn from_index(idx: usize) -> Self {
        Square::at(idx / 8, idx % 8)
    }

    /// All 64 squares in index order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64).map(Square::from_index)
    }

    /// The square `dr` rows and `dc` columns away, if it is on the board.
    #[must_use]
    pub fn offset(self, dr: isize, dc: isize) -> Option<Self> {
        let row = self.row() as isize + dr;
        let col = self.col() as isize + dc;
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Some(Square::at(row as usize, col as usize))
        } else {
            None
        }
    }

    /// One step in `dir`, if it stays on the board.
    #[inline]
    #[must_use]
    pub fn step(self, dir: Direction) -> Option<Self> {
        self.offset(dir.row() as isize, dir.col() as isize)
    }

    #[inline]
    #[must_use]
    pub const fn row_distance(self, other: Square) -> usize {
        self.row().abs_diff(other.row())
    }

    #[inline]
    #[must_use]
    pub const fn col_distance(self, other: Square) -> usize {
        self.col().abs_diff(other.col())
    }

    /// King-move distance between two squares.
    #[inline]
    #[must_use]
    pub fn chebyshev(self, other: Square) -> usize {
        self.row_distance(other).max(self.col_distance(other))
    }

    /// True if both squares share a rank or a file.
    #[inline]
    #[must_use]
    pub const fn is_straight_with(self, other: Square) -> bool {
        self.row == other.row || self.col == other.col
    }

    /// True if both squares lie on a common diagonal.
    #[inline]
    #[must_use]
    pub const fn is_diagonal_with(self, other: Square) -> bool {
        self.row_distance(other) == self.col_distance(other)
    }

    /// Squares strictly between `self` and `other`, walking from `self`.
    ///
    /// Empty when the squares are adjacent, identical, or not on a common
    /// rank, file or diagonal.
    #[must_use]
    pub fn between(self, other: Square) -> Vec<Square> {
        if self == other || !(self.is_straight_with(other) || self.is_diagonal_with(other)) {
            return Vec::new();
        }
        let dir = Direction::between(self, other);
        let mut squares = Vec::new();
        let mut cursor = self;
        while let Some(next) = cursor.step(dir) {
            if next == other {
                break;
            }
            squares.push(next);
            cursor = next;
        }
        squares
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (self.col + b'a') as char, self.row + 1)
    }
}

impl TryFrom<(usize, usize)> for Square {
    type Error = SquareError;

    fn try_from((row, col): (usize, usize)) -> Result<Self, Self::Error> {
        if row >= 8 {
            return Err(SquareError::RankOutOfBounds { rank: row });
        }
        if col >= 8 {
            return Err(SquareError::FileOutOfBounds { file: col });
        }
        Ok(Square::at(row, col))
    }
}

impl From<Square> for (usize, usize) {
    fn from(sq: Square) -> Self {
        (sq.row(), sq.col())
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SquareError::InvalidNotation {
            notation: s.to_string(),
        };
        let mut chars = s.chars();
        let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(invalid());
        };

        let col = match file.to_ascii_lowercase() {
            c @ 'a'..='h' => c as usize - 'a' as usize,
            _ => return Err(invalid()),
        };
        let row = match rank {
            '1'..='8' => rank as usize - '1' as usize,
            _ => return Err(invalid()),
        };

        Ok(Square::at(row, col))
    }
}
