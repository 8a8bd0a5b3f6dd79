//! Sign-vector directions between squares.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::square::Square;

/// The direction from one square to another as a pair of signs in {-1, 0, 1}.
///
/// Two moves travel along the same line exactly when their directions
/// compare equal, which is how attack lines and pins are matched.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Direction {
    row: i8,
    col: i8,
}

impl Direction {
    /// The eight king steps.
    pub const ALL: [Direction; 8] = [
        Direction::new(1, 0),
        Direction::new(-1, 0),
        Direction::new(0, 1),
        Direction::new(0, -1),
        Direction::new(1, 1),
        Direction::new(1, -1),
        Direction::new(-1, 1),
        Direction::new(-1, -1),
    ];

    /// Build a direction; components are reduced to their sign.
    #[inline]
    #[must_use]
    pub const fn new(row: i8, col: i8) -> Self {
        Direction {
            row: row.signum(),
            col: col.signum(),
        }
    }

    /// Direction of travel from `from` to `to`. `(0, 0)` for the same square.
    #[must_use]
    pub fn between(from: Square, to: Square) -> Self {
        let sign = |a: usize, b: usize| match b.cmp(&a) {
            std::cmp::Ordering::Greater => 1,
            std::cmp::Ordering::Less => -1,
            std::cmp::Ordering::Equal => 0,
        };
        Direction {
            row: sign(from.row(), to.row()),
            col: sign(from.col(), to.col()),
        }
    }

    #[inline]
    #[must_use]
    pub const fn row(self) -> i8 {
        self.row
    }

    #[inline]
    #[must_use]
    pub const fn col(self) -> i8 {
        self.col
    }

    #[inline]
    #[must_use]
    pub const fn reversed(self) -> Self {
        Direction {
            row: -self.row,
            col: -self.col,
        }
    }

    /// Along a rank or file.
    #[inline]
    #[must_use]
    pub const fn is_straight(self) -> bool {
        (self.row == 0) != (self.col == 0)
    }

    /// Along a diagonal.
    #[inline]
    #[must_use]
    pub const fn is_diagonal(self) -> bool {
        self.row != 0 && self.col != 0
    }
}
