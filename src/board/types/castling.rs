//! Castling side and the back-rank geometry for each side.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Column the king starts on for both colors.
pub(crate) const KING_START_COL: usize = 4;

/// Which rook the king castles with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CastleSide {
    /// Short castling, with the h-file rook
    KingSide,
    /// Long castling, with the a-file rook
    QueenSide,
}

impl CastleSide {
    pub const BOTH: [CastleSide; 2] = [CastleSide::KingSide, CastleSide::QueenSide];

    /// The side whose king destination is column `col`, if any.
    #[must_use]
    pub const fn for_king_target(col: usize) -> Option<Self> {
        match col {
            6 => Some(CastleSide::KingSide),
            2 => Some(CastleSide::QueenSide),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn rook_col(self) -> usize {
        match self {
            CastleSide::KingSide => 7,
            CastleSide::QueenSide => 0,
        }
    }

    #[inline]
    #[must_use]
    pub const fn king_target_col(self) -> usize {
        match self {
            CastleSide::KingSide => 6,
            CastleSide::QueenSide => 2,
        }
    }

    /// Where the rook lands; also the square the king passes through.
    #[inline]
    #[must_use]
    pub const fn rook_target_col(self) -> usize {
        match self {
            CastleSide::KingSide => 5,
            CastleSide::QueenSide => 3,
        }
    }

    /// Columns strictly between the king and the rook.
    #[must_use]
    pub fn between_cols(self) -> std::ops::Range<usize> {
        match self {
            CastleSide::KingSide => KING_START_COL + 1..7,
            CastleSide::QueenSide => 1..KING_START_COL,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sides_mirror() {
        for side in CastleSide::BOTH {
            assert_eq!(CastleSide::for_king_target(side.king_target_col()), Some(side));
            assert!(side.between_cols().contains(&side.rook_target_col()));
            assert!(side.between_cols().contains(&side.king_target_col()));
        }
        assert_eq!(CastleSide::QueenSide.between_cols().len(), 3);
        assert_eq!(CastleSide::KingSide.between_cols().len(), 2);
        assert_eq!(CastleSide::for_king_target(4), None);
    }
}
