//! Whole-board attack and reachability scans.
//!
//! Both queries walk all 64 squares on every call. Positions change every
//! half-move, so nothing is cached between calls.

use super::{Board, Color, Square};

impl Board {
    /// True if some `color` piece threatens `square`.
    ///
    /// The piece on `ignore` (if any) and any piece standing on `square`
    /// itself are left out of the scan.
    #[must_use]
    pub fn under_attack(&self, square: Square, color: Color, ignore: Option<Square>) -> bool {
        self.scan(square, color, ignore, |board, from, piece| {
            piece.kind().can_attack(board, color, from, square)
        })
    }

    /// True if some `color` piece could move onto `square`.
    ///
    /// Same exclusions as `under_attack`, but pieces are tested with their
    /// movement rule, so a pawn can reach the square straight ahead of it
    /// rather than the diagonal it captures on.
    #[must_use]
    pub fn can_be_occupied(&self, square: Square, color: Color, ignore: Option<Square>) -> bool {
        self.scan(square, color, ignore, |board, from, piece| {
            piece.kind().can_move(board, color, from, square)
        })
    }

    /// First `color` piece attacking `square`, scanning in square order.
    #[must_use]
    pub fn first_attacker(&self, square: Square, color: Color) -> Option<Square> {
        self.pieces(color)
            .find(|&(from, piece)| {
                from != square && piece.kind().can_attack(self, color, from, square)
            })
            .map(|(from, _)| from)
    }

    fn scan<F>(&self, square: Square, color: Color, ignore: Option<Square>, reaches: F) -> bool
    where
        F: Fn(&Board, Square, super::Piece) -> bool,
    {
        self.pieces(color)
            .filter(|&(from, _)| from != square && Some(from) != ignore)
            .any(|(from, piece)| reaches(self, from, piece))
    }
}
