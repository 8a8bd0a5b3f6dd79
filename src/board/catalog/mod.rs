//! Per-kind movement and attack rules.
//!
//! Each `PieceKind` owns one entry in a static dispatch table holding its
//! movement predicate, its attack predicate and the two line-capability
//! flags used when tracing pins and checking lines. The predicates only read
//! the board to test for obstruction; they never look at what stands on the
//! destination square.

mod kings;
mod knights;
mod pawns;
mod sliders;

pub(crate) use kings::KING_NEIGHBOURS;

use super::{Board, Color, PieceKind, Square};

/// Geometry test for a piece of the given color travelling `from` -> `to`.
pub(crate) type Predicate = fn(&Board, Color, Square, Square) -> bool;

/// Rule entry for one piece kind.
pub(crate) struct PieceRules {
    pub(crate) can_move: Predicate,
    pub(crate) can_attack: Predicate,
    pub(crate) attacks_straight: bool,
    pub(crate) attacks_diagonally: bool,
}

/// Indexed by `PieceKind::index`.
static RULES: [PieceRules; 6] = [
    PieceRules {
        can_move: pawns::can_move,
        can_attack: pawns::can_attack,
        attacks_straight: false,
        attacks_diagonally: false,
    },
    PieceRules {
        can_move: knights::can_move,
        can_attack: knights::can_move,
        attacks_straight: false,
        attacks_diagonally: false,
    },
    PieceRules {
        can_move: sliders::bishop,
        can_attack: sliders::bishop,
        attacks_straight: false,
        attacks_diagonally: true,
    },
    PieceRules {
        can_move: sliders::rook,
        can_attack: sliders::rook,
        attacks_straight: true,
        attacks_diagonally: false,
    },
    PieceRules {
        can_move: sliders::queen,
        can_attack: sliders::queen,
        attacks_straight: true,
        attacks_diagonally: true,
    },
    PieceRules {
        can_move: kings::can_move,
        can_attack: kings::can_move,
        attacks_straight: false,
        attacks_diagonally: false,
    },
];

impl PieceKind {
    #[inline]
    pub(crate) fn rules(self) -> &'static PieceRules {
        &RULES[self.index()]
    }

    /// Whether a `color` piece of this kind could relocate `from` -> `to`,
    /// ignoring whatever occupies `to`.
    #[inline]
    #[must_use]
    pub fn can_move(self, board: &Board, color: Color, from: Square, to: Square) -> bool {
        (self.rules().can_move)(board, color, from, to)
    }

    /// Whether a `color` piece of this kind on `from` threatens `to`.
    ///
    /// Differs from `can_move` only for pawns, which capture diagonally.
    /// En passant is handled by the legality engine, not here.
    #[inline]
    #[must_use]
    pub fn can_attack(self, board: &Board, color: Color, from: Square, to: Square) -> bool {
        (self.rules().can_attack)(board, color, from, to)
    }

    /// Attacks any distance along ranks and files (rook, queen).
    #[inline]
    #[must_use]
    pub fn attacks_straight(self) -> bool {
        self.rules().attacks_straight
    }

    /// Attacks any distance along diagonals (bishop, queen).
    #[inline]
    #[must_use]
    pub fn attacks_diagonally(self) -> bool {
        self.rules().attacks_diagonally
    }
}
