//! Castling eligibility and execution.

use log::debug;

use super::{Board, CastleSide, PieceKind, Square, KING_START_COL};

impl Board {
    /// Whether the side to move may castle on `side` right now.
    ///
    /// King and rook must stand unmoved on their home squares with nothing
    /// between them, and the king's start square, the square it crosses and
    /// its destination must all be free of attack.
    #[must_use]
    pub fn can_castle(&self, side: CastleSide) -> bool {
        let color = self.side_to_move;
        let row = color.back_rank();

        let unmoved = |col: usize, kind: PieceKind| {
            self.piece_at(Square::at(row, col))
                .is_some_and(|p| p.is(color, kind) && !p.has_moved())
        };
        if !unmoved(KING_START_COL, PieceKind::King) || !unmoved(side.rook_col(), PieceKind::Rook) {
            return false;
        }

        if !side
            .between_cols()
            .all(|col| self.is_empty(Square::at(row, col)))
        {
            return false;
        }

        [KING_START_COL, side.rook_target_col(), side.king_target_col()]
            .into_iter()
            .all(|col| !self.under_attack(Square::at(row, col), color.opponent(), None))
    }

    /// Move king and rook together and pass the turn.
    pub(crate) fn castle(&mut self, side: CastleSide) {
        let color = self.side_to_move;
        let row = color.back_rank();
        let king_from = Square::at(row, KING_START_COL);
        let rook_from = Square::at(row, side.rook_col());
        let king_to = Square::at(row, side.king_target_col());
        let rook_to = Square::at(row, side.rook_target_col());

        let (Some(mut king), Some(mut rook)) = (self.piece_at(king_from), self.piece_at(rook_from))
        else {
            debug_assert!(false, "castling without king and rook in place");
            return;
        };

        self.take(king_from);
        self.take(rook_from);
        king.mark_moved();
        rook.mark_moved();
        self.put(king_to, king);
        self.put(rook_to, rook);

        debug!("{color} castles {side:?}: king {king_from}{king_to}, rook {rook_from}{rook_to}");
        self.end_turn();
    }
}
