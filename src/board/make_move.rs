//! Mutation entry points: moving, promoting and the checked `play` wrapper.

use log::debug;

use super::{Board, CastleSide, MoveError, Piece, PieceKind, Square, Status};

impl Board {
    /// Move the piece on `from` to `to` and pass the turn.
    ///
    /// The move must already have been accepted by `try_move`. Handles the
    /// en passant bookkeeping, castling (a king moving two columns) and the
    /// moved flags of kings and rooks. Does not classify the resulting
    /// position; see `play` or `check_and_mate`.
    pub fn move_piece(&mut self, from: Square, to: Square) {
        let Some(piece) = self.piece_at(from) else {
            debug_assert!(false, "move_piece from empty square {from}");
            return;
        };
        let color = piece.color();

        match piece.kind() {
            PieceKind::Pawn => {
                if Some(to) == self.en_passant && from.col() != to.col() {
                    let captured = Square::at(from.row(), to.col());
                    self.take(captured);
                    debug!("{color} captures en passant on {to}, removing {captured}");
                } else if from.row_distance(to) == 2 {
                    self.en_passant = from.offset(color.pawn_direction(), 0);
                    self.long_pawn_move = true;
                }
            }
            PieceKind::Rook | PieceKind::King => self.mark_moved(from),
            _ => {}
        }

        if piece.kind() == PieceKind::King {
            self.kings[color.index()] = to;
            let delta = to.col() as isize - from.col() as isize;
            if delta.abs() == 2 {
                let side = if delta > 0 {
                    CastleSide::KingSide
                } else {
                    CastleSide::QueenSide
                };
                self.castle(side);
                return;
            }
        }

        if let Some(moving) = self.take(from) {
            self.put(to, moving);
        }
        debug!("{color} {} {from}{to}", piece.kind());
        self.end_turn();
    }

    /// Whether `from` -> `to` is a legal pawn move onto the last rank.
    #[must_use]
    pub fn try_promote_pawn(&self, from: Square, to: Square) -> bool {
        self.piece_at(from)
            .is_some_and(|p| p.is(self.side_to_move, PieceKind::Pawn))
            && to.row() == self.side_to_move.promotion_rank()
            && self.try_move(from, to)
    }

    /// Move the pawn on `from` to `to`, replace it with a new `kind` piece
    /// of the same color, and pass the turn.
    ///
    /// The move must already have been accepted by `try_promote_pawn`.
    pub fn move_and_promote_pawn(
        &mut self,
        from: Square,
        to: Square,
        kind: PieceKind,
    ) -> Result<(), MoveError> {
        if !kind.is_promotion() {
            return Err(MoveError::InvalidPromotion { kind });
        }
        let pawn = self.take(from).ok_or(MoveError::Illegal { from, to })?;

        self.put(to, Piece::new(pawn.color(), kind));
        debug!("{} pawn {from}{to} promotes to {kind}", pawn.color());
        self.end_turn();
        Ok(())
    }

    /// Validate, execute and classify a move in one step.
    ///
    /// Moves onto the last rank require `promotion`; every other move must
    /// pass `None`. After the move the position is classified for the side
    /// now to move, which also primes the check state `try_move` relies on.
    /// A `Mate` result always means the side to move has no legal move.
    pub fn play(
        &mut self,
        from: Square,
        to: Square,
        promotion: Option<PieceKind>,
    ) -> Result<Status, MoveError> {
        if self.try_promote_pawn(from, to) {
            let kind = promotion.ok_or(MoveError::PromotionRequired { from, to })?;
            self.move_and_promote_pawn(from, to, kind)?;
        } else if self.try_move(from, to) {
            if promotion.is_some() {
                return Err(MoveError::PromotionNotAllowed { from, to });
            }
            self.move_piece(from, to);
        } else {
            return Err(MoveError::Illegal { from, to });
        }

        Ok(self.classify(Some(to)))
    }
}
