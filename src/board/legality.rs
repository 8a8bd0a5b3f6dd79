//! Move legality: the `try_move` decision procedure and destination lists.

use log::trace;

use super::{Board, CastleSide, Direction, Piece, PieceKind, Square};

impl Board {
    /// Decide whether the side to move may play `from` -> `to`.
    ///
    /// Rules are applied in a fixed order and the first one that applies
    /// decides: ownership, the en passant capture, king moves (castling,
    /// kings never adjacent, no attacked destination, no retreat along a
    /// checking line), piece geometry and captures, answering a check, and
    /// finally pins.
    #[must_use]
    pub fn try_move(&self, from: Square, to: Square) -> bool {
        if from == to {
            return false;
        }
        let Some(piece) = self.piece_at(from) else {
            return false;
        };
        if piece.color() != self.side_to_move {
            return false;
        }

        let kind = piece.kind();

        if kind == PieceKind::Pawn && Some(to) == self.en_passant {
            return kind.can_attack(self, piece.color(), from, to);
        }

        if kind == PieceKind::King {
            return self.try_king_move(piece, from, to);
        }

        match self.piece_at(to) {
            None if !kind.can_move(self, piece.color(), from, to) => return false,
            Some(target) if target.color() == piece.color() => return false,
            Some(_) if !kind.can_attack(self, piece.color(), from, to) => return false,
            _ => {}
        }

        if self.double_attack {
            trace!("{from}{to}: only the king can answer a double check");
            return false;
        }
        if self.is_check && self.king_can_be_attacked(to).is_none() {
            trace!("{from}{to}: does not capture or block the checking piece");
            return false;
        }

        if self.king_can_be_attacked(from).is_some() {
            let king = self.current_king();
            let step = Direction::between(from, to);
            let pin_line = Direction::between(king, from);
            let along_pin = step == pin_line || step == pin_line.reversed();
            if kind == PieceKind::Knight || !along_pin {
                trace!("{from}{to}: pinned {kind} must stay on the line to its king");
                return false;
            }
        }

        true
    }

    fn try_king_move(&self, king: Piece, from: Square, to: Square) -> bool {
        let color = king.color();

        if to.row() == color.back_rank() {
            if let Some(side) = CastleSide::for_king_target(to.col()) {
                if self.can_castle(side) {
                    return true;
                }
            }
        }

        if to.chebyshev(self.opponent_king()) <= 1 {
            trace!("{from}{to}: kings may not stand next to each other");
            return false;
        }
        if self.under_attack(to, color.opponent(), None) {
            trace!("{from}{to}: destination is attacked");
            return false;
        }
        if self.attack_direction.contains(&Direction::between(from, to)) {
            trace!("{from}{to}: king cannot retreat along the checking line");
            return false;
        }

        PieceKind::King.can_move(self, color, from, to) && !self.is_color(to, color)
    }

    /// Every square the piece on `square` may legally move to.
    ///
    /// Recomputed on each call; empty for an empty square or a piece of the
    /// side not to move.
    #[must_use]
    pub fn move_options(&self, square: Square) -> Vec<Square> {
        Square::all().filter(|&to| self.try_move(square, to)).collect()
    }

    /// Every legal (from, to) pair for the side to move.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<(Square, Square)> {
        self.pieces(self.side_to_move)
            .flat_map(|(from, _)| {
                self.move_options(from)
                    .into_iter()
                    .map(move |to| (from, to))
            })
            .collect()
    }

    /// True if the side to move has at least one legal move.
    #[must_use]
    pub fn has_legal_move(&self) -> bool {
        self.pieces(self.side_to_move)
            .any(|(from, _)| Square::all().any(|to| self.try_move(from, to)))
    }

    /// Not in check, yet no legal move.
    #[must_use]
    pub fn is_stalemate(&self) -> bool {
        !self.is_check && !self.has_legal_move()
    }
}
