//! Check, checkmate and pin analysis.

use std::fmt;

use log::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::catalog::KING_NEIGHBOURS;
use super::{Board, Direction, PieceKind, Square};

/// Classification of the position for the side to move after a move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Status {
    /// The king is not attacked
    NoCheck,
    /// The king is attacked but has a defence
    Check,
    /// The king is attacked and cannot be defended
    Mate,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::NoCheck => write!(f, "no check"),
            Status::Check => write!(f, "check"),
            Status::Mate => write!(f, "checkmate"),
        }
    }
}

impl Board {
    /// Find the opponent piece that could reach the current king through
    /// `square`.
    ///
    /// Returns `square` itself when it holds an opponent piece already
    /// attacking the king. Otherwise, if `square` has a clear rank, file or
    /// diagonal to the king, walks from `square` away from the king to the
    /// first occupied square and returns it when it holds an opponent slider
    /// able to attack along that line.
    ///
    /// For an occupied `square` this answers "is this piece pinned?"; for an
    /// empty one, "does this square lie on an attack line?".
    #[must_use]
    pub fn king_can_be_attacked(&self, square: Square) -> Option<Square> {
        let king = self.current_king();
        let opponent = self.opponent_color();

        if let Some(piece) = self.piece_at(square) {
            if piece.color() == opponent && piece.kind().can_attack(self, opponent, square, king) {
                return Some(square);
            }
        }

        if square == king
            || !PieceKind::Queen.can_move(self, self.side_to_move, square, king)
        {
            return None;
        }

        let away = Direction::between(king, square);
        let mut cursor = square;
        while let Some(next) = cursor.step(away) {
            if let Some(piece) = self.piece_at(next) {
                let on_line = if away.is_straight() {
                    piece.kind().attacks_straight()
                } else {
                    piece.kind().attacks_diagonally()
                };
                return (on_line && piece.color() == opponent).then_some(next);
            }
            cursor = next;
        }
        None
    }

    /// True if the piece on `square` may only move along the line to its king.
    #[inline]
    #[must_use]
    pub fn is_pinned(&self, square: Square) -> bool {
        self.piece_at(square).is_some() && self.king_can_be_attacked(square).is_some()
    }

    /// Classify the check given by the piece on `attacker`.
    ///
    /// Called right after a move, once the turn has passed to the defending
    /// side. Returns `Status::NoCheck` and leaves the board untouched when the
    /// piece does not attack the king. Otherwise records the check and its
    /// line. A second checker sets the double-check flag and adds its own line
    /// unless it is a knight. Then decides between check and mate: the king
    /// may step to a safe square, or (with a single checker only) another
    /// piece may capture the checker or block its line.
    pub fn check_and_mate(&mut self, attacker: Square) -> Status {
        let king = self.current_king();
        let opponent = self.opponent_color();
        let defender = self.side_to_move;

        let Some(piece) = self.piece_at(attacker) else {
            return Status::NoCheck;
        };
        if piece.color() != opponent || !piece.kind().can_attack(self, opponent, attacker, king) {
            return Status::NoCheck;
        }

        self.is_check = true;

        let way_to_king = attacker.between(king);

        if piece.kind() != PieceKind::Knight {
            let dir = Direction::between(attacker, king);
            if !self.attack_direction.contains(&dir) {
                self.attack_direction.push(dir);
            }
        }

        if self.under_attack(king, opponent, Some(attacker)) {
            self.double_attack = true;
            let second_lines: Vec<Direction> = self
                .pieces(opponent)
                .filter(|&(from, p)| {
                    from != attacker
                        && p.kind() != PieceKind::Knight
                        && p.kind().can_attack(self, opponent, from, king)
                })
                .map(|(from, _)| Direction::between(from, king))
                .collect();
            for dir in second_lines {
                if !self.attack_direction.contains(&dir) {
                    self.attack_direction.push(dir);
                }
            }
        }

        let defend_king = !self.double_attack
            && (self.under_attack(attacker, defender, Some(king))
                || way_to_king
                    .iter()
                    .any(|&sq| self.can_be_occupied(sq, defender, Some(king))));

        let status = if self.king_escapes_attack() || defend_king {
            Status::Check
        } else {
            Status::Mate
        };
        debug!(
            "{} on {attacker} gives {status} to {defender} (double: {})",
            piece.kind(),
            self.double_attack
        );
        status
    }

    /// True if the current king has a neighbouring square to step to.
    ///
    /// A square qualifies when the opponent does not attack it, no friendly
    /// piece stands on it, and it does not continue a recorded attack line
    /// away from the checking slider.
    #[must_use]
    pub fn king_escapes_attack(&self) -> bool {
        let king = self.current_king();
        let opponent = self.opponent_color();

        KING_NEIGHBOURS[king.index()].iter().any(|&sq| {
            !self.under_attack(sq, opponent, None)
                && !self.is_color(sq, self.side_to_move)
                && !self
                    .attack_direction
                    .contains(&Direction::between(king, sq))
        })
    }

    /// Classify the position after a move that landed on `moved_to`.
    ///
    /// The moved piece is examined first. If it gives no check, any other
    /// opponent piece attacking the king (a discovered check, or the rook of
    /// a castling move) is classified instead.
    ///
    /// The verdict is then settled against the legal move list, which sees
    /// en passant answers and pinned blockers that the attack scans miss.
    pub(crate) fn classify(&mut self, moved_to: Option<Square>) -> Status {
        let status = match moved_to.map(|sq| self.check_and_mate(sq)) {
            Some(status) if status != Status::NoCheck => status,
            _ => match self.first_attacker(self.current_king(), self.opponent_color()) {
                Some(checker) => self.check_and_mate(checker),
                None => Status::NoCheck,
            },
        };
        self.settle(status)
    }

    /// Reconcile a check verdict with whether the side to move can answer it.
    fn settle(&self, status: Status) -> Status {
        match status {
            Status::Mate if self.has_legal_move() => {
                debug!("mate verdict downgraded: a legal answer exists");
                Status::Check
            }
            Status::Check if !self.has_legal_move() => {
                debug!("check verdict upgraded: no legal answer exists");
                Status::Mate
            }
            other => other,
        }
    }
}
