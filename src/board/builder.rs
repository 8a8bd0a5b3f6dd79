//! Fluent builder for constructing chess positions.
//!
//! Allows creating positions piece by piece instead of playing moves from
//! the opening.
//!
//! # Example
//! ```
//! use chess_rules::board::{BoardBuilder, Color, PieceKind, Square};
//!
//! let board = BoardBuilder::new()
//!     .piece(Square::at(0, 4), Color::White, PieceKind::King)
//!     .piece(Square::at(7, 4), Color::Black, PieceKind::King)
//!     .piece(Square::at(1, 0), Color::White, PieceKind::Pawn)
//!     .side_to_move(Color::White)
//!     .build()
//!     .unwrap();
//! assert_eq!(board.king_square(Color::Black), Square::at(7, 4));
//! ```

use super::{Board, BoardError, Color, Piece, PieceKind, Square};

/// A fluent builder for constructing `Board` positions.
#[derive(Clone, Debug)]
pub struct BoardBuilder {
    pieces: Vec<(Square, Piece)>,
    side_to_move: Color,
    en_passant_target: Option<Square>,
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder {
            pieces: Vec::new(),
            side_to_move: Color::White,
            en_passant_target: None,
        }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        let board = Board::new();
        let mut builder = Self::new();
        for color in Color::BOTH {
            builder.pieces.extend(board.pieces(color));
        }
        builder
    }

    /// Place an unmoved piece on the board.
    #[must_use]
    pub fn piece(mut self, square: Square, color: Color, kind: PieceKind) -> Self {
        self.pieces.retain(|(sq, _)| *sq != square);
        self.pieces.push((square, Piece::new(color, kind)));
        self
    }

    /// Place a piece that counts as having moved already.
    ///
    /// Only matters for kings and rooks, where it removes castling rights.
    #[must_use]
    pub fn moved_piece(self, square: Square, color: Color, kind: PieceKind) -> Self {
        let mut builder = self.piece(square, color, kind);
        if let Some((_, piece)) = builder.pieces.last_mut() {
            piece.mark_moved();
        }
        builder
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.pieces.retain(|(sq, _)| *sq != square);
        self
    }

    /// Set the side to move.
    #[must_use]
    pub const fn side_to_move(mut self, color: Color) -> Self {
        self.side_to_move = color;
        self
    }

    /// Set the en passant target square, capturable by the side to move.
    #[must_use]
    pub const fn en_passant(mut self, target: Square) -> Self {
        self.en_passant_target = Some(target);
        self
    }

    /// Build the board.
    ///
    /// Fails unless each color has exactly one king, and unless any en
    /// passant target is an empty square on the rank the side to move
    /// captures onto, with an opponent pawn just past it. The position is
    /// classified for the side to move, so a king placed in check is seen
    /// as such by `try_move` from the first query.
    pub fn build(self) -> Result<Board, BoardError> {
        for color in Color::BOTH {
            let kings = self
                .pieces
                .iter()
                .filter(|(_, p)| p.is(color, PieceKind::King))
                .count();
            match kings {
                0 => return Err(BoardError::MissingKing { color }),
                1 => {}
                _ => return Err(BoardError::DuplicateKing { color }),
            }
        }

        if let Some(target) = self.en_passant_target {
            if !self.valid_en_passant(target) {
                return Err(BoardError::InvalidEnPassant { square: target });
            }
        }

        let mut board = Board::empty();
        for (square, piece) in self.pieces {
            board.put(square, piece);
        }
        board.side_to_move = self.side_to_move;
        board.en_passant = self.en_passant_target;
        board.classify(None);

        Ok(board)
    }

    fn valid_en_passant(&self, target: Square) -> bool {
        let mover = self.side_to_move;
        let occupant = |square: Square| {
            self.pieces
                .iter()
                .find(|(sq, _)| *sq == square)
                .map(|&(_, piece)| piece)
        };
        let pushed = target.offset(-mover.pawn_direction(), 0);

        target.row() == mover.en_passant_rank()
            && occupant(target).is_none()
            && pushed
                .and_then(occupant)
                .is_some_and(|p| p.is(mover.opponent(), PieceKind::Pawn))
    }
}
