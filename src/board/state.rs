use log::trace;

use super::{Color, Direction, Piece, PieceKind, Square};

/// A chess position together with the per-turn check and en passant state.
///
/// The board is only changed through the mutation entry points
/// (`move_piece`, `move_and_promote_pawn`, `play`); every one of them ends
/// by handing the turn to the other side.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    pub(crate) squares: [[Option<Piece>; 8]; 8],
    pub(crate) side_to_move: Color,
    pub(crate) kings: [Square; 2],
    pub(crate) is_check: bool,
    pub(crate) attack_direction: Vec<Direction>,
    pub(crate) double_attack: bool,
    pub(crate) en_passant: Option<Square>,
    pub(crate) long_pawn_move: bool,
}

impl Board {
    /// The standard opening position, White to move.
    pub fn new() -> Self {
        let mut board = Board::empty();
        let back_rank = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for (col, kind) in back_rank.into_iter().enumerate() {
            board.put(Square::at(0, col), Piece::new(Color::White, kind));
            board.put(Square::at(7, col), Piece::new(Color::Black, kind));
            board.put(Square::at(1, col), Piece::new(Color::White, PieceKind::Pawn));
            board.put(Square::at(6, col), Piece::new(Color::Black, PieceKind::Pawn));
        }
        board
    }

    /// A board with no pieces. Callers must place both kings before use.
    pub(crate) fn empty() -> Self {
        Board {
            squares: [[None; 8]; 8],
            side_to_move: Color::White,
            kings: [Square::at(0, 4), Square::at(7, 4)],
            is_check: false,
            attack_direction: Vec::new(),
            double_attack: false,
            en_passant: None,
            long_pawn_move: false,
        }
    }

    #[inline]
    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    #[must_use]
    pub fn opponent_color(&self) -> Color {
        self.side_to_move.opponent()
    }

    /// The piece on `sq`, if any.
    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.row()][sq.col()]
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.piece_at(sq).is_none()
    }

    /// True if `sq` holds a piece of `color`.
    #[inline]
    #[must_use]
    pub fn is_color(&self, sq: Square, color: Color) -> bool {
        self.piece_at(sq).is_some_and(|p| p.color() == color)
    }

    /// Cached location of `color`'s king.
    #[inline]
    #[must_use]
    pub fn king_square(&self, color: Color) -> Square {
        self.kings[color.index()]
    }

    /// King of the side to move.
    #[inline]
    #[must_use]
    pub fn current_king(&self) -> Square {
        self.king_square(self.side_to_move)
    }

    /// King of the side that just moved.
    #[inline]
    #[must_use]
    pub fn opponent_king(&self) -> Square {
        self.king_square(self.opponent_color())
    }

    /// Whether the side to move was put in check by the last move.
    #[inline]
    #[must_use]
    pub fn is_check(&self) -> bool {
        self.is_check
    }

    /// Whether two pieces check the side to move at once.
    #[inline]
    #[must_use]
    pub fn double_attack(&self) -> bool {
        self.double_attack
    }

    /// Directions along which sliders currently check the king.
    #[inline]
    #[must_use]
    pub fn attack_directions(&self) -> &[Direction] {
        &self.attack_direction
    }

    /// Square a pawn may capture onto en passant this turn.
    #[inline]
    #[must_use]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant
    }

    /// Every piece of `color` with its square, in square index order.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| {
            self.piece_at(sq)
                .filter(|p| p.color() == color)
                .map(|p| (sq, p))
        })
    }

    pub(crate) fn put(&mut self, sq: Square, piece: Piece) {
        if piece.kind() == PieceKind::King {
            self.kings[piece.color().index()] = sq;
        }
        self.squares[sq.row()][sq.col()] = Some(piece);
    }

    pub(crate) fn take(&mut self, sq: Square) -> Option<Piece> {
        self.squares[sq.row()][sq.col()].take()
    }

    pub(crate) fn mark_moved(&mut self, sq: Square) {
        if let Some(piece) = self.squares[sq.row()][sq.col()].as_mut() {
            piece.mark_moved();
        }
    }

    /// Hand the turn over and reset the per-turn state.
    ///
    /// The en passant target survives exactly one half-move: it is kept
    /// only when the move just made was a two-square pawn advance.
    pub(crate) fn end_turn(&mut self) {
        if self.long_pawn_move {
            self.long_pawn_move = false;
        } else {
            self.en_passant = None;
        }

        self.is_check = false;
        self.attack_direction.clear();
        self.double_attack = false;

        self.side_to_move = self.side_to_move.opponent();
        trace!("turn passes to {}", self.side_to_move);
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}
