use crate::board::{Board, Color, Square};

/// One square straight ahead, or two from the starting rank over an empty
/// square. Whether the destination itself is free is the caller's concern.
pub(super) fn can_move(board: &Board, color: Color, from: Square, to: Square) -> bool {
    if from.col() != to.col() {
        return false;
    }

    let dir = color.pawn_direction();
    if from.offset(dir, 0) == Some(to) {
        return true;
    }

    from.row() == color.pawn_start_rank()
        && from.offset(2 * dir, 0) == Some(to)
        && from.offset(dir, 0).is_some_and(|mid| board.is_empty(mid))
}

/// One square diagonally forward.
pub(super) fn can_attack(_board: &Board, color: Color, from: Square, to: Square) -> bool {
    from.offset(color.pawn_direction(), 0)
        .is_some_and(|ahead| ahead.row() == to.row())
        && from.col_distance(to) == 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{BoardBuilder, PieceKind};

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn test_single_and_double_advance() {
        let board = Board::new();
        assert!(can_move(&board, Color::White, sq("e2"), sq("e3")));
        assert!(can_move(&board, Color::White, sq("e2"), sq("e4")));
        assert!(!can_move(&board, Color::White, sq("e2"), sq("e5")));
        assert!(can_move(&board, Color::Black, sq("d7"), sq("d5")));
        assert!(!can_move(&board, Color::Black, sq("d7"), sq("d8")));
    }

    #[test]
    fn test_double_advance_needs_start_rank_and_clear_path() {
        let board = BoardBuilder::new()
            .piece(sq("e1"), Color::White, PieceKind::King)
            .piece(sq("e8"), Color::Black, PieceKind::King)
            .piece(sq("c2"), Color::White, PieceKind::Pawn)
            .piece(sq("c3"), Color::Black, PieceKind::Knight)
            .piece(sq("g3"), Color::White, PieceKind::Pawn)
            .build()
            .unwrap();
        assert!(!can_move(&board, Color::White, sq("c2"), sq("c4")));
        assert!(!can_move(&board, Color::White, sq("g3"), sq("g5")));
        assert!(can_move(&board, Color::White, sq("g3"), sq("g4")));
    }

    #[test]
    fn test_attack_is_diagonal_forward_only() {
        let board = Board::new();
        assert!(can_attack(&board, Color::White, sq("e4"), sq("d5")));
        assert!(can_attack(&board, Color::White, sq("e4"), sq("f5")));
        assert!(!can_attack(&board, Color::White, sq("e4"), sq("e5")));
        assert!(!can_attack(&board, Color::White, sq("e4"), sq("d3")));
        assert!(can_attack(&board, Color::Black, sq("e5"), sq("d4")));
        assert!(!can_attack(&board, Color::Black, sq("a2"), sq("b3")));
    }
}
