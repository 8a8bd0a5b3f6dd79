use crate::board::{Board, Color, Direction, Square};

/// True if every square strictly between `from` and `to` is empty.
///
/// Only meaningful for squares sharing a rank, file or diagonal.
pub(crate) fn path_is_clear(board: &Board, from: Square, to: Square) -> bool {
    debug_assert!(from.is_straight_with(to) || from.is_diagonal_with(to));
    let dir = Direction::between(from, to);
    let mut cursor = from;
    while let Some(next) = cursor.step(dir) {
        if next == to {
            return true;
        }
        if !board.is_empty(next) {
            return false;
        }
        cursor = next;
    }
    true
}

fn straight(board: &Board, from: Square, to: Square) -> bool {
    from != to && from.is_straight_with(to) && path_is_clear(board, from, to)
}

fn diagonal(board: &Board, from: Square, to: Square) -> bool {
    from != to && from.is_diagonal_with(to) && path_is_clear(board, from, to)
}

pub(super) fn rook(board: &Board, _color: Color, from: Square, to: Square) -> bool {
    straight(board, from, to)
}

pub(super) fn bishop(board: &Board, _color: Color, from: Square, to: Square) -> bool {
    diagonal(board, from, to)
}

pub(super) fn queen(board: &Board, _color: Color, from: Square, to: Square) -> bool {
    straight(board, from, to) || diagonal(board, from, to)
}
