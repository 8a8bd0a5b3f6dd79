use once_cell::sync::Lazy;

use crate::board::{Board, Color, Direction, Square};

/// On-board neighbours of every square, indexed by `Square::index`.
pub(crate) static KING_NEIGHBOURS: Lazy<[Vec<Square>; 64]> = Lazy::new(|| {
    std::array::from_fn(|idx| {
        let sq = Square::from_index(idx);
        Direction::ALL
            .iter()
            .filter_map(|&dir| sq.step(dir))
            .collect()
    })
});

pub(super) fn can_move(_board: &Board, _color: Color, from: Square, to: Square) -> bool {
    from.chebyshev(to) == 1
}
