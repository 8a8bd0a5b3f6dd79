//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `legality.rs` - Move legality, pins and king safety
//! - `check.rs` - Check, double check and mate detection
//! - `castling.rs` - Castling eligibility and execution
//! - `en_passant.rs` - En passant lifecycle and capture
//! - `promotion.rs` - Pawn promotion
//! - `proptest.rs` - Property-based tests over random games

mod check;

use crate::board::{Board, BoardBuilder, Color, CoordinateMove, PieceKind, Square, Status};

fn sq(s: &str) -> Square {
    s.parse().unwrap()
}

fn squares(list: &[&str]) -> Vec<Square> {
    list.iter().map(|s| sq(s)).collect()
}

/// Play a sequence of coordinate moves from `board`, returning the status
/// after the last one.
fn play_all(board: &mut Board, moves: &[&str]) -> Status {
    let mut status = Status::NoCheck;
    for notation in moves {
        let mv: CoordinateMove = notation.parse().unwrap();
        status = board
            .play(mv.from, mv.to, mv.promotion)
            .unwrap_or_else(|e| panic!("{notation}: {e}"));
    }
    status
}

/// A builder holding only the two kings.
fn with_kings(white_king: &str, black_king: &str) -> BoardBuilder {
    BoardBuilder::new()
        .piece(sq(white_king), Color::White, PieceKind::King)
        .piece(sq(black_king), Color::Black, PieceKind::King)
}
