//! Chess board representation and move legality.
//!
//! The board is an 8×8 grid of optional pieces. Legality is decided by
//! brute-force scans over the grid: per-kind geometry from the piece
//! catalog, attack and reachability scans, check and pin analysis, and the
//! special rules for castling, en passant and promotion.
//!
//! # Example
//! ```
//! use chess_rules::board::{Board, Square, Status};
//!
//! let mut board = Board::new();
//! let e2 = Square::at(1, 4);
//! assert!(board.move_options(e2).contains(&Square::at(3, 4)));
//! assert_eq!(board.play(e2, Square::at(3, 4), None), Ok(Status::NoCheck));
//! assert_eq!(board.en_passant_target(), Some(Square::at(2, 4)));
//! ```

mod attacks;
mod builder;
mod castling;
mod catalog;
mod check;
mod display;
mod error;
mod legality;
mod make_move;
mod notation;
pub mod prelude;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use builder::BoardBuilder;
pub use check::Status;
pub use error::{BoardError, MoveError, MoveParseError, SquareError};
pub use notation::CoordinateMove;
pub use state::Board;
pub use types::{CastleSide, Color, Direction, Piece, PieceKind, Square};

pub(crate) use types::KING_START_COL;
