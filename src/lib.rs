//! Chess move legality: board model, rule checking and a game controller.

pub mod board;
pub mod console;
pub mod game;

pub use board::{Board, BoardBuilder, Color, MoveError, Piece, PieceKind, Square, Status};
pub use game::{Game, GameError, MoveRecord, Outcome};
