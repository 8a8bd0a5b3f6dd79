//! Core chess types.
//!
//! This module contains the fundamental types used throughout the rules engine:
//! - `PieceKind`, `Piece` and `Color` - piece identity and ownership
//! - `Square` - bounds-checked board coordinate
//! - `Direction` - sign vector between two squares
//! - `CastleSide` - castling geometry

mod castling;
mod direction;
mod piece;
mod square;

pub use castling::CastleSide;
pub use direction::Direction;
pub use piece::{Color, Piece, PieceKind};
pub use square::Square;

pub(crate) use castling::KING_START_COL;
