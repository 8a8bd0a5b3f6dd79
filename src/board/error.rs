//! Error types for checked board operations.
//!
//! Rule rejections during normal play are plain booleans (`try_move` and
//! friends); these types cover the checked entry points built on top.

use std::fmt;

use super::{PieceKind, Square};
use crate::board::Color;

/// Error type for square construction and parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Rank out of bounds (must be 0-7)
    RankOutOfBounds { rank: usize },
    /// File out of bounds (must be 0-7)
    FileOutOfBounds { file: usize },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::RankOutOfBounds { rank } => {
                write!(f, "Rank {rank} out of bounds (must be 0-7)")
            }
            SquareError::FileOutOfBounds { file } => {
                write!(f, "File {file} out of bounds (must be 0-7)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for coordinate move notation (`e2e4`, `e7e8q`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveParseError {
    /// Move string has invalid length (must be 4-5 characters)
    InvalidLength { len: usize },
    /// Invalid square notation in move
    InvalidSquare { notation: String },
    /// Invalid promotion piece
    InvalidPromotion { char: char },
}

impl fmt::Display for MoveParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveParseError::InvalidLength { len } => {
                write!(f, "Move must be 4-5 characters, found {len}")
            }
            MoveParseError::InvalidSquare { notation } => {
                write!(f, "Invalid square notation in '{notation}'")
            }
            MoveParseError::InvalidPromotion { char } => {
                write!(f, "Invalid promotion piece '{char}'")
            }
        }
    }
}

impl std::error::Error for MoveParseError {}

/// Error type for checked move execution
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// The move is not legal in the current position
    Illegal { from: Square, to: Square },
    /// A pawn reaching the last rank needs a promotion piece
    PromotionRequired { from: Square, to: Square },
    /// A promotion piece was given for a move that does not promote
    PromotionNotAllowed { from: Square, to: Square },
    /// Pawns cannot promote to this kind
    InvalidPromotion { kind: PieceKind },
    /// The game already ended
    GameOver,
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::Illegal { from, to } => write!(f, "Illegal move {from}{to}"),
            MoveError::PromotionRequired { from, to } => {
                write!(f, "Move {from}{to} promotes and needs a promotion piece")
            }
            MoveError::PromotionNotAllowed { from, to } => {
                write!(f, "Move {from}{to} is not a promotion")
            }
            MoveError::InvalidPromotion { kind } => {
                write!(f, "Cannot promote to a {kind}")
            }
            MoveError::GameOver => write!(f, "Game is over"),
        }
    }
}

impl std::error::Error for MoveError {}

/// Error type for positions assembled with `BoardBuilder`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// No king of this color was placed
    MissingKing { color: Color },
    /// More than one king of this color was placed
    DuplicateKing { color: Color },
    /// The en passant target is not a square a pawn just skipped over
    InvalidEnPassant { square: Square },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::MissingKing { color } => write!(f, "{color} has no king"),
            BoardError::DuplicateKing { color } => write!(f, "{color} has more than one king"),
            BoardError::InvalidEnPassant { square } => {
                write!(f, "{square} is not a valid en passant target")
            }
        }
    }
}

impl std::error::Error for BoardError {}
