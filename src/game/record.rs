//! Move history entries and game outcomes.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::{Color, PieceKind, Square, Status};

/// One executed move and the status it left the opponent in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MoveRecord {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<PieceKind>,
    pub status: Status,
}

/// Rendered as `E2 -> E4`, with `=Q` appended for promotions.
impl fmt::Display for MoveRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let from = self.from.to_string().to_uppercase();
        let to = self.to.to_string().to_uppercase();
        write!(f, "{from} -> {to}")?;
        if let Some(kind) = self.promotion {
            write!(f, "={}", kind.to_char().to_ascii_uppercase())?;
        }
        match self.status {
            Status::NoCheck => Ok(()),
            Status::Check => write!(f, "+"),
            Status::Mate => write!(f, "#"),
        }
    }
}

/// Result of a game so far.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Outcome {
    #[default]
    Ongoing,
    Checkmate {
        winner: Color,
    },
    Stalemate,
}

impl Outcome {
    #[inline]
    #[must_use]
    pub fn is_over(self) -> bool {
        self != Outcome::Ongoing
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Ongoing => write!(f, "game in progress"),
            Outcome::Checkmate { winner } => write!(f, "checkmate, {winner} wins"),
            Outcome::Stalemate => write!(f, "stalemate, draw"),
        }
    }
}
