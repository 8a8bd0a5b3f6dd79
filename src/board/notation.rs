//! Coordinate move notation (`e2e4`, `e7e8q`).

use std::fmt;
use std::str::FromStr;

use super::{MoveParseError, PieceKind, Square};

/// A move written as origin and destination squares plus an optional
/// promotion letter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CoordinateMove {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<PieceKind>,
}

impl CoordinateMove {
    #[must_use]
    pub const fn new(from: Square, to: Square) -> Self {
        CoordinateMove {
            from,
            to,
            promotion: None,
        }
    }
}

impl FromStr for CoordinateMove {
    type Err = MoveParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if !s.is_ascii() || s.len() < 4 || s.len() > 5 {
            return Err(MoveParseError::InvalidLength {
                len: s.chars().count(),
            });
        }

        let invalid_square = || MoveParseError::InvalidSquare {
            notation: s.to_string(),
        };
        let from: Square = s[0..2].parse().map_err(|_| invalid_square())?;
        let to: Square = s[2..4].parse().map_err(|_| invalid_square())?;

        let promotion = match s[4..].chars().next() {
            None => None,
            Some(c) => {
                let kind = PieceKind::from_char(c)
                    .filter(|k| k.is_promotion())
                    .ok_or(MoveParseError::InvalidPromotion { char: c })?;
                Some(kind)
            }
        };

        Ok(CoordinateMove {
            from,
            to,
            promotion,
        })
    }
}

impl fmt::Display for CoordinateMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(kind) = self.promotion {
            write!(f, "{}", kind.to_char())?;
        }
        Ok(())
    }
}
