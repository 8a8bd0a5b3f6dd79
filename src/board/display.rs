use std::fmt;

use super::{Board, Square};

/// Text grid of the position, rank 8 at the top.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  +---+---+---+---+---+---+---+---+")?;
        for row in (0..8).rev() {
            write!(f, "{} |", row + 1)?;
            for col in 0..8 {
                let ch = self
                    .piece_at(Square::at(row, col))
                    .map_or('.', |p| p.symbol());
                write!(f, " {ch} |")?;
            }
            writeln!(f)?;
            writeln!(f, "  +---+---+---+---+---+---+---+---+")?;
        }
        writeln!(f, "    a   b   c   d   e   f   g   h")?;
        write!(f, "{} to move", self.side_to_move)?;
        if let Some(ep) = self.en_passant {
            write!(f, ", en passant {ep}")?;
        }
        if self.is_check {
            write!(f, ", in check")?;
        }
        Ok(())
    }
}
