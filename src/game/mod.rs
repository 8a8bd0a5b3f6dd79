//! Game controller: a board plus move history and outcome tracking.
//!
//! # Example
//! ```
//! use chess_rules::game::{Game, Outcome};
//!
//! let mut game = Game::new();
//! for mv in ["f2f3", "e7e5", "g2g4", "d8h4"] {
//!     game.play_uci(mv).unwrap();
//! }
//! assert_eq!(
//!     game.outcome(),
//!     Outcome::Checkmate { winner: chess_rules::board::Color::Black }
//! );
//! ```

mod record;

use std::fmt;

use log::info;

use crate::board::{
    Board, Color, CoordinateMove, MoveError, MoveParseError, PieceKind, Square, Status,
};

pub use record::{MoveRecord, Outcome};

/// Error type for moves submitted as text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The move text could not be parsed
    Parse(MoveParseError),
    /// The move was parsed but rejected
    Move(MoveError),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::Parse(e) => write!(f, "{e}"),
            GameError::Move(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::Parse(e) => Some(e),
            GameError::Move(e) => Some(e),
        }
    }
}

impl From<MoveParseError> for GameError {
    fn from(e: MoveParseError) -> Self {
        GameError::Parse(e)
    }
}

impl From<MoveError> for GameError {
    fn from(e: MoveError) -> Self {
        GameError::Move(e)
    }
}

/// A game in progress.
///
/// Once checkmate or stalemate is reached the game is locked and every
/// further move is refused with `MoveError::GameOver` until `new_game`.
#[derive(Clone, Debug, Default)]
pub struct Game {
    board: Board,
    history: Vec<MoveRecord>,
    outcome: Outcome,
}

impl Game {
    /// A new game from the opening position.
    #[must_use]
    pub fn new() -> Self {
        Game::default()
    }

    /// A game continuing from an arbitrary position.
    ///
    /// The outcome is evaluated immediately, so a position that is already
    /// mate or stalemate yields a finished game.
    #[must_use]
    pub fn from_board(board: Board) -> Self {
        let mut game = Game {
            board,
            history: Vec::new(),
            outcome: Outcome::Ongoing,
        };
        game.update_outcome();
        game
    }

    /// Reset to the opening position and clear the history.
    pub fn new_game(&mut self) {
        *self = Game::new();
        info!("new game");
    }

    #[inline]
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    #[must_use]
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    #[inline]
    #[must_use]
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    #[inline]
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.outcome.is_over()
    }

    /// Whether the side to move is in check.
    #[inline]
    #[must_use]
    pub fn in_check(&self) -> bool {
        self.board.is_check()
    }

    #[inline]
    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.board.side_to_move()
    }

    /// Legal destinations for the piece on `square`; empty once the game is over.
    #[must_use]
    pub fn move_options(&self, square: Square) -> Vec<Square> {
        if self.is_over() {
            return Vec::new();
        }
        self.board.move_options(square)
    }

    /// Play a move and record it.
    pub fn play(
        &mut self,
        from: Square,
        to: Square,
        promotion: Option<PieceKind>,
    ) -> Result<Status, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }

        let status = self.board.play(from, to, promotion)?;
        self.history.push(MoveRecord {
            from,
            to,
            promotion,
            status,
        });
        self.update_outcome();
        Ok(status)
    }

    /// Parse a coordinate move (`e2e4`, `e7e8q`) and play it.
    pub fn play_uci(&mut self, notation: &str) -> Result<Status, GameError> {
        let mv: CoordinateMove = notation.parse()?;
        Ok(self.play(mv.from, mv.to, mv.promotion)?)
    }

    fn update_outcome(&mut self) {
        if self.board.has_legal_move() {
            return;
        }

        self.outcome = if self.board.is_check() {
            Outcome::Checkmate {
                winner: self.board.opponent_color(),
            }
        } else {
            Outcome::Stalemate
        };
        info!("{} after {} moves", self.outcome, self.history.len());
    }
}
