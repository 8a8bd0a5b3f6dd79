//! Line-oriented console for playing a game from a terminal.
//!
//! Commands:
//! - `e2e4`, `e7e8q`: play a move in coordinate notation
//! - `options <square>`: list legal destinations of a piece
//! - `board`: print the position
//! - `history`: print the moves played so far
//! - `new`: start a new game
//! - `quit`: leave the loop

use std::io::{self, BufRead, Write};

use crate::board::{Square, Status};
use crate::game::Game;

/// Read commands from `input` until `quit` or end of input, writing
/// responses to `output`.
pub fn run_console_loop<R: BufRead, W: Write>(input: R, mut output: W) -> io::Result<()> {
    let mut game = Game::new();
    writeln!(output, "{}", game.board())?;

    for line in input.lines() {
        let line = line?;
        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.is_empty() {
            continue;
        }

        match parts[0] {
            "quit" | "exit" => break,
            "board" => writeln!(output, "{}", game.board())?,
            "new" => {
                game.new_game();
                writeln!(output, "{}", game.board())?;
            }
            "history" => {
                if game.history().is_empty() {
                    writeln!(output, "no moves yet")?;
                }
                for (ply, record) in game.history().iter().enumerate() {
                    writeln!(output, "{:>3}. {record}", ply + 1)?;
                }
            }
            "options" => match parts.get(1).map(|s| s.parse::<Square>()) {
                Some(Ok(square)) => {
                    let targets: Vec<String> = game
                        .move_options(square)
                        .iter()
                        .map(Square::to_string)
                        .collect();
                    writeln!(output, "{square}: {}", targets.join(" "))?;
                }
                Some(Err(e)) => writeln!(output, "error: {e}")?,
                None => writeln!(output, "usage: options <square>")?,
            },
            notation => match game.play_uci(notation) {
                Ok(status) => {
                    writeln!(output, "{}", game.board())?;
                    if status == Status::Check {
                        writeln!(output, "check")?;
                    }
                    if game.is_over() {
                        writeln!(output, "{}", game.outcome())?;
                    }
                }
                Err(e) => writeln!(output, "error: {e}")?,
            },
        }
        output.flush()?;
    }

    Ok(())
}
