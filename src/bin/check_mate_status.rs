use std::env;
use std::process::ExitCode;

use chess_rules::game::Game;

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() <= 1 {
        eprintln!("usage: check_mate_status <move1> <move2> ...");
        return ExitCode::FAILURE;
    }

    let mut game = Game::new();
    for mv in args.iter().skip(1) {
        if let Err(e) = game.play_uci(mv) {
            eprintln!("{mv}: {e}");
            return ExitCode::FAILURE;
        }
    }

    let board = game.board();
    let legal_moves = board.legal_moves();
    let status = game.history().last().map(|r| r.status);
    println!("side_to_move: {}", board.side_to_move());
    println!(
        "status: {}",
        status.map_or_else(|| "no check".to_string(), |s| s.to_string())
    );
    println!("outcome: {}", game.outcome());
    println!("legal_moves: {}", legal_moves.len());
    for (from, to) in legal_moves {
        println!("{from}{to}");
    }
    ExitCode::SUCCESS
}
