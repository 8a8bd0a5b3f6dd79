use std::env;

use rand::prelude::*;

use chess_rules::board::PieceKind;
use chess_rules::game::Game;

fn main() {
    env_logger::init();

    let mut args = env::args().skip(1);
    let seed: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(0);
    let max_plies: usize = args.next().and_then(|s| s.parse().ok()).unwrap_or(200);

    let mut rng = StdRng::seed_from_u64(seed);
    let mut game = Game::new();

    while !game.is_over() && game.history().len() < max_plies {
        let moves = game.board().legal_moves();
        let Some(&(from, to)) = moves.choose(&mut rng) else {
            break;
        };
        let promotion = game
            .board()
            .try_promote_pawn(from, to)
            .then(|| *PieceKind::PROMOTIONS.choose(&mut rng).unwrap_or(&PieceKind::Queen));
        if let Err(e) = game.play(from, to, promotion) {
            eprintln!("{from}{to}: {e}");
            break;
        }
    }

    for (ply, record) in game.history().iter().enumerate() {
        println!("{:>3}. {record}", ply + 1);
    }
    println!("{}", game.board());
    println!("{}", game.outcome());
}
