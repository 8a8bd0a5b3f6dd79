use chess_rules::board::{BoardBuilder, Color, MoveError, PieceKind, Square, Status};
use chess_rules::console::run_console_loop;
use chess_rules::game::{Game, GameError, Outcome};

fn sq(s: &str) -> Square {
    s.parse().unwrap()
}

#[test]
fn history_records_every_move() {
    let mut game = Game::new();
    for mv in ["e2e4", "e7e5", "g1f3", "b8c6"] {
        game.play_uci(mv).unwrap();
    }

    let rendered: Vec<String> = game.history().iter().map(|r| r.to_string()).collect();
    assert_eq!(
        rendered,
        ["E2 -> E4", "E7 -> E5", "G1 -> F3", "B8 -> C6"]
    );
    assert_eq!(game.outcome(), Outcome::Ongoing);
    assert_eq!(game.side_to_move(), Color::White);
}

#[test]
fn promotion_through_game() {
    let board = BoardBuilder::new()
        .piece(sq("e1"), Color::White, PieceKind::King)
        .piece(sq("h6"), Color::Black, PieceKind::King)
        .piece(sq("a7"), Color::White, PieceKind::Pawn)
        .build()
        .unwrap();
    let mut game = Game::from_board(board);

    assert_eq!(
        game.play_uci("a7a8"),
        Err(GameError::Move(MoveError::PromotionRequired {
            from: sq("a7"),
            to: sq("a8")
        }))
    );
    assert_eq!(game.play_uci("a7a8r"), Ok(Status::NoCheck));
    assert_eq!(game.history()[0].to_string(), "A7 -> A8=R");
    assert_eq!(game.history()[0].promotion, Some(PieceKind::Rook));
}

#[test]
fn finished_position_is_recognised() {
    let board = BoardBuilder::new()
        .piece(sq("g6"), Color::White, PieceKind::King)
        .piece(sq("h8"), Color::Black, PieceKind::King)
        .piece(sq("g7"), Color::White, PieceKind::Queen)
        .side_to_move(Color::Black)
        .build()
        .unwrap();
    let game = Game::from_board(board);

    assert!(game.in_check());
    assert_eq!(
        game.outcome(),
        Outcome::Checkmate {
            winner: Color::White
        }
    );
}

#[test]
fn record_and_outcome_agree_when_blocker_is_pinned() {
    let board = BoardBuilder::new()
        .piece(sq("e1"), Color::White, PieceKind::King)
        .piece(sq("h8"), Color::Black, PieceKind::King)
        .piece(sq("a1"), Color::White, PieceKind::Rook)
        .piece(sq("b2"), Color::White, PieceKind::Bishop)
        .piece(sq("g7"), Color::Black, PieceKind::Bishop)
        .piece(sq("h7"), Color::Black, PieceKind::Pawn)
        .build()
        .unwrap();
    let mut game = Game::from_board(board);

    assert_eq!(game.play_uci("a1a8"), Ok(Status::Mate));
    assert_eq!(game.history()[0].to_string(), "A1 -> A8#");
    assert_eq!(
        game.outcome(),
        Outcome::Checkmate {
            winner: Color::White
        }
    );
}

#[test]
fn console_session() {
    let script = "e2e4\ne7e5\noptions f1\nhistory\nnew\nhistory\nquit\ne2e4\n";
    let mut out = Vec::new();
    run_console_loop(script.as_bytes(), &mut out).unwrap();
    let out = String::from_utf8(out).unwrap();

    assert!(out.contains("f1: e2 d3 c4 b5 a6"));
    assert!(out.contains("  1. E2 -> E4"));
    assert!(out.contains("  2. E7 -> E5"));
    assert!(out.contains("no moves yet"));
}
