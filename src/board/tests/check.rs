//! Check, double check and mate detection tests.

use super::*;

#[test]
fn test_fools_mate() {
    let mut board = Board::new();
    let status = play_all(&mut board, &["f2f3", "e7e5", "g2g4", "d8h4"]);

    assert_eq!(status, Status::Mate);
    assert!(board.is_check());
    assert!(!board.double_attack());
    assert!(!board.has_legal_move());
    assert!(!board.is_stalemate());
}

#[test]
fn test_back_rank_mate() {
    let mut board = with_kings("g1", "g8")
        .piece(sq("a1"), Color::White, PieceKind::Rook)
        .piece(sq("f2"), Color::White, PieceKind::Pawn)
        .piece(sq("g2"), Color::White, PieceKind::Pawn)
        .piece(sq("h2"), Color::White, PieceKind::Pawn)
        .piece(sq("f7"), Color::Black, PieceKind::Pawn)
        .piece(sq("g7"), Color::Black, PieceKind::Pawn)
        .piece(sq("h7"), Color::Black, PieceKind::Pawn)
        .build()
        .unwrap();

    assert_eq!(play_all(&mut board, &["a1a8"]), Status::Mate);
    assert_eq!(board.attack_directions().len(), 1);
    assert!(board.legal_moves().is_empty());
}

#[test]
fn test_check_with_defence_is_not_mate() {
    let mut board = with_kings("g1", "g8")
        .piece(sq("a1"), Color::White, PieceKind::Rook)
        .piece(sq("f7"), Color::Black, PieceKind::Pawn)
        .piece(sq("g7"), Color::Black, PieceKind::Pawn)
        .piece(sq("h7"), Color::Black, PieceKind::Pawn)
        .piece(sq("c6"), Color::Black, PieceKind::Knight)
        .build()
        .unwrap();

    assert_eq!(play_all(&mut board, &["a1a8"]), Status::Check);
    // Only a block by the knight answers the check.
    assert_eq!(board.move_options(sq("c6")), squares(&["b8", "d8"]));
    assert_eq!(board.legal_moves().len(), 2);
}

#[test]
fn test_check_answered_by_block_or_capture() {
    let board = with_kings("e1", "h8")
        .piece(sq("e8"), Color::Black, PieceKind::Rook)
        .piece(sq("a4"), Color::White, PieceKind::Rook)
        .piece(sq("d6"), Color::White, PieceKind::Knight)
        .build()
        .unwrap();

    assert!(board.is_check());
    assert!(!board.double_attack());
    assert_eq!(board.move_options(sq("a4")), squares(&["e4"]));
    assert_eq!(board.move_options(sq("d6")), squares(&["e4", "e8"]));
}

#[test]
fn test_king_cannot_retreat_along_checking_line() {
    let board = with_kings("e2", "h8")
        .piece(sq("e8"), Color::Black, PieceKind::Rook)
        .build()
        .unwrap();

    assert!(board.is_check());
    assert!(!board.try_move(sq("e2"), sq("e1")));
    assert_eq!(
        board.move_options(sq("e2")),
        squares(&["d1", "f1", "d2", "f2", "d3", "f3"])
    );
}

#[test]
fn test_double_check_only_king_moves() {
    let board = with_kings("e1", "h8")
        .piece(sq("e8"), Color::Black, PieceKind::Rook)
        .piece(sq("b4"), Color::Black, PieceKind::Bishop)
        .piece(sq("d3"), Color::White, PieceKind::Knight)
        .build()
        .unwrap();

    assert!(board.is_check());
    assert!(board.double_attack());
    assert_eq!(board.attack_directions().len(), 2);
    assert!(board.move_options(sq("d3")).is_empty());
    assert_eq!(board.move_options(sq("e1")), squares(&["d1", "f1", "f2"]));
    assert!(board.legal_moves().iter().all(|&(from, _)| from == sq("e1")));
}

#[test]
fn test_discovered_check() {
    let mut board = with_kings("a1", "e8")
        .piece(sq("e1"), Color::White, PieceKind::Rook)
        .piece(sq("e4"), Color::White, PieceKind::Knight)
        .build()
        .unwrap();

    assert_eq!(play_all(&mut board, &["e4c5"]), Status::Check);
    assert!(board.is_check());
    assert_eq!(board.attack_directions().len(), 1);
    assert!(!board.try_move(sq("e8"), sq("e7")));
}

#[test]
fn test_smothered_mate_records_no_line() {
    let mut board = with_kings("a1", "h8")
        .piece(sq("g8"), Color::Black, PieceKind::Rook)
        .piece(sq("g7"), Color::Black, PieceKind::Pawn)
        .piece(sq("h7"), Color::Black, PieceKind::Pawn)
        .piece(sq("f7"), Color::White, PieceKind::Knight)
        .side_to_move(Color::Black)
        .build()
        .unwrap();

    assert!(board.is_check());
    assert!(board.attack_directions().is_empty());
    assert_eq!(board.check_and_mate(sq("f7")), Status::Mate);
    assert!(!board.has_legal_move());
}

#[test]
fn test_non_attacker_leaves_state_untouched() {
    let mut board = Board::new();
    let before = board.clone();
    assert_eq!(board.check_and_mate(sq("b1")), Status::NoCheck);
    assert_eq!(board.check_and_mate(sq("e4")), Status::NoCheck);
    assert_eq!(board.check_and_mate(sq("e2")), Status::NoCheck);
    assert_eq!(board, before);
}

#[test]
fn test_king_escape_squares() {
    let board = with_kings("e1", "h8")
        .piece(sq("a2"), Color::Black, PieceKind::Rook)
        .piece(sq("b1"), Color::Black, PieceKind::Rook)
        .build()
        .unwrap();

    assert!(board.is_check());
    assert!(!board.king_escapes_attack());
    assert!(!board.has_legal_move());
}

#[test]
fn test_en_passant_answer_downgrades_mate() {
    let mut board = with_kings("e4", "h8")
        .piece(sq("e5"), Color::White, PieceKind::Pawn)
        .piece(sq("d7"), Color::Black, PieceKind::Pawn)
        .piece(sq("a3"), Color::Black, PieceKind::Rook)
        .piece(sq("d8"), Color::Black, PieceKind::Rook)
        .piece(sq("e6"), Color::Black, PieceKind::Knight)
        .piece(sq("h3"), Color::Black, PieceKind::Bishop)
        .side_to_move(Color::Black)
        .build()
        .unwrap();

    // The king has no flight square and nothing blocks or captures on d5,
    // except the pawn taking en passant.
    assert_eq!(play_all(&mut board, &["d7d5"]), Status::Check);
    assert!(board.is_check());
    assert_eq!(board.legal_moves(), vec![(sq("e5"), sq("d6"))]);
}

#[test]
fn test_pinned_blocker_upgrades_check_to_mate() {
    let mut board = with_kings("e1", "h8")
        .piece(sq("a1"), Color::White, PieceKind::Rook)
        .piece(sq("b2"), Color::White, PieceKind::Bishop)
        .piece(sq("g7"), Color::Black, PieceKind::Bishop)
        .piece(sq("h7"), Color::Black, PieceKind::Pawn)
        .build()
        .unwrap();

    // g7 could block on f8 but is pinned along the long diagonal.
    assert_eq!(play_all(&mut board, &["a1a8"]), Status::Mate);
    assert!(board.is_pinned(sq("g7")));
    assert!(board.legal_moves().is_empty());
    assert!(!board.is_stalemate());
}
