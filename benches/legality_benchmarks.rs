//! Benchmarks for move legality and position classification.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use chess_rules::board::{Board, CoordinateMove, PieceKind, Square};

const ITALIAN: &[&str] = &["e2e4", "e7e5", "g1f3", "b8c6", "f1c4", "g8f6"];

fn position_after(moves: &[&str]) -> Board {
    let mut board = Board::new();
    for notation in moves {
        let mv: CoordinateMove = notation.parse().unwrap();
        board.play(mv.from, mv.to, mv.promotion).unwrap();
    }
    board
}

/// Number of move sequences of length `depth`, promoting to queens only.
fn count_lines(board: &Board, depth: usize) -> u64 {
    if depth == 0 {
        return 1;
    }
    board
        .legal_moves()
        .into_iter()
        .map(|(from, to)| {
            let mut next = board.clone();
            let promotion = next
                .try_promote_pawn(from, to)
                .then_some(PieceKind::Queen);
            next.play(from, to, promotion).unwrap();
            count_lines(&next, depth - 1)
        })
        .sum()
}

fn bench_move_options(c: &mut Criterion) {
    let mut group = c.benchmark_group("move_options");

    let startpos = Board::new();
    group.bench_function("knight_startpos", |b| {
        b.iter(|| black_box(startpos.move_options(black_box(Square::at(0, 6)))))
    });

    let italian = position_after(ITALIAN);
    group.bench_function("bishop_italian", |b| {
        b.iter(|| black_box(italian.move_options(black_box(Square::at(3, 2)))))
    });

    group.finish();
}

fn bench_legal_moves(c: &mut Criterion) {
    let mut group = c.benchmark_group("legal_moves");

    let startpos = Board::new();
    group.bench_function("startpos", |b| b.iter(|| black_box(startpos.legal_moves())));

    let italian = position_after(ITALIAN);
    group.bench_function("italian", |b| b.iter(|| black_box(italian.legal_moves())));

    let mated = position_after(&["f2f3", "e7e5", "g2g4", "d8h4"]);
    group.bench_function("fools_mate", |b| {
        b.iter(|| black_box(mated.has_legal_move()))
    });

    group.finish();
}

fn bench_lines(c: &mut Criterion) {
    let mut group = c.benchmark_group("lines");
    group.sample_size(10);

    let startpos = Board::new();
    for depth in 1..=2 {
        group.bench_with_input(BenchmarkId::new("startpos", depth), &depth, |b, &depth| {
            b.iter(|| count_lines(&startpos, black_box(depth)))
        });
    }

    group.finish();
}

fn bench_play(c: &mut Criterion) {
    c.bench_function("play_italian_opening", |b| {
        b.iter(|| black_box(position_after(black_box(ITALIAN))))
    });
}

criterion_group!(
    benches,
    bench_move_options,
    bench_legal_moves,
    bench_lines,
    bench_play
);
criterion_main!(benches);
