//! Benchmarks for move validation and game-state operations.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use chess_rules::{Board, GameState, Square};

fn bench_validate(c: &mut Criterion) {
    let mut group = c.benchmark_group("validate");

    // Every (from, to) pair on the starting position
    let startpos = Board::new();
    group.bench_function("startpos_all_pairs", |b| {
        b.iter(|| {
            let mut legal = 0u32;
            for fr in 0..8 {
                for fc in 0..8 {
                    for tr in 0..8 {
                        for tc in 0..8 {
                            if startpos
                                .is_valid_move(black_box(Square(fr, fc)), black_box(Square(tr, tc)))
                            {
                                legal += 1;
                            }
                        }
                    }
                }
            }
            legal
        })
    });

    // Long sliding lines on a sparse board
    let sparse = Board::from_placement("q7/8/8/8/8/8/8/7Q").unwrap();
    group.bench_function("sparse_queen_lines", |b| {
        b.iter(|| {
            let a = sparse.is_valid_move(black_box(Square(0, 0)), black_box(Square(7, 7)));
            let b2 = sparse.is_valid_move(black_box(Square(7, 7)), black_box(Square(7, 0)));
            (a, b2)
        })
    });

    group.finish();
}

fn bench_game(c: &mut Criterion) {
    let mut group = c.benchmark_group("game");

    // A fixed opening sequence, two clicks per move
    let clicks = [
        Square(6, 4),
        Square(4, 4),
        Square(1, 4),
        Square(3, 4),
        Square(7, 6),
        Square(5, 5),
        Square(0, 1),
        Square(2, 2),
    ];
    group.bench_function("opening_sequence", |b| {
        b.iter(|| {
            let mut game = GameState::new();
            for &sq in &clicks {
                game.select_or_move(black_box(sq));
            }
            game
        })
    });

    group.bench_function("placement_round_trip", |b| {
        let board = Board::new();
        b.iter(|| Board::from_placement(&black_box(&board).placement()))
    });

    group.finish();
}

criterion_group!(benches, bench_validate, bench_game);
criterion_main!(benches);
