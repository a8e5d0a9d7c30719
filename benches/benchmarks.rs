use criterion::{criterion_group, criterion_main, Criterion};
use othello_bitboard::{Bitboard, Board, Color, Direction, ALL_DIRECTIONS};
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::hint::black_box;

/// Scatter pieces over the board to create a realistic mid-game position.
/// Uses a fixed seed for reproducibility across benchmark runs.
fn setup_midgame() -> Board {
    let mut rng = StdRng::seed_from_u64(42);
    let mut black = 0u64;
    let mut white = 0u64;
    for bit in 0..64 {
        match [None, Some(Color::Black), Some(Color::White)]
            .choose(&mut rng)
            .unwrap()
        {
            Some(Color::Black) => black |= 1 << bit,
            Some(Color::White) => white |= 1 << bit,
            None => {}
        }
    }
    Board::from_bitboards(Bitboard::new(black), Bitboard::new(white)).unwrap()
}

// ---------------------------------------------------------------------------
// Microbenchmarks
// ---------------------------------------------------------------------------

fn bench_shift_direction(c: &mut Criterion) {
    let board = setup_midgame();
    let own = board.pieces(Color::Black);
    c.bench_function("shift_direction", |b| {
        b.iter(|| black_box(own.shift_direction(black_box(Direction::NE))))
    });
}

fn bench_adjacent_all(c: &mut Criterion) {
    let board = setup_midgame();
    let own = board.pieces(Color::Black);
    c.bench_function("adjacent_all", |b| b.iter(|| black_box(own.adjacent(None))));
}

fn bench_possible_moves_start(c: &mut Criterion) {
    let board = Board::new();
    c.bench_function("possible_moves_start", |b| {
        b.iter(|| black_box(board.possible_moves(Color::Black)))
    });
}

fn bench_possible_moves_midgame(c: &mut Criterion) {
    let board = setup_midgame();
    c.bench_function("possible_moves_midgame", |b| {
        b.iter(|| black_box(board.possible_moves(Color::White)))
    });
}

fn bench_possible_moves_long_runs(c: &mut Criterion) {
    // A single own piece in the corner facing the rest of the board
    let own = Bitboard::from_algebraic_list(["A1"]).unwrap();
    let opponent = !own & !Bitboard::from_algebraic_list(["H1", "H8", "A8"]).unwrap();
    c.bench_function("possible_moves_long_runs", |b| {
        b.iter(|| black_box(own.possible_moves(black_box(opponent))))
    });
}

// ---------------------------------------------------------------------------
// Integration benchmarks
// ---------------------------------------------------------------------------

fn bench_moves_to_coordinates(c: &mut Criterion) {
    let board = setup_midgame();
    c.bench_function("moves_to_coordinates", |b| {
        b.iter(|| {
            let moves = board.possible_moves(Color::Black);
            let coords: Vec<_> = moves
                .bit_list(true)
                .into_iter()
                .filter_map(|i| othello_bitboard::Coordinate::to_bitboard(i).ok())
                .collect();
            black_box(coords)
        })
    });
}

fn bench_directions_reversed(c: &mut Criterion) {
    let board = setup_midgame();
    let own = board.pieces(Color::Black);
    let opponent = board.pieces(Color::White);
    let mut order = ALL_DIRECTIONS;
    order.reverse();
    c.bench_function("directions_reversed", |b| {
        b.iter(|| black_box(own.possible_moves_in_order(opponent, &order)))
    });
}

criterion_group!(
    benches,
    bench_shift_direction,
    bench_adjacent_all,
    bench_possible_moves_start,
    bench_possible_moves_midgame,
    bench_possible_moves_long_runs,
    bench_moves_to_coordinates,
    bench_directions_reversed,
);
criterion_main!(benches);
