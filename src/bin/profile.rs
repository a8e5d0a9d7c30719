use std::hint::black_box;
use std::process::ExitCode;

use othello_bitboard::{Bitboard, Board, Color};
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

const DEFAULT_POSITIONS: usize = 10_000;
const DEFAULT_SEED: u64 = 42;

/// Fill each square with nothing, black or white, one third each.
fn random_board(rng: &mut StdRng) -> Option<Board> {
    let mut black = 0u64;
    let mut white = 0u64;
    for bit in 0..64 {
        match [None, Some(Color::Black), Some(Color::White)].choose(rng)? {
            Some(Color::Black) => black |= 1 << bit,
            Some(Color::White) => white |= 1 << bit,
            None => {}
        }
    }
    Board::from_bitboards(Bitboard::new(black), Bitboard::new(white)).ok()
}

fn parse_arg<T: std::str::FromStr>(arg: Option<String>, default: T) -> Option<T> {
    match arg {
        Some(s) => s.parse().ok(),
        None => Some(default),
    }
}

#[cfg_attr(feature = "hotpath", hotpath::main)]
fn main() -> ExitCode {
    let mut args = std::env::args().skip(1);
    let (Some(positions), Some(seed)) = (
        parse_arg(args.next(), DEFAULT_POSITIONS),
        parse_arg(args.next(), DEFAULT_SEED),
    ) else {
        eprintln!("usage: profile [positions] [seed]");
        return ExitCode::FAILURE;
    };

    let mut rng = StdRng::seed_from_u64(seed);
    let mut total_moves = 0u64;

    for _ in 0..positions {
        let Some(board) = random_board(&mut rng) else {
            eprintln!("failed to generate a position");
            return ExitCode::FAILURE;
        };
        for color in [Color::Black, Color::White] {
            total_moves += black_box(board.possible_moves(color)).count() as u64;
        }
    }

    println!(
        "positions: {}\nseed: {}\nlegal moves found: {}",
        positions, seed, total_moves
    );
    ExitCode::SUCCESS
}
