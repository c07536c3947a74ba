//! Example demonstrating Lights Out puzzle generation.
//!
//! Prints the generated board, the seed it came from, and the simulated
//! clicks that solve it.
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_puzzle
//! ```
//!
//! Choose the board size and the number of simulated clicks:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --size 7 --iterations 20
//! ```
//!
//! Reproduce a previous puzzle from its seed:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --seed 1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef
//! ```
//!
//! Set `RUST_LOG=trace` to see each simulated click.

use std::process;

use clap::Parser;
use lightsout_generator::{
    DEFAULT_ITERATIONS, DEFAULT_SIZE, GeneratedPuzzle, PuzzleGenerator, PuzzleSeed,
};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Board side length.
    #[arg(short, long, value_name = "N", default_value_t = DEFAULT_SIZE)]
    size: usize,

    /// Number of random clicks to simulate.
    #[arg(short, long, value_name = "COUNT", default_value_t = DEFAULT_ITERATIONS)]
    iterations: usize,

    /// Seed to reproduce (64 hex characters). A random seed is used if omitted.
    #[arg(long, value_name = "HEX")]
    seed: Option<PuzzleSeed>,
}

fn main() {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    let generator = match PuzzleGenerator::new(args.size, args.iterations) {
        Ok(generator) => generator,
        Err(e) => {
            eprintln!("{e}");
            process::exit(2);
        }
    };

    let puzzle = match args.seed {
        Some(seed) => generator.generate_with_seed(seed),
        None => generator.generate(),
    };
    print_puzzle(&puzzle);
}

fn print_puzzle(puzzle: &GeneratedPuzzle) {
    if let Some(seed) = puzzle.seed {
        println!("Seed:");
        println!("  {seed}");
        println!();
    }

    println!(
        "Problem ({0}x{0}, {1} lit):",
        puzzle.size(),
        puzzle.problem.lit_count()
    );
    for line in puzzle.problem.to_string().lines() {
        println!("  {line}");
    }
    println!();

    println!("Simulated clicks:");
    for pos in &puzzle.moves {
        println!("  {pos}");
    }
}
