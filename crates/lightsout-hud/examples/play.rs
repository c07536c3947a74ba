//! Plays Lights Out on the terminal.
//!
//! Reads one command per line from standard input:
//!
//! - `<row> <col>`: click a cell
//! - `reset`: restart the current puzzle
//! - `new`: generate a new puzzle
//! - `quit`: exit
//!
//! # Usage
//!
//! ```sh
//! cargo run --example play -- --size 5 --iterations 8
//! ```
//!
//! Pass `--lock` to reject clicks once the puzzle is solved, and `--seed` to
//! replay a known puzzle.

use std::{
    io::{self, BufRead as _, Write as _},
    process,
    time::Instant,
};

use clap::Parser;
use lightsout_game::{ClickOutcome, ClickPolicy, Game, GameConfig};
use lightsout_generator::{DEFAULT_ITERATIONS, DEFAULT_SIZE, PuzzleSeed};
use lightsout_hud::{Hud, HudHandle};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Board side length.
    #[arg(short, long, value_name = "N", default_value_t = DEFAULT_SIZE)]
    size: usize,

    /// Number of random clicks used to build each puzzle.
    #[arg(short, long, value_name = "COUNT", default_value_t = DEFAULT_ITERATIONS)]
    iterations: usize,

    /// Seed for the first puzzle (64 hex characters).
    #[arg(long, value_name = "HEX")]
    seed: Option<PuzzleSeed>,

    /// Reject clicks after the puzzle is solved.
    #[arg(long)]
    lock: bool,
}

fn main() -> io::Result<()> {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    let config = GameConfig {
        size: args.size,
        difficulty_iterations: args.iterations,
        click_policy: if args.lock {
            ClickPolicy::LockWhenOver
        } else {
            ClickPolicy::Permissive
        },
    };
    let mut game = match Game::new(config) {
        Ok(game) => game,
        Err(e) => {
            eprintln!("{e}");
            process::exit(2);
        }
    };
    let hud = Hud::attach(&mut game);

    let started = match args.seed {
        Some(seed) => game.new_puzzle_with_seed(seed),
        None => game.new_puzzle(&mut rand::rng()),
    };
    if let Err(e) = started {
        eprintln!("{e}");
        process::exit(2);
    }

    let mut last_tick = Instant::now();
    let stdin = io::stdin();
    print_board(&game, &hud)?;
    for line in stdin.lock().lines() {
        let now = Instant::now();
        hud.tick(now - last_tick);
        last_tick = now;

        let line = line?;
        let words = line.split_whitespace().collect::<Vec<_>>();
        match words.as_slice() {
            [] => {}
            ["quit" | "q"] => break,
            ["reset" | "r"] => game.reset(),
            ["new" | "n"] => {
                if let Err(e) = game.new_puzzle(&mut rand::rng()) {
                    println!("{e}");
                }
            }
            [row, col] => match (row.parse::<isize>(), col.parse::<isize>()) {
                (Ok(row), Ok(col)) => match game.click(row, col) {
                    Ok(ClickOutcome::Completed) => println!("Solved!"),
                    Ok(ClickOutcome::Toggled) => {}
                    Err(e) => println!("{e}"),
                },
                _ => println!("expected two integers"),
            },
            _ => println!("commands: <row> <col> | reset | new | quit"),
        }
        print_board(&game, &hud)?;
    }
    Ok(())
}

fn print_board(game: &Game, hud: &HudHandle) -> io::Result<()> {
    let state = hud.snapshot();
    let mut out = io::stdout().lock();
    writeln!(out)?;
    writeln!(out, "{}    {}", state.clicks, state.timer)?;
    for line in game.grid().to_string().lines() {
        writeln!(out, "  {line}")?;
    }
    if state.overlay.is_visible() {
        writeln!(out, "Game over. Type `new` or `reset` to play again.")?;
    }
    write!(out, "> ")?;
    out.flush()
}
