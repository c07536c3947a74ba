//! Lights Out puzzle generation.
//!
//! Puzzles are built by simulating clicks on an all-off board. Because the
//! toggle rule is its own inverse, replaying the simulated clicks solves the
//! puzzle, so every generated puzzle is solvable in at most `iterations`
//! moves. Shorter solutions may exist; no minimality is guaranteed.
//!
//! # Example
//!
//! ```
//! use lightsout_generator::{PuzzleGenerator, PuzzleSeed};
//!
//! let generator = PuzzleGenerator::new(5, 8).unwrap();
//! let seed: PuzzleSeed = "00112233445566778899aabbccddeeff00112233445566778899aabbccddeeff"
//!     .parse()
//!     .unwrap();
//!
//! let puzzle = generator.generate_with_seed(seed);
//! assert_eq!(puzzle.moves.len(), 8);
//!
//! // The same seed always produces the same puzzle
//! assert_eq!(generator.generate_with_seed(seed), puzzle);
//!
//! // Replaying the simulated clicks solves it
//! let mut grid = puzzle.problem.clone();
//! for pos in &puzzle.moves {
//!     grid.toggle(*pos).unwrap();
//! }
//! assert!(grid.is_all_off());
//! ```

pub use self::{generator::*, seed::*};

mod generator;
mod seed;
