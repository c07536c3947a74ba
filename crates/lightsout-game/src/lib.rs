//! Lights Out game engine.
//!
//! [`Game`] owns the board, the configuration it started from, and the
//! game-over flag. It applies clicks, detects completion, generates new
//! puzzles, and resets the current one. Interested parties (click counters,
//! timers, overlays) observe the game through [`Game::subscribe`].
//!
//! # Example
//!
//! ```
//! use lightsout_game::{Game, GameConfig};
//! use lightsout_generator::PuzzleSeed;
//!
//! let mut game = Game::new(GameConfig::default()).unwrap();
//! let seed: PuzzleSeed = "1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef"
//!     .parse()
//!     .unwrap();
//! game.new_puzzle_with_seed(seed).unwrap();
//!
//! // Replaying the generating clicks always solves the puzzle
//! let moves = game.generation_moves().to_vec();
//! for pos in moves {
//!     game.click_at(pos).unwrap();
//! }
//! assert!(game.is_solved());
//!
//! // Out-of-range clicks are rejected
//! assert!(game.click(-1, 0).is_err());
//! ```

pub use self::{config::*, error::*, event::*, game::*};

mod config;
mod error;
mod event;
mod game;
