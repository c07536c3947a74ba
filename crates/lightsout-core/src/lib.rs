//! Core data structures for Lights Out puzzles.
//!
//! This crate provides the board representation shared by the generator, the
//! game engine, and anything that displays a board.
//!
//! # Overview
//!
//! - [`position`]: `(row, col)` coordinates on a board
//! - [`grid`]: the square [`Grid`] of on/off cells and the plus-shaped toggle rule
//! - [`configuration`]: immutable [`Configuration`] snapshots used to restore a puzzle
//!
//! # Examples
//!
//! ```
//! use lightsout_core::{Grid, Position};
//!
//! let mut grid = Grid::new(3).unwrap();
//!
//! // Clicking the center flips it and its four neighbors
//! grid.toggle(Position::new(1, 1)).unwrap();
//! assert_eq!(grid.lit_count(), 5);
//!
//! // Toggling is its own inverse
//! grid.toggle(Position::new(1, 1)).unwrap();
//! assert!(grid.is_all_off());
//! ```

pub mod configuration;
pub mod grid;
pub mod position;

pub use self::{
    configuration::Configuration,
    grid::{Grid, GridError, ParseGridError},
    position::Position,
};
