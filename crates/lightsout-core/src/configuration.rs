//! Immutable board snapshots.

use crate::Grid;

/// A frozen copy of a board, captured when a puzzle is generated.
///
/// A `Configuration` never changes after capture. It is used to put a puzzle
/// back into its starting state without generating a new one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Configuration {
    grid: Grid,
}

impl Configuration {
    /// Captures a deep copy of `grid`.
    #[must_use]
    pub fn capture(grid: &Grid) -> Self {
        Self { grid: grid.clone() }
    }

    /// Returns the captured board.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Returns the side length of the captured board.
    #[must_use]
    pub fn size(&self) -> usize {
        self.grid.size()
    }

    /// Overwrites `target` with the captured board, cell for cell.
    ///
    /// If `target` has a different size it is replaced entirely.
    pub fn restore_into(&self, target: &mut Grid) {
        target.clone_from(&self.grid);
    }
}

impl From<Grid> for Configuration {
    fn from(grid: Grid) -> Self {
        Self { grid }
    }
}
