//! Board coordinates.

use std::fmt;

/// A cell coordinate on a board.
///
/// Rows grow downward and columns grow rightward, both starting at 0.
/// A `Position` carries no board size; bounds are checked by the [`Grid`]
/// it is used with.
///
/// [`Grid`]: crate::Grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    /// Row index.
    pub row: usize,
    /// Column index.
    pub col: usize,
}

impl Position {
    /// Creates a new position.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns the position one row up, if it exists.
    #[must_use]
    pub fn up(self) -> Option<Self> {
        self.row.checked_sub(1).map(|row| Self::new(row, self.col))
    }

    /// Returns the position one row down, if it is below `size`.
    #[must_use]
    pub fn down(self, size: usize) -> Option<Self> {
        (self.row + 1 < size).then(|| Self::new(self.row + 1, self.col))
    }

    /// Returns the position one column left, if it exists.
    #[must_use]
    pub fn left(self) -> Option<Self> {
        self.col.checked_sub(1).map(|col| Self::new(self.row, col))
    }

    /// Returns the position one column right, if it is left of `size`.
    #[must_use]
    pub fn right(self, size: usize) -> Option<Self> {
        (self.col + 1 < size).then(|| Self::new(self.row, self.col + 1))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}
