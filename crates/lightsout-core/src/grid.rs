//! The square board of on/off cells and the toggle rule.

use std::{
    fmt::{self, Write as _},
    iter,
    ops::Index,
    str::FromStr,
};

use crate::Position;

/// Errors returned by [`Grid`] operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GridError {
    /// The coordinate lies outside `[0, size)` on at least one axis.
    #[display("position ({row}, {col}) is outside the {size}x{size} grid")]
    OutOfBounds {
        /// Requested row.
        row: isize,
        /// Requested column.
        col: isize,
        /// Side length of the grid.
        size: usize,
    },
    /// The requested side length is zero or larger than [`Grid::MAX_SIZE`].
    #[display("grid size {size} is out of range (expected 1..=255)")]
    InvalidSize {
        /// Requested side length.
        size: usize,
    },
}

/// Errors returned when parsing a [`Grid`] from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseGridError {
    /// The input contains no cells.
    #[display("grid text is empty")]
    Empty,
    /// A character other than a cell marker or whitespace was found.
    #[display("invalid cell character {ch:?}")]
    InvalidChar {
        /// The offending character.
        ch: char,
    },
    /// The number of cells is not a perfect square.
    #[display("{cells} cells do not form a square grid")]
    NotSquare {
        /// Number of cells read.
        cells: usize,
    },
    /// The grid would be larger than [`Grid::MAX_SIZE`].
    #[display("grid size {size} exceeds the maximum of 255")]
    TooLarge {
        /// Side length implied by the input.
        size: usize,
    },
}

/// A square Lights Out board.
///
/// Cells are stored row-major in a single flat buffer of exactly
/// `size * size` entries, so the board can never become ragged.
/// `true` means the cell is lit.
///
/// Indexing with `grid[pos]` panics when `pos` is out of range; use
/// [`Grid::get`] or the fallible mutators for unchecked input.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    size: usize,
    cells: Vec<bool>,
}

impl Grid {
    /// Largest supported side length.
    pub const MAX_SIZE: usize = 255;

    /// Creates a grid with every cell off.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidSize`] if `size` is zero or exceeds [`Grid::MAX_SIZE`].
    pub fn new(size: usize) -> Result<Self, GridError> {
        if size == 0 || size > Self::MAX_SIZE {
            return Err(GridError::InvalidSize { size });
        }
        Ok(Self {
            size,
            cells: vec![false; size * size],
        })
    }

    /// Returns the side length.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if `pos` lies on this grid.
    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.size && pos.col < self.size
    }

    /// Validates an external, possibly negative, coordinate pair.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfBounds`] if either coordinate is negative or
    /// not less than the grid size.
    pub fn position(&self, row: isize, col: isize) -> Result<Position, GridError> {
        let in_range = |v: isize| usize::try_from(v).ok().filter(|&v| v < self.size);
        match (in_range(row), in_range(col)) {
            (Some(row), Some(col)) => Ok(Position::new(row, col)),
            _ => Err(GridError::OutOfBounds {
                row,
                col,
                size: self.size,
            }),
        }
    }

    fn check(&self, pos: Position) -> Result<(), GridError> {
        if self.contains(pos) {
            Ok(())
        } else {
            Err(self.out_of_bounds(pos))
        }
    }

    fn out_of_bounds(&self, pos: Position) -> GridError {
        GridError::OutOfBounds {
            row: isize::try_from(pos.row).unwrap_or(isize::MAX),
            col: isize::try_from(pos.col).unwrap_or(isize::MAX),
            size: self.size,
        }
    }

    fn offset(&self, pos: Position) -> usize {
        pos.row * self.size + pos.col
    }

    /// Returns the state of the cell at `pos`, or `None` if it is off the grid.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<bool> {
        self.contains(pos).then(|| self.cells[self.offset(pos)])
    }

    /// Sets a single cell without touching its neighbors.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfBounds`] if `pos` is off the grid.
    pub fn set(&mut self, pos: Position, on: bool) -> Result<(), GridError> {
        self.check(pos)?;
        let i = self.offset(pos);
        self.cells[i] = on;
        Ok(())
    }

    /// Returns the in-bounds axis-aligned neighbors of `pos`.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfBounds`] if `pos` is off the grid.
    pub fn neighbors(&self, pos: Position) -> Result<impl Iterator<Item = Position>, GridError> {
        self.check(pos)?;
        Ok(neighbors(pos, self.size))
    }

    /// Returns every cell a click at `pos` flips: `pos` itself followed by
    /// its in-bounds neighbors.
    ///
    /// Corners yield 3 positions, edges 4, and interior cells 5. There is no
    /// wraparound.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfBounds`] if `pos` is off the grid.
    pub fn toggle_area(&self, pos: Position) -> Result<impl Iterator<Item = Position>, GridError> {
        self.check(pos)?;
        Ok(iter::once(pos).chain(neighbors(pos, self.size)))
    }

    /// Applies the plus-shaped toggle rule at `pos`.
    ///
    /// Flips `pos` and each neighbor returned by [`Grid::neighbors`]. The
    /// operation is its own inverse.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfBounds`] if `pos` is off the grid; the grid
    /// is left unchanged.
    ///
    /// # Example
    ///
    /// ```
    /// use lightsout_core::{Grid, Position};
    ///
    /// let mut grid = Grid::new(2).unwrap();
    /// grid.toggle(Position::new(0, 0)).unwrap();
    /// assert_eq!(grid.to_string(), "##\n#.");
    /// ```
    pub fn toggle(&mut self, pos: Position) -> Result<(), GridError> {
        self.check(pos)?;
        for p in iter::once(pos).chain(neighbors(pos, self.size)) {
            let i = self.offset(p);
            self.cells[i] = !self.cells[i];
        }
        Ok(())
    }

    /// Turns every cell off.
    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    /// Returns `true` if no cell is lit, which is the solved state.
    #[must_use]
    pub fn is_all_off(&self) -> bool {
        !self.cells.contains(&true)
    }

    /// Returns the number of lit cells.
    #[must_use]
    pub fn lit_count(&self) -> usize {
        self.cells.iter().filter(|&&on| on).count()
    }

    /// Returns all positions in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + use<> {
        let size = self.size;
        (0..size).flat_map(move |row| (0..size).map(move |col| Position::new(row, col)))
    }

    /// Returns the positions of lit cells in row-major order.
    pub fn lit_positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.positions().filter(|&pos| self[pos])
    }

    /// Returns the rows as slices.
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        self.cells.chunks(self.size)
    }
}

fn neighbors(pos: Position, size: usize) -> impl Iterator<Item = Position> {
    pos.up()
        .into_iter()
        .chain(pos.down(size))
        .chain(pos.left())
        .chain(pos.right(size))
}

impl Index<Position> for Grid {
    type Output = bool;

    fn index(&self, pos: Position) -> &Self::Output {
        assert!(
            self.contains(pos),
            "position {pos} is outside the {0}x{0} grid",
            self.size
        );
        &self.cells[self.offset(pos)]
    }
}

impl fmt::Display for Grid {
    /// Writes one line per row, `#` for lit cells and `.` for unlit ones.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                f.write_char('\n')?;
            }
            for &on in row {
                f.write_char(if on { '#' } else { '.' })?;
            }
        }
        Ok(())
    }
}

impl FromStr for Grid {
    type Err = ParseGridError;

    /// Parses a grid from text.
    ///
    /// `#`, `*` and `1` mark lit cells; `.`, `_` and `0` mark unlit ones.
    /// Whitespace is ignored, so rows may be laid out on separate lines or
    /// run together. The cell count must be a perfect square.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cells = s
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|ch| match ch {
                '#' | '*' | '1' => Ok(true),
                '.' | '_' | '0' => Ok(false),
                ch => Err(ParseGridError::InvalidChar { ch }),
            })
            .collect::<Result<Vec<_>, _>>()?;

        if cells.is_empty() {
            return Err(ParseGridError::Empty);
        }
        let size = cells.len().isqrt();
        if size * size != cells.len() {
            return Err(ParseGridError::NotSquare { cells: cells.len() });
        }
        if size > Self::MAX_SIZE {
            return Err(ParseGridError::TooLarge { size });
        }
        Ok(Self { size, cells })
    }
}
