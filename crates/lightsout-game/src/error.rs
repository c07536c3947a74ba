use lightsout_core::GridError;
use lightsout_generator::GeneratorError;

/// Errors returned by [`Game`](crate::Game) operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GameError {
    /// A click or toggle coordinate is outside `[0, size)`.
    #[display("position ({row}, {col}) is outside the {size}x{size} board")]
    OutOfBounds {
        /// Requested row.
        row: isize,
        /// Requested column.
        col: isize,
        /// Side length of the board.
        size: usize,
    },
    /// The board size is zero or too large.
    #[display("invalid configuration: board size {size} is out of range")]
    InvalidConfiguration {
        /// Requested side length.
        size: usize,
    },
    /// The puzzle is complete and the click policy rejects further clicks.
    #[display("the puzzle is already complete")]
    GameOver,
}

impl From<GridError> for GameError {
    fn from(error: GridError) -> Self {
        match error {
            GridError::OutOfBounds { row, col, size } => Self::OutOfBounds { row, col, size },
            GridError::InvalidSize { size } => Self::InvalidConfiguration { size },
        }
    }
}

impl From<GeneratorError> for GameError {
    fn from(error: GeneratorError) -> Self {
        match error {
            GeneratorError::InvalidSize { size } => Self::InvalidConfiguration { size },
        }
    }
}
