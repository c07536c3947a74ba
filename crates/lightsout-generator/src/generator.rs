use lightsout_core::{Grid, GridError, Position};
use rand::{Rng, RngExt as _};

use crate::PuzzleSeed;

/// Default board side length.
pub const DEFAULT_SIZE: usize = 5;

/// Default number of simulated clicks.
pub const DEFAULT_ITERATIONS: usize = 5;

/// Errors returned when configuring a [`PuzzleGenerator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GeneratorError {
    /// The board size is zero or larger than [`Grid::MAX_SIZE`].
    #[display("invalid board size {size}")]
    InvalidSize {
        /// Requested side length.
        size: usize,
    },
}

/// A puzzle produced by [`PuzzleGenerator`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPuzzle {
    /// The starting board.
    pub problem: Grid,
    /// The simulated clicks, in order. Clicking them again solves the puzzle.
    pub moves: Vec<Position>,
    /// The seed the puzzle was generated from, if any.
    pub seed: Option<PuzzleSeed>,
}

impl GeneratedPuzzle {
    /// Returns the board side length.
    #[must_use]
    pub fn size(&self) -> usize {
        self.problem.size()
    }
}

/// Generates solvable puzzles by simulating random clicks.
///
/// Coordinates are drawn independently and uniformly, so the same cell can be
/// clicked more than once. Repeated clicks cancel out, which means the
/// realized difficulty may be lower than `iterations` suggests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PuzzleGenerator {
    size: usize,
    iterations: usize,
}

impl Default for PuzzleGenerator {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            iterations: DEFAULT_ITERATIONS,
        }
    }
}

impl PuzzleGenerator {
    /// Creates a generator for `size × size` boards with `iterations` simulated clicks.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::InvalidSize`] if `size` is zero or exceeds [`Grid::MAX_SIZE`].
    pub fn new(size: usize, iterations: usize) -> Result<Self, GeneratorError> {
        if size == 0 || size > Grid::MAX_SIZE {
            return Err(GeneratorError::InvalidSize { size });
        }
        Ok(Self { size, iterations })
    }

    /// Returns the board side length.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the number of simulated clicks.
    #[must_use]
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Generates a puzzle from a freshly drawn random seed.
    #[must_use]
    pub fn generate(&self) -> GeneratedPuzzle {
        self.generate_with_seed(PuzzleSeed::random())
    }

    /// Generates the puzzle determined by `seed`.
    #[must_use]
    pub fn generate_with_seed(&self, seed: PuzzleSeed) -> GeneratedPuzzle {
        let mut rng = seed.rng_for(self.size, self.iterations);
        GeneratedPuzzle {
            seed: Some(seed),
            ..self.generate_with_rng(&mut rng)
        }
    }

    /// Generates a puzzle using coordinates drawn from `rng`.
    pub fn generate_with_rng<R>(&self, rng: &mut R) -> GeneratedPuzzle
    where
        R: Rng + ?Sized,
    {
        let mut problem = self.empty_grid();
        let moves = (0..self.iterations)
            .map(|_| {
                let pos = Position::new(
                    rng.random_range(0..self.size),
                    rng.random_range(0..self.size),
                );
                log::trace!("simulated click at {pos}");
                pos
            })
            .collect::<Vec<_>>();
        for &pos in &moves {
            problem
                .toggle(pos)
                .unwrap_or_else(|e: GridError| unreachable!("generated move is in range: {e}"));
        }

        log::debug!(
            "generated {0}x{0} puzzle with {1} lit cells from {2} clicks:\n{problem}",
            self.size,
            problem.lit_count(),
            self.iterations,
        );

        GeneratedPuzzle {
            problem,
            moves,
            seed: None,
        }
    }

    fn empty_grid(&self) -> Grid {
        Grid::new(self.size)
            .unwrap_or_else(|e| unreachable!("generator size is validated on construction: {e}"))
    }
}
