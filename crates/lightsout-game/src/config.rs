use lightsout_generator::{DEFAULT_ITERATIONS, DEFAULT_SIZE, PuzzleGenerator};

use crate::GameError;

/// Whether clicks are accepted after the puzzle has been completed.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum ClickPolicy {
    /// Clicks keep toggling cells after completion. Blocking input is left
    /// to the caller.
    #[default]
    Permissive,
    /// Clicks after completion are rejected with [`GameError::GameOver`]
    /// until the next reset or new puzzle.
    LockWhenOver,
}

/// Settings consumed when a new puzzle is generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Board side length.
    pub size: usize,
    /// Number of random clicks simulated per puzzle. More clicks generally
    /// give a harder puzzle.
    pub difficulty_iterations: usize,
    /// Behavior of clicks after completion.
    pub click_policy: ClickPolicy,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            difficulty_iterations: DEFAULT_ITERATIONS,
            click_policy: ClickPolicy::default(),
        }
    }
}

impl GameConfig {
    /// Returns a generator for this configuration.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidConfiguration`] if the size is out of range.
    pub fn generator(&self) -> Result<PuzzleGenerator, GameError> {
        Ok(PuzzleGenerator::new(self.size, self.difficulty_iterations)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GameConfig::default();
        assert_eq!(config.size, 5);
        assert_eq!(config.difficulty_iterations, 5);
        assert!(config.click_policy.is_permissive());
    }

    #[test]
    fn test_generator_validates_size() {
        let config = GameConfig {
            size: 0,
            ..GameConfig::default()
        };
        assert_eq!(
            config.generator(),
            Err(GameError::InvalidConfiguration { size: 0 })
        );

        let generator = GameConfig::default().generator().unwrap();
        assert_eq!(generator.size(), 5);
        assert_eq!(generator.iterations(), 5);
    }
}
