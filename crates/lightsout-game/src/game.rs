use lightsout_core::{Configuration, Grid, Position};
use lightsout_generator::{GeneratedPuzzle, PuzzleGenerator, PuzzleSeed};
use rand::Rng;

use crate::{EventBus, GameConfig, GameError, GameEvent, SubscriptionId};

/// Result of a successful click.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum ClickOutcome {
    /// Cells were toggled and at least one is still lit.
    Toggled,
    /// Cells were toggled and every cell is now off.
    Completed,
}

/// A Lights Out game session.
///
/// Owns the board, the [`Configuration`] captured when the current puzzle was
/// generated, and the game-over flag. Events are delivered synchronously to
/// the subscribers registered on this instance only.
///
/// # Example
///
/// ```
/// use std::{cell::RefCell, rc::Rc};
///
/// use lightsout_game::{Game, GameConfig, GameEvent};
/// use lightsout_generator::GeneratedPuzzle;
///
/// let mut game = Game::new(GameConfig::default()).unwrap();
/// let events = Rc::new(RefCell::new(Vec::new()));
/// let sink = Rc::clone(&events);
/// game.subscribe(move |event| sink.borrow_mut().push(*event));
///
/// game.load(GeneratedPuzzle {
///     problem: "##\n#.".parse().unwrap(),
///     moves: Vec::new(),
///     seed: None,
/// });
/// game.click(0, 0).unwrap();
///
/// assert!(game.is_over());
/// assert_eq!(events.borrow().last(), Some(&GameEvent::Completed));
/// ```
#[derive(Debug)]
pub struct Game {
    config: GameConfig,
    grid: Grid,
    start: Configuration,
    moves: Vec<Position>,
    seed: Option<PuzzleSeed>,
    is_over: bool,
    events: EventBus,
}

impl Game {
    /// Creates a game with an all-off board of the configured size.
    ///
    /// No puzzle is generated and no event is fired; call
    /// [`Game::new_puzzle`] or [`Game::generate`] to start playing.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidConfiguration`] if the configured size is out of range.
    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        let grid = Grid::new(config.size)?;
        Ok(Self {
            config,
            start: Configuration::capture(&grid),
            grid,
            moves: Vec::new(),
            seed: None,
            is_over: false,
            events: EventBus::default(),
        })
    }

    /// Returns the active configuration.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Replaces the configuration used by later calls to [`Game::new_puzzle`].
    ///
    /// The current board is left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidConfiguration`] if the size is out of range.
    pub fn set_config(&mut self, config: GameConfig) -> Result<(), GameError> {
        config.generator()?;
        self.config = config;
        Ok(())
    }

    /// Returns the current board.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Returns the board side length.
    #[must_use]
    pub fn size(&self) -> usize {
        self.grid.size()
    }

    /// Returns the snapshot taken when the current puzzle was generated.
    #[must_use]
    pub fn start_configuration(&self) -> &Configuration {
        &self.start
    }

    /// Returns the clicks recorded with the current puzzle.
    ///
    /// For a puzzle built by [`Game::generate`], [`Game::new_puzzle`] or
    /// [`Game::new_puzzle_with_seed`], clicking them again in any order solves
    /// it. A puzzle passed to [`Game::load`] carries whatever moves it was
    /// given.
    #[must_use]
    pub fn generation_moves(&self) -> &[Position] {
        &self.moves
    }

    /// Returns the seed of the current puzzle, if it was generated from one.
    #[must_use]
    pub fn seed(&self) -> Option<PuzzleSeed> {
        self.seed
    }

    /// Returns `true` once a click has completed the puzzle.
    ///
    /// The flag stays set until the next [`Game::reset`] or new puzzle, even
    /// if later clicks light cells again.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.is_over
    }

    /// Returns `true` if every cell is currently off.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.grid.is_all_off()
    }

    /// Registers a callback for [`GameEvent`]s.
    ///
    /// Callbacks run synchronously, in registration order.
    pub fn subscribe<F>(&mut self, subscriber: F) -> SubscriptionId
    where
        F: FnMut(&GameEvent) + 'static,
    {
        self.events.subscribe(subscriber)
    }

    /// Removes a callback. Returns `false` if `id` was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.events.unsubscribe(id)
    }

    /// Returns the number of registered callbacks.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.events.len()
    }

    /// Generates a `size × size` puzzle by simulating `iterations` random
    /// clicks drawn from `rng`, then fires [`GameEvent::Started`].
    ///
    /// Simulated clicks do not fire events or trigger completion, even if
    /// they happen to cancel out.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidConfiguration`] if `size` is out of range;
    /// the game is left unchanged.
    pub fn generate<R>(
        &mut self,
        size: usize,
        iterations: usize,
        rng: &mut R,
    ) -> Result<(), GameError>
    where
        R: Rng + ?Sized,
    {
        let generator = PuzzleGenerator::new(size, iterations)?;
        self.clear();
        self.load(generator.generate_with_rng(rng));
        Ok(())
    }

    /// Generates a puzzle with the configured size and difficulty.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidConfiguration`] if the configured size is out of range.
    pub fn new_puzzle<R>(&mut self, rng: &mut R) -> Result<(), GameError>
    where
        R: Rng + ?Sized,
    {
        let GameConfig {
            size,
            difficulty_iterations,
            ..
        } = self.config;
        self.generate(size, difficulty_iterations, rng)
    }

    /// Generates the puzzle determined by `seed` with the configured size and difficulty.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidConfiguration`] if the configured size is out of range.
    pub fn new_puzzle_with_seed(&mut self, seed: PuzzleSeed) -> Result<(), GameError> {
        let generator = self.config.generator()?;
        self.clear();
        self.load(generator.generate_with_seed(seed));
        Ok(())
    }

    /// Starts playing an already generated puzzle.
    ///
    /// The puzzle's board becomes both the current board and the start
    /// configuration, the game-over flag is cleared, and
    /// [`GameEvent::Started`] is fired.
    ///
    /// `puzzle.moves` is stored as given and is not checked against the board.
    pub fn load(&mut self, puzzle: GeneratedPuzzle) {
        let GeneratedPuzzle {
            problem,
            moves,
            seed,
        } = puzzle;
        log::debug!(
            "starting {0}x{0} puzzle with {1} lit cells",
            problem.size(),
            problem.lit_count()
        );
        self.start = Configuration::capture(&problem);
        self.grid = problem;
        self.moves = moves;
        self.seed = seed;
        self.is_over = false;
        self.events.emit(GameEvent::Started);
    }

    /// Clicks the cell at `(row, col)`.
    ///
    /// Coordinates come from outside the engine and may be negative.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::OutOfBounds`] if either coordinate is outside
    /// `[0, size)`, and [`GameError::GameOver`] if the puzzle is complete and
    /// the click policy is [`ClickPolicy::LockWhenOver`](crate::ClickPolicy::LockWhenOver).
    /// The board is unchanged on error.
    pub fn click(&mut self, row: isize, col: isize) -> Result<ClickOutcome, GameError> {
        let pos = self.grid.position(row, col)?;
        self.click_at(pos)
    }

    /// Clicks the cell at `pos`.
    ///
    /// Toggles `pos` and its in-bounds neighbors, fires
    /// [`GameEvent::Clicked`], and if the board is now all off marks the game
    /// as over and fires [`GameEvent::Completed`].
    ///
    /// # Errors
    ///
    /// Same as [`Game::click`].
    pub fn click_at(&mut self, pos: Position) -> Result<ClickOutcome, GameError> {
        if self.is_over && self.config.click_policy.is_lock_when_over() {
            return Err(GameError::GameOver);
        }
        self.grid.toggle(pos)?;
        self.events.emit(GameEvent::Clicked(pos));

        if !self.grid.is_all_off() {
            return Ok(ClickOutcome::Toggled);
        }
        log::info!("puzzle completed");
        self.is_over = true;
        self.events.emit(GameEvent::Completed);
        Ok(ClickOutcome::Completed)
    }

    /// Restores the board to the start configuration of the current puzzle
    /// and fires [`GameEvent::Started`].
    ///
    /// This replays the same puzzle; use [`Game::new_puzzle`] for a new one.
    pub fn reset(&mut self) {
        log::debug!("resetting puzzle to its start configuration");
        self.start.restore_into(&mut self.grid);
        self.is_over = false;
        self.events.emit(GameEvent::Started);
    }

    /// Turns every cell off without firing events.
    pub fn clear(&mut self) {
        self.grid.clear();
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use proptest::prelude::*;
    use rand::SeedableRng as _;
    use rand_pcg::Pcg64;

    use super::*;
    use crate::ClickPolicy;

    fn grid(rows: &str) -> Grid {
        rows.replace('/', "\n").parse().expect("valid grid text")
    }

    fn game_with(problem: &str) -> Game {
        let mut game = Game::new(GameConfig::default()).unwrap();
        game.load(GeneratedPuzzle {
            problem: grid(problem),
            moves: Vec::new(),
            seed: None,
        });
        game
    }

    fn record_events(game: &mut Game) -> Rc<RefCell<Vec<GameEvent>>> {
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&events);
        game.subscribe(move |event| sink.borrow_mut().push(*event));
        events
    }

    #[test]
    fn test_new_game_is_blank() {
        let game = Game::new(GameConfig::default()).unwrap();
        assert_eq!(game.size(), 5);
        assert!(game.grid().is_all_off());
        assert!(!game.is_over());
        assert!(game.generation_moves().is_empty());
        assert_eq!(game.seed(), None);
    }

    #[test]
    fn test_new_rejects_invalid_size() {
        let config = GameConfig {
            size: 0,
            ..GameConfig::default()
        };
        assert_eq!(
            Game::new(config).unwrap_err(),
            GameError::InvalidConfiguration { size: 0 }
        );
    }

    #[test]
    fn test_two_by_two_scenario() {
        let mut game = game_with("../..");
        let events = record_events(&mut game);

        assert_eq!(game.click(0, 0), Ok(ClickOutcome::Toggled));
        assert_eq!(game.grid(), &grid("##/#."));
        assert!(!game.is_over());

        assert_eq!(game.click(1, 1), Ok(ClickOutcome::Toggled));
        assert_eq!(game.grid(), &grid("#./.#"));
        assert!(!game.is_over());

        assert_eq!(
            *events.borrow(),
            vec![
                GameEvent::Clicked(Position::new(0, 0)),
                GameEvent::Clicked(Position::new(1, 1)),
            ]
        );
    }

    #[test]
    fn test_two_by_two_truth_table() {
        // Board reached from all-off after clicking each subset of cells.
        // Bit k of the index selects CELLS[k].
        const CELLS: [Position; 4] = [
            Position::new(0, 0),
            Position::new(0, 1),
            Position::new(1, 0),
            Position::new(1, 1),
        ];
        const TABLE: [&str; 16] = [
            "../..", "##/#.", "##/.#", "../##", "#./##", ".#/.#", ".#/#.", "#./..",
            ".#/##", "#./.#", "#./#.", ".#/..", "##/..", "../#.", "../.#", "##/##",
        ];

        for (mask, expected) in TABLE.into_iter().enumerate() {
            let mut game = game_with("../..");
            for (k, &pos) in CELLS.iter().enumerate() {
                if mask & (1 << k) != 0 {
                    game.click_at(pos).unwrap();
                }
            }
            assert_eq!(game.grid(), &grid(expected), "subset {mask:04b}");
            assert_eq!(game.is_solved(), mask == 0, "subset {mask:04b}");
        }
    }

    #[test]
    fn test_completing_click_fires_completed_once() {
        let mut game = game_with("##/#.");
        let events = record_events(&mut game);

        assert_eq!(game.click(0, 0), Ok(ClickOutcome::Completed));
        assert!(game.is_over());
        assert!(game.is_solved());
        assert_eq!(
            *events.borrow(),
            vec![
                GameEvent::Clicked(Position::new(0, 0)),
                GameEvent::Completed,
            ]
        );
    }

    #[test]
    fn test_non_completing_clicks_do_not_fire_completed() {
        let mut game = game_with("#../.../...");
        let events = record_events(&mut game);

        game.click(1, 1).unwrap();
        game.click(2, 2).unwrap();
        assert!(!game.is_over());
        assert!(!events.borrow().iter().any(GameEvent::is_completed));
    }

    #[test]
    fn test_out_of_bounds_clicks_are_rejected() {
        let mut game = game_with("#../.../...");
        let events = record_events(&mut game);
        let before = game.grid().clone();

        assert_eq!(
            game.click(-1, 0),
            Err(GameError::OutOfBounds {
                row: -1,
                col: 0,
                size: 3
            })
        );
        assert_eq!(
            game.click(3, 0),
            Err(GameError::OutOfBounds {
                row: 3,
                col: 0,
                size: 3
            })
        );
        assert!(game.click(0, 3).is_err());
        assert!(game.click_at(Position::new(0, 7)).is_err());

        assert_eq!(game.grid(), &before);
        assert!(events.borrow().is_empty());
    }

    #[test]
    fn test_permissive_policy_allows_clicks_after_completion() {
        let mut game = game_with("##/#.");
        game.click(0, 0).unwrap();
        assert!(game.is_over());

        // A non-completing click on a finished game keeps it over
        assert_eq!(game.click(0, 0), Ok(ClickOutcome::Toggled));
        assert_eq!(game.grid(), &grid("##/#."));
        assert!(!game.is_solved());
        assert!(game.is_over());
        assert_eq!(game.click(1, 0), Ok(ClickOutcome::Toggled));
        assert!(!game.is_solved());
        assert!(game.is_over());
        assert_eq!(game.click(1, 0), Ok(ClickOutcome::Toggled));

        assert_eq!(game.click(0, 0), Ok(ClickOutcome::Completed));
    }

    #[test]
    fn test_lock_when_over_policy_rejects_clicks_after_completion() {
        let mut game = game_with("##/#.");
        game.set_config(GameConfig {
            click_policy: ClickPolicy::LockWhenOver,
            ..GameConfig::default()
        })
        .unwrap();

        game.click(0, 0).unwrap();
        assert_eq!(game.click(1, 1), Err(GameError::GameOver));
        assert!(game.is_solved());

        game.reset();
        assert_eq!(game.click(0, 0), Ok(ClickOutcome::Completed));
    }

    #[test]
    fn test_reset_restores_start_configuration() {
        let mut game = Game::new(GameConfig::default()).unwrap();
        let mut rng = Pcg64::seed_from_u64(42);
        game.generate(5, 10, &mut rng).unwrap();
        let start = game.grid().clone();
        assert_eq!(game.start_configuration().grid(), &start);

        let events = record_events(&mut game);
        for (row, col) in [(0, 0), (2, 3), (4, 4), (2, 3), (1, 0)] {
            game.click(row, col).unwrap();
        }
        game.reset();

        assert_eq!(game.grid(), &start);
        assert!(!game.is_over());
        assert_eq!(events.borrow().last(), Some(&GameEvent::Started));
    }

    #[test]
    fn test_reset_after_completion_clears_game_over() {
        let mut game = game_with("##/#.");
        game.click(0, 0).unwrap();
        assert!(game.is_over());

        game.reset();
        assert!(!game.is_over());
        assert_eq!(game.grid(), &grid("##/#."));
    }

    #[test]
    fn test_generate_fires_started_and_replays_to_solution() {
        let mut game = Game::new(GameConfig::default()).unwrap();
        let events = record_events(&mut game);
        let mut rng = Pcg64::seed_from_u64(3);
        game.generate(6, 15, &mut rng).unwrap();

        assert_eq!(*events.borrow(), vec![GameEvent::Started]);
        assert_eq!(game.size(), 6);
        assert_eq!(game.generation_moves().len(), 15);
        assert!(!game.is_over());

        let mut replay = game.grid().clone();
        for &pos in game.generation_moves() {
            replay.toggle(pos).unwrap();
        }
        assert!(replay.is_all_off());
    }

    #[test]
    fn test_generate_rejects_invalid_size() {
        let mut game = game_with("#./..");
        let events = record_events(&mut game);
        let mut rng = Pcg64::seed_from_u64(0);

        assert_eq!(
            game.generate(0, 5, &mut rng),
            Err(GameError::InvalidConfiguration { size: 0 })
        );
        assert_eq!(game.grid(), &grid("#./.."));
        assert!(events.borrow().is_empty());
    }

    #[test]
    fn test_new_puzzle_with_seed_is_reproducible() {
        let seed: PuzzleSeed = "1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef"
            .parse()
            .unwrap();
        let mut a = Game::new(GameConfig::default()).unwrap();
        let mut b = Game::new(GameConfig::default()).unwrap();
        a.new_puzzle_with_seed(seed).unwrap();
        b.new_puzzle_with_seed(seed).unwrap();

        assert_eq!(a.grid(), b.grid());
        assert_eq!(a.generation_moves(), b.generation_moves());
        assert_eq!(a.seed(), Some(seed));
    }

    #[test]
    fn test_new_puzzle_uses_configured_shape() {
        let mut game = Game::new(GameConfig {
            size: 7,
            difficulty_iterations: 9,
            ..GameConfig::default()
        })
        .unwrap();
        let mut rng = Pcg64::seed_from_u64(11);
        game.new_puzzle(&mut rng).unwrap();

        assert_eq!(game.size(), 7);
        assert_eq!(game.generation_moves().len(), 9);
    }

    #[test]
    fn test_clear_fires_no_events() {
        let mut game = game_with("##/##");
        let events = record_events(&mut game);
        game.clear();

        assert!(game.grid().is_all_off());
        assert!(events.borrow().is_empty());
        assert!(!game.is_over());
    }

    #[test]
    fn test_unsubscribe() {
        let mut game = game_with("##/##");
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&events);
        let id = game.subscribe(move |event| sink.borrow_mut().push(*event));
        assert_eq!(game.subscriber_count(), 1);

        game.reset();
        assert!(game.unsubscribe(id));
        game.reset();

        assert_eq!(*events.borrow(), vec![GameEvent::Started]);
        assert_eq!(game.subscriber_count(), 0);
    }

    #[test]
    fn test_subscribers_are_scoped_to_their_game() {
        let mut a = game_with("##/##");
        let mut b = game_with("##/##");
        let events = record_events(&mut a);

        b.reset();
        b.click(0, 0).unwrap();
        assert!(events.borrow().is_empty());

        a.reset();
        assert_eq!(*events.borrow(), vec![GameEvent::Started]);
    }

    proptest! {
        #[test]
        fn prop_reset_restores_snapshot_after_any_clicks(
            rng_seed in any::<u64>(),
            clicks in prop::collection::vec((0_isize..5, 0_isize..5), 0..30),
        ) {
            let mut game = Game::new(GameConfig::default()).unwrap();
            game.new_puzzle(&mut Pcg64::seed_from_u64(rng_seed)).unwrap();
            let snapshot = game.start_configuration().clone();

            for (row, col) in clicks {
                game.click(row, col).unwrap();
            }
            game.reset();

            prop_assert_eq!(game.grid(), snapshot.grid());
            prop_assert_eq!(game.start_configuration(), &snapshot);
            prop_assert!(!game.is_over());
        }

        #[test]
        fn prop_completed_fires_only_when_board_is_clear(
            rng_seed in any::<u64>(),
            clicks in prop::collection::vec((0_isize..3, 0_isize..3), 1..20),
        ) {
            let mut game = Game::new(GameConfig {
                size: 3,
                difficulty_iterations: 4,
                ..GameConfig::default()
            })
            .unwrap();
            game.new_puzzle(&mut Pcg64::seed_from_u64(rng_seed)).unwrap();
            let events = record_events(&mut game);

            for (row, col) in clicks {
                let before = events.borrow().len();
                let outcome = game.click(row, col).unwrap();
                let fired = events.borrow()[before..].contains(&GameEvent::Completed);
                prop_assert_eq!(fired, game.is_solved());
                prop_assert_eq!(outcome.is_completed(), game.is_solved());
            }
        }
    }
}
