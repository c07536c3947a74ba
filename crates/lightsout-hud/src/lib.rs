//! Heads-up display state for a Lights Out game.
//!
//! These components hold no game logic. They react to [`GameEvent`]s
//! broadcast by a [`Game`] and keep the values a front end shows next to the
//! board:
//!
//! - [`ClickCounter`]: clicks since the puzzle (re)started
//! - [`Timer`]: elapsed time, stopped on completion
//! - [`GameOverOverlay`]: whether the game-over overlay is shown
//!
//! [`Hud::attach`] wires all three to a game through one subscription.
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//!
//! use lightsout_game::{Game, GameConfig};
//! use lightsout_hud::Hud;
//!
//! let mut game = Game::new(GameConfig::default()).unwrap();
//! let hud = Hud::attach(&mut game);
//!
//! // Start from the blank board; the click lights five cells
//! game.reset();
//! game.click(2, 2).unwrap();
//! hud.tick(Duration::from_secs(75));
//!
//! assert_eq!(hud.state().clicks.to_string(), "Clicks: 1");
//! assert_eq!(hud.state().timer.to_string(), "01:15");
//! ```
//!
//! [`GameEvent`]: lightsout_game::GameEvent
//! [`Game`]: lightsout_game::Game

pub use self::{click_counter::*, hud::*, overlay::*, timer::*};

mod click_counter;
mod hud;
mod overlay;
mod timer;

use lightsout_game::GameEvent;

/// A component that updates itself from game events.
pub trait EventHandler {
    /// Applies one event.
    fn handle_event(&mut self, event: &GameEvent);
}
