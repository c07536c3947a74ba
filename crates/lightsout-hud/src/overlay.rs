use lightsout_game::GameEvent;

use crate::EventHandler;

/// Visibility of the game-over overlay.
///
/// While the overlay is shown, the board and the control buttons are
/// disabled so the finished puzzle cannot be clicked.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct GameOverOverlay {
    visible: bool,
}

impl GameOverOverlay {
    /// Returns `true` if the overlay is shown.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Returns `true` if the board accepts clicks.
    #[must_use]
    pub fn board_enabled(&self) -> bool {
        !self.visible
    }

    /// Returns `true` if the reset and new-puzzle controls are enabled.
    #[must_use]
    pub fn controls_enabled(&self) -> bool {
        !self.visible
    }
}

impl EventHandler for GameOverOverlay {
    fn handle_event(&mut self, event: &GameEvent) {
        match event {
            GameEvent::Started => self.visible = false,
            GameEvent::Completed => self.visible = true,
            GameEvent::Clicked(_) => {}
        }
    }
}
