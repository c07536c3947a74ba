use lightsout_game::GameEvent;

use crate::EventHandler;

/// Counts player clicks since the puzzle last started.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, derive_more::Display)]
#[display("Clicks: {clicks}")]
pub struct ClickCounter {
    clicks: usize,
}

impl ClickCounter {
    /// Returns the number of clicks.
    #[must_use]
    pub fn clicks(&self) -> usize {
        self.clicks
    }
}

impl EventHandler for ClickCounter {
    fn handle_event(&mut self, event: &GameEvent) {
        match event {
            GameEvent::Started => self.clicks = 0,
            GameEvent::Clicked(_) => self.clicks += 1,
            GameEvent::Completed => {}
        }
    }
}
