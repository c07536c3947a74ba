use std::{fmt, time::Duration};

use lightsout_game::GameEvent;

use crate::EventHandler;

/// Elapsed play time.
///
/// The timer does not read a clock. The front end advances it with
/// [`Timer::tick`] once per frame; ticks are ignored while it is stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timer {
    elapsed: Duration,
    running: bool,
}

impl Default for Timer {
    fn default() -> Self {
        Self {
            elapsed: Duration::ZERO,
            running: true,
        }
    }
}

impl Timer {
    /// Returns the elapsed time since the last start.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Returns `true` while the timer is counting.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Advances the timer by `delta` if it is running.
    pub fn tick(&mut self, delta: Duration) {
        if self.running {
            self.elapsed += delta;
        }
    }

    /// Zeroes the elapsed time and starts counting.
    pub fn start(&mut self) {
        self.elapsed = Duration::ZERO;
        self.running = true;
    }

    /// Stops counting and keeps the elapsed time.
    pub fn stop(&mut self) {
        self.running = false;
    }
}

impl EventHandler for Timer {
    fn handle_event(&mut self, event: &GameEvent) {
        match event {
            GameEvent::Started => self.start(),
            GameEvent::Completed => self.stop(),
            GameEvent::Clicked(_) => {}
        }
    }
}

impl fmt::Display for Timer {
    /// Formats as `mm:ss`. Only the minutes component (0-59) is shown, so
    /// whole hours wrap around.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let secs = self.elapsed.as_secs();
        write!(f, "{:02}:{:02}", (secs / 60) % 60, secs % 60)
    }
}
