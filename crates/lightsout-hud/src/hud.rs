use std::{
    cell::{Ref, RefCell},
    rc::Rc,
    time::Duration,
};

use lightsout_game::{Game, GameEvent, SubscriptionId};

use crate::{ClickCounter, EventHandler, GameOverOverlay, Timer};

/// All HUD components of one game.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Hud {
    /// Clicks since the puzzle started.
    pub clicks: ClickCounter,
    /// Elapsed play time.
    pub timer: Timer,
    /// Game-over overlay state.
    pub overlay: GameOverOverlay,
}

impl EventHandler for Hud {
    fn handle_event(&mut self, event: &GameEvent) {
        self.clicks.handle_event(event);
        self.timer.handle_event(event);
        self.overlay.handle_event(event);
    }
}

impl Hud {
    /// Creates a HUD and subscribes it to `game`.
    pub fn attach(game: &mut Game) -> HudHandle {
        let hud = Rc::new(RefCell::new(Self::default()));
        let subscriber = Rc::clone(&hud);
        let subscription = game.subscribe(move |event| {
            subscriber.borrow_mut().handle_event(event);
        });
        log::debug!("attached HUD as {subscription:?}");
        HudHandle { hud, subscription }
    }
}

/// A [`Hud`] attached to a game.
///
/// The HUD keeps receiving events until [`HudHandle::detach`] is called.
#[derive(Debug)]
pub struct HudHandle {
    hud: Rc<RefCell<Hud>>,
    subscription: SubscriptionId,
}

impl HudHandle {
    /// Borrows the current HUD state.
    ///
    /// # Panics
    ///
    /// Panics if called from inside a game event callback while the HUD is
    /// being updated.
    #[must_use]
    pub fn state(&self) -> Ref<'_, Hud> {
        self.hud.borrow()
    }

    /// Returns a copy of the current HUD state.
    #[must_use]
    pub fn snapshot(&self) -> Hud {
        *self.hud.borrow()
    }

    /// Advances the timer by `delta`.
    pub fn tick(&self, delta: Duration) {
        self.hud.borrow_mut().timer.tick(delta);
    }

    /// Unsubscribes the HUD from `game` and returns its final state.
    ///
    /// Returns `None` if the HUD was not subscribed to `game`.
    #[must_use]
    pub fn detach(self, game: &mut Game) -> Option<Hud> {
        game.unsubscribe(self.subscription).then(|| *self.hud.borrow())
    }
}
