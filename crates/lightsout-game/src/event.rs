use std::{
    fmt,
    sync::atomic::{AtomicU64, Ordering},
};

use lightsout_core::Position;

/// A notification broadcast by a [`Game`](crate::Game) to its subscribers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum GameEvent {
    /// A new puzzle was generated or the current one was reset.
    Started,
    /// A player click toggled the cells around the given position.
    ///
    /// Clicks simulated during generation are not reported.
    Clicked(Position),
    /// A click left every cell off.
    Completed,
}

/// Handle returned by [`Game::subscribe`](crate::Game::subscribe), used to unsubscribe.
///
/// An id names its subscriber on the game that issued it and nothing else;
/// other games reject it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId {
    bus: u64,
    index: u64,
}

static NEXT_BUS_ID: AtomicU64 = AtomicU64::new(0);

type Subscriber = Box<dyn FnMut(&GameEvent)>;

/// Per-game list of event subscribers.
///
/// Delivery is synchronous and follows registration order.
pub(crate) struct EventBus {
    id: u64,
    next_index: u64,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
}

impl fmt::Debug for EventBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventBus")
            .field("id", &self.id)
            .field("next_index", &self.next_index)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self {
            id: NEXT_BUS_ID.fetch_add(1, Ordering::Relaxed),
            next_index: 0,
            subscribers: Vec::new(),
        }
    }
}

impl EventBus {
    pub(crate) fn subscribe<F>(&mut self, subscriber: F) -> SubscriptionId
    where
        F: FnMut(&GameEvent) + 'static,
    {
        let id = SubscriptionId {
            bus: self.id,
            index: self.next_index,
        };
        self.next_index += 1;
        self.subscribers.push((id, Box::new(subscriber)));
        id
    }

    pub(crate) fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        if id.bus != self.id {
            log::debug!("ignoring {id:?} issued by another game");
            return false;
        }
        let Some(i) = self.subscribers.iter().position(|(sid, _)| *sid == id) else {
            return false;
        };
        self.subscribers.remove(i);
        true
    }

    pub(crate) fn len(&self) -> usize {
        self.subscribers.len()
    }

    pub(crate) fn emit(&mut self, event: GameEvent) {
        log::trace!("emitting {event:?} to {} subscribers", self.subscribers.len());
        for (_, subscriber) in &mut self.subscribers {
            subscriber(&event);
        }
    }
}
