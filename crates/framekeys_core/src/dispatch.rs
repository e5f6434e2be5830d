//! Single-threaded event source with scoped listener registration.
//!
//! The platform layer pushes raw events into an [`EventDispatcher`]; anything
//! interested subscribes per [`EventKind`] and holds the returned
//! [`Subscription`]. Dropping the subscription unregisters the listener, so
//! several trackers (or test harnesses) can come and go against one
//! dispatcher without leaving stale listeners behind.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use glam::DVec2;

#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Raw key string as reported by the platform, not yet normalized.
    KeyDown(String),
    KeyUp(String),
    PointerDown(u16),
    PointerUp(u16),
    /// Absolute client coordinates.
    PointerMove(DVec2),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    KeyDown,
    KeyUp,
    PointerDown,
    PointerUp,
    PointerMove,
}

impl EventKind {
    pub const ALL: &'static [EventKind] = &[
        EventKind::KeyDown,
        EventKind::KeyUp,
        EventKind::PointerDown,
        EventKind::PointerUp,
        EventKind::PointerMove,
    ];
}

impl InputEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            Self::KeyDown(_) => EventKind::KeyDown,
            Self::KeyUp(_) => EventKind::KeyUp,
            Self::PointerDown(_) => EventKind::PointerDown,
            Self::PointerUp(_) => EventKind::PointerUp,
            Self::PointerMove(_) => EventKind::PointerMove,
        }
    }
}

type Listener = Rc<dyn Fn(&InputEvent)>;

#[derive(Default)]
struct Registry {
    next_id: u64,
    listeners: Vec<(u64, EventKind, Listener)>,
}

#[derive(Clone, Default)]
pub struct EventDispatcher {
    registry: Rc<RefCell<Registry>>,
}

impl EventDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(
        &self,
        kind: EventKind,
        listener: impl Fn(&InputEvent) + 'static,
    ) -> Subscription {
        let mut registry = self.registry.borrow_mut();
        let id = registry.next_id;
        registry.next_id += 1;
        registry.listeners.push((id, kind, Rc::new(listener)));
        log::trace!("Listener {id} subscribed to {kind:?}");
        Subscription {
            id,
            registry: Rc::downgrade(&self.registry),
        }
    }

    /// Delivers `event` to every listener registered for its kind, in
    /// subscription order.
    pub fn dispatch(&self, event: &InputEvent) {
        let kind = event.kind();
        // Collect first so listeners may (un)subscribe while being called.
        let targets: Vec<Listener> = self
            .registry
            .borrow()
            .listeners
            .iter()
            .filter(|(_, k, _)| *k == kind)
            .map(|(_, _, listener)| Rc::clone(listener))
            .collect();
        for listener in targets {
            listener(event);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.registry.borrow().listeners.len()
    }
}

/// Registration handle. The listener stays attached exactly as long as this
/// value lives.
#[must_use = "dropping a Subscription immediately unregisters its listener"]
pub struct Subscription {
    id: u64,
    registry: Weak<RefCell<Registry>>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        let Some(registry) = self.registry.upgrade() else {
            return;
        };
        registry.borrow_mut().listeners.retain(|(id, _, _)| *id != self.id);
        log::trace!("Listener {} unsubscribed", self.id);
    }
}
