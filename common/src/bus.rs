//! Broadcast channel connecting sibling components that hold no reference to each other.
//!
//! The page root constructs one `EventBus` and hands a clone to every component that
//! publishes or listens. Clones share a single subscriber list. Delivery is synchronous:
//! `publish` runs every matching handler, in registration order, before it returns.
//! Subscriptions live as long as the bus; there is no unsubscribe.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use log::debug;

use crate::model::Review;

/// Kinds of event carried by the bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    ReviewSubmitted,
}

/// An event together with its payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BusEvent {
    /// A validated review left the review form.
    ReviewSubmitted(Review),
}

impl BusEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            BusEvent::ReviewSubmitted(_) => EventKind::ReviewSubmitted,
        }
    }
}

type Handler = Rc<dyn Fn(&BusEvent)>;

/// Cloneable handle on a shared, single-threaded subscriber list.
#[derive(Clone, Default)]
pub struct EventBus {
    subscribers: Rc<RefCell<Vec<(EventKind, Handler)>>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `handler` for every future event of `kind`.
    pub fn subscribe<F>(&self, kind: EventKind, handler: F)
    where
        F: Fn(&BusEvent) + 'static,
    {
        let mut subscribers = self.subscribers.borrow_mut();
        subscribers.push((kind, Rc::new(handler)));
        debug!("bus: subscriber #{} registered for {kind:?}", subscribers.len());
    }

    /// Registers `handler` for every submitted review. Used by each unit that reacts to a
    /// submission, so the page and its headless counterpart subscribe the same way.
    pub fn on_review_submitted<F>(&self, handler: F)
    where
        F: Fn(&Review) + 'static,
    {
        self.subscribe(EventKind::ReviewSubmitted, move |event| match event {
            BusEvent::ReviewSubmitted(review) => handler(review),
        });
    }

    /// Delivers `event` to every subscriber of its kind. A publish nobody listens to is a no-op.
    pub fn publish(&self, event: BusEvent) {
        let kind = event.kind();
        // Snapshot so handlers run without the list borrowed.
        let handlers: Vec<Handler> = self
            .subscribers
            .borrow()
            .iter()
            .filter(|(subscribed, _)| *subscribed == kind)
            .map(|(_, handler)| Rc::clone(handler))
            .collect();

        debug!("bus: publishing {kind:?} to {} subscriber(s)", handlers.len());
        for handler in handlers {
            handler(&event);
        }
    }

    pub fn subscriber_count(&self, kind: EventKind) -> usize {
        self.subscribers
            .borrow()
            .iter()
            .filter(|(subscribed, _)| *subscribed == kind)
            .count()
    }
}

/// Two handles are equal when they share the same subscriber list.
impl PartialEq for EventBus {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.subscribers, &other.subscribers)
    }
}

impl fmt::Debug for EventBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventBus")
            .field("subscribers", &self.subscribers.borrow().len())
            .finish()
    }
}
