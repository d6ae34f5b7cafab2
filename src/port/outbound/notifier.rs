//! Notifier port and the event bus that fans events out to subscribers.
//!
//! Views that live independently of each other (product list, favorites,
//! cart) learn about mutations made elsewhere only through these events.
//! A [`Subscription`] ties a notifier's registration to the lifetime of the
//! view that owns it: dropping the handle unsubscribes.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};

use parking_lot::RwLock;

use crate::domain::ProductId;

/// Events broadcast between views.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A cart line was added, changed, or removed.
    CartChanged,
    /// A product was favorited or unfavorited.
    FavoritesChanged {
        /// The product whose flag changed.
        product_id: ProductId,
        /// The new flag value.
        is_favorite: bool,
    },
}

/// Trait for event handlers.
///
/// # Implementation Notes
///
/// - Implementations must be thread-safe (`Send + Sync`)
/// - `notify` runs on the publisher's thread and should return quickly
pub trait Notifier: Send + Sync {
    /// Handle an event.
    fn notify(&self, event: Event);
}

/// Identifier of a live subscription.
type SubscriptionId = u64;

#[derive(Default)]
struct Registry {
    next_id: AtomicU64,
    subscribers: RwLock<Vec<(SubscriptionId, Arc<dyn Notifier>)>>,
}

/// Typed publish/subscribe bus.
///
/// Cloning the bus shares the same subscriber registry.
#[derive(Clone, Default)]
pub struct EventBus {
    registry: Arc<Registry>,
}

impl EventBus {
    /// Create a bus with no subscribers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a notifier until the returned handle is dropped.
    pub fn subscribe(&self, notifier: Arc<dyn Notifier>) -> Subscription {
        let id = self.registry.next_id.fetch_add(1, Ordering::Relaxed);
        self.registry.subscribers.write().push((id, notifier));
        Subscription {
            id,
            registry: Arc::downgrade(&self.registry),
        }
    }

    /// Deliver `event` to every live subscriber, in subscription order.
    ///
    /// Returns the number of notifiers reached.
    pub fn publish(&self, event: Event) -> usize {
        // Snapshot so a notifier may subscribe or unsubscribe while handling.
        let subscribers: Vec<Arc<dyn Notifier>> = self
            .registry
            .subscribers
            .read()
            .iter()
            .map(|(_, notifier)| Arc::clone(notifier))
            .collect();

        for notifier in &subscribers {
            notifier.notify(event.clone());
        }
        subscribers.len()
    }

    /// Number of live subscriptions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.registry.subscribers.read().len()
    }

    /// Check if nobody is subscribed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("subscribers", &self.len())
            .finish()
    }
}

/// Handle for a registered notifier. Unsubscribes on drop.
#[must_use = "dropping a Subscription unsubscribes immediately"]
#[derive(Debug)]
pub struct Subscription {
    id: SubscriptionId,
    registry: Weak<Registry>,
}

impl Subscription {
    /// Explicitly end the subscription.
    pub fn unsubscribe(self) {}
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            registry
                .subscribers
                .write()
                .retain(|(id, _)| *id != self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use std::sync::atomic::AtomicUsize;

    struct CountingNotifier {
        count: Arc<AtomicUsize>,
    }

    impl Notifier for CountingNotifier {
        fn notify(&self, _event: Event) {
            self.count.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[derive(Default)]
    struct RecordingNotifier {
        events: Mutex<Vec<Event>>,
    }

    impl Notifier for RecordingNotifier {
        fn notify(&self, event: Event) {
            self.events.lock().push(event);
        }
    }

    fn counter(count: &Arc<AtomicUsize>) -> Arc<dyn Notifier> {
        Arc::new(CountingNotifier {
            count: Arc::clone(count),
        })
    }

    #[test]
    fn publish_reaches_every_subscriber() {
        let count = Arc::new(AtomicUsize::new(0));
        let bus = EventBus::new();
        let _a = bus.subscribe(counter(&count));
        let _b = bus.subscribe(counter(&count));

        assert_eq!(bus.publish(Event::CartChanged), 2);
        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn dropping_subscription_unsubscribes() {
        let count = Arc::new(AtomicUsize::new(0));
        let bus = EventBus::new();
        let sub = bus.subscribe(counter(&count));
        assert_eq!(bus.len(), 1);

        drop(sub);
        assert!(bus.is_empty());
        assert_eq!(bus.publish(Event::CartChanged), 0);
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn unsubscribe_only_removes_its_own_notifier() {
        let count = Arc::new(AtomicUsize::new(0));
        let bus = EventBus::new();
        let first = bus.subscribe(counter(&count));
        let _second = bus.subscribe(counter(&count));

        first.unsubscribe();
        bus.publish(Event::CartChanged);
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn clones_share_subscribers() {
        let recorder = Arc::new(RecordingNotifier::default());
        let bus = EventBus::new();
        let _sub = bus.subscribe(recorder.clone());

        let other = bus.clone();
        other.publish(Event::FavoritesChanged {
            product_id: ProductId::new("3"),
            is_favorite: true,
        });

        let events = recorder.events.lock();
        assert_eq!(
            events.as_slice(),
            &[Event::FavoritesChanged {
                product_id: ProductId::new("3"),
                is_favorite: true,
            }]
        );
    }

    #[test]
    fn subscription_outliving_bus_drops_cleanly() {
        let count = Arc::new(AtomicUsize::new(0));
        let bus = EventBus::new();
        let sub = bus.subscribe(counter(&count));
        drop(bus);
        drop(sub);
    }
}
