//! Notification adapters.
//!
//! Implements the `port::outbound::notifier::Notifier` trait for the
//! storefront's event sinks.

use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::port::outbound::notifier::{Event, Notifier};

/// A no-op notifier for testing or when notifications are disabled.
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn notify(&self, _event: Event) {}
}

/// A logging notifier that logs events via tracing.
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, event: Event) {
        match event {
            Event::CartChanged => {
                info!("Cart changed");
            }
            Event::FavoritesChanged {
                product_id,
                is_favorite,
            } => {
                info!(product_id = %product_id, is_favorite, "Favorites changed");
            }
        }
    }
}

/// Forwards events into an unbounded channel.
///
/// The receiving half belongs to whoever owns a view's state; it drains the
/// channel on its own task, so handlers never touch that state from the
/// publisher's thread.
pub struct ChannelNotifier {
    tx: mpsc::UnboundedSender<Event>,
}

impl ChannelNotifier {
    /// Create a notifier and the receiver its events land on.
    #[must_use]
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Event>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl Notifier for ChannelNotifier {
    fn notify(&self, event: Event) {
        if self.tx.send(event).is_err() {
            debug!("Event receiver dropped, discarding event");
        }
    }
}
