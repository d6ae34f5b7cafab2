//! Cart operations.

use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::debug;

use crate::domain::{CartRecord, CartSummary, Product, ProductId};
use crate::error::{Error, Result};
use crate::port::outbound::notifier::{Event, EventBus};
use crate::port::outbound::store::CartStore;

/// Cart mutations and totals.
///
/// Every mutation publishes [`Event::CartChanged`]. A line never persists
/// with quantity zero: decreasing the last unit removes the line.
pub struct CartService {
    store: Arc<dyn CartStore>,
    bus: EventBus,
}

impl CartService {
    #[must_use]
    pub fn new(store: Arc<dyn CartStore>, bus: EventBus) -> Self {
        Self { store, bus }
    }

    /// Add one unit of `product`.
    ///
    /// # Errors
    /// Returns the store's error.
    pub fn add(&self, product: &Product) -> Result<CartRecord> {
        let line = self.store.save_or_increment_cart(product)?;
        debug!(product_id = %line.id, quantity = line.quantity, "Added to cart");
        self.bus.publish(Event::CartChanged);
        Ok(line)
    }

    /// Add one unit to an existing line.
    ///
    /// # Errors
    /// Returns [`Error::NotFound`] if the product is not in the cart.
    pub fn increase(&self, id: &ProductId) -> Result<CartRecord> {
        let mut line = self.line(id)?;
        line.quantity = line.quantity.saturating_add(1);
        self.store.set_cart_quantity(id, line.quantity)?;
        self.bus.publish(Event::CartChanged);
        Ok(line)
    }

    /// Take one unit off a line, removing it at quantity one.
    ///
    /// Returns the updated line, or `None` if it was removed.
    ///
    /// # Errors
    /// Returns [`Error::NotFound`] if the product is not in the cart.
    pub fn decrease(&self, id: &ProductId) -> Result<Option<CartRecord>> {
        let mut line = self.line(id)?;
        let result = if line.quantity > 1 {
            line.quantity -= 1;
            self.store.set_cart_quantity(id, line.quantity)?;
            Some(line)
        } else {
            self.store.remove_cart(id)?;
            None
        };
        self.bus.publish(Event::CartChanged);
        Ok(result)
    }

    /// Drop a line entirely. Returns whether it existed.
    ///
    /// # Errors
    /// Returns the store's error.
    pub fn remove(&self, id: &ProductId) -> Result<bool> {
        let removed = self.store.remove_cart(id)?;
        self.bus.publish(Event::CartChanged);
        Ok(removed)
    }

    /// # Errors
    /// Returns the store's error.
    pub fn items(&self) -> Result<Vec<CartRecord>> {
        self.store.cart_items()
    }

    /// # Errors
    /// Returns the store's error.
    pub fn summary(&self) -> Result<CartSummary> {
        Ok(CartSummary::of(&self.items()?))
    }

    /// Sum of price times quantity over all lines.
    ///
    /// # Errors
    /// Returns the store's error.
    pub fn total(&self) -> Result<Decimal> {
        Ok(self.summary()?.total)
    }

    /// Sum of quantities; the badge count.
    ///
    /// # Errors
    /// Returns the store's error.
    pub fn item_count(&self) -> Result<u32> {
        Ok(self.summary()?.quantity)
    }

    fn line(&self, id: &ProductId) -> Result<CartRecord> {
        self.store
            .cart_item(id)?
            .ok_or_else(|| Error::cart_item_not_found(id.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::outbound::memory::MemoryStore;
    use crate::adapter::outbound::notifier::ChannelNotifier;
    use crate::port::outbound::notifier::Subscription;
    use crate::testkit::domain::{id, product};
    use rust_decimal_macros::dec;
    use tokio::sync::mpsc::UnboundedReceiver;

    type Harness = (
        CartService,
        Arc<MemoryStore>,
        UnboundedReceiver<Event>,
        Subscription,
    );

    fn service() -> Harness {
        let store = Arc::new(MemoryStore::new());
        let bus = EventBus::new();
        let (notifier, rx) = ChannelNotifier::new();
        let sub = bus.subscribe(Arc::new(notifier));
        let cart = CartService::new(Arc::clone(&store) as Arc<dyn CartStore>, bus);
        (cart, store, rx, sub)
    }

    #[test]
    fn add_twice_yields_single_line_of_two() {
        let (cart, store, mut rx, _sub) = service();
        let shoe = product("1", "Shoe", dec!(100));

        cart.add(&shoe).unwrap();
        let line = cart.add(&shoe).unwrap();

        assert_eq!(line.quantity, 2);
        assert_eq!(store.cart_items().unwrap().len(), 1);
        assert_eq!(rx.try_recv().unwrap(), Event::CartChanged);
        assert_eq!(rx.try_recv().unwrap(), Event::CartChanged);
    }

    #[test]
    fn increase_and_decrease_adjust_quantity() {
        let (cart, _store, _rx, _sub) = service();
        cart.add(&product("1", "Shoe", dec!(100))).unwrap();

        assert_eq!(cart.increase(&id("1")).unwrap().quantity, 2);
        assert_eq!(cart.decrease(&id("1")).unwrap().unwrap().quantity, 1);
    }

    #[test]
    fn decrease_at_one_removes_line() {
        let (cart, store, _rx, _sub) = service();
        cart.add(&product("1", "Shoe", dec!(100))).unwrap();

        assert!(cart.decrease(&id("1")).unwrap().is_none());
        assert!(store.cart_item(&id("1")).unwrap().is_none());
        assert!(cart.items().unwrap().is_empty());
    }

    #[test]
    fn missing_line_is_not_found() {
        let (cart, _store, mut rx, _sub) = service();

        assert!(matches!(
            cart.increase(&id("7")),
            Err(Error::NotFound { kind: "cart item", .. })
        ));
        assert!(matches!(cart.decrease(&id("7")), Err(Error::NotFound { .. })));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn remove_reports_presence_and_publishes() {
        let (cart, _store, mut rx, _sub) = service();
        cart.add(&product("1", "Shoe", dec!(100))).unwrap();
        let _ = rx.try_recv();

        assert!(cart.remove(&id("1")).unwrap());
        assert_eq!(rx.try_recv().unwrap(), Event::CartChanged);
        assert!(!cart.remove(&id("1")).unwrap());
    }

    #[test]
    fn totals_sum_price_times_quantity() {
        let (cart, _store, _rx, _sub) = service();
        cart.add(&product("1", "Shoe", dec!(100))).unwrap();
        cart.add(&product("1", "Shoe", dec!(100))).unwrap();
        cart.add(&product("2", "Hat", dec!(12.50))).unwrap();

        assert_eq!(cart.total().unwrap(), dec!(212.50));
        assert_eq!(cart.item_count().unwrap(), 3);
        assert_eq!(cart.summary().unwrap().lines, 2);
    }
}
