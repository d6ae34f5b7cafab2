//! Outbound ports (driven side): interfaces implemented by outbound adapters.

pub mod catalog;
pub mod notifier;
pub mod store;
