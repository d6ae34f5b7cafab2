//! Outbound adapters (driven side).

pub mod catalog;
pub mod memory;
pub mod notifier;
pub mod sqlite;
