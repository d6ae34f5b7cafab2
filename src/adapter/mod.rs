//! Implementations of ports (hexagonal adapters).
//!
//! - [`outbound`] - Driven side: catalog client, stores, notifiers
//! - [`inbound`] - Driving side: command-line interface

pub mod inbound;
pub mod outbound;
