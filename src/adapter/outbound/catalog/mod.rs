//! Remote product catalog over HTTP.

mod client;
mod dto;
mod settings;

pub use client::HttpCatalogClient;
pub use dto::CatalogProduct;
pub use settings::CatalogConfig;
