//! Path utilities for emarket.
//!
//! Local data lives under `~/.emarket/`:
//! - `~/.emarket/config.toml` - configuration
//! - `~/.emarket/emarket.db` - favorites and cart

use std::path::PathBuf;

/// Returns the emarket home directory (`~/.emarket/`).
pub fn home_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".emarket")
}

/// Returns the default config file path (`~/.emarket/config.toml`).
pub fn default_config() -> PathBuf {
    home_dir().join("config.toml")
}

/// Returns the default database path (`~/.emarket/emarket.db`).
pub fn default_database() -> PathBuf {
    home_dir().join("emarket.db")
}
