//! CLI module graph and command dispatch.

pub mod cart;
pub mod command;
pub mod config;
pub mod favorites;
pub mod output;
pub mod products;

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::infrastructure::config::{paths, Config};
use crate::infrastructure::Storefront;
use command::{Commands, ConfigCommand};

/// Resolve and load configuration.
///
/// An explicit path must exist. Without one, `~/.emarket/config.toml` is used
/// when present, otherwise built-in defaults.
///
/// Returns the configuration and a description of where it came from.
///
/// # Errors
/// Returns an error if the file cannot be read, parsed, or validated.
pub fn load_config(path: Option<&Path>) -> Result<(Config, String)> {
    let path: Option<PathBuf> = match path {
        Some(path) => Some(path.to_path_buf()),
        None => Some(paths::default_config()).filter(|p| p.exists()),
    };

    match path {
        Some(path) => Ok((Config::load(&path)?, path.display().to_string())),
        None => Ok((Config::from_env()?, "defaults".to_string())),
    }
}

/// Run a parsed command against `config`.
///
/// Configuration commands never touch the database; every other command
/// opens the storefront first.
///
/// # Errors
/// Returns the first error raised by the command.
pub async fn execute(command: &Commands, config: &Config, source: &str) -> Result<()> {
    match command {
        Commands::Config(ConfigCommand::Show) => config::execute_show(config, source),
        Commands::Config(ConfigCommand::Validate) => config::execute_validate(config, source),
        Commands::Products(args) => {
            let storefront = Storefront::from_config(config)?;
            products::execute_list(&storefront, args.search.as_deref()).await
        }
        Commands::Show(arg) => {
            products::execute_show(&Storefront::from_config(config)?, &arg.id).await
        }
        Commands::Favorite(arg) => {
            favorites::execute_set(&Storefront::from_config(config)?, &arg.id, true).await
        }
        Commands::Unfavorite(arg) => {
            favorites::execute_set(&Storefront::from_config(config)?, &arg.id, false).await
        }
        Commands::Favorites => favorites::execute_list(&Storefront::from_config(config)?),
        Commands::Cart(cart_command) => {
            cart::execute(&Storefront::from_config(config)?, cart_command).await
        }
    }
}
