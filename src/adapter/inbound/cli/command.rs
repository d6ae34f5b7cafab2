//! Command-line interface definitions.
//!
//! Defines the CLI structure for the emarket application using `clap`.
//! Subcommands browse the catalog, manage favorites and the cart, and
//! inspect configuration.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Storefront client: browse the catalog, keep favorites, fill a cart
#[derive(Parser, Debug)]
#[command(name = "emarket")]
#[command(version)]
pub struct Cli {
    /// Path to the configuration file [default: ~/.emarket/config.toml]
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase output verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands for the emarket CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List catalog products with favorite flags
    Products(ProductsArgs),

    /// Show one product in detail
    Show(ProductArg),

    /// Mark a product as favorite
    Favorite(ProductArg),

    /// Remove a product from favorites
    Unfavorite(ProductArg),

    /// List favorite products
    Favorites,

    /// Manage the shopping cart
    #[command(subcommand)]
    Cart(CartCommand),

    /// Inspect configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

/// Arguments for `emarket products`.
#[derive(clap::Args, Debug)]
pub struct ProductsArgs {
    /// Only show products whose name contains this text (case-insensitive)
    #[arg(short, long)]
    pub search: Option<String>,
}

/// A single product id argument.
#[derive(clap::Args, Debug)]
pub struct ProductArg {
    /// Product id
    pub id: String,
}

/// Subcommands for `emarket cart`.
#[derive(Subcommand, Debug)]
pub enum CartCommand {
    /// Show cart lines and total
    List,
    /// Add one unit of a catalog product
    Add(ProductArg),
    /// Add one unit to a line already in the cart
    Increase(ProductArg),
    /// Remove one unit; the line is dropped at zero
    Decrease(ProductArg),
    /// Drop a line entirely
    Remove(ProductArg),
}

/// Subcommands for `emarket config`.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Display the effective configuration with defaults applied.
    Show,
    /// Validate the configuration file.
    Validate,
}
