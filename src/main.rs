use clap::Parser;
use tracing::{debug, error};

use emarket::adapter::inbound::cli::command::Cli;
use emarket::adapter::inbound::cli::output::{self, OutputConfig};
use emarket::adapter::inbound::cli::{execute, load_config};

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();
    output::configure(OutputConfig::new(cli.json, cli.quiet));

    let (config, source) = match load_config(cli.config.as_deref()) {
        Ok(loaded) => loaded,
        Err(e) => {
            output::error(&format!("Failed to load config: {e}"));
            std::process::exit(1);
        }
    };

    config.init_logging(cli.verbose);
    debug!(source = %source, "Configuration loaded");

    if let Err(e) = execute(&cli.command, &config, &source).await {
        error!(error = %e, "Command failed");
        output::error(&e.to_string());
        std::process::exit(1);
    }
}
