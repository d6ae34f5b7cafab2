//! Handler for the `config` command group.

use serde_json::json;

use crate::adapter::inbound::cli::output;
use crate::error::Result;
use crate::infrastructure::config::Config;

/// Execute `config show`.
pub fn execute_show(config: &Config, source: &str) -> Result<()> {
    if output::is_json() {
        output::json_output(json!({
            "command": "config.show",
            "source": source,
            "config": config,
        }));
        return Ok(());
    }

    output::section("Effective Configuration");
    output::field("Source", source);
    output::field("Database", &config.database);

    output::section("Catalog");
    output::field("URL", &config.catalog.url);
    output::field("Timeout", format!("{}ms", config.catalog.timeout_ms));
    output::field("Connect", format!("{}ms", config.catalog.connect_timeout_ms));

    output::section("Logging");
    output::field("Level", &config.logging.level);
    output::field("Format", &config.logging.format);
    Ok(())
}

/// Execute `config validate`.
pub fn execute_validate(config: &Config, source: &str) -> Result<()> {
    config.validate()?;

    if output::is_json() {
        output::json_output(json!({
            "command": "config.validate",
            "source": source,
            "valid": true,
        }));
        return Ok(());
    }

    output::success(&format!("Configuration is valid ({source})"));
    Ok(())
}
