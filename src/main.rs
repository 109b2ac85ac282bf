// src/main.rs

use anyhow::Context;
use tracing::{error, info};
use varify_config::cli::{Cli, Commands};
use varify_config::{config, telemetry, ExportedConfig};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse_args();
    telemetry::init(&cli.log_level, cli.json_logs).context("Failed to initialize logging")?;

    let config_path_display = cli.config.display().to_string();
    let document = config::load_document(&cli.config)
        .map_err(|e| {
            error!(config.path = %config_path_display, error = %e, "Failed to load or validate configuration");
            e
        })
        .with_context(|| format!("Failed to load configuration from {config_path_display}"))?;

    let database_present = document.database.is_present();
    let config = ExportedConfig::from(document);

    match cli.command {
        Commands::Check => {
            info!(
                config.path = %config_path_display,
                redis.addr = %config.redis_addr(),
                database.present = database_present,
                "Configuration is valid"
            );
        }
        Commands::Show => {
            let rendered = serde_json::to_string_pretty(&config.redacted())
                .context("Failed to render configuration")?;
            println!("{rendered}");
        }
    }

    Ok(())
}
