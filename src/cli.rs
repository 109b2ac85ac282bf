use crate::config::DEFAULT_CONFIG_PATH;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "varify-config",
    version,
    about = "Validate and inspect the verification server configuration",
    long_about = "Loads the verification server's config.json, checks that the email and Redis settings are complete and usable, and prints the resulting settings with secrets masked."
)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, value_name = "FILE", env = "VARIFY_CONFIG", default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Log level
    #[arg(short, long, default_value = "info", env = "RUST_LOG")]
    pub log_level: String,

    /// Enable JSON logging
    #[arg(long, env = "VARIFY_JSON_LOGS")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Load and validate the configuration file
    Check,

    /// Print the loaded settings as JSON with secrets masked
    Show,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
