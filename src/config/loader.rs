// src/config/loader.rs

use crate::config::{ConfigDocument, ConfigValidator, ExportedConfig, ValidatedDocument};
use crate::error::{ConfigError, Result};
use crate::utils::preview_secret;
use std::path::Path;
use tracing::{debug, info};

/// Location of the configuration file, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "config.json";

/// Load `config.json` from the current working directory
pub fn load() -> Result<ExportedConfig> {
    load_config(Path::new(DEFAULT_CONFIG_PATH))
}

/// Load, validate and project the configuration file at `config_path`
pub fn load_config(config_path: &Path) -> Result<ExportedConfig> {
    let config: ExportedConfig = load_document(config_path)?.into();
    log_loaded(&config, &config_path.display().to_string());
    Ok(config)
}

/// Load configuration from an in-memory JSON string. `origin` names it in errors and logs.
pub fn load_config_str(content: &str, origin: &str) -> Result<ExportedConfig> {
    let config: ExportedConfig = parse_and_validate(content, origin)?.into();
    log_loaded(&config, origin);
    Ok(config)
}

/// Load and validate the whole document, including the optional database section
pub fn load_document(config_path: &Path) -> Result<ValidatedDocument> {
    let path_str = config_path.display().to_string();
    info!(config.path = %path_str, "Loading configuration from file");

    let content = std::fs::read_to_string(config_path).map_err(|e| ConfigError::FileAccess {
        path: path_str.clone(),
        source: e,
    })?;
    debug!(config.path = %path_str, bytes = content.len(), "Configuration file read");

    parse_and_validate(&content, &path_str)
}

fn parse_and_validate(content: &str, origin: &str) -> Result<ValidatedDocument> {
    let document = ConfigDocument::from_json(content, origin)?;
    debug!(config.origin = %origin, "Configuration parsed");
    ConfigValidator::validate(document)
}

fn log_loaded(config: &ExportedConfig, origin: &str) {
    info!(
        config.origin = %origin,
        email.user = %config.email_user,
        email.pass = %preview_secret(&config.email_pass),
        redis.host = %config.redis_host,
        redis.port = config.redis_port,
        redis.passwd = %preview_secret(&config.redis_passwd),
        "Configuration loaded and validated successfully"
    );
}
