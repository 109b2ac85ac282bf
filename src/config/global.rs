// src/config/global.rs

//! Process-wide configuration for callers that cannot have it passed in.
//!
//! The first successful load wins; later calls return the same instance and
//! never re-read the file. Prefer passing an `Arc<ExportedConfig>` where possible.

use crate::config::loader::{load_config, DEFAULT_CONFIG_PATH};
use crate::config::ExportedConfig;
use crate::error::Result;
use once_cell::sync::OnceCell;
use std::path::Path;
use tracing::debug;

static CONFIG: OnceCell<ExportedConfig> = OnceCell::new();

/// Load the configuration at `config_path` unless one is already loaded.
///
/// A failed load leaves nothing behind, so a later call may try again.
pub fn init(config_path: impl AsRef<Path>) -> Result<&'static ExportedConfig> {
    if let Some(config) = CONFIG.get() {
        debug!(
            config.path = %config_path.as_ref().display(),
            "Configuration already loaded, ignoring path"
        );
        return Ok(config);
    }
    CONFIG.get_or_try_init(|| load_config(config_path.as_ref()))
}

/// Load `config.json` from the working directory unless one is already loaded
pub fn load() -> Result<&'static ExportedConfig> {
    init(DEFAULT_CONFIG_PATH)
}

pub fn get() -> Option<&'static ExportedConfig> {
    CONFIG.get()
}
