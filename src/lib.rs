// src/lib.rs

pub mod cli;
pub mod config;
pub mod error;
pub mod telemetry;
pub mod utils;

pub use config::{load, load_config, ExportedConfig, CODE_PREFIX, DEFAULT_CONFIG_PATH};
pub use error::{ConfigError, Result};
