// src/config/mod.rs

pub mod document;
pub mod exported;
pub mod global;
pub mod loader;
pub mod validation;

pub use document::{ConfigDocument, PortValue};
pub use exported::{ExportedConfig, CODE_PREFIX};
pub use loader::{load, load_config, load_config_str, load_document, DEFAULT_CONFIG_PATH};
pub use validation::{
    ConfigValidator, DatabaseSection, EmailConfig, MysqlConfig, RedisConfig, ValidatedDocument,
};
