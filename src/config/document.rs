// src/config/document.rs

use crate::error::{ConfigError, Result};
use secrecy::SecretString;
use serde::Deserialize;

/// Raw shape of `config.json` as read from disk.
///
/// Every key is optional here so that absence can be reported by
/// [`ConfigValidator`](crate::config::ConfigValidator) with its full dotted
/// path instead of a bare serde message. Wrong JSON types are still rejected
/// at parse time.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigDocument {
    #[serde(default)]
    pub email: Option<EmailSection>,
    #[serde(default)]
    pub redis: Option<RedisSection>,
    #[serde(default)]
    pub mysql: Option<MysqlSection>,
}

#[derive(Debug, Deserialize, Default)]
pub struct EmailSection {
    #[serde(default)]
    pub user: Option<String>,
    #[serde(default)]
    pub pass: Option<SecretString>,
}

#[derive(Debug, Deserialize, Default)]
pub struct RedisSection {
    #[serde(default)]
    pub host: Option<String>,
    #[serde(default)]
    pub port: Option<PortValue>,
    #[serde(default)]
    pub passwd: Option<SecretString>,
}

#[derive(Debug, Deserialize, Default)]
pub struct MysqlSection {
    #[serde(default)]
    pub host: Option<String>,
    #[serde(default)]
    pub port: Option<PortValue>,
    #[serde(default)]
    pub user: Option<String>,
    #[serde(default)]
    pub passwd: Option<SecretString>,
}

/// A port as written in the file: either a JSON number or a numeric string.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum PortValue {
    Number(serde_json::Number),
    Text(String),
}

impl PortValue {
    /// Convert to a TCP port, rejecting 0 and anything that is not an integer in `1..=65535`.
    ///
    /// Strings must be plain decimal digits.
    pub fn to_port(&self, field: &str) -> Result<u16> {
        let port = match self {
            Self::Number(n) => n.as_u64().and_then(|v| u16::try_from(v).ok()),
            Self::Text(s) if !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) => {
                s.parse::<u16>().ok()
            }
            Self::Text(_) => None,
        };

        match port {
            Some(port) if port != 0 => Ok(port),
            _ => Err(ConfigError::invalid(
                field,
                format!("expected a port between 1 and 65535, got {self}"),
            )),
        }
    }
}

impl std::fmt::Display for PortValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => write!(f, "{s:?}"),
        }
    }
}

impl ConfigDocument {
    /// Parse a JSON document. `origin` names the input in error messages.
    pub fn from_json(content: &str, origin: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(|e| ConfigError::parse(origin, &e))
    }
}
