//! Error handling for configuration loading
//!
//! Every failure surfaces at load time as a [`ConfigError`]:
//! - the file could not be read
//! - the content is not valid JSON, or a value has the wrong JSON type
//! - a required group or key is absent
//! - a value is present but unusable (e.g. a port outside `1..=65535`)

pub mod types;

use thiserror::Error;

/// Main error type for configuration loading
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read configuration file {path}: {source}")]
    FileAccess {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration parse error in {origin} at line {line}, column {column}: {message}")]
    Parse {
        origin: String,
        message: String,
        line: usize,
        column: usize,
    },

    #[error("Missing required configuration field: {field}")]
    MissingField { field: String },

    #[error("Missing required configuration fields: {}", .fields.join(", "))]
    MissingFields { fields: Vec<String> },

    #[error("Invalid configuration field {field}: {message}")]
    InvalidField { field: String, message: String },

    #[cfg(feature = "redis")]
    #[error("Redis client setup failed: {message}")]
    Redis { message: String },
}

impl ConfigError {
    /// Create a new missing-field error
    pub fn missing(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    /// Create a new invalid-field error
    pub fn invalid(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidField {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a parse error from a `serde_json` failure, remembering where the input came from
    pub fn parse(origin: impl Into<String>, err: &serde_json::Error) -> Self {
        Self::Parse {
            origin: origin.into(),
            message: err.to_string(),
            line: err.line(),
            column: err.column(),
        }
    }

    /// Dotted path of the offending field, when the error is about a single field
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::MissingField { field } | Self::InvalidField { field, .. } => Some(field),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::FileAccess { source, .. } if source.kind() == std::io::ErrorKind::NotFound)
    }
}

/// Result type alias for configuration loading
pub type Result<T, E = ConfigError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_message_lists_every_field() {
        let err = ConfigError::MissingFields {
            fields: vec!["email".to_string(), "redis.port".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "Missing required configuration fields: email, redis.port"
        );
        assert!(err.field().is_none());
    }

    #[test]
    fn test_field_accessor() {
        assert_eq!(ConfigError::missing("redis.host").field(), Some("redis.host"));
        assert_eq!(
            ConfigError::invalid("redis.port", "out of range").field(),
            Some("redis.port")
        );
    }

    #[test]
    fn test_parse_error_keeps_position() {
        let json_err = serde_json::from_str::<serde_json::Value>("{\n  \"email\": ,\n}").unwrap_err();
        let err = ConfigError::parse("config.json", &json_err);
        match err {
            ConfigError::Parse { origin, line, .. } => {
                assert_eq!(origin, "config.json");
                assert_eq!(line, 2);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_is_not_found() {
        let err = ConfigError::FileAccess {
            path: "config.json".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert!(err.is_not_found());

        let err = ConfigError::FileAccess {
            path: "config.json".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(!err.is_not_found());
    }
}
