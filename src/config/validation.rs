// src/config/validation.rs

use crate::config::document::{ConfigDocument, EmailSection, MysqlSection, RedisSection};
use crate::error::{ConfigError, Result};
use secrecy::SecretString;
use tracing::{debug, warn};

/// Email account used to send verification codes.
#[derive(Debug)]
pub struct EmailConfig {
    pub user: String,
    pub pass: SecretString,
}

#[derive(Debug)]
pub struct RedisConfig {
    pub host: String,
    pub port: u16,
    pub passwd: SecretString,
}

#[derive(Debug)]
pub struct MysqlConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub passwd: SecretString,
}

/// Whether the file carries a database group.
#[derive(Debug, Default)]
pub enum DatabaseSection {
    Present(MysqlConfig),
    #[default]
    Absent,
}

impl DatabaseSection {
    pub fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    pub fn as_config(&self) -> Option<&MysqlConfig> {
        match self {
            Self::Present(config) => Some(config),
            Self::Absent => None,
        }
    }
}

/// A document that passed validation: every required key is present and every value usable.
#[derive(Debug)]
pub struct ValidatedDocument {
    pub email: EmailConfig,
    pub redis: RedisConfig,
    pub database: DatabaseSection,
}

/// Characters that would move part of a host into the user, path, query or fragment of a URL.
const FORBIDDEN_HOST_CHARS: &[char] = &['@', '/', '?', '#', '\\'];

pub struct ConfigValidator;

impl ConfigValidator {
    pub fn validate(document: ConfigDocument) -> Result<ValidatedDocument> {
        debug!("Starting configuration validation");

        let missing = Self::missing_fields(&document);
        match missing.as_slice() {
            [] => {}
            [field] => {
                warn!(field = %field, "Required configuration field is missing");
                return Err(ConfigError::missing(*field));
            }
            fields => {
                warn!(fields = ?fields, "Required configuration fields are missing");
                return Err(ConfigError::MissingFields {
                    fields: fields.iter().map(ToString::to_string).collect(),
                });
            }
        }
        debug!("Presence checks passed");

        let email = Self::validate_email(document.email.unwrap_or_default())?;
        let redis = Self::validate_redis(document.redis.unwrap_or_default())?;
        debug!("Redis config validation passed");

        let database = match document.mysql {
            Some(mysql) => DatabaseSection::Present(Self::validate_mysql(mysql)?),
            None => DatabaseSection::Absent,
        };
        debug!(database.present = database.is_present(), "Database section checked");

        debug!("Configuration validation completed successfully");
        Ok(ValidatedDocument {
            email,
            redis,
            database,
        })
    }

    /// Dotted paths of every absent required key, in document order.
    ///
    /// An absent group is reported by its own name rather than by each of its keys.
    pub fn missing_fields(document: &ConfigDocument) -> Vec<&'static str> {
        let mut missing = Vec::new();

        match &document.email {
            Some(email) => {
                if email.user.is_none() {
                    missing.push("email.user");
                }
                if email.pass.is_none() {
                    missing.push("email.pass");
                }
            }
            None => missing.push("email"),
        }

        match &document.redis {
            Some(redis) => {
                if redis.host.is_none() {
                    missing.push("redis.host");
                }
                if redis.port.is_none() {
                    missing.push("redis.port");
                }
                if redis.passwd.is_none() {
                    missing.push("redis.passwd");
                }
            }
            None => missing.push("redis"),
        }

        // mysql is optional as a whole, but complete when given
        if let Some(mysql) = &document.mysql {
            if mysql.host.is_none() {
                missing.push("mysql.host");
            }
            if mysql.port.is_none() {
                missing.push("mysql.port");
            }
            if mysql.user.is_none() {
                missing.push("mysql.user");
            }
            if mysql.passwd.is_none() {
                missing.push("mysql.passwd");
            }
        }

        missing
    }

    fn validate_email(email: EmailSection) -> Result<EmailConfig> {
        Ok(EmailConfig {
            user: required(email.user, "email.user")?,
            pass: required(email.pass, "email.pass")?,
        })
    }

    fn validate_redis(redis: RedisSection) -> Result<RedisConfig> {
        let host = required(redis.host, "redis.host")?;
        Self::validate_host(&host, "redis.host")?;
        let port = required(redis.port, "redis.port")?.to_port("redis.port")?;

        Ok(RedisConfig {
            host,
            port,
            passwd: required(redis.passwd, "redis.passwd")?,
        })
    }

    fn validate_mysql(mysql: MysqlSection) -> Result<MysqlConfig> {
        let host = required(mysql.host, "mysql.host")?;
        Self::validate_host(&host, "mysql.host")?;
        let port = required(mysql.port, "mysql.port")?.to_port("mysql.port")?;

        Ok(MysqlConfig {
            host,
            port,
            user: required(mysql.user, "mysql.user")?,
            passwd: required(mysql.passwd, "mysql.passwd")?,
        })
    }

    fn validate_host(host: &str, field: &str) -> Result<()> {
        if host.trim().is_empty() {
            return Err(ConfigError::invalid(field, "host cannot be empty"));
        }
        if let Some(c) = host
            .chars()
            .find(|c| FORBIDDEN_HOST_CHARS.contains(c) || c.is_whitespace())
        {
            return Err(ConfigError::invalid(
                field,
                format!("host cannot contain {c:?}"),
            ));
        }
        Ok(())
    }
}

fn required<T>(value: Option<T>, field: &str) -> Result<T> {
    value.ok_or_else(|| ConfigError::missing(field))
}
