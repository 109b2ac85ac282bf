// src/config/exported.rs

use crate::config::validation::ValidatedDocument;
use crate::error::{ConfigError, Result};
use crate::utils::preview_secret;
use secrecy::{ExposeSecret, SecretString};
use serde_json::{json, Value};
use url::Url;

/// Prefix of the Redis keys that hold verification codes, one key per email address.
pub const CODE_PREFIX: &str = "code_";

const REDIS_URL_BASE: &str = "redis://localhost/";

/// The flat record the rest of the server reads its settings from.
///
/// Built once at startup and shared by reference; nothing in it changes afterwards.
/// Database settings are never part of it, even when the file has a `mysql` group.
#[derive(Debug)]
pub struct ExportedConfig {
    pub email_user: String,
    pub email_pass: SecretString,
    pub redis_host: String,
    pub redis_port: u16,
    pub redis_passwd: SecretString,
    pub code_prefix: &'static str,
}

impl From<ValidatedDocument> for ExportedConfig {
    fn from(document: ValidatedDocument) -> Self {
        Self {
            email_user: document.email.user,
            email_pass: document.email.pass,
            redis_host: document.redis.host,
            redis_port: document.redis.port,
            redis_passwd: document.redis.passwd,
            code_prefix: CODE_PREFIX,
        }
    }
}

impl ExportedConfig {
    /// `host:port` of the Redis server
    pub fn redis_addr(&self) -> String {
        format!("{}:{}", self.redis_host, self.redis_port)
    }

    /// Connection URL for the Redis server, e.g. `redis://:secret@127.0.0.1:6379/`.
    ///
    /// The host goes through `Url::set_host`, so a host that would change the
    /// URL's user, path, query or fragment is rejected. The password is
    /// percent-encoded; an empty password is left out.
    pub fn redis_url(&self) -> Result<Url> {
        let host = if self.redis_host.contains(':') && !self.redis_host.starts_with('[') {
            format!("[{}]", self.redis_host)
        } else {
            self.redis_host.clone()
        };

        let mut url = Url::parse(REDIS_URL_BASE)
            .map_err(|e| ConfigError::invalid("redis.host", format!("not usable in a URL: {e}")))?;
        url.set_host(Some(&host))
            .map_err(|e| ConfigError::invalid("redis.host", format!("not usable in a URL: {e}")))?;
        url.set_port(Some(self.redis_port))
            .map_err(|()| ConfigError::invalid("redis.port", "cannot be set on the Redis URL"))?;

        let passwd = self.redis_passwd.expose_secret();
        if !passwd.is_empty() {
            url.set_password(Some(passwd))
                .map_err(|()| ConfigError::invalid("redis.passwd", "cannot be set on the Redis URL"))?;
        }

        Ok(url)
    }

    /// Redis client for the configured server. No connection is opened until one is requested.
    #[cfg(feature = "redis")]
    pub fn redis_client(&self) -> Result<redis::Client> {
        let url = self.redis_url()?;
        Ok(redis::Client::open(url.as_str())?)
    }

    /// Redis key under which the verification code for `email` is stored
    pub fn verify_code_key(&self, email: &str) -> String {
        format!("{}{}", self.code_prefix, email)
    }

    /// Display view of the record with secrets replaced by previews.
    pub fn redacted(&self) -> Value {
        json!({
            "email_user": self.email_user,
            "email_pass": preview_secret(&self.email_pass),
            "redis_host": self.redis_host,
            "redis_port": self.redis_port,
            "redis_passwd": preview_secret(&self.redis_passwd),
            "code_prefix": self.code_prefix,
        })
    }
}
