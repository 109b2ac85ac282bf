//! Error type conversions

#[cfg(feature = "redis")]
use super::ConfigError;

#[cfg(feature = "redis")]
impl From<redis::RedisError> for ConfigError {
    fn from(err: redis::RedisError) -> Self {
        Self::Redis {
            message: err.to_string(),
        }
    }
}
