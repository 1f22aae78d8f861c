//! Environment-driven server configuration.

use std::net::SocketAddr;

use thiserror::Error;

pub const ADDR_ENV: &str = "BANKAPI_ADDR";
pub const SEED_ENV: &str = "BANKAPI_SEED";

const DEFAULT_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} is not a valid socket address: {value}")]
    InvalidAddr { var: &'static str, value: String },

    #[error("{var} must be true/false/1/0, got: {value}")]
    InvalidBool { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Address the HTTP server binds to.
    pub addr: SocketAddr,
    /// Start the store with the sample banks.
    pub seed: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            seed: true,
        }
    }
}

impl ApiConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup (unset keys use defaults).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let addr = lookup(ADDR_ENV).unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let addr = addr.trim().parse().map_err(|_| ConfigError::InvalidAddr {
            var: ADDR_ENV,
            value: addr.clone(),
        })?;

        let seed = match lookup(SEED_ENV) {
            Some(v) => parse_bool(SEED_ENV, &v)?,
            None => true,
        };

        Ok(Self { addr, seed })
    }
}

fn parse_bool(var: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        _ => Err(ConfigError::InvalidBool {
            var,
            value: value.to_string(),
        }),
    }
}
