// src/config.rs

use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

use crate::global_variables::{DEFAULT_HOST, DEFAULT_PORT};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("environment variable {name} has an invalid value {value:?}")]
    InvalidValue { name: &'static str, value: String },
}

/// Settings for the prediction server, read from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// `None` keeps actix's default (one worker per core).
    pub workers: Option<usize>,
    pub latency: Duration,
    pub latency_jitter: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            workers: None,
            latency: Duration::ZERO,
            latency_jitter: Duration::ZERO,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the config from any key lookup; unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let host = lookup("HOST").unwrap_or(defaults.host);
        let port = parse_var(&lookup, "PORT")?.unwrap_or(defaults.port);
        let workers = parse_var::<usize, _>(&lookup, "WORKERS")?;
        if workers == Some(0) {
            return Err(ConfigError::InvalidValue {
                name: "WORKERS",
                value: "0".to_string(),
            });
        }
        let latency_ms: u64 = parse_var(&lookup, "PREDICTION_LATENCY_MS")?.unwrap_or(0);
        let jitter_ms: u64 = parse_var(&lookup, "PREDICTION_LATENCY_JITTER_MS")?.unwrap_or(0);

        Ok(Self {
            host,
            port,
            workers,
            latency: Duration::from_millis(latency_ms),
            latency_jitter: Duration::from_millis(jitter_ms),
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_var<T, F>(lookup: &F, name: &'static str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue { name, value: raw }),
    }
}
