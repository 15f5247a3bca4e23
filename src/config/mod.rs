//! Environment configuration
//!
//! All settings arrive through environment variables. `TELNET_HOSTS`,
//! `HTTP_REQUESTS` and `LOG_LEVEL` are required; a missing or empty value is a
//! startup error. `HTTP_TIMEOUT_SECS` is optional.

pub mod defaults;

use crate::core::input::split_hosts;
use crate::core::log_level::{validate_log_level, LogLevel, LogLevelError};
use crate::core::network::types::{ConnectionType, HostGroup};
use defaults::*;
use std::env;
use std::time::Duration;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    MissingVar(&'static str),
    #[error(transparent)]
    InvalidLogLevel(#[from] LogLevelError),
    #[error("{var} : {value} is not a valid number of seconds")]
    InvalidTimeout { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Raw `TELNET_HOSTS` value
    pub telnet_hosts: String,
    /// Raw `HTTP_REQUESTS` value
    pub http_requests: String,
    pub log_level: LogLevel,
    /// `None` means HTTP requests may wait indefinitely
    pub http_timeout: Option<Duration>,
}

impl Config {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let telnet_hosts = required(&lookup, TELNET_HOSTS_VAR)?;
        let http_requests = required(&lookup, HTTP_REQUESTS_VAR)?;
        let log_level = validate_log_level(&required(&lookup, LOG_LEVEL_VAR)?)?;
        let http_timeout = parse_timeout(lookup(HTTP_TIMEOUT_VAR))?;

        Ok(Self {
            telnet_hosts,
            http_requests,
            log_level,
            http_timeout,
        })
    }

    /// Parsed host lists, telnet first
    pub fn host_groups(&self) -> Vec<HostGroup> {
        vec![
            HostGroup {
                conn_type: ConnectionType::Telnet,
                hosts: split_hosts(&self.telnet_hosts),
            },
            HostGroup {
                conn_type: ConnectionType::Http,
                hosts: split_hosts(&self.http_requests),
            },
        ]
    }
}

fn required<F>(lookup: &F, name: &'static str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(ConfigError::MissingVar(name)),
    }
}

fn parse_timeout(value: Option<String>) -> Result<Option<Duration>, ConfigError> {
    let value = match value {
        Some(value) if !value.trim().is_empty() => value,
        _ => return Ok(Some(DEFAULT_HTTP_TIMEOUT)),
    };

    match value.trim().parse::<u64>() {
        Ok(0) => Ok(None),
        Ok(secs) if secs <= MAX_HTTP_TIMEOUT_SECS => Ok(Some(Duration::from_secs(secs))),
        _ => Err(ConfigError::InvalidTimeout {
            var: HTTP_TIMEOUT_VAR,
            value,
        }),
    }
}
