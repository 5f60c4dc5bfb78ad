//! Server configuration parsed from environment variables.
//!
//! `from_env` reads the process environment (after `dotenvy` has merged any
//! `.env` file); `from_lookup` takes the lookup as a function so tests never
//! touch global state.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

use crate::error::ConfigError;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_UPSTREAM_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_UPSTREAM_CONNECT_TIMEOUT_SECS: u64 = 10;

const PORT_VAR: &str = "PORT";
const UPSTREAM_VAR: &str = "CONSOLE_API_UPSTREAM";
const REQUEST_TIMEOUT_VAR: &str = "CONSOLE_API_REQUEST_TIMEOUT_SECS";
const CONNECT_TIMEOUT_VAR: &str = "CONSOLE_API_CONNECT_TIMEOUT_SECS";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpstreamTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

impl UpstreamTimeouts {
    pub fn request(self) -> Duration {
        Duration::from_secs(self.request_secs)
    }

    pub fn connect(self) -> Duration {
        Duration::from_secs(self.connect_secs)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleConfig {
    pub port: u16,
    /// Management API base URL, without a trailing slash.
    pub upstream_base_url: String,
    pub timeouts: UpstreamTimeouts,
}

impl ConsoleConfig {
    /// Build typed config from environment variables.
    ///
    /// Required:
    /// - `CONSOLE_API_UPSTREAM`: `http://` or `https://` base URL of the management API
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `CONSOLE_API_REQUEST_TIMEOUT_SECS`: default 30
    /// - `CONSOLE_API_CONNECT_TIMEOUT_SECS`: default 10
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when the upstream is missing or malformed, or
    /// a numeric variable does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// See [`ConsoleConfig::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = parse_var(&lookup, PORT_VAR, DEFAULT_PORT)?;

        let raw_upstream = lookup(UPSTREAM_VAR)
            .map(|v| v.trim().to_owned())
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::Missing { var: UPSTREAM_VAR })?;
        if !(raw_upstream.starts_with("http://") || raw_upstream.starts_with("https://")) {
            return Err(ConfigError::Invalid {
                var: UPSTREAM_VAR,
                value: raw_upstream,
                reason: "expected an http:// or https:// URL",
            });
        }
        let upstream_base_url = raw_upstream.trim_end_matches('/').to_owned();

        let timeouts = UpstreamTimeouts {
            request_secs: parse_var(&lookup, REQUEST_TIMEOUT_VAR, DEFAULT_UPSTREAM_REQUEST_TIMEOUT_SECS)?,
            connect_secs: parse_var(&lookup, CONNECT_TIMEOUT_VAR, DEFAULT_UPSTREAM_CONNECT_TIMEOUT_SECS)?,
        };

        Ok(Self { port, upstream_base_url, timeouts })
    }
}

fn parse_var<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(var).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty()) {
        None => Ok(default),
        Some(value) => value
            .parse::<T>()
            .map_err(|_| ConfigError::Invalid { var, value, reason: "expected a non-negative integer" }),
    }
}
