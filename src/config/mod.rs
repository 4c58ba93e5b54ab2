//! Configuration handling for the application.
//!
//! Everything is read from environment variables with development defaults,
//! so a bare `cargo run` serves the audit API on localhost. `Config::from_env`
//! validates the numeric knobs and reports the first bad one it finds.

use std::env;
use std::time::Duration;

use thiserror::Error;

/// Environment variable names. Public so tests and the CLI binary can refer to them.
pub const ENV_BIND_ADDR: &str = "BIND_ADDR";
pub const ENV_STATIC_DIR: &str = "STATIC_DIR";
pub const ENV_FETCH_TIMEOUT_SECS: &str = "FETCH_TIMEOUT_SECS";
pub const ENV_CONNECT_TIMEOUT_SECS: &str = "CONNECT_TIMEOUT_SECS";
pub const ENV_MAX_BODY_BYTES: &str = "MAX_BODY_BYTES";

/// Default development values used when environment variables are absent.
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";
const DEFAULT_STATIC_DIR: &str = "public";
const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 20;
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_MAX_BODY_BYTES: u64 = 5 * 1024 * 1024; // 5MB

/// Application runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    bind_addr: String,
    static_dir: String,
    fetch: FetchSettings,
}

/// Limits applied to every outbound request made during an audit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchSettings {
    pub timeout: Duration,
    pub connect_timeout: Duration,
    pub max_body_bytes: u64,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_FETCH_TIMEOUT_SECS),
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

impl Config {
    /// Create a new config explicitly.
    pub fn new(
        bind_addr: impl Into<String>,
        static_dir: impl Into<String>,
        fetch: FetchSettings,
    ) -> Self {
        Self {
            bind_addr: bind_addr.into(),
            static_dir: static_dir.into(),
            fetch,
        }
    }

    /// Load from environment variables, falling back to development defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let bind_addr = env::var(ENV_BIND_ADDR).unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
        let static_dir =
            env::var(ENV_STATIC_DIR).unwrap_or_else(|_| DEFAULT_STATIC_DIR.to_string());

        let fetch = FetchSettings {
            timeout: Duration::from_secs(positive_u64(
                ENV_FETCH_TIMEOUT_SECS,
                DEFAULT_FETCH_TIMEOUT_SECS,
            )?),
            connect_timeout: Duration::from_secs(positive_u64(
                ENV_CONNECT_TIMEOUT_SECS,
                DEFAULT_CONNECT_TIMEOUT_SECS,
            )?),
            max_body_bytes: positive_u64(ENV_MAX_BODY_BYTES, DEFAULT_MAX_BODY_BYTES)?,
        };

        Ok(Self {
            bind_addr,
            static_dir,
            fetch,
        })
    }

    /// TCP bind address (host:port) for the HTTP server.
    pub fn bind_addr(&self) -> &str {
        &self.bind_addr
    }
    /// Directory served for every path outside the API.
    pub fn static_dir(&self) -> &str {
        &self.static_dir
    }
    pub fn fetch(&self) -> FetchSettings {
        self.fetch
    }

    /// Development defaults (mirrors `from_env` with no env overrides).
    pub fn default() -> Self {
        // not `Default` impl yet to keep explicit semantics
        Self::new(
            DEFAULT_BIND_ADDR,
            DEFAULT_STATIC_DIR,
            FetchSettings::default(),
        )
    }
}

fn positive_u64(field: &'static str, default: u64) -> Result<u64, ConfigError> {
    let Ok(raw) = env::var(field) else {
        return Ok(default);
    };

    let value: u64 = raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
        field,
        reason: format!("expected a positive integer, got {raw:?}"),
    })?;

    if value == 0 {
        return Err(ConfigError::InvalidValue {
            field,
            reason: "must be greater than zero".to_string(),
        });
    }

    Ok(value)
}

/// Errors that can occur while building a configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for '{field}': {reason}")]
    InvalidValue { field: &'static str, reason: String },
}
