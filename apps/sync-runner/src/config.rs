//! Runner configuration module.
//!
//! Configuration is read from environment variables once at startup, before
//! any filesystem or network access. A missing `TABLE_NAME` is fatal with
//! no side effects beyond the error message.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use envcat_sync::ReadMode;

/// Default store endpoint locator when `REGION` is unset.
pub const DEFAULT_REGION: &str = "redis://127.0.0.1:6379/";

/// Default catalog root directory when `CATALOG_ROOT` is unset. The
/// conventional layout keeps one subdirectory per environment type next to
/// the provisioning code.
pub const DEFAULT_CATALOG_ROOT: &str = "contrib";

/// Default per-call store response timeout in seconds.
pub const DEFAULT_STORE_TIMEOUT_SECS: u64 = 10;

/// Runner configuration.
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// Target store table (required, `TABLE_NAME`).
    pub table_name: String,

    /// Store connection locator (`REGION`, default local endpoint).
    pub region: String,

    /// Root catalog directory (`CATALOG_ROOT`).
    pub catalog_root: PathBuf,

    /// Failure policy for individual entry reads (`READ_MODE`).
    pub read_mode: ReadMode,

    /// Per-call store response timeout (`STORE_TIMEOUT_SECS`).
    pub store_timeout: Duration,
}

impl RunnerConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable source. Keeps tests off
    /// process-global environment state.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let table_name = lookup("TABLE_NAME")
            .filter(|value| !value.is_empty())
            .ok_or(ConfigError::MissingRequired("TABLE_NAME"))?;

        let region = lookup("REGION").unwrap_or_else(|| DEFAULT_REGION.to_string());

        let catalog_root = lookup("CATALOG_ROOT")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CATALOG_ROOT));

        let read_mode = match lookup("READ_MODE") {
            Some(raw) => raw
                .parse()
                .map_err(|e: envcat_sync::ParseReadModeError| {
                    ConfigError::InvalidValue("READ_MODE", e.to_string())
                })?,
            None => ReadMode::default(),
        };

        let store_timeout = match lookup("STORE_TIMEOUT_SECS") {
            Some(raw) => {
                let secs: u64 = raw.parse().map_err(|_| {
                    ConfigError::InvalidValue("STORE_TIMEOUT_SECS", raw.clone())
                })?;
                Duration::from_secs(secs)
            }
            None => Duration::from_secs(DEFAULT_STORE_TIMEOUT_SECS),
        };

        Ok(RunnerConfig {
            table_name,
            region,
            catalog_root,
            read_mode,
            store_timeout,
        })
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required configuration: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}

// =============================================================================
// Unit Tests
// =============================================================================
