//! # Redis-Backed Catalog Store
//!
//! Production [`CatalogStore`] implementation. One catalog table maps to one
//! Redis hash: the hash field is the environment-type name, the hash value
//! is the canonical schema text.
//!
//! ## Operation Mapping
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    CatalogStore -> Redis Commands                       │
//! │                                                                         │
//! │  scan_all()            HGETALL <table>     full snapshot, one trip     │
//! │  delete_entry(name)    HDEL <table> name   removed-count 0 -> NotFound │
//! │  put_entry(name, s)    HSET <table> name s idempotent upsert           │
//! │                                                                         │
//! │  The multiplexed connection is cloned per call, so the purge and       │
//! │  write phases can fan out operations concurrently over one socket.    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Timeouts are explicit: the underlying transport default is unbounded, so
//! the response and connection timeouts come from [`StoreConfig`].

use std::time::Duration;

use async_trait::async_trait;
use redis::{AsyncCommands, AsyncConnectionConfig};
use tracing::{debug, info};

use envcat_core::EnvironmentTypeEntry;

use crate::client::CatalogStore;
use crate::error::{StoreError, StoreResult};

// =============================================================================
// Configuration
// =============================================================================

/// Connection settings for [`RedisCatalogStore`].
///
/// ## Example
/// ```rust,ignore
/// let config = StoreConfig::new("env-types", "redis://store.internal:6379/")
///     .response_timeout(Duration::from_secs(5));
/// let store = RedisCatalogStore::connect(&config).await?;
/// ```
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Table (Redis hash) holding the catalog.
    pub table: String,

    /// Store endpoint locator, e.g. `redis://127.0.0.1:6379/`.
    pub url: String,

    /// Per-call response timeout. Default: 10 seconds.
    pub response_timeout: Duration,

    /// Timeout for establishing the connection. Default: 10 seconds.
    pub connection_timeout: Duration,
}

impl StoreConfig {
    /// Creates a configuration with default timeouts.
    pub fn new(table: impl Into<String>, url: impl Into<String>) -> Self {
        StoreConfig {
            table: table.into(),
            url: url.into(),
            response_timeout: Duration::from_secs(10),
            connection_timeout: Duration::from_secs(10),
        }
    }

    /// Sets the per-call response timeout.
    pub fn response_timeout(mut self, timeout: Duration) -> Self {
        self.response_timeout = timeout;
        self
    }

    /// Sets the connection establishment timeout.
    pub fn connection_timeout(mut self, timeout: Duration) -> Self {
        self.connection_timeout = timeout;
        self
    }
}

// =============================================================================
// Redis Catalog Store
// =============================================================================

/// [`CatalogStore`] over a single Redis hash.
#[derive(Clone, Debug)]
pub struct RedisCatalogStore {
    table: String,
    conn: redis::aio::MultiplexedConnection,
}

impl RedisCatalogStore {
    /// Connects to the store endpoint described by `config`.
    ///
    /// ## Errors
    /// [`StoreError::Connection`] when the endpoint URL is invalid or the
    /// connection cannot be established within the configured timeout.
    pub async fn connect(config: &StoreConfig) -> StoreResult<Self> {
        let client = redis::Client::open(config.url.as_str())
            .map_err(|e| StoreError::Connection(e.to_string()))?;

        let conn_config = AsyncConnectionConfig::new()
            .set_connection_timeout(config.connection_timeout)
            .set_response_timeout(config.response_timeout);

        let conn = client
            .get_multiplexed_async_connection_with_config(&conn_config)
            .await?;

        info!(table = %config.table, url = %config.url, "Connected to catalog store");

        Ok(RedisCatalogStore {
            table: config.table.clone(),
            conn,
        })
    }

    /// Returns the table this store operates on.
    pub fn table(&self) -> &str {
        &self.table
    }
}

#[async_trait]
impl CatalogStore for RedisCatalogStore {
    async fn scan_all(&self) -> StoreResult<Vec<EnvironmentTypeEntry>> {
        let mut conn = self.conn.clone();
        let pairs: Vec<(String, String)> = conn.hgetall(&self.table).await?;

        debug!(table = %self.table, count = pairs.len(), "Scanned store table");

        Ok(pairs
            .into_iter()
            .map(|(name, schema)| EnvironmentTypeEntry::new(name, schema))
            .collect())
    }

    async fn delete_entry(&self, name: &str) -> StoreResult<()> {
        let mut conn = self.conn.clone();
        let removed: i64 = conn.hdel(&self.table, name).await?;

        // Existence precondition: a record that was already gone is a
        // condition-check failure, not a silent success.
        if removed == 0 {
            return Err(StoreError::NotFound {
                table: self.table.clone(),
                name: name.to_string(),
            });
        }

        debug!(table = %self.table, name = %name, "Deleted store entry");
        Ok(())
    }

    async fn put_entry(&self, name: &str, schema: &str) -> StoreResult<()> {
        let mut conn = self.conn.clone();
        let _: () = conn.hset(&self.table, name, schema).await?;

        debug!(table = %self.table, name = %name, "Put store entry");
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = StoreConfig::new("env-types", "redis://127.0.0.1:6379/");
        assert_eq!(config.table, "env-types");
        assert_eq!(config.response_timeout, Duration::from_secs(10));
        assert_eq!(config.connection_timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_config_builder_overrides() {
        let config = StoreConfig::new("env-types", "redis://store:6379/")
            .response_timeout(Duration::from_secs(3))
            .connection_timeout(Duration::from_secs(7));
        assert_eq!(config.response_timeout, Duration::from_secs(3));
        assert_eq!(config.connection_timeout, Duration::from_secs(7));
    }

    #[tokio::test]
    async fn test_connect_rejects_malformed_url() {
        let config = StoreConfig::new("env-types", "not a url");
        let err = RedisCatalogStore::connect(&config).await.unwrap_err();
        assert!(matches!(err, StoreError::Connection(_)));
    }
}
