//! # In-Memory Catalog Store
//!
//! Test double implementing [`CatalogStore`] over a plain map, with failure
//! injection knobs so the engine's settle-all behavior can be exercised
//! without a live endpoint. Semantics match the Redis backend: delete
//! carries the existence precondition, put is an unconditional upsert.

use std::collections::{BTreeMap, HashSet};
use std::sync::Mutex;

use async_trait::async_trait;

use envcat_core::EnvironmentTypeEntry;

use crate::client::CatalogStore;
use crate::error::{StoreError, StoreResult};

const MEMORY_TABLE: &str = "memory";

#[derive(Debug, Default)]
struct MemoryInner {
    entries: BTreeMap<String, String>,
    fail_scan: bool,
    fail_deletes: HashSet<String>,
    fail_puts: HashSet<String>,
}

/// In-memory [`CatalogStore`] double.
///
/// ## Example
/// ```rust,ignore
/// let store = MemoryCatalogStore::new();
/// store.seed("legacy", r#"{"cpu":2}"#);
/// store.fail_deletes_of("legacy"); // next purge observes one failure
/// ```
#[derive(Debug, Default)]
pub struct MemoryCatalogStore {
    inner: Mutex<MemoryInner>,
}

impl MemoryCatalogStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a record directly, bypassing failure injection. Used to set
    /// up pre-run store state in tests.
    pub fn seed(&self, name: impl Into<String>, schema: impl Into<String>) {
        self.inner
            .lock()
            .expect("memory store lock poisoned")
            .entries
            .insert(name.into(), schema.into());
    }

    /// Makes every `scan_all` call fail.
    pub fn fail_scans(&self) {
        self.inner.lock().expect("memory store lock poisoned").fail_scan = true;
    }

    /// Makes every `delete_entry(name)` call fail, leaving the record in
    /// place.
    pub fn fail_deletes_of(&self, name: impl Into<String>) {
        self.inner
            .lock()
            .expect("memory store lock poisoned")
            .fail_deletes
            .insert(name.into());
    }

    /// Makes every `put_entry(name, _)` call fail.
    pub fn fail_puts_of(&self, name: impl Into<String>) {
        self.inner
            .lock()
            .expect("memory store lock poisoned")
            .fail_puts
            .insert(name.into());
    }

    /// Returns the current store contents, sorted by name.
    pub fn snapshot(&self) -> Vec<EnvironmentTypeEntry> {
        self.inner
            .lock()
            .expect("memory store lock poisoned")
            .entries
            .iter()
            .map(|(name, schema)| EnvironmentTypeEntry::new(name.clone(), schema.clone()))
            .collect()
    }

    /// Returns the schema stored under `name`, if any.
    pub fn get(&self, name: &str) -> Option<String> {
        self.inner
            .lock()
            .expect("memory store lock poisoned")
            .entries
            .get(name)
            .cloned()
    }

    /// Number of records currently stored.
    pub fn len(&self) -> usize {
        self.inner.lock().expect("memory store lock poisoned").entries.len()
    }

    /// Returns true when the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl CatalogStore for MemoryCatalogStore {
    async fn scan_all(&self) -> StoreResult<Vec<EnvironmentTypeEntry>> {
        let inner = self.inner.lock().expect("memory store lock poisoned");
        if inner.fail_scan {
            return Err(StoreError::Command("injected scan failure".to_string()));
        }
        Ok(inner
            .entries
            .iter()
            .map(|(name, schema)| EnvironmentTypeEntry::new(name.clone(), schema.clone()))
            .collect())
    }

    async fn delete_entry(&self, name: &str) -> StoreResult<()> {
        let mut inner = self.inner.lock().expect("memory store lock poisoned");
        if inner.fail_deletes.contains(name) {
            return Err(StoreError::Command(format!(
                "injected delete failure for '{name}'"
            )));
        }
        if inner.entries.remove(name).is_none() {
            return Err(StoreError::NotFound {
                table: MEMORY_TABLE.to_string(),
                name: name.to_string(),
            });
        }
        Ok(())
    }

    async fn put_entry(&self, name: &str, schema: &str) -> StoreResult<()> {
        let mut inner = self.inner.lock().expect("memory store lock poisoned");
        if inner.fail_puts.contains(name) {
            return Err(StoreError::Command(format!(
                "injected put failure for '{name}'"
            )));
        }
        inner.entries.insert(name.to_string(), schema.to_string());
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_put_then_scan() {
        let store = MemoryCatalogStore::new();
        store.put_entry("small", r#"{"cpu":1}"#).await.unwrap();
        store.put_entry("large", r#"{"cpu":4}"#).await.unwrap();

        let scanned = store.scan_all().await.unwrap();
        assert_eq!(scanned.len(), 2);
        assert!(scanned.contains(&EnvironmentTypeEntry::new("small", r#"{"cpu":1}"#)));
    }

    #[tokio::test]
    async fn test_put_overwrites_existing_value() {
        let store = MemoryCatalogStore::new();
        store.put_entry("small", r#"{"cpu":1}"#).await.unwrap();
        store.put_entry("small", r#"{"cpu":2}"#).await.unwrap();

        assert_eq!(store.get("small").as_deref(), Some(r#"{"cpu":2}"#));
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn test_delete_absent_entry_is_not_found() {
        let store = MemoryCatalogStore::new();
        let err = store.delete_entry("ghost").await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_delete_existing_entry() {
        let store = MemoryCatalogStore::new();
        store.seed("legacy", "{}");
        store.delete_entry("legacy").await.unwrap();
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_injected_delete_failure_keeps_record() {
        let store = MemoryCatalogStore::new();
        store.seed("sticky", "{}");
        store.fail_deletes_of("sticky");

        let err = store.delete_entry("sticky").await.unwrap_err();
        assert!(matches!(err, StoreError::Command(_)));
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn test_injected_scan_failure() {
        let store = MemoryCatalogStore::new();
        store.fail_scans();
        assert!(store.scan_all().await.is_err());
    }
}
