//! # Purge Coordinator
//!
//! Drains every existing entry from the store before the write phase. The
//! replace-all strategy means a run never merges with prior state; it
//! deletes everything the scan returned, then writes the current catalog.
//!
//! ## Settle-All Semantics
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Purge Fan-Out                                   │
//! │                                                                         │
//! │  scan_all() ──► [a, b, c, ...]                                         │
//! │                   │                                                     │
//! │                   ▼ concurrent, no cap, one task (join_all)            │
//! │          delete(a)   delete(b)   delete(c)   ...                       │
//! │              │           │           │                                  │
//! │              ▼           ▼           ▼                                  │
//! │          Ok          Err(...)    Ok            every attempt finishes  │
//! │              └───────────┴───────────┘                                  │
//! │                          ▼                                              │
//! │               Vec<PurgeOutcome> (full per-item list)                   │
//! │                                                                         │
//! │  One failed delete never aborts or rolls back its siblings.            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use futures_util::future::join_all;
use tracing::{info, warn};

use envcat_store::{CatalogStore, StoreResult};

/// Outcome of one delete attempt during the purge phase.
#[derive(Debug)]
pub struct PurgeOutcome {
    /// Name of the entry the delete targeted.
    pub name: String,

    /// The delete result, including `NotFound` condition-check failures.
    pub result: StoreResult<()>,
}

impl PurgeOutcome {
    /// Returns true when the delete succeeded.
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Deletes every entry currently in the store, concurrently, settle-all.
///
/// Issues exactly one delete attempt per scanned item. Individual delete
/// failures are collected in the outcome list; only the initial scan (or
/// connection) failure is fatal, because writing over an unknown store
/// state would break the replace-all invariant.
pub async fn purge_all<S: CatalogStore + ?Sized>(store: &S) -> StoreResult<Vec<PurgeOutcome>> {
    let existing = store.scan_all().await?;
    info!(count = existing.len(), "Purging existing store entries");

    let deletes = existing.into_iter().map(|entry| async move {
        let result = store.delete_entry(&entry.name).await;
        if let Err(ref err) = result {
            warn!(name = %entry.name, error = %err, "Delete failed during purge");
        }
        PurgeOutcome {
            name: entry.name,
            result,
        }
    });

    Ok(join_all(deletes).await)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use envcat_store::MemoryCatalogStore;

    #[tokio::test]
    async fn test_purge_issues_one_delete_per_entry() {
        let store = MemoryCatalogStore::new();
        store.seed("a", "{}");
        store.seed("b", "{}");
        store.seed("c", "{}");

        let outcomes = purge_all(&store).await.unwrap();
        assert_eq!(outcomes.len(), 3);
        assert!(outcomes.iter().all(PurgeOutcome::is_ok));
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_purge_of_empty_store_is_a_no_op() {
        let store = MemoryCatalogStore::new();
        let outcomes = purge_all(&store).await.unwrap();
        assert!(outcomes.is_empty());
    }

    #[tokio::test]
    async fn test_one_failed_delete_does_not_abort_siblings() {
        let store = MemoryCatalogStore::new();
        store.seed("a", "{}");
        store.seed("b", "{}");
        store.seed("c", "{}");
        store.fail_deletes_of("b");

        let outcomes = purge_all(&store).await.unwrap();
        assert_eq!(outcomes.len(), 3);
        assert_eq!(outcomes.iter().filter(|o| o.is_ok()).count(), 2);
        assert_eq!(outcomes.iter().filter(|o| !o.is_ok()).count(), 1);

        // The failed entry survives; the other two are gone.
        assert_eq!(store.len(), 1);
        assert!(store.get("b").is_some());
    }

    #[tokio::test]
    async fn test_scan_failure_is_fatal() {
        let store = MemoryCatalogStore::new();
        store.seed("a", "{}");
        store.fail_scans();

        assert!(purge_all(&store).await.is_err());
        // Nothing was deleted.
        assert_eq!(store.len(), 1);
    }
}
