//! # Sync Orchestrator
//!
//! Sequences one synchronization run: read the catalog directory, purge the
//! store, write the current catalog. Each phase applies its own failure
//! policy.
//!
//! ## Run State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Run State Machine                                │
//! │                                                                         │
//! │  Idle ──► Reading ──┬──► Aborted   (read failure; terminal, the only   │
//! │                     │               side effects are log lines)        │
//! │                     │                                                   │
//! │                     └──► Purging ──► Writing ──► Done                  │
//! │                                                                         │
//! │  Purging ALWAYS transitions to Writing, regardless of individual       │
//! │  delete outcomes; only a failed scan aborts the run. The write phase   │
//! │  is awaited to completion: Done means every put was acknowledged or    │
//! │  its failure recorded in the report.                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! There is no mutual exclusion between concurrent runs: two overlapping
//! invocations interleave their purge and write phases against the same
//! table and can leave a mixed final state. The intended caller is a
//! serialized pipeline step.

use std::path::Path;

use chrono::Utc;
use futures_util::future::join_all;
use tracing::{error, info, warn};
use uuid::Uuid;

use envcat_core::duplicate_names;
use envcat_store::CatalogStore;

use crate::error::SyncResult;
use crate::purge::purge_all;
use crate::report::{SyncReport, WriteOutcome};
use crate::source::{self, ReadMode};

// =============================================================================
// Run Phases
// =============================================================================

/// Phases of one synchronization run, used in structured logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncPhase {
    Idle,
    Reading,
    Aborted,
    Purging,
    Writing,
    Done,
}

impl std::fmt::Display for SyncPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SyncPhase::Idle => write!(f, "idle"),
            SyncPhase::Reading => write!(f, "reading"),
            SyncPhase::Aborted => write!(f, "aborted"),
            SyncPhase::Purging => write!(f, "purging"),
            SyncPhase::Writing => write!(f, "writing"),
            SyncPhase::Done => write!(f, "done"),
        }
    }
}

// =============================================================================
// Options
// =============================================================================

/// Tunables for one synchronization run.
#[derive(Debug, Clone, Default)]
pub struct SyncOptions {
    /// Failure policy for individual entry reads.
    pub read_mode: ReadMode,
}

// =============================================================================
// Orchestrator
// =============================================================================

/// Runs one full synchronization: read, purge, write.
///
/// ## Failure Policy
/// - read failure: the run aborts before any store mutation
/// - purge scan failure: fatal (see [`purge_all`])
/// - individual delete/put failures: logged, collected in the report,
///   never re-raised and never retried
///
/// The returned [`SyncReport`] is the only place partial failures surface
/// besides the log stream.
pub async fn run<S: CatalogStore + ?Sized>(
    store: &S,
    root: &Path,
    options: &SyncOptions,
) -> SyncResult<SyncReport> {
    let run_id = Uuid::new_v4();
    let started_at = Utc::now();
    info!(
        %run_id,
        root = %root.display(),
        mode = %options.read_mode,
        phase = %SyncPhase::Reading,
        "Catalog sync starting"
    );

    let scan = match source::list_entries(root, options.read_mode).await {
        Ok(scan) => scan,
        Err(err) => {
            error!(%run_id, error = %err, phase = %SyncPhase::Aborted, "Catalog read failed, aborting before purge");
            return Err(err.into());
        }
    };

    let duplicates = duplicate_names(&scan.catalog);
    if !duplicates.is_empty() {
        // Not deduplicated on purpose: with concurrent writes the surviving
        // record for a duplicated name is undefined.
        warn!(%run_id, ?duplicates, "Catalog contains duplicate entry names");
    }
    let entries_with_empty_schema = scan.catalog.iter().filter(|e| !e.has_schema()).count();
    if entries_with_empty_schema > 0 {
        warn!(
            %run_id,
            count = entries_with_empty_schema,
            "Entries with unparseable schemas will be written with an empty schema"
        );
    }

    info!(%run_id, phase = %SyncPhase::Purging, "Purge phase starting");
    let purge = purge_all(store).await?;

    info!(
        %run_id,
        count = scan.catalog.len(),
        phase = %SyncPhase::Writing,
        "Write phase starting"
    );
    let puts = scan.catalog.iter().map(|entry| async move {
        let result = store.put_entry(&entry.name, &entry.schema).await;
        if let Err(ref err) = result {
            error!(name = %entry.name, error = %err, "Failed to sync entry");
        }
        WriteOutcome {
            name: entry.name.clone(),
            result,
        }
    });
    let writes = join_all(puts).await;

    let report = SyncReport {
        run_id,
        started_at,
        finished_at: Utc::now(),
        entries_read: scan.catalog.len(),
        entries_skipped: scan.skipped.len(),
        entries_with_empty_schema,
        purge,
        writes,
    };

    info!(
        %run_id,
        entries = report.entries_read,
        purged_ok = report.purged_ok(),
        purge_failed = report.purge_failed(),
        written_ok = report.written_ok(),
        write_failed = report.write_failed(),
        phase = %SyncPhase::Done,
        "Catalog sync finished"
    );

    Ok(report)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SyncError;
    use envcat_core::EnvironmentTypeEntry;
    use envcat_store::MemoryCatalogStore;
    use std::fs as std_fs;
    use tempfile::TempDir;

    fn write_entry(root: &Path, name: &str, schema: &str) {
        let dir = root.join(name);
        std_fs::create_dir(&dir).unwrap();
        std_fs::write(dir.join(source::SCHEMA_FILE), schema).unwrap();
    }

    #[tokio::test]
    async fn test_full_run_replaces_store_contents() {
        let root = TempDir::new().unwrap();
        write_entry(root.path(), "small", r#"{ "cpu": 1 }"#);
        write_entry(root.path(), "large", r#"{ "cpu": 4 }"#);

        let store = MemoryCatalogStore::new();
        store.seed("legacy", r#"{"cpu":99}"#);

        let report = run(&store, root.path(), &SyncOptions::default()).await.unwrap();

        assert!(report.is_clean());
        assert_eq!(report.entries_read, 2);
        assert_eq!(report.purged_ok(), 1);
        assert_eq!(report.written_ok(), 2);

        assert_eq!(
            store.snapshot(),
            vec![
                EnvironmentTypeEntry::new("large", r#"{"cpu":4}"#),
                EnvironmentTypeEntry::new("small", r#"{"cpu":1}"#),
            ]
        );
        assert!(store.get("legacy").is_none());
    }

    #[tokio::test]
    async fn test_read_failure_aborts_before_any_store_mutation() {
        let root = TempDir::new().unwrap();
        write_entry(root.path(), "small", "{}");
        std_fs::create_dir(root.path().join("no-schema")).unwrap();

        let store = MemoryCatalogStore::new();
        store.seed("legacy", "{}");

        let err = run(&store, root.path(), &SyncOptions::default()).await.unwrap_err();
        assert!(matches!(err, SyncError::Source(_)));

        // No purge, no writes: the stale entry is still there, alone.
        assert_eq!(store.len(), 1);
        assert!(store.get("legacy").is_some());
    }

    #[tokio::test]
    async fn test_unparseable_schema_is_written_as_empty_sentinel() {
        let root = TempDir::new().unwrap();
        write_entry(root.path(), "broken", "{not valid}");

        let store = MemoryCatalogStore::new();
        let report = run(&store, root.path(), &SyncOptions::default()).await.unwrap();

        assert_eq!(report.entries_with_empty_schema, 1);
        assert_eq!(store.get("broken").as_deref(), Some(""));
    }

    #[tokio::test]
    async fn test_write_failure_is_isolated_and_does_not_fail_the_run() {
        let root = TempDir::new().unwrap();
        write_entry(root.path(), "good", r#"{"cpu":1}"#);
        write_entry(root.path(), "bad", r#"{"cpu":2}"#);

        let store = MemoryCatalogStore::new();
        store.fail_puts_of("bad");

        let report = run(&store, root.path(), &SyncOptions::default()).await.unwrap();

        assert!(!report.is_clean());
        assert_eq!(report.written_ok(), 1);
        assert_eq!(report.write_failed(), 1);
        assert_eq!(store.get("good").as_deref(), Some(r#"{"cpu":1}"#));
        assert!(store.get("bad").is_none());
    }

    #[tokio::test]
    async fn test_purge_failure_still_proceeds_to_write_phase() {
        let root = TempDir::new().unwrap();
        write_entry(root.path(), "small", r#"{"cpu":1}"#);

        let store = MemoryCatalogStore::new();
        store.seed("stuck", "{}");
        store.fail_deletes_of("stuck");

        let report = run(&store, root.path(), &SyncOptions::default()).await.unwrap();

        assert_eq!(report.purge_failed(), 1);
        assert_eq!(report.written_ok(), 1);
        // The stuck record survives next to the fresh catalog entry.
        assert!(store.get("stuck").is_some());
        assert!(store.get("small").is_some());
    }

    #[tokio::test]
    async fn test_scan_failure_during_purge_is_fatal() {
        let root = TempDir::new().unwrap();
        write_entry(root.path(), "small", r#"{"cpu":1}"#);

        let store = MemoryCatalogStore::new();
        store.fail_scans();

        let err = run(&store, root.path(), &SyncOptions::default()).await.unwrap_err();
        assert!(matches!(err, SyncError::Store(_)));
        assert!(store.get("small").is_none());
    }

    #[tokio::test]
    async fn test_skip_bad_mode_syncs_the_readable_rest() {
        let root = TempDir::new().unwrap();
        write_entry(root.path(), "small", r#"{"cpu":1}"#);
        std_fs::create_dir(root.path().join("no-schema")).unwrap();

        let store = MemoryCatalogStore::new();
        let options = SyncOptions {
            read_mode: ReadMode::SkipBad,
        };
        let report = run(&store, root.path(), &options).await.unwrap();

        assert_eq!(report.entries_read, 1);
        assert_eq!(report.entries_skipped, 1);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_phase_display_names() {
        assert_eq!(SyncPhase::Idle.to_string(), "idle");
        assert_eq!(SyncPhase::Reading.to_string(), "reading");
        assert_eq!(SyncPhase::Aborted.to_string(), "aborted");
        assert_eq!(SyncPhase::Purging.to_string(), "purging");
        assert_eq!(SyncPhase::Writing.to_string(), "writing");
        assert_eq!(SyncPhase::Done.to_string(), "done");
    }
}
