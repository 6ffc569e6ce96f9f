//! # Run Report
//!
//! Per-run observability: the full per-item outcome lists plus aggregate
//! counters. Partial store failures live here and in the log stream only;
//! they never fail the run, so operators inspect the report (or its JSON
//! summary) to learn about them.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use envcat_store::StoreResult;

use crate::purge::PurgeOutcome;

// =============================================================================
// Write Outcome
// =============================================================================

/// Outcome of one put attempt during the write phase.
#[derive(Debug)]
pub struct WriteOutcome {
    /// Name of the entry the put targeted.
    pub name: String,

    /// The put result. Failures are caught and collected, never re-raised.
    pub result: StoreResult<()>,
}

impl WriteOutcome {
    /// Returns true when the put succeeded.
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

// =============================================================================
// Sync Report
// =============================================================================

/// Everything one synchronization run produced.
#[derive(Debug)]
pub struct SyncReport {
    /// Identifier correlating all log lines of this run.
    pub run_id: Uuid,

    /// When the run started (before the read phase).
    pub started_at: DateTime<Utc>,

    /// When the run finished (after the last write settled).
    pub finished_at: DateTime<Utc>,

    /// Entries read into the catalog, including empty-sentinel entries.
    pub entries_read: usize,

    /// Entries skipped by the reader (skip-bad mode only).
    pub entries_skipped: usize,

    /// Entries whose schema failed to parse and carry the empty sentinel.
    pub entries_with_empty_schema: usize,

    /// Per-item outcomes of the purge phase.
    pub purge: Vec<PurgeOutcome>,

    /// Per-item outcomes of the write phase.
    pub writes: Vec<WriteOutcome>,
}

impl SyncReport {
    /// Deletes that succeeded.
    pub fn purged_ok(&self) -> usize {
        self.purge.iter().filter(|o| o.is_ok()).count()
    }

    /// Deletes that failed (including `NotFound` condition failures).
    pub fn purge_failed(&self) -> usize {
        self.purge.len() - self.purged_ok()
    }

    /// Writes that succeeded.
    pub fn written_ok(&self) -> usize {
        self.writes.iter().filter(|o| o.is_ok()).count()
    }

    /// Writes that failed.
    pub fn write_failed(&self) -> usize {
        self.writes.len() - self.written_ok()
    }

    /// True when every delete and every write succeeded.
    pub fn is_clean(&self) -> bool {
        self.purge_failed() == 0 && self.write_failed() == 0
    }

    /// Wall-clock duration of the run.
    pub fn duration(&self) -> chrono::Duration {
        self.finished_at - self.started_at
    }

    /// Compact, serializable summary for log streams.
    pub fn summary(&self) -> SyncSummary {
        SyncSummary {
            run_id: self.run_id,
            started_at: self.started_at,
            finished_at: self.finished_at,
            entries_read: self.entries_read,
            entries_skipped: self.entries_skipped,
            entries_with_empty_schema: self.entries_with_empty_schema,
            purged_ok: self.purged_ok(),
            purge_failed: self
                .purge
                .iter()
                .filter(|o| !o.is_ok())
                .map(|o| o.name.clone())
                .collect(),
            written_ok: self.written_ok(),
            write_failed: self
                .writes
                .iter()
                .filter(|o| !o.is_ok())
                .map(|o| o.name.clone())
                .collect(),
        }
    }
}

/// Serializable run summary; failed items are listed by name.
#[derive(Debug, Clone, Serialize)]
pub struct SyncSummary {
    pub run_id: Uuid,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub entries_read: usize,
    pub entries_skipped: usize,
    pub entries_with_empty_schema: usize,
    pub purged_ok: usize,
    pub purge_failed: Vec<String>,
    pub written_ok: usize,
    pub write_failed: Vec<String>,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use envcat_store::StoreError;

    fn report_with(purge: Vec<PurgeOutcome>, writes: Vec<WriteOutcome>) -> SyncReport {
        let now = Utc::now();
        SyncReport {
            run_id: Uuid::new_v4(),
            started_at: now,
            finished_at: now,
            entries_read: writes.len(),
            entries_skipped: 0,
            entries_with_empty_schema: 0,
            purge,
            writes,
        }
    }

    #[test]
    fn test_clean_report() {
        let report = report_with(
            vec![PurgeOutcome {
                name: "legacy".to_string(),
                result: Ok(()),
            }],
            vec![WriteOutcome {
                name: "small".to_string(),
                result: Ok(()),
            }],
        );
        assert!(report.is_clean());
        assert_eq!(report.purged_ok(), 1);
        assert_eq!(report.written_ok(), 1);
    }

    #[test]
    fn test_partial_failures_show_in_counters_and_summary() {
        let report = report_with(
            vec![
                PurgeOutcome {
                    name: "gone".to_string(),
                    result: Err(StoreError::NotFound {
                        table: "t".to_string(),
                        name: "gone".to_string(),
                    }),
                },
                PurgeOutcome {
                    name: "legacy".to_string(),
                    result: Ok(()),
                },
            ],
            vec![WriteOutcome {
                name: "small".to_string(),
                result: Err(StoreError::Command("boom".to_string())),
            }],
        );

        assert!(!report.is_clean());
        assert_eq!(report.purge_failed(), 1);
        assert_eq!(report.write_failed(), 1);

        let summary = report.summary();
        assert_eq!(summary.purge_failed, vec!["gone".to_string()]);
        assert_eq!(summary.write_failed, vec!["small".to_string()]);
    }
}
