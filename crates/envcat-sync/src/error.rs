//! # Sync Error Types
//!
//! Error types for the synchronization engine, split along the per-phase
//! failure policy: source errors can abort the run (or be skipped, depending
//! on [`ReadMode`](crate::ReadMode)), store errors are fatal only when the
//! purge snapshot or the connection fails. Individual delete and put
//! failures are collected as data, not raised as errors.

use std::path::PathBuf;

use thiserror::Error;

use envcat_store::StoreError;

/// Result type alias for engine operations.
pub type SyncResult<T> = Result<T, SyncError>;

// =============================================================================
// Source Errors
// =============================================================================

/// A failure while enumerating the catalog directory or reading one entry.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The catalog root itself could not be listed. Always fatal; there is
    /// no per-entry policy to apply without an entry list.
    #[error("Failed to list catalog root {path}: {source}")]
    ListRoot {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Filesystem metadata for a directory entry could not be read.
    #[error("Failed to inspect {path}: {source}")]
    Inspect {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A directory name did not yield a usable entry name.
    #[error("Invalid entry name derived from {path}: {reason}")]
    InvalidName { path: PathBuf, reason: String },

    /// The entry's schema file was missing or unreadable.
    #[error("Failed to read schema for '{name}' at {path}: {source}")]
    ReadSchema {
        name: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

// =============================================================================
// Run-Fatal Errors
// =============================================================================

/// A failure that aborts the whole synchronization run.
#[derive(Debug, Error)]
pub enum SyncError {
    /// Catalog read failed under fail-fast policy. The run aborts before
    /// any purge or write; the store is untouched.
    #[error("Catalog read failed: {0}")]
    Source(#[from] SourceError),

    /// The purge snapshot (or the store connection) failed. Writing without
    /// a completed purge would break the replace-all invariant, so this is
    /// fatal too.
    #[error("Store operation failed: {0}")]
    Store(#[from] StoreError),
}

// =============================================================================
// Unit Tests
// =============================================================================
