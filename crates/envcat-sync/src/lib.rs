//! # envcat-sync: Catalog Synchronization Engine
//!
//! Keeps the remote environment-type store in sync with a directory of
//! schema files, using a replace-all strategy: read the catalog, purge the
//! store, write the current entries.
//!
//! ## Architecture Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     One Synchronization Run                             │
//! │                                                                         │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │                     run() (engine.rs)                            │  │
//! │  │                                                                  │  │
//! │  │  Takes the store and root path as explicit parameters; there    │  │
//! │  │  is no module-level client instance anywhere in the engine.     │  │
//! │  └────────────────────────────┬─────────────────────────────────────┘  │
//! │                               │                                         │
//! │         ┌─────────────────────┼─────────────────────┐                  │
//! │         ▼                     ▼                     ▼                   │
//! │  ┌────────────────┐  ┌────────────────┐  ┌────────────────────────┐    │
//! │  │ Source Reader  │  │ Purge          │  │ Write Phase            │    │
//! │  │ (source.rs)    │  │ (purge.rs)     │  │ (engine.rs)            │    │
//! │  │                │  │                │  │                        │    │
//! │  │ Sequential     │  │ One scan, then │  │ Concurrent puts,       │    │
//! │  │ reads, per-    │  │ concurrent     │  │ awaited to completion, │    │
//! │  │ entry tagged   │  │ settle-all     │  │ per-entry outcomes in  │    │
//! │  │ outcomes       │  │ deletes        │  │ the report             │    │
//! │  └────────────────┘  └────────────────┘  └────────────────────────┘    │
//! │                                                                         │
//! │  Fan-out runs cooperatively on the current task (join_all): no         │
//! │  spawned tasks, no shared in-process state, no concurrency cap and     │
//! │  no backpressure, so large catalogs burst request volume against       │
//! │  the store's throughput limits.                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`engine`] - The orchestrator: `run()`, [`SyncOptions`], [`SyncPhase`]
//! - [`source`] - Catalog directory reader and [`ReadMode`] policy
//! - [`purge`] - Settle-all purge coordinator
//! - [`report`] - Per-run outcome report and serializable summary
//! - [`error`] - Engine error types
//!
//! ## Usage
//!
//! ```rust,ignore
//! use envcat_store::{RedisCatalogStore, StoreConfig};
//! use envcat_sync::SyncOptions;
//!
//! let store = RedisCatalogStore::connect(&StoreConfig::new(table, url)).await?;
//! let report = envcat_sync::run(&store, catalog_root, &SyncOptions::default()).await?;
//! if !report.is_clean() {
//!     // partial failures are log-and-report only, never fatal
//! }
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod engine;
pub mod error;
pub mod purge;
pub mod report;
pub mod source;

// =============================================================================
// Re-exports
// =============================================================================

pub use engine::{run, SyncOptions, SyncPhase};
pub use error::{SourceError, SyncError, SyncResult};
pub use purge::{purge_all, PurgeOutcome};
pub use report::{SyncReport, SyncSummary, WriteOutcome};
pub use source::{list_entries, ParseReadModeError, ReadMode, SourceScan, SCHEMA_FILE};
