//! # Catalog Store Trait
//!
//! The seam between the sync engine and whatever holds the synchronized
//! catalog. The engine is generic over this trait, which is what allows the
//! in-memory double in tests and keeps production code free of a global
//! client singleton.

use async_trait::async_trait;

use envcat_core::EnvironmentTypeEntry;

use crate::error::StoreResult;

/// Remote key-value store holding one record per environment type.
///
/// Exactly three operations, mirroring what the sync run needs: a full
/// snapshot for the purge phase, a conditional delete, and an unconditional
/// upsert. Implementations perform a single attempt per call; retry policy
/// is explicitly out of scope for the engine.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// Returns a logically complete snapshot of the table.
    ///
    /// Implementations may paginate internally, but the caller always sees
    /// the whole table at once. Ordering is unspecified.
    async fn scan_all(&self) -> StoreResult<Vec<EnvironmentTypeEntry>>;

    /// Deletes the record for `name` if-and-only-if it currently exists.
    ///
    /// ## Errors
    /// [`StoreError::NotFound`](crate::StoreError::NotFound) when the record
    /// is absent. The precondition makes a racing concurrent delete
    /// observable as a failure instead of masking it as success.
    async fn delete_entry(&self, name: &str) -> StoreResult<()>;

    /// Idempotent upsert: unconditionally overwrites any existing value for
    /// `name`.
    async fn put_entry(&self, name: &str, schema: &str) -> StoreResult<()>;
}
