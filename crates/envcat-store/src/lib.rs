//! # envcat-store: Store Client for the Catalog Sync Engine
//!
//! A thin operation set over the remote key-value store that holds the
//! synchronized catalog. The whole surface is three operations, each a
//! single attempt with no built-in retry.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Store Client Layer                                │
//! │                                                                         │
//! │  envcat-sync (purge coordinator, write phase)                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  envcat-store (THIS CRATE)                      │   │
//! │  │                                                                 │   │
//! │  │   CatalogStore trait                                            │   │
//! │  │   ├── scan_all()            full snapshot of the table          │   │
//! │  │   ├── delete_entry(name)    delete iff exists (NotFound else)   │   │
//! │  │   └── put_entry(name, s)    idempotent upsert                   │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────────────────┐   ┌──────────────────────────────┐  │   │
//! │  │   │  RedisCatalogStore   │   │  MemoryCatalogStore          │  │   │
//! │  │   │  one hash per table  │   │  test double with failure    │  │   │
//! │  │   │  HGETALL/HDEL/HSET   │   │  injection knobs             │  │   │
//! │  │   └──────────────────────┘   └──────────────────────────────┘  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Redis (remote; the only shared mutable state in the system)           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! There is deliberately no module-level client instance: callers construct
//! a store and pass it by reference, which is what lets the engine tests run
//! against [`MemoryCatalogStore`] instead of a live endpoint.

// =============================================================================
// Module Declarations
// =============================================================================

pub mod client;
pub mod error;
pub mod memory;
pub mod redis_store;

// =============================================================================
// Re-exports
// =============================================================================

pub use client::CatalogStore;
pub use error::{StoreError, StoreResult};
pub use memory::MemoryCatalogStore;
pub use redis_store::{RedisCatalogStore, StoreConfig};
