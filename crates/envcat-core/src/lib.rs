//! # envcat-core: Pure Domain Logic for the Catalog Sync Engine
//!
//! This crate holds the domain model for environment-type catalogs: the
//! entry type, JSON schema canonicalization, and the validation rules the
//! rest of the workspace builds on. It performs no I/O of any kind.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         envcat Data Flow                                │
//! │                                                                         │
//! │  contrib/<name>/schema.json (filesystem, read by envcat-sync)          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │               ★ envcat-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌────────────┐   ┌──────────────┐   ┌──────────────────┐     │   │
//! │  │   │   types    │   │    schema    │   │    validation    │     │   │
//! │  │   │  Entry     │   │ canonicalize │   │   name rules     │     │   │
//! │  │   │  Catalog   │   │  sentinel    │   │                  │     │   │
//! │  │   └────────────┘   └──────────────┘   └──────────────────┘     │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO STORE • NO FILESYSTEM • PURE FUNCTIONS            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  envcat-store (remote key-value store)                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Catalog entry types and duplicate detection
//! - [`schema`] - JSON canonicalization and the empty-schema sentinel
//! - [`validation`] - Entry name validation rules
//! - [`error`] - Domain error types

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod schema;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{SchemaError, ValidationError};
pub use schema::{canonicalize_schema, EMPTY_SCHEMA};
pub use types::{duplicate_names, Catalog, EnvironmentTypeEntry};
pub use validation::validate_entry_name;
