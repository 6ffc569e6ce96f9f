//! # Error Types
//!
//! Domain-specific error types for envcat-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  envcat-core errors (this file)                                        │
//! │  ├── SchemaError      - Schema text failed to parse as JSON            │
//! │  └── ValidationError  - Entry name validation failures                 │
//! │                                                                         │
//! │  envcat-store errors (separate crate)                                  │
//! │  └── StoreError       - Remote store operation failures                │
//! │                                                                         │
//! │  envcat-sync errors (separate crate)                                   │
//! │  ├── SourceError      - Catalog directory read failures                │
//! │  └── SyncError        - Run-fatal failures (source or store)           │
//! │                                                                         │
//! │  SchemaError is recovered locally (empty-schema sentinel); the others  │
//! │  follow the per-phase failure policy of the engine.                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

// =============================================================================
// Schema Error
// =============================================================================

/// Schema text failed to parse as JSON.
///
/// This is the only failure the engine recovers from per entry: the source
/// reader logs it and keeps the entry with the empty-schema sentinel instead
/// of aborting the enumeration.
#[derive(Debug, Error)]
#[error("Schema text is not valid JSON: {0}")]
pub struct SchemaError(#[from] serde_json::Error);

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors for catalog entries.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Invalid format (e.g., forbidden bytes in a store key).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_error_wraps_serde_json() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{oops").unwrap_err();
        let err = SchemaError::from(parse_err);
        assert!(err.to_string().starts_with("Schema text is not valid JSON"));
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "name".to_string(),
        };
        assert_eq!(err.to_string(), "name is required");
    }
}
