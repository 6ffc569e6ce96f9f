//! # Schema Canonicalization
//!
//! Canonicalization re-serializes a parsed JSON document into a stable,
//! compact textual form without semantic change. The store always receives
//! canonical text, so two runs over byte-different but semantically equal
//! source files write identical records.
//!
//! ## Canonical Form
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Canonicalization Pipeline                          │
//! │                                                                         │
//! │  raw file text ──► serde_json::from_str ──► Value ──► to_string ──►    │
//! │                                                                         │
//! │  { "cpu" : 1,            parse            compact     {"cpu":1,        │
//! │    "mem": 2 }                             serialize    "mem":2}        │
//! │                                                                         │
//! │  Parse failure is a typed error; the source reader maps it to the      │
//! │  EMPTY_SCHEMA sentinel instead of dropping the entry.                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Canonicalization is idempotent: canonical text parses back to the same
//! `Value` and re-serializes to the same bytes.

use crate::error::SchemaError;

/// Sentinel schema value for entries whose source text failed to parse.
///
/// The engine still writes these entries so one bad schema file cannot block
/// the rest of the catalog from syncing.
pub const EMPTY_SCHEMA: &str = "";

/// Parses `raw` as JSON and re-serializes it to canonical compact text.
///
/// No semantic transformation happens here, only whitespace/representation
/// normalization. Any JSON document is accepted (objects, arrays, scalars).
///
/// ## Errors
/// Returns [`SchemaError`] when `raw` is not valid JSON. Callers decide the
/// failure policy; the source reader recovers with [`EMPTY_SCHEMA`].
pub fn canonicalize_schema(raw: &str) -> Result<String, SchemaError> {
    let value: serde_json::Value = serde_json::from_str(raw)?;
    Ok(serde_json::to_string(&value)?)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonicalize_compacts_whitespace() {
        let canonical = canonicalize_schema("{ \"cpu\" : 1 }\n").unwrap();
        assert_eq!(canonical, r#"{"cpu":1}"#);
    }

    #[test]
    fn test_canonicalize_is_idempotent() {
        let first = canonicalize_schema(r#"{"a":1,"b":2}"#).unwrap();
        assert_eq!(first, r#"{"a":1,"b":2}"#);

        let second = canonicalize_schema(&first).unwrap();
        assert_eq!(second, first);
    }

    #[test]
    fn test_canonicalize_accepts_any_json_document() {
        assert_eq!(canonicalize_schema("[1, 2, 3]").unwrap(), "[1,2,3]");
        assert_eq!(canonicalize_schema("\"just a string\"").unwrap(), "\"just a string\"");
        assert_eq!(canonicalize_schema("null").unwrap(), "null");
    }

    #[test]
    fn test_canonicalize_rejects_invalid_json() {
        let err = canonicalize_schema("{not valid}").unwrap_err();
        assert!(!err.to_string().is_empty());
    }

    #[test]
    fn test_canonicalize_preserves_nested_structure() {
        let raw = r#"
        {
            "resources": { "cpu": 4, "memory": "16Gi" },
            "regions": ["a", "b"]
        }
        "#;
        let canonical = canonicalize_schema(raw).unwrap();
        assert_eq!(
            canonical,
            r#"{"regions":["a","b"],"resources":{"cpu":4,"memory":"16Gi"}}"#
        );
    }
}
