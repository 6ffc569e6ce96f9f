//! # Catalog Types
//!
//! Domain types shared across the workspace: the environment-type entry and
//! the catalog produced by one enumeration pass over the source directory.

use serde::{Deserialize, Serialize};

use crate::schema::EMPTY_SCHEMA;

// =============================================================================
// Environment Type Entry
// =============================================================================

/// One environment type in the catalog.
///
/// `name` is derived from a source directory name and keys the record in the
/// remote store. `schema` is either canonical (compact, stably re-serialized)
/// JSON text, or the empty-string sentinel meaning "source text failed to
/// parse as JSON".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvironmentTypeEntry {
    /// Environment type name (store partition key). Non-empty.
    pub name: String,

    /// Canonical schema text, or [`EMPTY_SCHEMA`] when the source did not
    /// parse as JSON.
    pub schema: String,
}

impl EnvironmentTypeEntry {
    /// Creates a new catalog entry.
    pub fn new(name: impl Into<String>, schema: impl Into<String>) -> Self {
        EnvironmentTypeEntry {
            name: name.into(),
            schema: schema.into(),
        }
    }

    /// Returns true if this entry carries a real schema rather than the
    /// empty-string sentinel.
    pub fn has_schema(&self) -> bool {
        self.schema != EMPTY_SCHEMA
    }
}

// =============================================================================
// Catalog
// =============================================================================

/// The ordered sequence of entries produced by one enumeration pass.
///
/// Ordering matches directory enumeration order and is not sorted. Names are
/// expected-but-not-guaranteed unique; the engine does not deduplicate, so
/// duplicates resolve first-seen-wins under sequential writes and in
/// undefined order under concurrent writes. Use [`duplicate_names`] to
/// surface them.
pub type Catalog = Vec<EnvironmentTypeEntry>;

/// Returns the names that appear more than once in the catalog, in
/// first-occurrence order, each reported once.
///
/// Detection only: the catalog itself is left untouched.
pub fn duplicate_names(catalog: &[EnvironmentTypeEntry]) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    let mut duplicates = Vec::new();
    for entry in catalog {
        if !seen.insert(entry.name.as_str()) && !duplicates.contains(&entry.name) {
            duplicates.push(entry.name.clone());
        }
    }
    duplicates
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_has_schema() {
        let entry = EnvironmentTypeEntry::new("small", r#"{"cpu":1}"#);
        assert!(entry.has_schema());

        let sentinel = EnvironmentTypeEntry::new("broken", EMPTY_SCHEMA);
        assert!(!sentinel.has_schema());
    }

    #[test]
    fn test_duplicate_names_reports_each_once() {
        let catalog = vec![
            EnvironmentTypeEntry::new("small", "{}"),
            EnvironmentTypeEntry::new("large", "{}"),
            EnvironmentTypeEntry::new("small", "{}"),
            EnvironmentTypeEntry::new("small", "{}"),
        ];
        assert_eq!(duplicate_names(&catalog), vec!["small".to_string()]);
    }

    #[test]
    fn test_duplicate_names_empty_for_unique_catalog() {
        let catalog = vec![
            EnvironmentTypeEntry::new("small", "{}"),
            EnvironmentTypeEntry::new("large", "{}"),
        ];
        assert!(duplicate_names(&catalog).is_empty());
    }

    #[test]
    fn test_entry_serde_roundtrip_field_names() {
        let entry = EnvironmentTypeEntry::new("small", r#"{"cpu":1}"#);
        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains(r#""name":"small""#));
        assert!(json.contains(r#""schema""#));
    }
}
