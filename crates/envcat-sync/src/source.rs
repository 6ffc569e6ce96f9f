//! # Catalog Source Reader
//!
//! Enumerates the catalog root directory and builds the [`Catalog`] for one
//! run. Immediate children that are directories become candidate entries; a
//! real filesystem metadata check decides what counts as a directory, so
//! stray files next to the entries are excluded.
//!
//! ## Failure Policy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Per-Entry Failure Handling                         │
//! │                                                                         │
//! │  read outcome per entry (tagged success/failure)                       │
//! │       │                                                                 │
//! │       ├── Ok(entry) ────────────────────► entry joins the catalog      │
//! │       │                                                                 │
//! │       ├── schema parses? no ────────────► warn, keep entry with the    │
//! │       │   (isolated in BOTH modes)        empty-schema sentinel        │
//! │       │                                                                 │
//! │       └── Err(read failure)                                            │
//! │             ├── ReadMode::FailFast ─────► whole enumeration fails,     │
//! │             │                             no partial catalog           │
//! │             └── ReadMode::SkipBad ──────► warn, skip entry, continue   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Reads are sequential: one entry's schema file is fully read before the
//! next is opened. Output ordering matches directory enumeration order.

use std::path::Path;

use tokio::fs;
use tracing::{debug, warn};

use envcat_core::{canonicalize_schema, validate_entry_name, Catalog, EnvironmentTypeEntry, EMPTY_SCHEMA};

use crate::error::SourceError;

/// Schema file expected inside every entry directory.
pub const SCHEMA_FILE: &str = "schema.json";

// =============================================================================
// Read Mode
// =============================================================================

/// Failure policy for individual entry reads during enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReadMode {
    /// The first unreadable entry aborts the whole enumeration and no
    /// partial catalog is returned. Default.
    #[default]
    FailFast,

    /// Unreadable entries are logged and skipped; the rest of the catalog
    /// still syncs.
    SkipBad,
}

impl std::fmt::Display for ReadMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReadMode::FailFast => write!(f, "fail-fast"),
            ReadMode::SkipBad => write!(f, "skip-bad"),
        }
    }
}

/// Error returned when parsing a [`ReadMode`] from a string.
#[derive(Debug, thiserror::Error)]
#[error("Unknown read mode: '{0}'. Valid options: fail-fast, skip-bad")]
pub struct ParseReadModeError(String);

impl std::str::FromStr for ReadMode {
    type Err = ParseReadModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fail-fast" | "failfast" => Ok(ReadMode::FailFast),
            "skip-bad" | "skipbad" | "best-effort" => Ok(ReadMode::SkipBad),
            other => Err(ParseReadModeError(other.to_string())),
        }
    }
}

// =============================================================================
// Source Scan
// =============================================================================

/// Result of one enumeration pass over the catalog root.
#[derive(Debug)]
pub struct SourceScan {
    /// Entries read successfully, in directory enumeration order.
    pub catalog: Catalog,

    /// Per-entry read failures that were skipped. Always empty under
    /// [`ReadMode::FailFast`].
    pub skipped: Vec<SourceError>,
}

/// Enumerates `root` and reads every entry's schema file.
///
/// ## Errors
/// - listing the root fails: always fatal
/// - an individual entry read fails: fatal under [`ReadMode::FailFast`],
///   collected in [`SourceScan::skipped`] under [`ReadMode::SkipBad`]
///
/// Schema parse failures are not read failures: the entry is kept with the
/// empty-schema sentinel in both modes.
pub async fn list_entries(root: &Path, mode: ReadMode) -> Result<SourceScan, SourceError> {
    let mut dir = fs::read_dir(root).await.map_err(|source| SourceError::ListRoot {
        path: root.to_path_buf(),
        source,
    })?;

    let mut catalog = Catalog::new();
    let mut skipped = Vec::new();

    loop {
        let dirent = dir.next_entry().await.map_err(|source| SourceError::ListRoot {
            path: root.to_path_buf(),
            source,
        })?;
        let Some(dirent) = dirent else { break };

        match scan_entry(&dirent).await {
            Ok(Some(entry)) => catalog.push(entry),
            Ok(None) => {}
            Err(err) => match mode {
                ReadMode::FailFast => return Err(err),
                ReadMode::SkipBad => {
                    warn!(error = %err, "Skipping unreadable catalog entry");
                    skipped.push(err);
                }
            },
        }
    }

    debug!(
        count = catalog.len(),
        skipped = skipped.len(),
        root = %root.display(),
        "Catalog enumeration complete"
    );

    Ok(SourceScan { catalog, skipped })
}

/// Reads one directory entry into a catalog entry.
///
/// Returns `Ok(None)` for children that are not directories.
async fn scan_entry(dirent: &fs::DirEntry) -> Result<Option<EnvironmentTypeEntry>, SourceError> {
    let path = dirent.path();

    let file_type = dirent
        .file_type()
        .await
        .map_err(|source| SourceError::Inspect {
            path: path.clone(),
            source,
        })?;
    if !file_type.is_dir() {
        debug!(path = %path.display(), "Excluding non-directory child");
        return Ok(None);
    }

    let name = dirent
        .file_name()
        .to_str()
        .ok_or_else(|| SourceError::InvalidName {
            path: path.clone(),
            reason: "not valid UTF-8".to_string(),
        })?
        .to_string();
    validate_entry_name(&name).map_err(|err| SourceError::InvalidName {
        path: path.clone(),
        reason: err.to_string(),
    })?;

    let schema_path = path.join(SCHEMA_FILE);
    let raw = fs::read_to_string(&schema_path)
        .await
        .map_err(|source| SourceError::ReadSchema {
            name: name.clone(),
            path: schema_path.clone(),
            source,
        })?;

    let schema = match canonicalize_schema(&raw) {
        Ok(canonical) => canonical,
        Err(err) => {
            // One bad schema must not block the rest of the catalog: keep
            // the entry with the sentinel and move on.
            warn!(name = %name, error = %err, "Schema is not valid JSON, keeping empty sentinel");
            EMPTY_SCHEMA.to_string()
        }
    };

    Ok(Some(EnvironmentTypeEntry::new(name, schema)))
}

// =============================================================================
// Unit Tests
// =============================================================================
