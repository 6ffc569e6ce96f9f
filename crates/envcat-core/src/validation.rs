//! # Validation Rules
//!
//! Input validation for catalog entries, applied before entries reach the
//! store. Kept separate from the types so the rules are testable in
//! isolation.

use crate::error::ValidationError;

/// Validates an environment-type name derived from a source directory.
///
/// ## Rules
/// - must be non-empty (the store's partition key cannot be blank)
/// - must not contain interior NUL bytes (rejected by most store transports)
pub fn validate_entry_name(name: &str) -> Result<(), ValidationError> {
    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.contains('\0') {
        return Err(ValidationError::InvalidFormat {
            field: "name".to_string(),
            reason: "contains NUL byte".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_regular_names() {
        assert!(validate_entry_name("small").is_ok());
        assert!(validate_entry_name("PetStack").is_ok());
        assert!(validate_entry_name("env-type.v2").is_ok());
    }

    #[test]
    fn test_rejects_empty_name() {
        let err = validate_entry_name("").unwrap_err();
        assert_eq!(err.to_string(), "name is required");
    }

    #[test]
    fn test_rejects_nul_byte() {
        assert!(validate_entry_name("bad\0name").is_err());
    }
}
