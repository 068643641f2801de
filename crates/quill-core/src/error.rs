//! # Error Types
//!
//! Domain-specific error types for quill-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                          Error Types                                │
//! │                                                                     │
//! │  quill-core errors (this file)                                     │
//! │  └── ValidationError  - Input validation failures                  │
//! │                                                                     │
//! │  quill-db errors (separate crate)                                  │
//! │  └── DbError          - Database operation failures                │
//! │                                                                     │
//! │  Flow: ValidationError → DbError → caller message                  │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field name, offending value)
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a user-facing message

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when caller input doesn't meet requirements.
/// Used for early validation before any write is attempted.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    MustBeNonNegative { field: String },

    /// Value does not parse as a number.
    #[error("{field} is not a number: '{value}'")]
    NotNumeric { field: String, value: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with ValidationError.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "email".to_string(),
        };
        assert_eq!(err.to_string(), "email is required");

        let err = ValidationError::NotNumeric {
            field: "price".to_string(),
            value: "abc".to_string(),
        };
        assert_eq!(err.to_string(), "price is not a number: 'abc'");
    }
}
