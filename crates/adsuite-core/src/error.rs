//! Core error types for the adsuite backend.
//!
//! This module provides [`ErpError`], the error enum shared by every adsuite
//! crate. It covers store lookups, integrity violations, validation,
//! configuration problems, and IO, and is designed to be propagated with `?`
//! from management commands all the way to the CLI entry point.

use std::collections::HashMap;
use std::fmt;

use thiserror::Error;

/// A validation failure for a business record.
///
/// Carries a message, a short machine-readable code (e.g. `"required"`,
/// `"invalid"`), and optional context parameters.
///
/// # Examples
///
/// ```
/// use adsuite_core::error::ValidationError;
///
/// let err = ValidationError::new("Code must not be empty.", "required");
/// assert_eq!(err.code, "required");
/// ```
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// The primary error message.
    pub message: String,
    /// A short code identifying the type of validation failure.
    pub code: String,
    /// Additional parameters providing context for the error message.
    pub params: HashMap<String, String>,
}

impl ValidationError {
    /// Creates a new `ValidationError` with a message and code.
    pub fn new(message: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: code.into(),
            params: HashMap::new(),
        }
    }

    /// Adds a parameter to this validation error.
    #[must_use]
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ValidationError {}

/// The primary error type for the adsuite backend.
///
/// Store lookup failures map to [`ErpError::DoesNotExist`]; a seed command
/// referencing an unknown record code propagates this variant uncaught to the
/// command runner, which aborts the run.
#[derive(Error, Debug)]
pub enum ErpError {
    // ── Store errors ─────────────────────────────────────────────────

    /// A lookup expected exactly one record but found none.
    #[error("Object does not exist: {0}")]
    DoesNotExist(String),

    /// A lookup expected exactly one record but found multiple.
    #[error("Multiple objects returned when one expected: {0}")]
    MultipleObjectsReturned(String),

    /// A generic storage error.
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// A uniqueness or referential-integrity constraint was violated.
    #[error("Integrity error: {0}")]
    IntegrityError(String),

    // ── Validation ───────────────────────────────────────────────────

    /// A record failed validation before being written.
    #[error("Validation error: {0}")]
    ValidationError(ValidationError),

    // ── Authorization ────────────────────────────────────────────────

    /// The principal lacks the permission required for an operation.
    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    // ── Configuration ────────────────────────────────────────────────

    /// A configuration value is missing or invalid.
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// The backend is improperly configured.
    #[error("Improperly configured: {0}")]
    ImproperlyConfigured(String),

    // ── Serialization ────────────────────────────────────────────────

    /// An error occurred during serialization or deserialization.
    #[error("Serialization error: {0}")]
    SerializationError(String),

    // ── IO ───────────────────────────────────────────────────────────

    /// An I/O error occurred.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl ErpError {
    /// Returns `true` if this error represents a failed lookup.
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::DoesNotExist(_))
    }
}

/// A convenience type alias for `Result<T, ErpError>`.
pub type ErpResult<T> = Result<T, ErpError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        let err = ValidationError::new("Code must not be empty.", "required");
        assert_eq!(err.to_string(), "Code must not be empty.");
    }

    #[test]
    fn test_validation_error_with_param() {
        let err = ValidationError::new("Too long.", "max_length").with_param("max", "64");
        assert_eq!(err.params.get("max").unwrap(), "64");
    }

    #[test]
    fn test_erp_error_display() {
        let err = ErpError::DoesNotExist("UOM with code 'UOM_X'".into());
        assert_eq!(err.to_string(), "Object does not exist: UOM with code 'UOM_X'");
    }

    #[test]
    fn test_is_not_found() {
        assert!(ErpError::DoesNotExist("x".into()).is_not_found());
        assert!(!ErpError::IntegrityError("x".into()).is_not_found());
        assert!(!ErpError::PermissionDenied("x".into()).is_not_found());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let erp_err: ErpError = io_err.into();
        assert!(erp_err.to_string().contains("file missing"));
    }

    #[test]
    fn test_validation_error_wrapped() {
        let err = ErpError::ValidationError(ValidationError::new("Bad value.", "invalid"));
        assert!(err.to_string().contains("Bad value."));
    }
}
