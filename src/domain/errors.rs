//! Domain error types
//!
//! This module defines the error hierarchy for Cohort. All errors are
//! domain-specific and don't expose third-party driver types.

use thiserror::Error;

/// Main Cohort error type
///
/// This is the primary error type used throughout the application.
/// It wraps specific error types and provides context for error handling.
#[derive(Debug, Error)]
pub enum CohortError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A date string did not parse as `YYYY-MM-DD`
    ///
    /// Carries the underlying parser error text so callers can report what
    /// was wrong with the input.
    #[error("Invalid date format: {0}")]
    InvalidDateFormat(String),

    /// Document store errors
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Email export errors
    #[error("Export error: {0}")]
    Export(String),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

/// Document store specific errors
///
/// Errors that occur when interacting with the applicant store.
/// These errors don't expose the underlying MongoDB driver types.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Failed to connect to the store
    #[error("Failed to connect to store: {0}")]
    ConnectionFailed(String),

    /// A find query failed
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// A point update failed
    #[error("Update failed: {0}")]
    UpdateFailed(String),

    /// A stored document could not be mapped to the domain model
    #[error("Invalid document: {0}")]
    InvalidDocument(String),
}

// Conversion from std::io::Error
impl From<std::io::Error> for CohortError {
    fn from(err: std::io::Error) -> Self {
        CohortError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for CohortError {
    fn from(err: serde_json::Error) -> Self {
        CohortError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for CohortError {
    fn from(err: toml::de::Error) -> Self {
        CohortError::Configuration(format!("TOML parse error: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cohort_error_display() {
        let err = CohortError::Configuration("Invalid config".to_string());
        assert_eq!(err.to_string(), "Configuration error: Invalid config");
    }

    #[test]
    fn test_invalid_date_format_carries_parser_text() {
        let err = CohortError::InvalidDateFormat("input contains invalid characters".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid date format: input contains invalid characters"
        );
    }

    #[test]
    fn test_store_error_conversion() {
        let store_err = StoreError::ConnectionFailed("connection refused".to_string());
        let cohort_err: CohortError = store_err.into();
        assert!(matches!(cohort_err, CohortError::Store(_)));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let cohort_err: CohortError = io_err.into();
        assert!(matches!(cohort_err, CohortError::Io(_)));
    }

    #[test]
    fn test_toml_error_conversion() {
        let toml_err = toml::from_str::<toml::Value>("invalid = toml = syntax").unwrap_err();
        let cohort_err: CohortError = toml_err.into();
        assert!(matches!(cohort_err, CohortError::Configuration(_)));
        assert!(cohort_err.to_string().contains("TOML parse error"));
    }

    #[test]
    fn test_cohort_error_implements_std_error() {
        let err = CohortError::Validation("Test error".to_string());
        let _: &dyn std::error::Error = &err;
    }

    #[test]
    fn test_store_error_implements_std_error() {
        let err = StoreError::QueryFailed("Test error".to_string());
        let _: &dyn std::error::Error = &err;
    }
}
