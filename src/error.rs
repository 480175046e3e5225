//! Error types for Studyhall
//!
//! This module defines all error types used throughout the application,
//! using `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Main error type for Studyhall operations
///
/// This enum encompasses all possible errors that can occur during
/// configuration loading, backend dispatch, document ingestion, and
/// speech-capture management.
#[derive(Error, Debug)]
pub enum StudyhallError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Backend-related errors (unreachable endpoint, non-success status,
    /// unparseable response body)
    #[error("Backend error: {0}")]
    Backend(String),

    /// The conversion service answered at the transport level but reported
    /// that it could not process the document
    #[error("Document processing failed: {0}")]
    DocumentRejected(String),

    /// Speech-capture errors (capability unavailable, double acquire)
    #[error("Capture error: {0}")]
    Capture(String),

    /// Session state errors (poisoned state lock)
    #[error("Session error: {0}")]
    Session(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// HTTP request errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Result type alias for Studyhall operations
///
/// This is a convenience alias that uses `anyhow::Error` as the error type,
/// allowing for rich error context and easy error propagation.
pub type Result<T> = anyhow::Result<T>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let error = StudyhallError::Config("invalid format".to_string());
        assert_eq!(error.to_string(), "Configuration error: invalid format");
    }

    #[test]
    fn test_backend_error_display() {
        let error = StudyhallError::Backend("endpoint timeout".to_string());
        assert_eq!(error.to_string(), "Backend error: endpoint timeout");
    }

    #[test]
    fn test_document_rejected_display() {
        let error = StudyhallError::DocumentRejected("unsupported format".to_string());
        assert_eq!(
            error.to_string(),
            "Document processing failed: unsupported format"
        );
    }

    #[test]
    fn test_capture_error_display() {
        let error = StudyhallError::Capture("capture is already active".to_string());
        assert_eq!(error.to_string(), "Capture error: capture is already active");
    }

    #[test]
    fn test_session_error_display() {
        let error = StudyhallError::Session("state lock is poisoned".to_string());
        assert_eq!(error.to_string(), "Session error: state lock is poisoned");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error: StudyhallError = io_error.into();
        assert!(matches!(error, StudyhallError::Io(_)));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_str = "{invalid json}";
        let json_error = serde_json::from_str::<serde_json::Value>(json_str).unwrap_err();
        let error: StudyhallError = json_error.into();
        assert!(matches!(error, StudyhallError::Serialization(_)));
    }

    #[test]
    fn test_yaml_error_conversion() {
        let yaml_str = "invalid: : yaml";
        let yaml_error = serde_yaml::from_str::<serde_yaml::Value>(yaml_str).unwrap_err();
        let error: StudyhallError = yaml_error.into();
        assert!(matches!(error, StudyhallError::Yaml(_)));
    }

    #[test]
    fn test_empty_inner_messages() {
        let error = StudyhallError::Backend(String::new());
        assert_eq!(error.to_string(), "Backend error: ");

        let error = StudyhallError::DocumentRejected(String::new());
        assert_eq!(error.to_string(), "Document processing failed: ");
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<StudyhallError>();
    }
}
