//! Error types for HubSpot tasks
//!
//! This module defines the error hierarchy for every task in the crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.
//!
//! Faults fall into two groups. Validation faults (missing fields, malformed
//! JSON, bad filter queries) always surface to the caller. Remote faults
//! (non-success HTTP status, failed existence probes, failed associations)
//! go through the task's failure options and may be turned into a
//! structured failure result instead.

use reqwest::StatusCode;
use thiserror::Error;

/// The main error type for HubSpot tasks
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Validation Errors
    // ============================================================================
    #[error("{field} is required")]
    MissingField { field: String },

    #[error("Contact ID should be a numeric value: '{id}'.")]
    InvalidContactId { id: String },

    #[error("Invalid email format: {email}")]
    InvalidEmail { email: String },

    #[error("Invalid JSON format in {field}")]
    InvalidJson {
        field: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid filter query: {message}")]
    InvalidFilter { message: String },

    #[error("Invalid base URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // Remote Errors
    // ============================================================================
    #[error("HubSpot API error: {status} - {detail}")]
    Api { status: StatusCode, detail: String },

    #[error("Failed to associate deal with contact: {status} - {detail}")]
    Association { status: StatusCode, detail: String },

    #[error("Contact with ID {id} does not exist")]
    ContactNotFound { id: String },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Operation was cancelled")]
    Cancelled,

    /// Fault raised by the failure handler when the task is configured to throw.
    #[error("{message}")]
    Failure {
        message: String,
        #[source]
        source: Box<Error>,
    },

    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a missing field error
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a filter query error
    pub fn invalid_filter(message: impl Into<String>) -> Self {
        Self::InvalidFilter {
            message: message.into(),
        }
    }

    /// Create an invalid JSON error for a named input field
    pub fn invalid_json(field: impl Into<String>, source: serde_json::Error) -> Self {
        Self::InvalidJson {
            field: field.into(),
            source,
        }
    }

    /// Create a HubSpot API error
    pub fn api(status: StatusCode, detail: impl Into<String>) -> Self {
        Self::Api {
            status,
            detail: detail.into(),
        }
    }

    /// Status code of a remote fault, if any
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::Api { status, .. } | Error::Association { status, .. } => Some(*status),
            Error::Http(e) => e.status(),
            Error::Failure { source, .. } => source.status(),
            _ => None,
        }
    }

    /// Check if this error is a caller-contract violation.
    ///
    /// Validation faults are raised regardless of `throw_error_on_failure`.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Error::MissingField { .. }
                | Error::InvalidContactId { .. }
                | Error::InvalidEmail { .. }
                | Error::InvalidJson { .. }
                | Error::InvalidFilter { .. }
                | Error::InvalidUrl(_)
        )
    }

    /// Check if this error came from a cancelled operation
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Error::Cancelled)
    }
}

/// Result type alias for HubSpot tasks
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context with a closure (lazy evaluation)
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", f(), inner))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::missing_field("API Key");
        assert_eq!(err.to_string(), "API Key is required");

        let err = Error::api(StatusCode::NOT_FOUND, "Object not found");
        assert_eq!(
            err.to_string(),
            "HubSpot API error: 404 Not Found - Object not found"
        );

        let err = Error::InvalidContactId {
            id: "abc".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Contact ID should be a numeric value: 'abc'."
        );
    }

    #[test]
    fn test_invalid_json_keeps_source() {
        let source = serde_json::from_str::<serde_json::Value>("{oops").unwrap_err();
        let err = Error::invalid_json("ContactData", source);
        assert_eq!(err.to_string(), "Invalid JSON format in ContactData");
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_is_validation() {
        assert!(Error::missing_field("ContactId").is_validation());
        assert!(Error::invalid_filter("bad").is_validation());
        assert!(Error::InvalidEmail {
            email: "x".to_string()
        }
        .is_validation());

        assert!(!Error::api(StatusCode::BAD_REQUEST, "").is_validation());
        assert!(!Error::ContactNotFound {
            id: "1".to_string()
        }
        .is_validation());
        assert!(!Error::Cancelled.is_validation());
    }

    #[test]
    fn test_status() {
        assert_eq!(
            Error::api(StatusCode::CONFLICT, "dup").status(),
            Some(StatusCode::CONFLICT)
        );
        let wrapped = Error::Failure {
            message: "ctx".to_string(),
            source: Box::new(Error::api(StatusCode::BAD_REQUEST, "")),
        };
        assert_eq!(wrapped.status(), Some(StatusCode::BAD_REQUEST));
        assert_eq!(Error::Cancelled.status(), None);
    }

    #[test]
    fn test_result_context() {
        let result: Result<()> = Err(Error::config("inner"));
        let with_context = result.with_context(|| "outer".to_string());
        assert!(with_context
            .unwrap_err()
            .to_string()
            .contains("outer: Configuration error: inner"));
    }
}
