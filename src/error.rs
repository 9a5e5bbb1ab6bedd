//! Custom error types for ledgerboard
//!
//! This module defines the error hierarchy for the client core using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for ledgerboard operations
#[derive(Error, Debug)]
pub enum BoardError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// HTTP transport errors talking to the dashboard backend
    #[error("HTTP error: {0}")]
    Http(String),

    /// Backend returned a non-success status
    #[error("Backend responded {status} for {path}")]
    BackendStatus { status: u16, path: String },

    /// No authenticated user available for a scoped request
    #[error("No authenticated user: {0}")]
    Unauthorized(String),

    /// Validation errors for data models
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// CSV import errors
    #[error("Import error: {0}")]
    Import(String),
}

impl BoardError {
    /// Create a "not found" error for transactions
    pub fn transaction_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Transaction",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for reports
    pub fn report_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Report",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this error came from the network or the backend
    pub fn is_remote(&self) -> bool {
        matches!(self, Self::Http(_) | Self::BackendStatus { .. })
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for BoardError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for BoardError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<reqwest::Error> for BoardError {
    fn from(err: reqwest::Error) -> Self {
        Self::Http(err.to_string())
    }
}

impl From<csv::Error> for BoardError {
    fn from(err: csv::Error) -> Self {
        Self::Import(err.to_string())
    }
}

/// Result type alias for ledgerboard operations
pub type BoardResult<T> = Result<T, BoardError>;
