//! Domain error types
//!
//! This module defines the error hierarchy for Harvest. All errors are
//! domain-specific and don't expose third-party types.

use thiserror::Error;

/// Main Harvest error type
///
/// This is the primary error type used throughout the application.
/// Anything surfaced through this type aborts the current command;
/// per-document export failures are captured in the export summary
/// instead of propagating here.
#[derive(Debug, Error)]
pub enum HarvestError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Credential file does not exist at the configured path
    #[error("Credential file not found: {0}")]
    CredentialNotFound(String),

    /// Firestore-related errors
    #[error("Firestore error: {0}")]
    Firestore(#[from] FirestoreError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),
}

/// Firestore-specific errors
///
/// Errors that occur when interacting with the Firestore REST API.
/// These errors don't expose the underlying HTTP client types.
#[derive(Debug, Error)]
pub enum FirestoreError {
    /// Failed to connect to Firestore
    #[error("Failed to connect to Firestore: {0}")]
    ConnectionFailed(String),

    /// Authentication failed
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    /// Credential file could not be parsed
    #[error("Invalid credential file: {0}")]
    InvalidCredentials(String),

    /// Invalid response from the server
    #[error("Invalid response from server: {0}")]
    InvalidResponse(String),

    /// Collection not found
    #[error("Collection not found: {0}")]
    CollectionNotFound(String),

    /// Server error (5xx)
    #[error("Server error: {status} - {message}")]
    ServerError { status: u16, message: String },

    /// Client error (4xx)
    #[error("Client error: {status} - {message}")]
    ClientError { status: u16, message: String },

    /// Timeout
    #[error("Request timeout: {0}")]
    Timeout(String),
}

// Conversion from std::io::Error
impl From<std::io::Error> for HarvestError {
    fn from(err: std::io::Error) -> Self {
        HarvestError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for HarvestError {
    fn from(err: serde_json::Error) -> Self {
        HarvestError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for HarvestError {
    fn from(err: toml::de::Error) -> Self {
        HarvestError::Configuration(format!("TOML parse error: {err}"))
    }
}
