//! Error types for the Kirax application.

use serde::Serialize;
use thiserror::Error;

/// A shared error type for the entire Kirax application.
///
/// This provides typed, structured error variants with automatic conversion
/// from common error types via the `From` trait. Remote-call failures are
/// always local to a single turn; nothing here is fatal to the process.
#[derive(Error, Debug, Clone, Serialize)]
pub enum KiraxError {
    /// Entity not found error with type information
    #[error("Entity not found: {entity_type} '{id}'")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// The chat-completion endpoint answered with a non-200 status
    #[error("Remote call failed with status {status}: {message}")]
    RemoteCall { status: u16, message: String },

    /// Connection failure or malformed response body
    #[error("Service temporarily unavailable: {0}")]
    Transport(String),

    /// The uploaded bytes do not form a parseable PDF document
    #[error("Malformed document: {0}")]
    MalformedDocument(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: String, // "JSON", etc.
        message: String,
    },

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl KiraxError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates a NotFound error
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
        }
    }

    /// Creates a RemoteCall error
    pub fn remote_call(status: u16, message: impl Into<String>) -> Self {
        Self::RemoteCall {
            status,
            message: message.into(),
        }
    }

    /// Creates a Transport error
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport(message.into())
    }

    /// Creates a MalformedDocument error
    pub fn malformed_document(message: impl Into<String>) -> Self {
        Self::MalformedDocument(message.into())
    }

    /// Creates an IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    /// Check if this is a NotFound error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a RemoteCall error
    pub fn is_remote_call(&self) -> bool {
        matches!(self, Self::RemoteCall { .. })
    }

    /// Check if this is a Transport error
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    /// Check if this is a MalformedDocument error
    pub fn is_malformed_document(&self) -> bool {
        matches!(self, Self::MalformedDocument(_))
    }

    /// Returns the HTTP status code for RemoteCall errors, `None` otherwise.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::RemoteCall { status, .. } => Some(*status),
            _ => None,
        }
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for KiraxError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for KiraxError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, KiraxError>`.
pub type Result<T> = std::result::Result<T, KiraxError>;
