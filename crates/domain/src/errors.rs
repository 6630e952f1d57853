//! Error types used throughout the client

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for MaxCDN operations
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum MaxCdnError {
    /// Network, DNS or TLS failure before a response was received.
    #[error("Transport error: {0}")]
    Transport(String),

    /// Caller supplied an invalid request; nothing was sent.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Response body was not a valid envelope.
    #[error("Decode error: {0}")]
    Decode(String),

    /// Envelope decoded but `data` did not match the requested type.
    #[error("Unexpected shape: {0}")]
    UnexpectedShape(String),

    /// Well-formed envelope carrying an application error.
    #[error("{kind}: {message}")]
    Api { kind: String, message: String },

    /// Non-2xx HTTP status without an application error object.
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl MaxCdnError {
    /// Application-level failure reported inside the response envelope.
    pub fn api(kind: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Api { kind: kind.into(), message: message.into() }
    }

    /// Whether the request never reached the remote API.
    pub fn is_pre_flight(&self) -> bool {
        matches!(self, Self::InvalidRequest(_) | Self::Config(_))
    }

    /// HTTP status carried by the error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Result type alias for MaxCDN operations
pub type Result<T> = std::result::Result<T, MaxCdnError>;
