//! Shared error type across beatex crates.

use thiserror::Error;

/// Stable error codes (logged and surfaced in scrape failures).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Identity document is missing required fields.
    Identity,
    /// A Beat could not be polled.
    Fetch,
    /// Invalid configuration.
    Config,
    /// Internal error.
    Internal,
}

impl ErrorCode {
    /// String representation used in logs.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::Identity => "IDENTITY",
            ErrorCode::Fetch => "FETCH",
            ErrorCode::Config => "CONFIG",
            ErrorCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, BeatexError>;

/// Unified error type used by core and exporter.
#[derive(Debug, Error)]
pub enum BeatexError {
    #[error("{0}")]
    Identity(String),
    #[error("error reading from {source_addr}: {message}")]
    Fetch { source_addr: String, message: String },
    #[error("invalid config: {0}")]
    Config(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl BeatexError {
    /// Build a fetch error for the given source address.
    pub fn fetch(source_addr: impl Into<String>, message: impl Into<String>) -> Self {
        BeatexError::Fetch {
            source_addr: source_addr.into(),
            message: message.into(),
        }
    }

    /// Map the error to a stable code.
    pub fn code(&self) -> ErrorCode {
        match self {
            BeatexError::Identity(_) => ErrorCode::Identity,
            BeatexError::Fetch { .. } => ErrorCode::Fetch,
            BeatexError::Config(_) => ErrorCode::Config,
            BeatexError::Internal(_) => ErrorCode::Internal,
        }
    }
}
