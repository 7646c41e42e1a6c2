//! Error types shared across the client
//!
//! Every failure here is caught at the call site and turned into a
//! notification or an inline message; none of them end the session.

use thiserror::Error;

/// Failure of the transport itself (nothing usable came back).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("{0}")]
    Transport(String),

    #[error("Invalid server URL: {0}")]
    InvalidUrl(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_builder() {
            ApiError::InvalidUrl(err.to_string())
        } else {
            ApiError::Transport(err.to_string())
        }
    }
}

/// Why a login attempt did not produce a session.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SessionError {
    /// Rejected locally before contacting the backend.
    #[error("Username and password are required.")]
    Validation,

    /// A login is already waiting on the backend; the new one was dropped.
    #[error("A sign-in is already in progress.")]
    InFlight,

    /// The backend answered, but not with a session.
    #[error("{0}")]
    Rejected(String),

    #[error("Login failed: {0}")]
    Transport(#[from] ApiError),
}

/// A result card whose payload can no longer be turned back into an item.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PayloadError {
    #[error("Could not read item: {0}")]
    Malformed(String),

    #[error("Could not read item: expected an object, got {0}")]
    NotAnObject(&'static str),
}

/// The config file exists but could not be used.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}
