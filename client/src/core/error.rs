//! # Common Error Types
//!
//! Consolidated error handling for the MoodEcho client.
//!
//! This module provides a centralized error type [`AppError`] that covers every
//! failure the client can surface.
//!
//! ## Error Categories
//!
//! - **Auth**: Login rejected by the API (bad credentials)
//! - **Conflict**: Registration rejected (username taken, or any other 4xx)
//! - **Validation**: Local input checks that fail before any network call
//! - **Network**: Transport failures (connection refused, DNS, body decode)
//! - **Server**: Non-success status on any other call, including an expired token
//! - **State**: Invalid client state (e.g. confirming a delete that was never requested)
//! - **Storage**: Reading or writing the persisted session file
//!
//! ## Usage Pattern
//!
//! ```rust
//! use moodecho::core::error::AppError;
//!
//! fn validate_journal(text: &str) -> Result<&str, AppError> {
//!     if text.trim().is_empty() {
//!         return Err(AppError::Validation("Please write something!".to_string()));
//!     }
//!     Ok(text)
//! }
//! ```
//!
//! Screen controllers never show these messages verbatim. Each screen maps any
//! remote failure to one fixed message and logs the underlying error.

use thiserror::Error;

/// Application-wide error type.
///
/// # Example
///
/// ```rust
/// use moodecho::core::error::AppError;
///
/// let err = AppError::Server { status: 401, message: "token expired".to_string() };
/// assert_eq!(err.to_string(), "Server error (401): token expired");
/// assert!(err.is_remote());
/// ```
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AppError {
    /// Login rejected by the API.
    #[error("Authentication failed: {0}")]
    Auth(String),

    /// Registration rejected by the API.
    ///
    /// The API does not distinguish a taken username from other bad requests,
    /// so every 4xx on register lands here.
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Input validation error, raised before any network call.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Transport failure or undecodable response body.
    #[error("Network error: {0}")]
    Network(String),

    /// Non-success HTTP status on a call other than login/register.
    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },

    /// Client state does not allow the requested action.
    #[error("State error: {0}")]
    State(String),

    /// Session file could not be read or written.
    #[error("Storage error: {0}")]
    Storage(String),
}

impl AppError {
    /// True for failures that came back from (or on the way to) the remote service.
    pub fn is_remote(&self) -> bool {
        matches!(
            self,
            AppError::Auth(_) | AppError::Conflict(_) | AppError::Network(_) | AppError::Server { .. }
        )
    }
}

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Network(err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Storage(err.to_string())
    }
}
