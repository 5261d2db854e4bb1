//! Error types for the directory client.

use flowdesk_core::UserId;
use thiserror::Error;

/// Errors that can occur when talking to the remote user directory.
#[derive(Error, Debug)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Directory is offline or unreachable
    #[error("Directory unreachable: {0}")]
    Unreachable(String),

    /// Directory answered with a non-2xx status
    #[error("Directory error ({status}): {message}")]
    Status { status: u16, message: String },

    /// Single-resource lookup answered 404
    #[error("User not found: {0}")]
    NotFound(UserId),

    /// Failed to parse directory response
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// Invalid directory URL
    #[error("Invalid directory URL: {0}")]
    InvalidUrl(String),
}

impl ClientError {
    /// Transport failures and non-2xx answers.
    pub fn is_network(&self) -> bool {
        matches!(
            self,
            Self::Request(_) | Self::Unreachable(_) | Self::Status { .. }
        )
    }

    /// The directory reported the user as missing.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    pub(crate) fn transport(err: reqwest::Error) -> Self {
        if err.is_connect() || err.is_timeout() {
            Self::Unreachable(err.to_string())
        } else {
            Self::Request(err)
        }
    }
}

/// Result type for directory client operations.
pub type Result<T> = std::result::Result<T, ClientError>;
