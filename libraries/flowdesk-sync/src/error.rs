use flowdesk_client::ClientError;
use flowdesk_core::{UserId, ValidationErrors};
use std::sync::Arc;
use thiserror::Error;

/// Errors surfaced by the user list controller, tagged by operation.
///
/// Gateway failures are kept as the source so callers can log them, but the
/// controller itself never branches on their kind.
#[derive(Error, Debug, Clone)]
pub enum SyncError {
    #[error("Failed to load users: {0}")]
    LoadFailed(#[source] Arc<ClientError>),

    #[error("Failed to create user: {0}")]
    CreateFailed(#[source] Arc<ClientError>),

    #[error("Failed to update user: {0}")]
    UpdateFailed(#[source] Arc<ClientError>),

    #[error("Failed to delete user: {0}")]
    DeleteFailed(#[source] Arc<ClientError>),

    #[error("User not found: {0}")]
    NotFound(UserId),

    #[error("User list fetch ended without a result")]
    FetchInterrupted,

    #[error(transparent)]
    Invalid(#[from] ValidationErrors),
}

impl SyncError {
    /// The gateway error behind a failed operation, if any.
    pub fn client_error(&self) -> Option<&ClientError> {
        match self {
            Self::LoadFailed(e)
            | Self::CreateFailed(e)
            | Self::UpdateFailed(e)
            | Self::DeleteFailed(e) => Some(e.as_ref()),
            Self::NotFound(_) | Self::Invalid(_) | Self::FetchInterrupted => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, SyncError>;
