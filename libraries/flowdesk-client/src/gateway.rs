//! The seam between the user list controller and the remote directory.

use crate::client::DirectoryClient;
use crate::error::Result;
use async_trait::async_trait;
use flowdesk_core::{CreateUserData, User, UserChanges, UserId, UserPatch};

/// The five directory operations the controller depends on.
///
/// `DirectoryClient` talks HTTP; tests substitute in-memory fakes.
#[async_trait]
pub trait UserGateway: Send + Sync {
    /// All users, in directory order
    async fn list(&self) -> Result<Vec<User>>;

    /// One user; `ClientError::NotFound` on 404
    async fn get(&self, id: UserId) -> Result<User>;

    /// Create a user; the returned id is synthetic
    async fn create(&self, data: &CreateUserData) -> Result<User>;

    /// Update some fields; returns the directory's echo
    async fn update(&self, id: UserId, patch: &UserPatch) -> Result<UserChanges>;

    /// Delete a user
    async fn delete(&self, id: UserId) -> Result<()>;
}

#[async_trait]
impl UserGateway for DirectoryClient {
    async fn list(&self) -> Result<Vec<User>> {
        self.users().list().await
    }

    async fn get(&self, id: UserId) -> Result<User> {
        self.users().get(id).await
    }

    async fn create(&self, data: &CreateUserData) -> Result<User> {
        self.users().create(data).await
    }

    async fn update(&self, id: UserId, patch: &UserPatch) -> Result<UserChanges> {
        self.users().update(id, patch).await
    }

    async fn delete(&self, id: UserId) -> Result<()> {
        self.users().delete(id).await
    }
}
