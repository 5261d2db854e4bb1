//! User CRUD operations against the remote directory.

use crate::error::{ClientError, Result};
use crate::ids::SyntheticIds;
use flowdesk_core::{CreateUserData, User, UserChanges, UserId, UserPatch};
use reqwest::{Client, Response, StatusCode};
use tracing::debug;

/// Users client for the remote directory.
///
/// One HTTP round trip per call. No retries, no cancellation.
pub struct UsersClient<'a> {
    http: &'a Client,
    base_url: &'a str,
    ids: &'a SyntheticIds,
}

impl<'a> UsersClient<'a> {
    pub(crate) fn new(http: &'a Client, base_url: &'a str, ids: &'a SyntheticIds) -> Self {
        Self {
            http,
            base_url,
            ids,
        }
    }

    /// Get every user, in directory order.
    pub async fn list(&self) -> Result<Vec<User>> {
        let url = format!("{}/users", self.base_url);
        debug!(url = %url, "Fetching users");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(ClientError::transport)?;

        let status = response.status();

        if status.is_success() {
            let users: Vec<User> = response.json().await.map_err(|e| {
                ClientError::ParseError(format!("Failed to parse user list: {}", e))
            })?;

            debug!(users = users.len(), "Fetched users");
            Ok(users)
        } else {
            Err(status_error(response).await)
        }
    }

    /// Get a single user by ID.
    pub async fn get(&self, id: UserId) -> Result<User> {
        let url = format!("{}/users/{}", self.base_url, id);
        debug!(url = %url, user_id = %id, "Fetching user");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(ClientError::transport)?;

        let status = response.status();

        if status.is_success() {
            response.json().await.map_err(|e| {
                ClientError::ParseError(format!("Failed to parse user response: {}", e))
            })
        } else if status == StatusCode::NOT_FOUND {
            Err(ClientError::NotFound(id))
        } else {
            Err(status_error(response).await)
        }
    }

    /// Create a user.
    ///
    /// The directory does not persist writes, so the id it returns is
    /// discarded in favour of a synthetic, timestamp-derived one. Fields the
    /// directory leaves out of its echo fall back to the submitted values.
    pub async fn create(&self, data: &CreateUserData) -> Result<User> {
        let url = format!("{}/users", self.base_url);
        debug!(url = %url, username = %data.username, "Creating user");

        let response = self
            .http
            .post(&url)
            .json(data)
            .send()
            .await
            .map_err(ClientError::transport)?;

        let status = response.status();

        if status.is_success() {
            let echoed: UserChanges = response.json().await.map_err(|e| {
                ClientError::ParseError(format!("Failed to parse created user: {}", e))
            })?;

            let mut user = User::from_submission(self.ids.next(), data.clone());
            user.apply(&echoed);

            debug!(user_id = %user.id, "User created");
            Ok(user)
        } else {
            Err(status_error(response).await)
        }
    }

    /// Update some fields of a user.
    ///
    /// Returns whatever the directory echoes back; that may include fields
    /// it never actually changed.
    pub async fn update(&self, id: UserId, patch: &UserPatch) -> Result<UserChanges> {
        let url = format!("{}/users/{}", self.base_url, id);
        debug!(url = %url, user_id = %id, "Updating user");

        let response = self
            .http
            .put(&url)
            .json(patch)
            .send()
            .await
            .map_err(ClientError::transport)?;

        let status = response.status();

        if status.is_success() {
            let changes: UserChanges = response.json().await.map_err(|e| {
                ClientError::ParseError(format!("Failed to parse updated user: {}", e))
            })?;

            debug!(user_id = %id, "User updated");
            Ok(changes)
        } else if status == StatusCode::NOT_FOUND {
            Err(ClientError::NotFound(id))
        } else {
            Err(status_error(response).await)
        }
    }

    /// Delete a user.
    ///
    /// Success only means the directory accepted the request, not that the
    /// record is gone for good.
    pub async fn delete(&self, id: UserId) -> Result<()> {
        let url = format!("{}/users/{}", self.base_url, id);
        debug!(url = %url, user_id = %id, "Deleting user");

        let response = self
            .http
            .delete(&url)
            .send()
            .await
            .map_err(ClientError::transport)?;

        if response.status().is_success() {
            debug!(user_id = %id, "User deleted");
            Ok(())
        } else {
            Err(status_error(response).await)
        }
    }
}

async fn status_error(response: Response) -> ClientError {
    let status = response.status().as_u16();
    let message = response.text().await.unwrap_or_default();
    ClientError::Status { status, message }
}
