//! Transient user-facing notifications emitted after each operation.

use std::fmt;

const TRY_AGAIN: &str = "Something went wrong. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

/// A short message naming the action and its outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub title: String,
    pub description: String,
}

impl Notice {
    fn success(title: &str, description: String) -> Self {
        Self {
            level: NoticeLevel::Success,
            title: title.to_string(),
            description,
        }
    }

    fn error(title: &str, description: &str) -> Self {
        Self {
            level: NoticeLevel::Error,
            title: title.to_string(),
            description: description.to_string(),
        }
    }

    pub fn user_created(name: &str) -> Self {
        Self::success("User created", format!("{} has been added successfully.", name))
    }

    pub fn user_updated(name: &str) -> Self {
        Self::success("User updated", format!("{} has been updated successfully.", name))
    }

    pub fn user_deleted() -> Self {
        Self::success("User deleted", "User has been removed successfully.".to_string())
    }

    pub fn create_failed() -> Self {
        Self::error("Error creating user", TRY_AGAIN)
    }

    pub fn update_failed() -> Self {
        Self::error("Error updating user", TRY_AGAIN)
    }

    pub fn delete_failed() -> Self {
        Self::error("Error deleting user", TRY_AGAIN)
    }

    pub fn load_failed() -> Self {
        Self::error(
            "Failed to load users",
            "There was an error loading the user data. Please try again.",
        )
    }

    pub fn is_error(&self) -> bool {
        self.level == NoticeLevel::Error
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.title, self.description)
    }
}
