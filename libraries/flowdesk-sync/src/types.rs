use crate::error::{Result, SyncError};
use flowdesk_core::User;

/// What a view needs to render the user list.
#[derive(Debug, Clone, Default)]
pub struct QueryState {
    /// Last known list; `None` until the first successful fetch
    pub data: Option<Vec<User>>,
    /// First fetch in progress, nothing to show yet
    pub is_loading: bool,
    /// A refetch is running behind data that is already shown
    pub is_fetching: bool,
    /// Set only when there is no data and the fetch failed
    pub error: Option<SyncError>,
}

impl QueryState {
    pub(crate) fn ready(users: Vec<User>, is_fetching: bool) -> Self {
        Self {
            data: Some(users),
            is_loading: false,
            is_fetching,
            error: None,
        }
    }

    pub(crate) fn failed(error: SyncError) -> Self {
        Self {
            error: Some(error),
            ..Self::default()
        }
    }

    /// The list, or the load error. No data and no error yields an empty list.
    pub fn into_result(self) -> Result<Vec<User>> {
        match (self.data, self.error) {
            (Some(users), _) => Ok(users),
            (None, Some(error)) => Err(error),
            (None, None) => Ok(Vec::new()),
        }
    }
}
