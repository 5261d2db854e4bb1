//! In-memory cache of the directory's user list.

use flowdesk_core::{User, UserChanges, UserId};
use std::time::{Duration, Instant};

/// Query key of the single cached list.
pub const USERS_QUERY_KEY: &str = "users";

/// A single slot holding the last known user list and when it was set.
///
/// Every change replaces the whole list, computed from the previous list plus
/// one delta. Nothing is persisted.
#[derive(Debug, Clone, Default)]
pub struct UserCache {
    users: Option<Vec<User>>,
    updated_at: Option<Instant>,
}

impl UserCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Key this slot is addressed by.
    pub fn key(&self) -> &'static str {
        USERS_QUERY_KEY
    }

    /// Current list, or `None` if the slot was never populated.
    pub fn read(&self) -> Option<&[User]> {
        self.users.as_deref()
    }

    /// Owned copy of the current list.
    pub fn snapshot(&self) -> Option<Vec<User>> {
        self.users.clone()
    }

    /// When the slot was last written or patched.
    pub fn updated_at(&self) -> Option<Instant> {
        self.updated_at
    }

    /// Replace the slot and its timestamp unconditionally.
    pub fn write(&mut self, users: Vec<User>) {
        self.write_at(users, Instant::now());
    }

    /// Replace the slot, recording `at` as its timestamp.
    pub fn write_at(&mut self, users: Vec<User>, at: Instant) {
        self.users = Some(users);
        self.updated_at = Some(at);
    }

    /// Prepend a newly created user. An absent slot becomes a list of one.
    ///
    /// Any entry already carrying the same id is dropped so ids stay unique.
    pub fn patch_insert(&mut self, user: User) {
        let mut users = self.users.take().unwrap_or_default();
        users.retain(|u| u.id != user.id);
        users.insert(0, user);
        self.write(users);
    }

    /// Shallow-merge `changes` into every entry with `id`.
    ///
    /// Other entries and the order are untouched. Returns false when nothing
    /// matched; an absent slot stays absent.
    pub fn patch_update(&mut self, id: UserId, changes: &UserChanges) -> bool {
        let Some(mut users) = self.users.take() else {
            return false;
        };

        let mut matched = false;
        for user in users.iter_mut().filter(|u| u.id == id) {
            user.apply(changes);
            matched = true;
        }

        self.write(users);
        matched
    }

    /// Remove the entry with `id`, keeping the order of the rest.
    ///
    /// Returns false when nothing matched; an absent slot stays absent.
    pub fn patch_delete(&mut self, id: UserId) -> bool {
        let Some(mut users) = self.users.take() else {
            return false;
        };

        let before = users.len();
        users.retain(|u| u.id != id);
        let removed = users.len() != before;

        self.write(users);
        removed
    }

    /// True when more than `ttl` has passed since the slot was set.
    ///
    /// Advisory only: a stale list is still served while it is refetched.
    /// An empty slot is always stale.
    pub fn is_stale(&self, now: Instant, ttl: Duration) -> bool {
        match self.updated_at {
            Some(at) => now.saturating_duration_since(at) > ttl,
            None => true,
        }
    }
}
