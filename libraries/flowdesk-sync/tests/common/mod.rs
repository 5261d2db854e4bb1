//! Common test utilities and fixtures
#![allow(dead_code)]

use async_trait::async_trait;
use flowdesk_client::{ClientError, UserGateway};
use flowdesk_core::{CreateUserData, User, UserChanges, UserId, UserPatch};
use flowdesk_sync::{UserCache, UserListController};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicI64, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, Once};
use std::time::Duration;
use tokio::sync::RwLock;

static INIT: Once = Once::new();

/// Initialize logging once per test binary
pub fn init_tracing() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_max_level(tracing::Level::DEBUG)
            .try_init();
    });
}

/// In-memory stand-in for the remote directory.
///
/// Like the real demo directory it never persists writes: `list` always
/// returns the seeded users.
#[derive(Default)]
pub struct FakeDirectory {
    users: Mutex<Vec<User>>,
    next_id: AtomicI64,
    pub list_calls: AtomicUsize,
    pub mutation_calls: AtomicUsize,
    pub fail_list: AtomicBool,
    pub fail_mutations: AtomicBool,
    create_delays: Mutex<HashMap<String, Duration>>,
    list_delay: Mutex<Option<Duration>>,
}

impl FakeDirectory {
    pub fn with_users(users: Vec<User>) -> Self {
        Self {
            users: Mutex::new(users),
            next_id: AtomicI64::new(1_700_000_000_000),
            ..Self::default()
        }
    }

    pub fn set_users(&self, users: Vec<User>) {
        *self.users.lock().unwrap() = users;
    }

    /// Make `create` for `name` take `delay` before answering
    pub fn delay_create(&self, name: &str, delay: Duration) {
        self.create_delays
            .lock()
            .unwrap()
            .insert(name.to_string(), delay);
    }

    pub fn delay_list(&self, delay: Duration) {
        *self.list_delay.lock().unwrap() = Some(delay);
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    fn unavailable() -> ClientError {
        ClientError::Status {
            status: 503,
            message: "Service Unavailable".to_string(),
        }
    }

    fn check_mutation(&self) -> flowdesk_client::Result<()> {
        self.mutation_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_mutations.load(Ordering::SeqCst) {
            Err(Self::unavailable())
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl UserGateway for FakeDirectory {
    async fn list(&self) -> flowdesk_client::Result<Vec<User>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        let delay = *self.list_delay.lock().unwrap();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        if self.fail_list.load(Ordering::SeqCst) {
            return Err(Self::unavailable());
        }
        Ok(self.users.lock().unwrap().clone())
    }

    async fn get(&self, id: UserId) -> flowdesk_client::Result<User> {
        self.users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.id == id)
            .cloned()
            .ok_or(ClientError::NotFound(id))
    }

    async fn create(&self, data: &CreateUserData) -> flowdesk_client::Result<User> {
        let delay = self.create_delays.lock().unwrap().get(&data.name).copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        self.check_mutation()?;
        let id = UserId::new(self.next_id.fetch_add(1, Ordering::SeqCst));
        Ok(User::from_submission(id, data.clone()))
    }

    async fn update(&self, _id: UserId, patch: &UserPatch) -> flowdesk_client::Result<UserChanges> {
        self.check_mutation()?;
        Ok(UserChanges::from(patch))
    }

    async fn delete(&self, _id: UserId) -> flowdesk_client::Result<()> {
        self.check_mutation()
    }
}

/// Fresh controller + cache over `gateway`
pub fn controller<G: UserGateway + 'static>(gateway: Arc<G>) -> UserListController<G> {
    init_tracing();
    UserListController::new(gateway, Arc::new(RwLock::new(UserCache::new())))
}

pub mod fixtures {
    use super::*;

    pub fn form(name: &str) -> CreateUserData {
        let handle = name.to_lowercase();
        CreateUserData {
            name: name.to_string(),
            username: format!("{handle}_user"),
            email: format!("{handle}@example.com"),
            phone: "555-0100".to_string(),
            website: format!("https://{handle}.dev"),
        }
    }

    pub fn user(id: i64, name: &str) -> User {
        let mut user = User::from_submission(UserId::new(id), form(name));
        user.address.city = "Gwenborough".to_string();
        user.company.name = "Romaguera-Crona".to_string();
        user
    }

    pub fn ann() -> User {
        user(1, "Ann")
    }

    pub fn directory() -> Vec<User> {
        vec![user(1, "Ann"), user(2, "Ervin"), user(3, "Clementine")]
    }
}
