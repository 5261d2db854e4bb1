//! Orchestrates fetch, search and mutations over the shared user cache.

use crate::cache::UserCache;
use crate::error::{Result, SyncError};
use crate::notice::Notice;
use crate::stats::DirectoryStats;
use crate::types::QueryState;
use flowdesk_client::{ClientError, UserGateway};
use flowdesk_core::{
    filter_users, validate_create, validate_patch, CreateUserData, User, UserChanges, UserId,
    UserPatch,
};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::{broadcast, watch, Mutex, RwLock};
use tracing::{debug, info, warn};

/// How long a fetched list counts as fresh.
pub const DEFAULT_STALE_AFTER: Duration = Duration::from_secs(5 * 60);

const NOTICE_CAPACITY: usize = 32;

/// `None` until the fetch it belongs to completes.
type FetchOutcome = Option<Result<Vec<User>>>;

#[derive(Default)]
struct FetchState {
    /// Outcome channel of the list fetch currently running
    current: Option<watch::Receiver<FetchOutcome>>,
    /// Set when a caller waits on the current fetch and wants its failure announced
    announce_failure: bool,
    last_error: Option<SyncError>,
}

impl FetchState {
    fn in_flight(&self) -> bool {
        self.current.is_some()
    }
}

/// Controller behind the users view.
///
/// The cache is only patched after the directory acknowledges a mutation;
/// nothing is applied speculatively, so a failure leaves it untouched.
/// Mutations are not queued: concurrent calls patch the cache in the order
/// they complete. Locks are never held across a gateway call.
pub struct UserListController<G> {
    gateway: Arc<G>,
    cache: Arc<RwLock<UserCache>>,
    fetch: Arc<Mutex<FetchState>>,
    stale_after: Duration,
    notices: broadcast::Sender<Notice>,
}

impl<G> Clone for UserListController<G> {
    fn clone(&self) -> Self {
        Self {
            gateway: Arc::clone(&self.gateway),
            cache: Arc::clone(&self.cache),
            fetch: Arc::clone(&self.fetch),
            stale_after: self.stale_after,
            notices: self.notices.clone(),
        }
    }
}

impl<G: UserGateway + 'static> UserListController<G> {
    /// Create a controller over an injected gateway and cache.
    pub fn new(gateway: Arc<G>, cache: Arc<RwLock<UserCache>>) -> Self {
        let (notices, _) = broadcast::channel(NOTICE_CAPACITY);
        Self {
            gateway,
            cache,
            fetch: Arc::new(Mutex::new(FetchState::default())),
            stale_after: DEFAULT_STALE_AFTER,
            notices,
        }
    }

    /// Override the freshness window.
    pub fn with_stale_after(mut self, stale_after: Duration) -> Self {
        self.stale_after = stale_after;
        self
    }

    /// The shared cache slot.
    pub fn cache(&self) -> Arc<RwLock<UserCache>> {
        Arc::clone(&self.cache)
    }

    /// Receive a [`Notice`] for every operation outcome from now on.
    pub fn subscribe(&self) -> broadcast::Receiver<Notice> {
        self.notices.subscribe()
    }

    /// Snapshot of the list and its fetch status.
    pub async fn state(&self) -> QueryState {
        let data = self.cache.read().await.snapshot();
        let fetch = self.fetch.lock().await;

        match data {
            Some(users) => QueryState::ready(users, fetch.in_flight()),
            None => QueryState {
                data: None,
                is_loading: fetch.in_flight(),
                is_fetching: fetch.in_flight(),
                error: fetch.last_error.clone(),
            },
        }
    }

    /// Return the cached list, fetching it first if the slot is empty.
    ///
    /// A stale list is returned as is while a background refetch replaces it.
    /// At most one list fetch runs at a time; concurrent callers wait for the
    /// running one. The returned state carries an error only when there is no
    /// cached list and the fetch failed.
    pub async fn load(&self) -> QueryState {
        let (cached, stale) = {
            let cache = self.cache.read().await;
            (
                cache.snapshot(),
                cache.is_stale(Instant::now(), self.stale_after),
            )
        };

        if let Some(users) = cached {
            if stale {
                debug!("Cached users are stale, refetching in background");
                self.start_fetch(false).await;
            }
            return QueryState::ready(users, stale);
        }

        match self.fetch_and_write().await {
            Ok(users) => QueryState::ready(users, false),
            Err(err) => QueryState::failed(err),
        }
    }

    /// Fetch the list now, regardless of freshness.
    ///
    /// Joins a fetch that is already running instead of starting another.
    /// On failure the cached list (if any) is kept.
    pub async fn refresh(&self) -> Result<Vec<User>> {
        self.fetch_and_write().await
    }

    /// Wait for the list fetch currently running, if any.
    pub async fn wait_for_revalidation(&self) {
        let current = self.fetch.lock().await.current.clone();
        if let Some(outcome) = current {
            // Failures are already logged and recorded by the fetch itself.
            let _ = wait_for_outcome(outcome).await;
        }
    }

    /// Users whose name, email or username contains `query`, ignoring case.
    ///
    /// Works on the cached list (loading it if needed) and never modifies it.
    pub async fn search(&self, query: &str) -> Result<Vec<User>> {
        let users = self.load().await.into_result()?;
        let found = filter_users(&users, query);
        debug!(query = %query, results = found.len(), "Search complete");
        Ok(found)
    }

    /// A single user: the cached entry when there is one, else the directory's.
    pub async fn get(&self, id: UserId) -> Result<User> {
        let cached = self
            .cache
            .read()
            .await
            .read()
            .and_then(|users| users.iter().find(|u| u.id == id).cloned());

        if let Some(user) = cached {
            return Ok(user);
        }

        self.gateway.get(id).await.map_err(|err| match err {
            ClientError::NotFound(id) => SyncError::NotFound(id),
            other => SyncError::LoadFailed(Arc::new(other)),
        })
    }

    /// Create a user and put it at the head of the list.
    pub async fn create(&self, data: CreateUserData) -> Result<User> {
        validate_create(&data)?;

        match self.gateway.create(&data).await {
            Ok(user) => {
                self.cache.write().await.patch_insert(user.clone());
                info!(user_id = %user.id, name = %user.name, "User created");
                self.notify(Notice::user_created(&user.name));
                Ok(user)
            }
            Err(err) => {
                warn!(error = %err, "Failed to create user");
                self.notify(Notice::create_failed());
                Err(SyncError::CreateFailed(Arc::new(err)))
            }
        }
    }

    /// Update some fields of a user.
    ///
    /// The directory's echo is merged over the cached entry, then the
    /// submitted fields are applied on top so an outdated echo cannot undo
    /// the edit. Returns the patched entry, or `None` if it is not cached.
    pub async fn update(&self, id: UserId, patch: UserPatch) -> Result<Option<User>> {
        validate_patch(&patch)?;

        let echoed = match self.gateway.update(id, &patch).await {
            Ok(changes) => changes,
            Err(err) => {
                warn!(user_id = %id, error = %err, "Failed to update user");
                self.notify(Notice::update_failed());
                return Err(SyncError::UpdateFailed(Arc::new(err)));
            }
        };

        let submitted = UserChanges::from(&patch);
        let updated = {
            let mut cache = self.cache.write().await;
            cache.patch_update(id, &echoed);
            cache.patch_update(id, &submitted);
            cache
                .read()
                .and_then(|users| users.iter().find(|u| u.id == id).cloned())
        };

        let name = updated
            .as_ref()
            .map(|u| u.name.clone())
            .or(submitted.name)
            .or(echoed.name)
            .unwrap_or_default();

        info!(user_id = %id, cached = updated.is_some(), "User updated");
        self.notify(Notice::user_updated(&name));
        Ok(updated)
    }

    /// Delete a user and drop it from the list.
    pub async fn delete(&self, id: UserId) -> Result<()> {
        match self.gateway.delete(id).await {
            Ok(()) => {
                self.cache.write().await.patch_delete(id);
                info!(user_id = %id, "User deleted");
                self.notify(Notice::user_deleted());
                Ok(())
            }
            Err(err) => {
                warn!(user_id = %id, error = %err, "Failed to delete user");
                self.notify(Notice::delete_failed());
                Err(SyncError::DeleteFailed(Arc::new(err)))
            }
        }
    }

    /// Dashboard figures over the current list.
    pub async fn stats(&self) -> Result<DirectoryStats> {
        let users = self.load().await.into_result()?;
        Ok(DirectoryStats::from_users(&users))
    }

    async fn fetch_and_write(&self) -> Result<Vec<User>> {
        let outcome = self.start_fetch(true).await;
        wait_for_outcome(outcome).await
    }

    /// Start a list fetch, or join the one already running.
    ///
    /// The fetch runs in its own task so it completes even if every caller
    /// goes away; its outcome is published on the returned channel.
    async fn start_fetch(&self, announce_failure: bool) -> watch::Receiver<FetchOutcome> {
        let mut fetch = self.fetch.lock().await;
        fetch.announce_failure |= announce_failure;
        if let Some(current) = &fetch.current {
            debug!("Joining list fetch already in flight");
            return current.clone();
        }

        let (tx, rx) = watch::channel(None);
        fetch.current = Some(rx.clone());

        let gateway = Arc::clone(&self.gateway);
        let cache = Arc::clone(&self.cache);
        let state = Arc::clone(&self.fetch);
        let notices = self.notices.clone();

        tokio::spawn(async move {
            let outcome = match gateway.list().await {
                Ok(users) => {
                    cache.write().await.write(users.clone());
                    debug!(users = users.len(), "User list cached");
                    Ok(users)
                }
                Err(err) => {
                    warn!(error = %err, "Failed to load users");
                    Err(SyncError::LoadFailed(Arc::new(err)))
                }
            };

            let announce = {
                let mut fetch = state.lock().await;
                fetch.current = None;
                fetch.last_error = outcome.as_ref().err().cloned();
                std::mem::take(&mut fetch.announce_failure)
            };

            if announce && outcome.is_err() {
                let _ = notices.send(Notice::load_failed());
            }
            // Nobody waiting is fine.
            let _ = tx.send(Some(outcome));
        });

        rx
    }

    fn notify(&self, notice: Notice) {
        // No subscribers is fine.
        let _ = self.notices.send(notice);
    }
}

async fn wait_for_outcome(mut outcome: watch::Receiver<FetchOutcome>) -> Result<Vec<User>> {
    let finished = outcome
        .wait_for(Option::is_some)
        .await
        .ok()
        .and_then(|value| (*value).clone());

    finished.unwrap_or(Err(SyncError::FetchInterrupted))
}
