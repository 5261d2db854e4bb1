//! FlowDesk user list synchronisation.
//!
//! Keeps an in-memory copy of the directory's user list and reconciles it
//! with the results of create, update and delete calls.
//!
//! # Example
//!
//! ```ignore
//! use flowdesk_client::{ClientConfig, DirectoryClient};
//! use flowdesk_sync::{UserCache, UserListController};
//! use std::sync::Arc;
//! use tokio::sync::RwLock;
//!
//! let gateway = Arc::new(DirectoryClient::new(ClientConfig::default())?);
//! let cache = Arc::new(RwLock::new(UserCache::new()));
//! let controller = UserListController::new(gateway, cache);
//!
//! let users = controller.search("bret").await?;
//! ```

mod cache;
mod controller;
mod error;
mod notice;
mod stats;
mod types;

// Public exports
pub use cache::{UserCache, USERS_QUERY_KEY};
pub use controller::{UserListController, DEFAULT_STALE_AFTER};
pub use error::{Result, SyncError};
pub use notice::{Notice, NoticeLevel};
pub use stats::DirectoryStats;
pub use types::QueryState;
