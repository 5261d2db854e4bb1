//! FlowDesk Directory Client
//!
//! HTTP client for the remote user directory behind the FlowDesk dashboard.
//!
//! # Features
//!
//! - **Users**: list, get, create, update and delete user records
//! - **Gateway trait**: [`UserGateway`] lets callers swap the HTTP client for a fake
//!
//! The demo directory accepts writes without persisting them. Created records
//! therefore receive a synthetic, timestamp-derived id from this client.
//!
//! # Example
//!
//! ```ignore
//! use flowdesk_client::{ClientConfig, DirectoryClient, UserGateway};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = DirectoryClient::new(ClientConfig::default())?;
//!
//!     let users = client.list().await?;
//!     println!("Found {} users", users.len());
//!
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod gateway;
mod ids;
mod types;
mod users;

pub use client::DirectoryClient;
pub use error::{ClientError, Result};
pub use gateway::UserGateway;
pub use types::{ClientConfig, DEFAULT_BASE_URL};
pub use users::UsersClient;
