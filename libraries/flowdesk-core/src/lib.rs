//! FlowDesk Core
//!
//! Domain types, search and validation shared by the FlowDesk user directory
//! crates.
//!
//! # Example
//!
//! ```rust
//! use flowdesk_core::{filter_users, validate_create, CreateUserData, User, UserId};
//!
//! let data = CreateUserData {
//!     name: "Ann".to_string(),
//!     username: "annie".to_string(),
//!     email: "ann@example.com".to_string(),
//!     phone: "555-0100".to_string(),
//!     website: "https://ann.dev".to_string(),
//! };
//! assert!(validate_create(&data).is_ok());
//!
//! let users = vec![User::from_submission(UserId::new(1), data)];
//! assert_eq!(filter_users(&users, "ANN").len(), 1);
//! ```

pub mod error;
pub mod search;
pub mod types;
pub mod validation;

pub use error::{FieldError, ValidationErrors};
pub use search::{count_label, filter_users};
pub use types::{Address, Company, CreateUserData, Geo, User, UserChanges, UserId, UserPatch};
pub use validation::{validate_create, validate_patch};
