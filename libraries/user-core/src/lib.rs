//! User API Core
//!
//! Domain types, the store trait, and error handling shared by the storage
//! layer, the HTTP server and the API client.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `User`, `NewUser`, `UserId`
//! - **Core Traits**: `UserRepository`
//! - **Error Handling**: Unified `UserError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use user_core::{NewUser, User, UserId};
//!
//! let input = NewUser::new("John Doe", "john.doe@example.com").unwrap();
//! let user = User::from_new(UserId::new(1), input);
//!
//! assert_eq!(user.id.get(), 1);
//! assert_eq!(user.email, "john.doe@example.com");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use error::{Result, UserError};
pub use traits::UserRepository;
pub use types::{NewUser, User, UserId};
