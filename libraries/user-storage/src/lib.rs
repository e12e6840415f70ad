//! User API Storage
//!
//! Process-local, in-memory user store. Nothing is persisted: the store starts
//! empty and is emptied again by a restart or an explicit reset.
//!
//! # Example
//!
//! ```rust
//! use user_core::{NewUser, UserRepository};
//! use user_storage::InMemoryUserStore;
//!
//! # fn example() -> user_core::Result<()> {
//! let store = InMemoryUserStore::new();
//! let user = store.create(NewUser::new("John Doe", "john.doe@example.com")?)?;
//!
//! assert_eq!(user.id.get(), 1);
//! assert_eq!(store.get(user.id)?, Some(user));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

mod error;
mod memory;

pub use error::{Result, StorageError};
pub use memory::InMemoryUserStore;
