//! User API Client
//!
//! HTTP client library for talking to a running User API server. Used by the
//! server's `smoke` subcommand and by the live-server test suite.
//!
//! # Example
//!
//! ```ignore
//! use user_api_client::{ClientConfig, UserApiClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = UserApiClient::new(ClientConfig::new("http://localhost:5000"))?;
//!
//!     let health = client.health().await?;
//!     println!("Server is {} (v{})", health.status, health.version);
//!
//!     let user = client.create_user("John Doe", "john.doe@example.com").await?;
//!     let fetched = client.get_user(user.id).await?;
//!     assert_eq!(user, fetched);
//!
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod types;

// Re-export main types
pub use client::UserApiClient;
pub use error::{ClientError, Result};
pub use types::{ClientConfig, CreateUserRequest, ErrorResponse, HealthStatus, ResetResponse};
