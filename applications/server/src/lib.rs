//! User API Server Library
//!
//! Demonstration user-management HTTP API backed by an in-memory store.
//!
//! This library exposes the core components for testing purposes.

pub mod api;
pub mod config;
pub mod error;
pub mod router;
pub mod smoke;
pub mod state;

// Re-export commonly used types for convenience
pub use config::{Environment, ServerConfig};
pub use error::{Result, ServerError};
pub use router::create_router;
pub use state::AppState;
