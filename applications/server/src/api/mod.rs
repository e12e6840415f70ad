/// API route modules
pub mod fallback;
pub mod health;
pub mod reset;
pub mod users;
