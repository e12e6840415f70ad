/// Domain types for the User API
mod ids;
mod user;

pub use ids::UserId;
pub use user::{NewUser, User};
