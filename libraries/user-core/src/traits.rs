/// Core traits for the User API
use crate::error::Result;
use crate::types::{NewUser, User, UserId};

/// User store trait
///
/// Implementers own the user records and the ID counter. Handlers only ever
/// see the store through this trait, so the backing implementation can be
/// swapped without touching the HTTP layer.
///
/// Implementations must make `create` atomic: the email uniqueness check, the
/// ID allocation and the insert happen as one step, and a failed `create`
/// leaves the store untouched.
pub trait UserRepository: Send + Sync {
    /// Insert a new user and return the stored record
    ///
    /// # Errors
    /// Returns `UserError::EmailExists` if the email is already taken
    fn create(&self, new_user: NewUser) -> Result<User>;

    /// Look up a user by ID
    fn get(&self, id: UserId) -> Result<Option<User>>;

    /// All users ordered by ID
    fn list(&self) -> Result<Vec<User>>;

    /// Number of stored users
    fn count(&self) -> Result<usize>;

    /// Drop every record and rewind the ID counter to 1
    ///
    /// Test/dev capability only.
    fn reset(&self) -> Result<()>;
}
