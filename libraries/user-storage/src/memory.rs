/// In-memory user store
use crate::error::{Result, StorageError};
use std::collections::{BTreeMap, HashMap};
use std::sync::{Mutex, MutexGuard};
use user_core::{NewUser, User, UserError, UserId, UserRepository};

/// Records, email index and ID counter. Always mutated together.
#[derive(Debug)]
struct StoreState {
    users: BTreeMap<UserId, User>,
    emails: HashMap<String, UserId>,
    next_id: UserId,
}

impl StoreState {
    fn empty() -> Self {
        Self {
            users: BTreeMap::new(),
            emails: HashMap::new(),
            next_id: UserId::FIRST,
        }
    }
}

/// Mutex-guarded user store shared by every request
///
/// Every operation takes the lock for its whole duration, so `create` is a
/// single critical section: two concurrent creations can neither share an ID
/// nor both claim the same email.
#[derive(Debug)]
pub struct InMemoryUserStore {
    state: Mutex<StoreState>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(StoreState::empty()),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, StoreState>> {
        self.state.lock().map_err(|_| {
            tracing::error!("User store lock poisoned");
            StorageError::LockPoisoned
        })
    }
}

impl Default for InMemoryUserStore {
    fn default() -> Self {
        Self::new()
    }
}

impl UserRepository for InMemoryUserStore {
    fn create(&self, new_user: NewUser) -> user_core::Result<User> {
        let mut state = self.lock()?;

        if state.emails.contains_key(new_user.email()) {
            tracing::debug!(email = %new_user.email(), "Rejected duplicate email");
            return Err(UserError::EmailExists);
        }

        let id = state.next_id;
        state.next_id = id.next();

        let user = User::from_new(id, new_user);
        state.emails.insert(user.email.clone(), id);
        state.users.insert(id, user.clone());

        Ok(user)
    }

    fn get(&self, id: UserId) -> user_core::Result<Option<User>> {
        Ok(self.lock()?.users.get(&id).cloned())
    }

    fn list(&self) -> user_core::Result<Vec<User>> {
        Ok(self.lock()?.users.values().cloned().collect())
    }

    fn count(&self) -> user_core::Result<usize> {
        Ok(self.lock()?.users.len())
    }

    fn reset(&self) -> user_core::Result<()> {
        let mut state = self.lock()?;
        let dropped = state.users.len();
        *state = StoreState::empty();
        tracing::info!(dropped, "User store reset");
        Ok(())
    }
}
