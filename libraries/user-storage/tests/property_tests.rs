//! Property-based tests for the user store
//!
//! Uses proptest to check store invariants across random sequences of
//! creations.

use proptest::prelude::*;
use std::collections::HashSet;
use user_core::{NewUser, UserError, UserRepository};
use user_storage::InMemoryUserStore;

// ===== Helpers =====

fn arbitrary_new_user() -> impl Strategy<Value = NewUser> {
    (
        "[A-Za-z][A-Za-z ]{0,19}", // name
        "[a-z]{1,6}",              // email local part (small alphabet forces duplicates)
        "[a-z]{1,3}",              // email domain
    )
        .prop_map(|(name, local, domain)| {
            NewUser::new(name, format!("{local}@{domain}.com")).unwrap()
        })
}

// ===== Property Tests =====

proptest! {
    /// Property: every successful create gets an ID above all earlier ones
    #[test]
    fn ids_strictly_increase(users in prop::collection::vec(arbitrary_new_user(), 1..60)) {
        let store = InMemoryUserStore::new();
        let mut last = 0u64;

        for new_user in users {
            if let Ok(user) = store.create(new_user) {
                prop_assert!(user.id.get() > last);
                last = user.id.get();
            }
        }
    }

    /// Property: stored emails are unique and duplicates are reported as conflicts
    #[test]
    fn emails_stay_unique(users in prop::collection::vec(arbitrary_new_user(), 1..60)) {
        let store = InMemoryUserStore::new();
        let mut seen = HashSet::new();

        for new_user in users {
            let email = new_user.email().to_string();
            let fresh = seen.insert(email.clone());
            let result = store.create(new_user);

            if fresh {
                prop_assert!(result.is_ok());
            } else {
                prop_assert_eq!(result.unwrap_err(), UserError::EmailExists);
            }
        }

        let stored = store.list().unwrap();
        let emails: HashSet<_> = stored.iter().map(|u| u.email.clone()).collect();
        prop_assert_eq!(emails.len(), stored.len());
        prop_assert_eq!(emails, seen);
    }

    /// Property: a rejected create leaves the store exactly as it was
    #[test]
    fn failed_create_changes_nothing(users in prop::collection::vec(arbitrary_new_user(), 1..30)) {
        let store = InMemoryUserStore::new();
        for new_user in users.clone() {
            let _ = store.create(new_user);
        }

        let before = store.list().unwrap();
        for new_user in users {
            prop_assert!(store.create(new_user).is_err());
        }
        prop_assert_eq!(store.list().unwrap(), before);
    }

    /// Property: repeated lookups return identical records
    #[test]
    fn get_is_idempotent(users in prop::collection::vec(arbitrary_new_user(), 1..20)) {
        let store = InMemoryUserStore::new();
        for new_user in users {
            if let Ok(user) = store.create(new_user) {
                let first = store.get(user.id).unwrap();
                let second = store.get(user.id).unwrap();
                prop_assert_eq!(first.as_ref(), Some(&user));
                prop_assert_eq!(first, second);
            }
        }
    }
}
