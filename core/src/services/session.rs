//! Session manager: the current-user pointer.

use std::sync::Arc;

use tracing::debug;

use crate::domain::entities::user::User;
use crate::errors::DomainResult;
use crate::store::{keys, KeyValueStore};

/// Tracks the currently authenticated actor
///
/// The session pointer holds a full copy of the user record, not a live
/// reference: later edits to the Users collection are not reflected here
/// until the caller logs in again with the updated record. Logout clears
/// only this pointer; business collections are never touched.
pub struct SessionService<S: KeyValueStore> {
    store: Arc<S>,
}

impl<S: KeyValueStore> SessionService<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Persist `user` as the current actor, replacing any previous session
    pub fn login(&self, user: &User) -> DomainResult<()> {
        debug!(user_id = %user.id, "session login");
        self.store
            .set(keys::CURRENT_USER, &serde_json::to_string(user)?)
    }

    /// Clear the session pointer only
    pub fn logout(&self) -> DomainResult<()> {
        debug!("session logout");
        self.store.remove(keys::CURRENT_USER)
    }

    /// The current actor, or None when nobody is logged in
    pub fn current_user(&self) -> DomainResult<Option<User>> {
        match self.store.get(keys::CURRENT_USER)? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::user::UserRole;
    use crate::repositories::seed;
    use crate::store::MemoryStore;

    #[test]
    fn test_login_logout_roundtrip() {
        let store = Arc::new(MemoryStore::new());
        let session = SessionService::new(store.clone());
        let user = User::new("Mike Ross", "mike@example.com", UserRole::Buyer);

        assert!(session.current_user().unwrap().is_none());

        session.login(&user).unwrap();
        assert_eq!(session.current_user().unwrap(), Some(user));

        session.logout().unwrap();
        assert!(session.current_user().unwrap().is_none());
    }

    #[test]
    fn test_session_is_a_snapshot() {
        let store = Arc::new(MemoryStore::new());
        let session = SessionService::new(store.clone());
        let mut user = User::new("Mike Ross", "mike@example.com", UserRole::Buyer);
        session.login(&user).unwrap();

        // Mutating the record after login does not update the pointer
        user.set_bio("changed later");
        let snapshot = session.current_user().unwrap().unwrap();
        assert!(snapshot.bio.is_none());
    }

    #[test]
    fn test_logout_leaves_collections_untouched() {
        let store = Arc::new(MemoryStore::new());
        seed::initialize(store.as_ref()).unwrap();
        let session = SessionService::new(store.clone());
        let user = User::new("Mike Ross", "mike@example.com", UserRole::Buyer);
        session.login(&user).unwrap();

        let before: Vec<Option<String>> = [
            crate::store::keys::USERS,
            crate::store::keys::LISTINGS,
            crate::store::keys::BOOKINGS,
            crate::store::keys::MESSAGES,
            crate::store::keys::REVIEWS,
            crate::store::keys::GALLERIES,
        ]
        .iter()
        .map(|k| store.get(k).unwrap())
        .collect();

        session.logout().unwrap();

        let after: Vec<Option<String>> = [
            crate::store::keys::USERS,
            crate::store::keys::LISTINGS,
            crate::store::keys::BOOKINGS,
            crate::store::keys::MESSAGES,
            crate::store::keys::REVIEWS,
            crate::store::keys::GALLERIES,
        ]
        .iter()
        .map(|k| store.get(k).unwrap())
        .collect();

        assert_eq!(before, after);
    }
}
