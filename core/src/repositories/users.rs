//! User repository: the Users collection and login lookup.

use std::sync::Arc;

use ss_shared::validation::normalize_email;

use crate::domain::entities::user::User;
use crate::errors::DomainResult;
use crate::store::{keys, KeyValueStore};

use super::{load_collection, store_collection, upsert_by_id};

/// Repository for the Users collection
///
/// Users are created at registration and mutated on profile edits; they
/// are never deleted.
pub struct UserRepository<S: KeyValueStore> {
    store: Arc<S>,
}

impl<S: KeyValueStore> UserRepository<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// All users in insertion order
    pub fn list(&self) -> DomainResult<Vec<User>> {
        load_collection(self.store.as_ref(), keys::USERS)
    }

    /// Upsert a user by id
    pub fn save(&self, user: &User) -> DomainResult<()> {
        let mut users = self.list()?;
        upsert_by_id(&mut users, user.clone(), |u| &u.id);
        store_collection(self.store.as_ref(), keys::USERS, &users)
    }

    /// Find a user by id
    pub fn find_by_id(&self, id: &str) -> DomainResult<Option<User>> {
        Ok(self.list()?.into_iter().find(|u| u.id == id))
    }

    /// Find a user by email, the unauthenticated login key
    ///
    /// The comparison is case-insensitive on both sides.
    pub fn find_by_email(&self, email: &str) -> DomainResult<Option<User>> {
        let needle = normalize_email(email);
        Ok(self
            .list()?
            .into_iter()
            .find(|u| normalize_email(&u.email) == needle))
    }
}
