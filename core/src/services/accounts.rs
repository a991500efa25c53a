//! Account service: registration and unauthenticated login.
//!
//! Login is a plain lookup by email; there is no credential check
//! anywhere in the marketplace.

use std::sync::Arc;

use tracing::info;

use ss_shared::validation::{is_valid_email, not_empty};

use crate::domain::entities::user::{User, UserRole};
use crate::errors::{DomainError, DomainResult};
use crate::repositories::UserRepository;
use crate::store::KeyValueStore;

use super::session::SessionService;

/// Registration and login on top of the user repository
pub struct AccountService<S: KeyValueStore> {
    users: UserRepository<S>,
    session: SessionService<S>,
}

impl<S: KeyValueStore> AccountService<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self {
            users: UserRepository::new(store.clone()),
            session: SessionService::new(store),
        }
    }

    /// Create a new user and log them in
    ///
    /// The email must be well-formed and not already registered (compared
    /// case-insensitively). The role is fixed here for good.
    pub fn register(&self, name: &str, email: &str, role: UserRole) -> DomainResult<User> {
        if !not_empty(name) {
            return Err(DomainError::validation("name must not be empty"));
        }
        if !is_valid_email(email) {
            return Err(DomainError::validation(format!("invalid email: {email}")));
        }
        if self.users.find_by_email(email)?.is_some() {
            return Err(DomainError::business_rule("email is already registered"));
        }

        let user = User::new(name.trim(), email.trim(), role);
        self.users.save(&user)?;
        self.session.login(&user)?;
        info!(user_id = %user.id, "user registered");
        Ok(user)
    }

    /// Look up a user by email and make them the current actor
    pub fn login(&self, email: &str) -> DomainResult<User> {
        let user = self
            .users
            .find_by_email(email)?
            .ok_or_else(|| DomainError::not_found("User"))?;
        self.session.login(&user)?;
        Ok(user)
    }
}
