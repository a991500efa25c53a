//! Key-value store abstraction
//!
//! The persistence substrate is an origin-scoped, synchronous, string-keyed
//! map. Repositories serialize whole collections under one logical key each,
//! so a write replaces the entire collection (last-write-wins).

mod memory;

pub use memory::MemoryStore;

use crate::errors::DomainResult;

/// Logical storage keys, one per persisted collection
pub mod keys {
    pub const USERS: &str = "skillshare_users";
    pub const LISTINGS: &str = "skillshare_listings";
    pub const MESSAGES: &str = "skillshare_messages";
    pub const REVIEWS: &str = "skillshare_reviews";
    pub const BOOKINGS: &str = "skillshare_bookings";
    pub const CURRENT_USER: &str = "skillshare_current_user";
    pub const GALLERIES: &str = "skillshare_galleries";
}

/// Synchronous key-value store contract
///
/// An absent key is reported as `Ok(None)`, never as an error. Implementors
/// surface substrate failures (e.g. I/O) as `DomainError::Storage`.
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, if any
    fn get(&self, key: &str) -> DomainResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&self, key: &str, value: &str) -> DomainResult<()>;

    /// Remove the value stored under `key`; removing an absent key is a no-op
    fn remove(&self, key: &str) -> DomainResult<()>;
}
