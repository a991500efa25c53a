//! Entity repositories over the key-value store
//!
//! One repository per entity type, each owning the (de)serialization of its
//! collection under a single logical key. A missing key reads as an empty
//! collection; a malformed stored value fails that read. Every write
//! re-serializes the full collection, so concurrent writers are
//! last-write-wins at collection granularity.

pub mod bookings;
pub mod galleries;
pub mod listings;
pub mod messages;
pub mod reviews;
pub mod seed;
pub mod users;

pub use bookings::BookingRepository;
pub use galleries::GalleryRepository;
pub use listings::ListingRepository;
pub use messages::MessageRepository;
pub use reviews::ReviewRepository;
pub use users::UserRepository;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::errors::DomainResult;
use crate::store::KeyValueStore;

/// Decode the collection stored under `key`; absent key reads as empty
pub(crate) fn load_collection<T, S>(store: &S, key: &str) -> DomainResult<Vec<T>>
where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    match store.get(key)? {
        Some(raw) => Ok(serde_json::from_str(&raw)?),
        None => Ok(Vec::new()),
    }
}

/// Serialize and persist the full collection under `key`
pub(crate) fn store_collection<T, S>(store: &S, key: &str, items: &[T]) -> DomainResult<()>
where
    T: Serialize,
    S: KeyValueStore + ?Sized,
{
    store.set(key, &serde_json::to_string(items)?)
}

/// Upsert by id: replace in place when present, append otherwise
pub(crate) fn upsert_by_id<T>(items: &mut Vec<T>, item: T, id_of: impl Fn(&T) -> &str) {
    match items.iter().position(|existing| id_of(existing) == id_of(&item)) {
        Some(index) => items[index] = item,
        None => items.push(item),
    }
}
