//! Booking repository: the Bookings collection and participant queries.

use std::sync::Arc;

use crate::domain::entities::booking::{Booking, BookingStatus};
use crate::errors::{DomainError, DomainResult};
use crate::store::{keys, KeyValueStore};

use super::{load_collection, store_collection, upsert_by_id};

/// Repository for the Bookings collection
///
/// Bookings are never deleted; their lifecycle is tracked through
/// `status` alone.
pub struct BookingRepository<S: KeyValueStore> {
    store: Arc<S>,
}

impl<S: KeyValueStore> BookingRepository<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// All bookings in insertion order
    pub fn list(&self) -> DomainResult<Vec<Booking>> {
        load_collection(self.store.as_ref(), keys::BOOKINGS)
    }

    /// Upsert a booking by id
    pub fn save(&self, booking: &Booking) -> DomainResult<()> {
        let mut bookings = self.list()?;
        upsert_by_id(&mut bookings, booking.clone(), |b| &b.id);
        store_collection(self.store.as_ref(), keys::BOOKINGS, &bookings)
    }

    /// Find a booking by id
    pub fn find_by_id(&self, id: &str) -> DomainResult<Option<Booking>> {
        Ok(self.list()?.into_iter().find(|b| b.id == id))
    }

    /// Bookings requested by the given buyer
    pub fn by_buyer(&self, buyer_id: &str) -> DomainResult<Vec<Booking>> {
        Ok(self
            .list()?
            .into_iter()
            .filter(|b| b.buyer_id == buyer_id)
            .collect())
    }

    /// Bookings against the given seller's listings
    pub fn by_seller(&self, seller_id: &str) -> DomainResult<Vec<Booking>> {
        Ok(self
            .list()?
            .into_iter()
            .filter(|b| b.seller_id == seller_id)
            .collect())
    }

    /// Move a booking to `status`, validating the lifecycle transition
    ///
    /// The stored booking is replaced by a new value rather than mutated
    /// in place; persistence happens once, at this boundary.
    pub fn update_status(&self, id: &str, status: BookingStatus) -> DomainResult<Booking> {
        let booking = self
            .find_by_id(id)?
            .ok_or_else(|| DomainError::not_found("Booking"))?;

        if !booking.status.can_transition_to(status) {
            return Err(DomainError::business_rule(format!(
                "booking cannot move from {:?} to {:?}",
                booking.status, status
            )));
        }

        let updated = booking.with_status(status);
        self.save(&updated)?;
        Ok(updated)
    }
}
