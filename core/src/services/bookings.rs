//! Booking service: the request/accept/complete/cancel workflow.

use std::sync::Arc;

use tracing::info;

use crate::domain::entities::booking::{Booking, BookingStatus};
use crate::domain::entities::user::User;
use crate::errors::{DomainError, DomainResult};
use crate::repositories::{BookingRepository, ListingRepository};
use crate::store::KeyValueStore;

/// Booking workflow on top of the booking and listing repositories
///
/// Enforces the rules the repositories deliberately do not: a buyer
/// cannot book their own listing, and at most one active (non-cancelled)
/// booking may exist per (listing, buyer) pair.
pub struct BookingService<S: KeyValueStore> {
    bookings: BookingRepository<S>,
    listings: ListingRepository<S>,
}

impl<S: KeyValueStore> BookingService<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self {
            bookings: BookingRepository::new(store.clone()),
            listings: ListingRepository::new(store),
        }
    }

    /// Create a Pending booking by `buyer` against the given listing
    pub fn request_booking(
        &self,
        buyer: &User,
        listing_id: &str,
        preferred_time: &str,
        message: &str,
    ) -> DomainResult<Booking> {
        let listing = self
            .listings
            .find_by_id(listing_id)?
            .ok_or_else(|| DomainError::not_found("ServiceListing"))?;

        if listing.seller_id == buyer.id {
            return Err(DomainError::business_rule(
                "a seller cannot book their own listing",
            ));
        }

        let already_active = self
            .bookings
            .list()?
            .iter()
            .any(|b| b.listing_id == listing_id && b.buyer_id == buyer.id && b.status.is_active());
        if already_active {
            return Err(DomainError::business_rule(
                "an active booking already exists for this listing",
            ));
        }

        let booking = Booking::new(buyer, &listing, preferred_time, message);
        self.bookings.save(&booking)?;
        info!(booking_id = %booking.id, listing_id, buyer_id = %buyer.id, "booking requested");
        Ok(booking)
    }

    /// Seller accepts a pending booking
    pub fn accept(&self, booking_id: &str) -> DomainResult<Booking> {
        self.bookings.update_status(booking_id, BookingStatus::Accepted)
    }

    /// Seller marks an accepted booking as done
    pub fn complete(&self, booking_id: &str) -> DomainResult<Booking> {
        self.bookings.update_status(booking_id, BookingStatus::Completed)
    }

    /// Call off a booking the seller has not yet accepted
    pub fn cancel(&self, booking_id: &str) -> DomainResult<Booking> {
        self.bookings.update_status(booking_id, BookingStatus::Cancelled)
    }
}
