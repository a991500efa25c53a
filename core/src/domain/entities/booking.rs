//! Booking entity: a buyer's request to reserve a session.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::listing::ServiceListing;
use crate::domain::entities::user::User;
use crate::domain::id::generate_id;

/// Lifecycle status of a booking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingStatus {
    /// Created by the buyer, awaiting the seller
    Pending,
    /// Accepted by the seller
    Accepted,
    /// Session took place
    Completed,
    /// Called off before completion
    Cancelled,
}

impl BookingStatus {
    /// Pure lifecycle check: Pending -> Accepted | Cancelled,
    /// Accepted -> Completed. Completed and Cancelled are terminal;
    /// once a seller accepts, the booking can only run to completion.
    pub fn can_transition_to(&self, next: BookingStatus) -> bool {
        matches!(
            (self, next),
            (BookingStatus::Pending, BookingStatus::Accepted)
                | (BookingStatus::Pending, BookingStatus::Cancelled)
                | (BookingStatus::Accepted, BookingStatus::Completed)
        )
    }

    /// A booking that has not been cancelled still occupies its
    /// (listing, buyer) slot
    pub fn is_active(&self) -> bool {
        !matches!(self, BookingStatus::Cancelled)
    }
}

/// A buyer's request to reserve a session against a listing
///
/// `listing_title` and the participant names are snapshots copied at
/// creation. Bookings are never deleted; they only change status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    /// Unique identifier for the booking
    pub id: String,

    /// Reserved listing id
    pub listing_id: String,

    /// Listing title snapshot
    pub listing_title: String,

    /// Requesting buyer id
    pub buyer_id: String,

    /// Buyer display name snapshot
    pub buyer_name: String,

    /// Listing owner id
    pub seller_id: String,

    /// Seller display name snapshot
    pub seller_name: String,

    /// Lifecycle status
    pub status: BookingStatus,

    /// Free-text preferred time
    pub preferred_time: String,

    /// Optional note from the buyer
    pub message: String,

    /// Creation timestamp
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,
}

impl Booking {
    /// Creates a Pending booking by `buyer` against `listing`
    pub fn new(
        buyer: &User,
        listing: &ServiceListing,
        preferred_time: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            id: generate_id(),
            listing_id: listing.id.clone(),
            listing_title: listing.title.clone(),
            buyer_id: buyer.id.clone(),
            buyer_name: buyer.name.clone(),
            seller_id: listing.seller_id.clone(),
            seller_name: listing.seller_name.clone(),
            status: BookingStatus::Pending,
            preferred_time: preferred_time.into(),
            message: message.into(),
            created_at: Utc::now(),
        }
    }

    /// Returns a copy of this booking in the given status
    ///
    /// Pure value transformation; callers validate the transition and
    /// persist at the repository boundary.
    pub fn with_status(&self, status: BookingStatus) -> Self {
        Self {
            status,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::listing::{PriceUnit, ServiceCategory};
    use crate::domain::entities::user::UserRole;

    fn fixtures() -> (User, ServiceListing) {
        let seller = User::new("Sarah Jenkins", "sarah@example.com", UserRole::Seller);
        let listing = ServiceListing::new(
            &seller,
            "Artisan Sourdough Masterclass",
            "desc",
            450.0,
            PriceUnit::Hour,
            ServiceCategory::Cooking,
            "Online",
            "https://example.com/bread.jpg",
            true,
        );
        let buyer = User::new("Mike Ross", "mike@example.com", UserRole::Buyer);
        (buyer, listing)
    }

    #[test]
    fn test_new_booking_is_pending() {
        let (buyer, listing) = fixtures();
        let booking = Booking::new(&buyer, &listing, "Tuesday 11am", "Looking forward!");

        assert_eq!(booking.status, BookingStatus::Pending);
        assert_eq!(booking.buyer_id, buyer.id);
        assert_eq!(booking.seller_id, listing.seller_id);
        assert_eq!(booking.listing_title, listing.title);
        assert_eq!(booking.preferred_time, "Tuesday 11am");
    }

    #[test]
    fn test_lifecycle_transitions() {
        use BookingStatus::*;

        assert!(Pending.can_transition_to(Accepted));
        assert!(Pending.can_transition_to(Cancelled));
        assert!(Accepted.can_transition_to(Completed));

        assert!(!Accepted.can_transition_to(Cancelled));
        assert!(!Pending.can_transition_to(Completed));
        assert!(!Completed.can_transition_to(Cancelled));
        assert!(!Cancelled.can_transition_to(Pending));
        assert!(!Accepted.can_transition_to(Pending));
    }

    #[test]
    fn test_with_status_is_pure() {
        let (buyer, listing) = fixtures();
        let booking = Booking::new(&buyer, &listing, "Tuesday 11am", "");
        let accepted = booking.with_status(BookingStatus::Accepted);

        assert_eq!(booking.status, BookingStatus::Pending);
        assert_eq!(accepted.status, BookingStatus::Accepted);
        assert_eq!(accepted.id, booking.id);
    }

    #[test]
    fn test_active_statuses() {
        assert!(BookingStatus::Pending.is_active());
        assert!(BookingStatus::Accepted.is_active());
        assert!(BookingStatus::Completed.is_active());
        assert!(!BookingStatus::Cancelled.is_active());
    }

    #[test]
    fn test_status_serialization() {
        let json = serde_json::to_string(&BookingStatus::Pending).unwrap();
        assert_eq!(json, "\"PENDING\"");
    }
}
