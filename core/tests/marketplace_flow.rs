//! End-to-end flows over a fresh in-memory store.

use std::sync::Arc;

use ss_core::domain::entities::booking::BookingStatus;
use ss_core::domain::entities::listing::{PriceUnit, ServiceCategory, ServiceListing};
use ss_core::domain::entities::review::Review;
use ss_core::domain::entities::user::UserRole;
use ss_core::repositories::{seed, ListingRepository, UserRepository};
use ss_core::services::{AccountService, BookingService, ReviewService, SessionService};
use ss_core::store::{keys, KeyValueStore, MemoryStore};

fn fresh_store() -> Arc<MemoryStore> {
    let store = Arc::new(MemoryStore::new());
    seed::initialize(store.as_ref()).unwrap();
    store
}

#[test]
fn seller_listing_and_reviews_scenario() {
    let store = fresh_store();
    let accounts = AccountService::new(store.clone());
    let listings = ListingRepository::new(store.clone());
    let reviews = ReviewService::new(store.clone());
    let session = SessionService::new(store.clone());

    // Register a seller, which also logs them in
    let seller = accounts
        .register("Priya Sharma", "priya@example.com", UserRole::Seller)
        .unwrap();
    assert_eq!(
        session.current_user().unwrap().map(|u| u.id),
        Some(seller.id.clone())
    );

    // Publish a listing
    let listing = ServiceListing::new(
        &seller,
        "Weeknight Curry Basics",
        "Fragrant curries from scratch.",
        450.0,
        PriceUnit::Hour,
        ServiceCategory::Cooking,
        "Online",
        "https://example.com/curry.jpg",
        true,
    );
    listings.save(&listing).unwrap();

    // Two reviews: 5 then 3 => mean 4.0, count 2
    reviews
        .submit_review(&Review::new(&listing.id, "u2", "Mike Ross", 5, "superb"))
        .unwrap();
    reviews
        .submit_review(&Review::new(&listing.id, "u2", "Mike Ross", 3, "decent"))
        .unwrap();

    let stored = listings.find_by_id(&listing.id).unwrap().unwrap();
    assert_eq!(stored.rating, 4.0);
    assert_eq!(stored.review_count, 2);
}

#[test]
fn booking_lifecycle_scenario() {
    let store = fresh_store();
    let users = UserRepository::new(store.clone());
    let session = SessionService::new(store.clone());
    let bookings = BookingService::new(store.clone());

    // Seeded buyer logs in and books the seeded sourdough listing
    let buyer = users.find_by_email("mike@example.com").unwrap().unwrap();
    session.login(&buyer).unwrap();

    let booking = bookings
        .request_booking(&buyer, "l1", "Tuesday 11am", "")
        .unwrap();
    assert_eq!(booking.status, BookingStatus::Pending);
    assert_eq!(booking.buyer_id, buyer.id);
    assert_eq!(booking.listing_title, "Artisan Sourdough Masterclass");

    // Seller accepts, then marks the session done
    let accepted = bookings.accept(&booking.id).unwrap();
    assert_eq!(accepted.status, BookingStatus::Accepted);

    let completed = bookings.complete(&booking.id).unwrap();
    assert_eq!(completed.status, BookingStatus::Completed);
}

#[test]
fn login_by_email_is_case_insensitive() {
    let store = fresh_store();
    let users = UserRepository::new(store.clone());

    let found = users.find_by_email("SARAH@example.COM").unwrap();
    assert_eq!(found.map(|u| u.id), Some("u1".to_string()));
}

#[test]
fn logout_preserves_all_collections() {
    let store = fresh_store();
    let users = UserRepository::new(store.clone());
    let session = SessionService::new(store.clone());

    let user = users.find_by_email("mike@example.com").unwrap().unwrap();
    session.login(&user).unwrap();

    let collections = [
        keys::USERS,
        keys::LISTINGS,
        keys::BOOKINGS,
        keys::MESSAGES,
        keys::REVIEWS,
        keys::GALLERIES,
    ];
    let before: Vec<_> = collections.iter().map(|k| store.get(k).unwrap()).collect();

    session.logout().unwrap();

    let after: Vec<_> = collections.iter().map(|k| store.get(k).unwrap()).collect();
    assert_eq!(before, after);
    assert!(session.current_user().unwrap().is_none());
}

#[test]
fn seeding_twice_matches_seeding_once() {
    let store = Arc::new(MemoryStore::new());
    seed::initialize(store.as_ref()).unwrap();
    let snapshot: Vec<_> = [keys::USERS, keys::LISTINGS, keys::BOOKINGS]
        .iter()
        .map(|k| store.get(k).unwrap())
        .collect();

    seed::initialize(store.as_ref()).unwrap();
    let again: Vec<_> = [keys::USERS, keys::LISTINGS, keys::BOOKINGS]
        .iter()
        .map(|k| store.get(k).unwrap())
        .collect();

    assert_eq!(snapshot, again);
}
