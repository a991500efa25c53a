//! Review service: submission plus listing rating aggregation.

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::entities::review::Review;
use crate::errors::{DomainError, DomainResult};
use crate::repositories::{ListingRepository, ReviewRepository};
use crate::store::KeyValueStore;

/// Review submission and the running-mean invariant
///
/// Adding a review must leave the reviewed listing's `rating` equal to the
/// arithmetic mean of every rating ever recorded for it, and
/// `review_count` equal to the number of such reviews. The review is
/// persisted first, then the listing aggregate; a review against an
/// unknown listing is stored with nothing to aggregate onto, matching the
/// tolerant original behavior.
pub struct ReviewService<S: KeyValueStore> {
    reviews: ReviewRepository<S>,
    listings: ListingRepository<S>,
}

impl<S: KeyValueStore> ReviewService<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self {
            reviews: ReviewRepository::new(store.clone()),
            listings: ListingRepository::new(store),
        }
    }

    /// Validate, store, and aggregate a new review
    pub fn submit_review(&self, review: &Review) -> DomainResult<()> {
        if !review.rating_in_range() {
            return Err(DomainError::validation(format!(
                "rating {} is outside 1..=5",
                review.rating
            )));
        }

        self.reviews.add(review)?;

        match self.listings.find_by_id(&review.listing_id)? {
            Some(mut listing) => {
                listing.record_review(review.rating);
                self.listings.save(&listing)?;
                info!(
                    listing_id = %review.listing_id,
                    rating = listing.rating,
                    count = listing.review_count,
                    "review aggregated"
                );
            }
            None => {
                warn!(listing_id = %review.listing_id, "review stored for unknown listing");
            }
        }
        Ok(())
    }

    /// Reviews for a listing, newest first
    pub fn reviews_for(&self, listing_id: &str) -> DomainResult<Vec<Review>> {
        self.reviews.by_listing(listing_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::listing::{PriceUnit, ServiceCategory, ServiceListing};
    use crate::domain::entities::user::{User, UserRole};
    use crate::store::MemoryStore;

    fn setup() -> (ReviewService<MemoryStore>, ListingRepository<MemoryStore>, ServiceListing) {
        let store = Arc::new(MemoryStore::new());
        let listings = ListingRepository::new(store.clone());
        let seller = User::new("Sarah Jenkins", "sarah@example.com", UserRole::Seller);
        let listing = ServiceListing::new(
            &seller,
            "Sourdough",
            "desc",
            450.0,
            PriceUnit::Hour,
            ServiceCategory::Cooking,
            "Online",
            "https://example.com/img.jpg",
            true,
        );
        listings.save(&listing).unwrap();
        (ReviewService::new(store), listings, listing)
    }

    #[test]
    fn test_submission_updates_aggregate() {
        let (service, listings, listing) = setup();

        service
            .submit_review(&Review::new(&listing.id, "u2", "Mike", 5, "great"))
            .unwrap();
        service
            .submit_review(&Review::new(&listing.id, "u3", "Ana", 3, "fine"))
            .unwrap();

        let stored = listings.find_by_id(&listing.id).unwrap().unwrap();
        assert_eq!(stored.rating, 4.0);
        assert_eq!(stored.review_count, 2);
        assert_eq!(service.reviews_for(&listing.id).unwrap().len(), 2);
    }

    #[test]
    fn test_out_of_range_rating_rejected() {
        let (service, _, listing) = setup();
        let err = service
            .submit_review(&Review::new(&listing.id, "u2", "Mike", 0, ""))
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation { .. }));
        assert!(service.reviews_for(&listing.id).unwrap().is_empty());
    }

    #[test]
    fn test_review_for_unknown_listing_is_stored() {
        let (service, _, _) = setup();
        service
            .submit_review(&Review::new("ghost", "u2", "Mike", 4, "?"))
            .unwrap();
        assert_eq!(service.reviews_for("ghost").unwrap().len(), 1);
    }
}
