//! Review repository: the append-only Reviews collection.

use std::sync::Arc;

use crate::domain::entities::review::Review;
use crate::errors::DomainResult;
use crate::store::{keys, KeyValueStore};

use super::{load_collection, store_collection};

/// Repository for the Reviews collection
///
/// Reviews are immutable once added. Rating aggregation onto the
/// reviewed listing is orchestrated by the review service, not here.
pub struct ReviewRepository<S: KeyValueStore> {
    store: Arc<S>,
}

impl<S: KeyValueStore> ReviewRepository<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// All reviews in submission order
    pub fn list(&self) -> DomainResult<Vec<Review>> {
        load_collection(self.store.as_ref(), keys::REVIEWS)
    }

    /// Append a review to the collection
    pub fn add(&self, review: &Review) -> DomainResult<()> {
        let mut reviews = self.list()?;
        reviews.push(review.clone());
        store_collection(self.store.as_ref(), keys::REVIEWS, &reviews)
    }

    /// Reviews for a listing, newest first
    pub fn by_listing(&self, listing_id: &str) -> DomainResult<Vec<Review>> {
        let mut reviews: Vec<Review> = self
            .list()?
            .into_iter()
            .filter(|r| r.listing_id == listing_id)
            .collect();
        reviews.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(reviews)
    }
}
