//! Review entity: a buyer's one-off rating of a listing.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::id::generate_id;

/// Valid rating bounds, inclusive
pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;

/// A buyer's rating and comment for a listing
///
/// Immutable once created. Adding a review triggers the rating
/// aggregation on the reviewed listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    /// Unique identifier for the review
    pub id: String,

    /// Reviewed listing id
    pub listing_id: String,

    /// Author user id
    pub author_id: String,

    /// Author display name snapshot
    pub author_name: String,

    /// Rating, 1 through 5
    pub rating: u8,

    /// Free-text comment
    pub comment: String,

    /// Submission timestamp
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub date: DateTime<Utc>,
}

impl Review {
    /// Creates a new review dated now
    pub fn new(
        listing_id: impl Into<String>,
        author_id: impl Into<String>,
        author_name: impl Into<String>,
        rating: u8,
        comment: impl Into<String>,
    ) -> Self {
        Self {
            id: generate_id(),
            listing_id: listing_id.into(),
            author_id: author_id.into(),
            author_name: author_name.into(),
            rating,
            comment: comment.into(),
            date: Utc::now(),
        }
    }

    /// Checks the rating is within the allowed 1..=5 range
    pub fn rating_in_range(&self) -> bool {
        (MIN_RATING..=MAX_RATING).contains(&self.rating)
    }
}
