//! Service listing entity: a seller's published offer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::user::User;
use crate::domain::id::generate_id;

/// Closed set of service categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ServiceCategory {
    #[serde(rename = "Cooking & Baking")]
    Cooking,
    #[serde(rename = "Tutoring")]
    Tutoring,
    #[serde(rename = "Repairs & DIY")]
    Repairs,
    #[serde(rename = "Arts & Crafts")]
    Arts,
    #[serde(rename = "Cleaning")]
    Cleaning,
    #[serde(rename = "Gardening")]
    Gardening,
    #[serde(rename = "Tech Support")]
    TechSupport,
    #[serde(rename = "Programming & IT")]
    Programming,
    #[serde(rename = "Design & Creative")]
    Design,
    #[serde(rename = "Language & Communication")]
    Languages,
    #[serde(rename = "Music & Arts")]
    Music,
    #[serde(rename = "Other")]
    Other,
}

impl ServiceCategory {
    /// Human-readable label, identical to the persisted form
    pub fn label(&self) -> &'static str {
        match self {
            ServiceCategory::Cooking => "Cooking & Baking",
            ServiceCategory::Tutoring => "Tutoring",
            ServiceCategory::Repairs => "Repairs & DIY",
            ServiceCategory::Arts => "Arts & Crafts",
            ServiceCategory::Cleaning => "Cleaning",
            ServiceCategory::Gardening => "Gardening",
            ServiceCategory::TechSupport => "Tech Support",
            ServiceCategory::Programming => "Programming & IT",
            ServiceCategory::Design => "Design & Creative",
            ServiceCategory::Languages => "Language & Communication",
            ServiceCategory::Music => "Music & Arts",
            ServiceCategory::Other => "Other",
        }
    }
}

impl std::fmt::Display for ServiceCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Unit the listing price is quoted in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceUnit {
    Hour,
    Job,
    Item,
}

/// A seller's published service offer
///
/// `seller_name`/`seller_avatar` are snapshots taken at creation, not live
/// references; the avatar snapshot is refreshed by the profile cascade when
/// the owning user changes their avatar. `rating` is the running arithmetic
/// mean of all review ratings ever recorded for this listing and
/// `review_count` the number of such reviews.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceListing {
    /// Unique identifier for the listing
    pub id: String,

    /// Owning seller's user id
    pub seller_id: String,

    /// Seller display name snapshot
    pub seller_name: String,

    /// Seller avatar snapshot
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seller_avatar: Option<String>,

    /// Listing title
    pub title: String,

    /// Rich-text description
    pub description: String,

    /// Non-negative price
    pub price: f64,

    /// Unit the price is quoted in
    pub price_unit: PriceUnit,

    /// Service category
    pub category: ServiceCategory,

    /// Free-text location
    pub location: String,

    /// Cover image reference
    pub image_url: String,

    /// Creation timestamp
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,

    /// Running mean of review ratings; 0 until the first review
    pub rating: f64,

    /// Number of reviews recorded
    pub review_count: u32,

    /// Whether the service is delivered online
    pub is_online: bool,
}

impl ServiceListing {
    /// Creates a new listing owned by `seller`, snapshotting its name and
    /// avatar
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        seller: &User,
        title: impl Into<String>,
        description: impl Into<String>,
        price: f64,
        price_unit: PriceUnit,
        category: ServiceCategory,
        location: impl Into<String>,
        image_url: impl Into<String>,
        is_online: bool,
    ) -> Self {
        Self {
            id: generate_id(),
            seller_id: seller.id.clone(),
            seller_name: seller.name.clone(),
            seller_avatar: seller.avatar_url.clone(),
            title: title.into(),
            description: description.into(),
            price,
            price_unit,
            category,
            location: location.into(),
            image_url: image_url.into(),
            created_at: Utc::now(),
            rating: 0.0,
            review_count: 0,
            is_online,
        }
    }

    /// Folds one more review rating into the running mean
    ///
    /// The update is commutative: for a fixed multiset of ratings the final
    /// mean does not depend on submission order. The first review on a
    /// fresh listing yields exactly that review's rating.
    pub fn record_review(&mut self, rating: u8) {
        let total = self.rating * f64::from(self.review_count);
        self.review_count += 1;
        self.rating = (total + f64::from(rating)) / f64::from(self.review_count);
    }

    /// Removes one previously recorded rating from the running mean
    ///
    /// No marketplace flow deletes reviews today; this is the inverse of
    /// [`record_review`](Self::record_review) kept alongside it so the
    /// aggregate cannot drift if a retraction path is ever introduced.
    /// Retracting the last review resets the aggregate to 0 rating /
    /// 0 count.
    pub fn retract_review(&mut self, rating: u8) {
        match self.review_count {
            0 => {}
            1 => {
                self.review_count = 0;
                self.rating = 0.0;
            }
            count => {
                let total = self.rating * f64::from(count);
                self.review_count = count - 1;
                self.rating = (total - f64::from(rating)) / f64::from(self.review_count);
            }
        }
    }
}
