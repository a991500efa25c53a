//! Profile service: user edits and the avatar cascade.

use std::sync::Arc;

use tracing::{debug, info};

use crate::errors::{DomainError, DomainResult};
use crate::repositories::{GalleryRepository, ListingRepository, UserRepository};
use crate::store::KeyValueStore;

/// Profile mutations, including the denormalized-avatar cascade
///
/// Listings carry a snapshot of their seller's avatar. When the avatar
/// changes, the user record is written first and every owned listing is
/// then rewritten with the new snapshot. A crash between those writes
/// leaves a transiently stale listing snapshot; that is the accepted
/// limitation of the snapshot-plus-cascade design.
pub struct ProfileService<S: KeyValueStore> {
    users: UserRepository<S>,
    listings: ListingRepository<S>,
    galleries: GalleryRepository<S>,
}

impl<S: KeyValueStore> ProfileService<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self {
            users: UserRepository::new(store.clone()),
            listings: ListingRepository::new(store.clone()),
            galleries: GalleryRepository::new(store),
        }
    }

    /// Update a user's biography
    pub fn update_bio(&self, user_id: &str, bio: &str) -> DomainResult<()> {
        let mut user = self
            .users
            .find_by_id(user_id)?
            .ok_or_else(|| DomainError::not_found("User"))?;
        user.set_bio(bio);
        self.users.save(&user)
    }

    /// Update a user's avatar and cascade the snapshot onto their listings
    pub fn update_avatar(&self, user_id: &str, avatar_url: &str) -> DomainResult<()> {
        let mut user = self
            .users
            .find_by_id(user_id)?
            .ok_or_else(|| DomainError::not_found("User"))?;
        user.set_avatar(avatar_url);
        self.users.save(&user)?;

        // Full scan: listings keep no index by seller
        let mut updated = 0usize;
        for mut listing in self.listings.list()? {
            if listing.seller_id == user_id {
                listing.seller_avatar = Some(avatar_url.to_string());
                self.listings.save(&listing)?;
                updated += 1;
            }
        }
        info!(user_id, listings = updated, "avatar cascade applied");
        Ok(())
    }

    /// Prepend an image to the user's portfolio gallery
    pub fn add_gallery_image(&self, user_id: &str, image_url: &str) -> DomainResult<()> {
        debug!(user_id, "gallery image added");
        self.galleries.add_image(user_id, image_url)
    }

    /// Remove an image from the user's portfolio gallery
    pub fn remove_gallery_image(&self, user_id: &str, image_url: &str) -> DomainResult<()> {
        self.galleries.remove_image(user_id, image_url)
    }
}
