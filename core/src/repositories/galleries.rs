//! Gallery repository: per-user portfolio image sequences.

use std::collections::HashMap;
use std::sync::Arc;

use crate::errors::DomainResult;
use crate::store::{keys, KeyValueStore};

/// Repository for portfolio galleries
///
/// All galleries live under one key as a map from user id to an ordered
/// image list, newest first. Ownership gating is a caller concern.
pub struct GalleryRepository<S: KeyValueStore> {
    store: Arc<S>,
}

type Galleries = HashMap<String, Vec<String>>;

impl<S: KeyValueStore> GalleryRepository<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    fn load(&self) -> DomainResult<Galleries> {
        match self.store.get(keys::GALLERIES)? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(Galleries::new()),
        }
    }

    fn persist(&self, galleries: &Galleries) -> DomainResult<()> {
        self.store
            .set(keys::GALLERIES, &serde_json::to_string(galleries)?)
    }

    /// The user's gallery, newest image first; empty when none exists
    pub fn for_user(&self, user_id: &str) -> DomainResult<Vec<String>> {
        Ok(self.load()?.remove(user_id).unwrap_or_default())
    }

    /// Prepend an image to the user's gallery
    pub fn add_image(&self, user_id: &str, image_url: &str) -> DomainResult<()> {
        let mut galleries = self.load()?;
        galleries
            .entry(user_id.to_string())
            .or_default()
            .insert(0, image_url.to_string());
        self.persist(&galleries)
    }

    /// Remove every occurrence of an image from the user's gallery
    pub fn remove_image(&self, user_id: &str, image_url: &str) -> DomainResult<()> {
        let mut galleries = self.load()?;
        if let Some(images) = galleries.get_mut(user_id) {
            images.retain(|img| img != image_url);
            self.persist(&galleries)?;
        }
        Ok(())
    }
}
