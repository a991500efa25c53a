//! Listing repository: the Listings collection and seller queries.

use std::sync::Arc;

use crate::domain::entities::listing::ServiceListing;
use crate::errors::DomainResult;
use crate::store::{keys, KeyValueStore};

use super::{load_collection, store_collection, upsert_by_id};

/// Repository for the Listings collection
pub struct ListingRepository<S: KeyValueStore> {
    store: Arc<S>,
}

impl<S: KeyValueStore> ListingRepository<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// All listings in insertion order
    pub fn list(&self) -> DomainResult<Vec<ServiceListing>> {
        load_collection(self.store.as_ref(), keys::LISTINGS)
    }

    /// Upsert a listing by id
    pub fn save(&self, listing: &ServiceListing) -> DomainResult<()> {
        let mut listings = self.list()?;
        upsert_by_id(&mut listings, listing.clone(), |l| &l.id);
        store_collection(self.store.as_ref(), keys::LISTINGS, &listings)
    }

    /// Remove a listing by id; removing an unknown id is a no-op
    pub fn delete(&self, id: &str) -> DomainResult<()> {
        let mut listings = self.list()?;
        listings.retain(|l| l.id != id);
        store_collection(self.store.as_ref(), keys::LISTINGS, &listings)
    }

    /// Find a listing by id
    pub fn find_by_id(&self, id: &str) -> DomainResult<Option<ServiceListing>> {
        Ok(self.list()?.into_iter().find(|l| l.id == id))
    }

    /// All listings owned by the given seller
    pub fn by_seller(&self, seller_id: &str) -> DomainResult<Vec<ServiceListing>> {
        Ok(self
            .list()?
            .into_iter()
            .filter(|l| l.seller_id == seller_id)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::listing::{PriceUnit, ServiceCategory};
    use crate::domain::entities::user::{User, UserRole};

    fn repo() -> ListingRepository<crate::store::MemoryStore> {
        ListingRepository::new(Arc::new(crate::store::MemoryStore::new()))
    }

    fn listing_for(seller: &User, title: &str) -> ServiceListing {
        ServiceListing::new(
            seller,
            title,
            "desc",
            450.0,
            PriceUnit::Hour,
            ServiceCategory::Cooking,
            "Online",
            "https://example.com/img.jpg",
            true,
        )
    }

    #[test]
    fn test_save_delete_roundtrip() {
        let repo = repo();
        let seller = User::new("Sarah Jenkins", "sarah@example.com", UserRole::Seller);
        let listing = listing_for(&seller, "Sourdough");
        repo.save(&listing).unwrap();
        assert!(repo.find_by_id(&listing.id).unwrap().is_some());

        repo.delete(&listing.id).unwrap();
        assert!(repo.find_by_id(&listing.id).unwrap().is_none());
        assert!(repo.list().unwrap().is_empty());
    }

    #[test]
    fn test_delete_unknown_id_is_noop() {
        let repo = repo();
        let seller = User::new("Sarah Jenkins", "sarah@example.com", UserRole::Seller);
        let listing = listing_for(&seller, "Sourdough");
        repo.save(&listing).unwrap();

        repo.delete("missing").unwrap();
        assert_eq!(repo.list().unwrap().len(), 1);
    }

    #[test]
    fn test_by_seller_filters() {
        let repo = repo();
        let sarah = User::new("Sarah Jenkins", "sarah@example.com", UserRole::Seller);
        let david = User::new("David Chen", "david@example.com", UserRole::Seller);

        repo.save(&listing_for(&sarah, "Sourdough")).unwrap();
        repo.save(&listing_for(&sarah, "Pastry")).unwrap();
        repo.save(&listing_for(&david, "Python")).unwrap();

        let sarahs = repo.by_seller(&sarah.id).unwrap();
        assert_eq!(sarahs.len(), 2);
        assert!(sarahs.iter().all(|l| l.seller_id == sarah.id));
    }
}
