//! Seed-once storage initialization.
//!
//! On a fresh substrate the Users and Listings collections receive a fixed
//! built-in seed; the remaining collections seed to empty. Initialization
//! is idempotent: once any value exists under a key (even an empty
//! collection) that key is left alone. It must run before the first read
//! in a fresh process and never touches the session pointer.

use chrono::{Duration, Utc};
use tracing::info;

use crate::domain::entities::listing::{PriceUnit, ServiceCategory, ServiceListing};
use crate::domain::entities::user::{User, UserRole};
use crate::errors::DomainResult;
use crate::store::{keys, KeyValueStore};

/// Built-in demo users present on a fresh install
pub fn initial_users() -> Vec<User> {
    vec![
        User {
            id: "u1".to_string(),
            name: "Sarah Jenkins".to_string(),
            email: "sarah@example.com".to_string(),
            role: UserRole::Seller,
            avatar_url: Some("https://images.unsplash.com/photo-1494790108377-be9c29b29330?auto=format&fit=crop&q=80&w=200&h=200".to_string()),
            bio: Some("Passionate baker with 10 years of experience. I specialize in organic sourdough and french pastries. I believe in using only the highest quality local ingredients.".to_string()),
            sessions_completed: Some(45),
        },
        User {
            id: "u2".to_string(),
            name: "Mike Ross".to_string(),
            email: "mike@example.com".to_string(),
            role: UserRole::Buyer,
            avatar_url: Some("https://images.unsplash.com/photo-1599566150163-29194dcaad36?auto=format&fit=crop&q=80&w=200&h=200".to_string()),
            bio: None,
            sessions_completed: None,
        },
        User {
            id: "u3".to_string(),
            name: "Admin User".to_string(),
            email: "admin@example.com".to_string(),
            role: UserRole::Admin,
            avatar_url: Some("https://images.unsplash.com/photo-1535713875002-d1d0cf377fde?auto=format&fit=crop&q=80&w=200&h=200".to_string()),
            bio: None,
            sessions_completed: None,
        },
    ]
}

/// Built-in demo listings present on a fresh install
pub fn initial_listings() -> Vec<ServiceListing> {
    let now = Utc::now();
    vec![
        ServiceListing {
            id: "l1".to_string(),
            seller_id: "u1".to_string(),
            seller_name: "Sarah Jenkins".to_string(),
            seller_avatar: Some("https://images.unsplash.com/photo-1494790108377-be9c29b29330?auto=format&fit=crop&q=80&w=200&h=200".to_string()),
            title: "Artisan Sourdough Masterclass".to_string(),
            description: "Learn the secrets of perfect sourdough from home. We will cover starter maintenance, hydration levels, and baking techniques.".to_string(),
            price: 450.0,
            price_unit: PriceUnit::Hour,
            category: ServiceCategory::Cooking,
            location: "Online".to_string(),
            image_url: "https://images.unsplash.com/photo-1585478259715-876a6a81fc08?auto=format&fit=crop&q=80&w=800&h=600".to_string(),
            created_at: now - Duration::milliseconds(100_000),
            rating: 4.9,
            review_count: 28,
            is_online: true,
        },
        ServiceListing {
            id: "l2".to_string(),
            seller_id: "u4".to_string(),
            seller_name: "David Chen".to_string(),
            seller_avatar: Some("https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?auto=format&fit=crop&q=80&w=200&h=200".to_string()),
            title: "I teach Python to beginners".to_string(),
            description: "Get started with programming using Python. I focus on practical exercises and building real-world projects.".to_string(),
            price: 350.0,
            price_unit: PriceUnit::Hour,
            category: ServiceCategory::Programming,
            location: "Westside Library / Online".to_string(),
            image_url: "https://images.unsplash.com/photo-1526374965328-7f61d4dc18c5?auto=format&fit=crop&q=80&w=800&h=600".to_string(),
            created_at: now - Duration::milliseconds(200_000),
            rating: 5.0,
            review_count: 15,
            is_online: true,
        },
        ServiceListing {
            id: "l3".to_string(),
            seller_id: "u5".to_string(),
            seller_name: "Elena Rodriguez".to_string(),
            seller_avatar: Some("https://images.unsplash.com/photo-1573496359142-b8d87734a5a2?auto=format&fit=crop&q=80&w=200&h=200".to_string()),
            title: "I design basic UX/UI works".to_string(),
            description: "Master Figma and design principles. I will help you create your first mobile app prototype.".to_string(),
            price: 850.0,
            price_unit: PriceUnit::Job,
            category: ServiceCategory::Design,
            location: "North Hills".to_string(),
            image_url: "https://images.unsplash.com/photo-1561070791-2526d30994b5?auto=format&fit=crop&q=80&w=800&h=600".to_string(),
            created_at: now - Duration::milliseconds(300_000),
            rating: 4.7,
            review_count: 10,
            is_online: false,
        },
    ]
}

fn seed_if_absent<S: KeyValueStore + ?Sized>(
    store: &S,
    key: &str,
    value: impl FnOnce() -> DomainResult<String>,
) -> DomainResult<()> {
    if store.get(key)?.is_none() {
        store.set(key, &value()?)?;
    }
    Ok(())
}

/// Ensure every collection key exists, seeding defaults where absent
///
/// Safe to invoke any number of times; existing values are never
/// overwritten. The session pointer key is deliberately not touched.
pub fn initialize<S: KeyValueStore + ?Sized>(store: &S) -> DomainResult<()> {
    seed_if_absent(store, keys::USERS, || {
        Ok(serde_json::to_string(&initial_users())?)
    })?;
    seed_if_absent(store, keys::LISTINGS, || {
        Ok(serde_json::to_string(&initial_listings())?)
    })?;
    seed_if_absent(store, keys::BOOKINGS, || Ok("[]".to_string()))?;
    seed_if_absent(store, keys::MESSAGES, || Ok("[]".to_string()))?;
    seed_if_absent(store, keys::REVIEWS, || Ok("[]".to_string()))?;
    seed_if_absent(store, keys::GALLERIES, || Ok("{}".to_string()))?;

    info!("storage initialized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn test_fresh_store_is_seeded() {
        let store = MemoryStore::new();
        initialize(&store).unwrap();

        let users: Vec<User> =
            serde_json::from_str(&store.get(keys::USERS).unwrap().unwrap()).unwrap();
        assert_eq!(users.len(), 3);
        assert_eq!(users[0].name, "Sarah Jenkins");

        let listings: Vec<ServiceListing> =
            serde_json::from_str(&store.get(keys::LISTINGS).unwrap().unwrap()).unwrap();
        assert_eq!(listings.len(), 3);

        assert_eq!(store.get(keys::BOOKINGS).unwrap().as_deref(), Some("[]"));
        assert_eq!(store.get(keys::GALLERIES).unwrap().as_deref(), Some("{}"));
    }

    #[test]
    fn test_initialize_is_idempotent() {
        let store = MemoryStore::new();
        initialize(&store).unwrap();
        let first = store.get(keys::USERS).unwrap();

        initialize(&store).unwrap();
        assert_eq!(store.get(keys::USERS).unwrap(), first);
    }

    #[test]
    fn test_existing_values_are_preserved() {
        let store = MemoryStore::new();
        // An empty collection still counts as present
        store.set(keys::USERS, "[]").unwrap();
        initialize(&store).unwrap();

        assert_eq!(store.get(keys::USERS).unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_session_key_is_untouched() {
        let store = MemoryStore::new();
        initialize(&store).unwrap();
        assert!(store.get(keys::CURRENT_USER).unwrap().is_none());
    }
}
