//! # SkillShare Core
//!
//! Core domain layer for the SkillShare marketplace storage. This crate
//! contains the domain entities, the key-value store abstraction, entity
//! repositories with their seeding policy, the session manager, and the
//! domain services (profile cascade, bookings, reviews, content assist)
//! that consumers build on.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;
pub mod store;

// Re-export commonly used types for convenience
pub use domain::entities::{
    Booking, BookingStatus, Message, PriceUnit, Review, ServiceCategory, ServiceListing, User,
    UserRole,
};
pub use domain::id::generate_id;
pub use errors::{DomainError, DomainResult};
pub use repositories::{
    BookingRepository, GalleryRepository, ListingRepository, MessageRepository, ReviewRepository,
    UserRepository,
};
pub use services::{
    AccountService, AssistError, BookingService, ContentAssist, GeneratedImage,
    ListingAssistService, ProfileService, ReviewService, SessionService,
};
pub use store::{KeyValueStore, MemoryStore};
