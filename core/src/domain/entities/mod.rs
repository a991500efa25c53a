//! Domain entities persisted by the storage layer

pub mod booking;
pub mod listing;
pub mod message;
pub mod review;
pub mod user;

pub use booking::{Booking, BookingStatus};
pub use listing::{PriceUnit, ServiceCategory, ServiceListing};
pub use message::Message;
pub use review::Review;
pub use user::{User, UserRole};
