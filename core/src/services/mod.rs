//! Domain services orchestrating repositories
//!
//! Business rules (booking uniqueness, rating bounds, lifecycle checks)
//! live here; repositories below this layer trust their inputs.

pub mod accounts;
pub mod assist;
pub mod bookings;
pub mod profile;
pub mod reviews;
pub mod session;

pub use accounts::AccountService;
pub use assist::{AssistError, ContentAssist, GeneratedImage, ListingAssistService};
pub use bookings::BookingService;
pub use profile::ProfileService;
pub use reviews::ReviewService;
pub use session::SessionService;
