//! Domain model for the SkillShare marketplace

pub mod entities;
pub mod id;

pub use entities::*;
pub use id::generate_id;
