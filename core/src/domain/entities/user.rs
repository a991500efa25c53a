//! User entity representing a registered marketplace member.

use serde::{Deserialize, Serialize};

use crate::domain::id::generate_id;

/// Role a user holds in the marketplace; fixed at registration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    /// A member booking services from others
    Buyer,
    /// A member offering services
    Seller,
    /// A marketplace administrator
    Admin,
}

/// User entity representing a registered member
///
/// Email is the unauthenticated login key and is matched
/// case-insensitively. Users are never deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique identifier for the user
    pub id: String,

    /// Display name
    pub name: String,

    /// Email address used for login lookup
    pub email: String,

    /// Role, fixed at creation
    pub role: UserRole,

    /// Avatar reference (URL or embedded image data)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,

    /// Rich-text biography
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,

    /// Number of completed sessions, if tracked
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sessions_completed: Option<u32>,
}

impl User {
    /// Creates a new User at registration time
    pub fn new(name: impl Into<String>, email: impl Into<String>, role: UserRole) -> Self {
        Self {
            id: generate_id(),
            name: name.into(),
            email: email.into(),
            role,
            avatar_url: None,
            bio: None,
            sessions_completed: None,
        }
    }

    /// Updates the biography
    pub fn set_bio(&mut self, bio: impl Into<String>) {
        self.bio = Some(bio.into());
    }

    /// Updates the avatar reference
    ///
    /// Listings denormalize this value; callers that persist the change
    /// must run the avatar cascade so listing snapshots follow.
    pub fn set_avatar(&mut self, avatar_url: impl Into<String>) {
        self.avatar_url = Some(avatar_url.into());
    }

    /// Checks if the user offers services
    pub fn is_seller(&self) -> bool {
        matches!(self.role, UserRole::Seller)
    }

    /// Checks if the user is an administrator
    pub fn is_admin(&self) -> bool {
        matches!(self.role, UserRole::Admin)
    }
}
