//! Message entity: buyer-to-seller contact, write-once.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::id::generate_id;

/// A message sent between two users, optionally about a listing
///
/// Messages are append-only: no mutator updates or deletes them. The
/// `read` flag is persisted for a future inbox feature but nothing
/// transitions it to true yet, so consumers must not rely on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    /// Unique identifier for the message
    pub id: String,

    /// Sending user id
    pub sender_id: String,

    /// Receiving user id
    pub receiver_id: String,

    /// Listing the message is about, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub listing_id: Option<String>,

    /// Message body
    pub content: String,

    /// Send timestamp
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub timestamp: DateTime<Utc>,

    /// Read marker, currently write-once false
    pub read: bool,
}

impl Message {
    /// Creates a new unread message
    pub fn new(
        sender_id: impl Into<String>,
        receiver_id: impl Into<String>,
        listing_id: Option<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            id: generate_id(),
            sender_id: sender_id.into(),
            receiver_id: receiver_id.into(),
            listing_id,
            content: content.into(),
            timestamp: Utc::now(),
            read: false,
        }
    }
}
