//! Message repository: the append-only Messages collection.

use std::sync::Arc;

use crate::domain::entities::message::Message;
use crate::errors::DomainResult;
use crate::store::{keys, KeyValueStore};

use super::{load_collection, store_collection};

/// Repository for the Messages collection
///
/// Messages are append-only: there is no update or delete path.
pub struct MessageRepository<S: KeyValueStore> {
    store: Arc<S>,
}

impl<S: KeyValueStore> MessageRepository<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// All messages in send order
    pub fn list(&self) -> DomainResult<Vec<Message>> {
        load_collection(self.store.as_ref(), keys::MESSAGES)
    }

    /// Append a message to the collection
    pub fn send(&self, message: &Message) -> DomainResult<()> {
        let mut messages = self.list()?;
        messages.push(message.clone());
        store_collection(self.store.as_ref(), keys::MESSAGES, &messages)
    }

    /// Messages addressed to the given user
    pub fn by_receiver(&self, receiver_id: &str) -> DomainResult<Vec<Message>> {
        Ok(self
            .list()?
            .into_iter()
            .filter(|m| m.receiver_id == receiver_id)
            .collect())
    }

    /// Messages exchanged between two users, in send order
    pub fn between(&self, a: &str, b: &str) -> DomainResult<Vec<Message>> {
        Ok(self
            .list()?
            .into_iter()
            .filter(|m| {
                (m.sender_id == a && m.receiver_id == b)
                    || (m.sender_id == b && m.receiver_id == a)
            })
            .collect())
    }
}
