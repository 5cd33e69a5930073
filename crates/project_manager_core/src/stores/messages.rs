use std::collections::HashMap;

use chrono::Utc;
use uuid::Uuid;

use crate::domain::{Message, Sender};
use crate::validation::{ValidationError, ValidationResult};

/// Append-only message lists, one per session, in insertion order.
#[derive(Debug, Default, Clone)]
pub struct MessageStore {
    by_session: HashMap<Uuid, Vec<Message>>,
}

impl MessageStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the list of `session_id` with messages loaded from the remote.
    pub fn seed(&mut self, session_id: Uuid, messages: Vec<Message>) {
        self.by_session.insert(session_id, messages);
    }

    /// Registers an empty list for a new session.
    pub fn open(&mut self, session_id: Uuid) {
        self.by_session.entry(session_id).or_default();
    }

    /// Whether messages for `session_id` are already held locally.
    pub fn is_loaded(&self, session_id: Uuid) -> bool {
        self.by_session.contains_key(&session_id)
    }

    pub fn messages(&self, session_id: Uuid) -> &[Message] {
        self.by_session
            .get(&session_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn append(
        &mut self,
        session_id: Uuid,
        text: &str,
        sender: Sender,
    ) -> ValidationResult<Message> {
        if text.trim().is_empty() {
            return Err(ValidationError::EmptyMessage);
        }
        let message = Message {
            id: Uuid::new_v4(),
            session_id,
            text: text.to_string(),
            sender,
            sent_at: Utc::now(),
        };
        self.by_session
            .entry(session_id)
            .or_default()
            .push(message.clone());
        Ok(message)
    }
}
