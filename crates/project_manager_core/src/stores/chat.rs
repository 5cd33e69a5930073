use uuid::Uuid;

use crate::domain::{preview_of, ChatSession, Message, Sender};
use crate::stores::{MessageStore, SessionStore};
use crate::validation::{ValidationError, ValidationResult};

/// Sessions and their messages, kept together so that appending a message and
/// refreshing the session preview happen as one step.
#[derive(Debug, Default, Clone)]
pub struct ChatStore {
    sessions: SessionStore,
    messages: MessageStore,
}

impl ChatStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sessions(&self) -> &SessionStore {
        &self.sessions
    }

    pub fn list_sessions(&self) -> &[ChatSession] {
        self.sessions.list()
    }

    pub fn active_session_id(&self) -> Option<Uuid> {
        self.sessions.active_id()
    }

    pub fn seed_sessions(&mut self, sessions: Vec<ChatSession>) {
        self.sessions.seed(sessions);
    }

    pub fn seed_messages(&mut self, session_id: Uuid, messages: Vec<Message>) {
        self.messages.seed(session_id, messages);
    }

    pub fn has_messages_loaded(&self, session_id: Uuid) -> bool {
        self.messages.is_loaded(session_id)
    }

    pub fn create_session(&mut self) -> ChatSession {
        let session = self.sessions.create();
        self.messages.open(session.id);
        session
    }

    pub fn select_session(&mut self, id: Uuid) -> bool {
        self.sessions.select(id)
    }

    pub fn messages(&self, session_id: Uuid) -> &[Message] {
        self.messages.messages(session_id)
    }

    /// Messages of the active session, empty when none is active.
    pub fn active_messages(&self) -> &[Message] {
        match self.sessions.active_id() {
            Some(id) => self.messages.messages(id),
            None => &[],
        }
    }

    /// Appends `text` to `session_id`. User messages also replace the session
    /// preview.
    pub fn append_message(
        &mut self,
        session_id: Uuid,
        text: &str,
        sender: Sender,
    ) -> ValidationResult<Message> {
        if !self.sessions.contains(session_id) {
            return Err(ValidationError::UnknownSession(session_id));
        }
        let message = self.messages.append(session_id, text, sender)?;
        if sender == Sender::User {
            self.sessions.set_preview(session_id, preview_of(text));
        }
        Ok(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_message_updates_preview() {
        let mut store = ChatStore::new();
        let session = store.create_session();

        store
            .append_message(session.id, "How do I create a project?", Sender::User)
            .unwrap();

        let preview = &store.sessions().get(session.id).unwrap().preview;
        assert_eq!(preview, "How do I create a pr...");
    }

    #[test]
    fn bot_message_keeps_preview() {
        let mut store = ChatStore::new();
        let session = store.create_session();
        store.append_message(session.id, "first question", Sender::User).unwrap();
        store.append_message(session.id, "a long bot answer here", Sender::Bot).unwrap();

        let preview = &store.sessions().get(session.id).unwrap().preview;
        assert_eq!(preview, "first question...");
    }

    #[test]
    fn blank_message_changes_nothing() {
        let mut store = ChatStore::new();
        let session = store.create_session();

        let result = store.append_message(session.id, "  ", Sender::User);
        assert_eq!(result, Err(ValidationError::EmptyMessage));
        assert!(store.messages(session.id).is_empty());
        assert!(store.sessions().get(session.id).unwrap().preview.is_empty());
    }

    #[test]
    fn unknown_session_is_rejected() {
        let mut store = ChatStore::new();
        store.create_session();
        let stray = Uuid::new_v4();

        let result = store.append_message(stray, "hello", Sender::User);
        assert_eq!(result, Err(ValidationError::UnknownSession(stray)));
        assert!(store.messages(stray).is_empty());
    }

    #[test]
    fn sessions_keep_their_own_messages() {
        let mut store = ChatStore::new();
        let first = store.create_session();
        store.append_message(first.id, "in the first", Sender::User).unwrap();

        let second = store.create_session();
        assert_eq!(store.active_session_id(), Some(second.id));
        assert!(store.active_messages().is_empty());
        store.append_message(second.id, "in the second", Sender::User).unwrap();

        assert_eq!(store.messages(first.id).len(), 1);
        assert_eq!(store.messages(first.id)[0].text, "in the first");
        assert!(store.select_session(first.id));
        assert_eq!(store.active_messages()[0].text, "in the first");
    }
}
