use uuid::Uuid;

use crate::domain::ChatSession;

/// Ordered chat sessions, newest first, plus the active one.
#[derive(Debug, Default, Clone)]
pub struct SessionStore {
    sessions: Vec<ChatSession>,
    active: Option<Uuid>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the list with `sessions` and activates the first one.
    pub fn seed(&mut self, sessions: Vec<ChatSession>) {
        self.active = sessions.first().map(|s| s.id);
        self.sessions = sessions;
    }

    pub fn list(&self) -> &[ChatSession] {
        &self.sessions
    }

    pub fn active_id(&self) -> Option<Uuid> {
        self.active
    }

    pub fn get(&self, id: Uuid) -> Option<&ChatSession> {
        self.sessions.iter().find(|s| s.id == id)
    }

    pub fn contains(&self, id: Uuid) -> bool {
        self.get(id).is_some()
    }

    /// Prepends a new session and makes it active.
    pub fn create(&mut self) -> ChatSession {
        let session = ChatSession::new();
        self.sessions.insert(0, session.clone());
        self.active = Some(session.id);
        session
    }

    /// Makes `id` active. Unknown ids leave the active session unchanged and
    /// return `false`.
    pub fn select(&mut self, id: Uuid) -> bool {
        if !self.contains(id) {
            return false;
        }
        self.active = Some(id);
        true
    }

    pub fn set_preview(&mut self, id: Uuid, preview: String) -> bool {
        match self.sessions.iter_mut().find(|s| s.id == id) {
            Some(session) => {
                session.preview = preview;
                true
            }
            None => false,
        }
    }
}
