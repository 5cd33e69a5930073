//! services/client/src/screens/chat.rs
//!
//! The chat screen: a sidebar of sessions, the messages of the active one, and
//! the simulated assistant that answers each user message after a delay.

use crate::error::{ClientError, ClientResult};
use crate::screens::{pending::PendingTask, state::AppContext};
use project_manager_core::domain::{ChatSession, Message, Notification, Sender, User};
use project_manager_core::stores::ChatStore;
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

/// Screen-local state shared with the pending reply task.
#[derive(Debug, Default)]
struct ChatState {
    store: ChatStore,
    awaiting_reply: bool,
}

/// What the chat screen currently shows.
#[derive(Debug, Clone, Serialize)]
pub struct ChatView {
    pub sessions: Vec<ChatSession>,
    pub active_session_id: Option<Uuid>,
    pub messages: Vec<Message>,
    pub awaiting_reply: bool,
}

pub struct ChatScreen {
    ctx: Arc<AppContext>,
    user: User,
    state: Arc<Mutex<ChatState>>,
    token: CancellationToken,
    pending: Option<PendingTask>,
}

impl ChatScreen {
    /// Loads the user's sessions and the messages of the first one.
    pub async fn mount(ctx: Arc<AppContext>) -> ClientResult<Self> {
        let user = ctx.require_user()?;
        let token = ctx.screen_token();

        let loaded = tokio::select! {
            biased;
            _ = token.cancelled() => {
                info!("Chat screen mount cancelled by teardown.");
                return Err(ClientError::Cancelled);
            }
            result = Self::load(&ctx, user.user_id) => result,
        };
        let store = loaded?;
        info!(
            "Chat screen mounted for user {} with {} sessions.",
            user.user_id,
            store.list_sessions().len()
        );

        Ok(Self {
            ctx,
            user,
            state: Arc::new(Mutex::new(ChatState {
                store,
                awaiting_reply: false,
            })),
            token,
            pending: None,
        })
    }

    async fn load(ctx: &AppContext, user_id: Uuid) -> ClientResult<ChatStore> {
        let mut store = ChatStore::new();
        store.seed_sessions(ctx.chat.list_sessions(user_id).await?);
        if let Some(active) = store.active_session_id() {
            let messages = ctx.chat.load_messages(active).await?;
            store.seed_messages(active, messages);
        }
        Ok(store)
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    /// Sends `text` as the user in the active session and schedules the reply.
    ///
    /// Returns `None` when nothing was sent: blank text, or a reply still pending.
    pub async fn send_message(&mut self, text: &str) -> ClientResult<Option<Message>> {
        if text.trim().is_empty() {
            return Ok(None);
        }
        if self.token.is_cancelled() {
            return Err(ClientError::Cancelled);
        }

        let simulate = self.ctx.config.chat_simulation;
        let (message, session_id) = {
            let mut state = self.state.lock().await;
            if state.awaiting_reply {
                debug!("Reply still pending; ignoring send.");
                return Ok(None);
            }
            let session_id = match state.store.active_session_id() {
                Some(id) => id,
                None => state.store.create_session().id,
            };
            let message = state.store.append_message(session_id, text, Sender::User)?;
            state.awaiting_reply = simulate;
            (message, session_id)
        };

        if simulate {
            self.pending = Some(self.spawn_reply(session_id, text.to_string()));
        }
        Ok(Some(message))
    }

    fn spawn_reply(&self, session_id: Uuid, text: String) -> PendingTask {
        let ctx = self.ctx.clone();
        let state_lock = self.state.clone();
        PendingTask::spawn(self.token.child_token(), move |token| async move {
            let reply = ctx.chat.reply_to(session_id, &text).await;

            let mut state = state_lock.lock().await;
            if token.is_cancelled() {
                return;
            }
            state.awaiting_reply = false;
            match reply {
                Ok(answer) => {
                    if let Err(e) = state.store.append_message(session_id, &answer, Sender::Bot) {
                        warn!("Dropping reply for session {}: {}", session_id, e);
                    }
                }
                Err(e) => {
                    error!("Failed to get a reply for session {}: {}", session_id, e);
                    ctx.notify(Notification::error("Error", "Could not send the message"));
                }
            }
        })
    }

    /// Starts a new conversation and makes it active.
    pub async fn new_chat(&self) -> ChatSession {
        let session = self.state.lock().await.store.create_session();
        info!("Created chat session {}", session.id);
        session
    }

    /// Switches to `session_id`, loading its messages the first time.
    /// Unknown ids are ignored and return `false`.
    pub async fn select_session(&self, session_id: Uuid) -> ClientResult<bool> {
        if self.token.is_cancelled() {
            return Err(ClientError::Cancelled);
        }
        let needs_load = {
            let mut state = self.state.lock().await;
            if !state.store.select_session(session_id) {
                debug!("Ignoring selection of unknown session {}", session_id);
                return Ok(false);
            }
            !state.store.has_messages_loaded(session_id)
        };

        if needs_load {
            let loaded = tokio::select! {
                biased;
                _ = self.token.cancelled() => {
                    info!("Loading session {} cancelled by teardown.", session_id);
                    return Err(ClientError::Cancelled);
                }
                result = self.ctx.chat.load_messages(session_id) => result,
            };
            let messages = loaded?;
            let mut state = self.state.lock().await;
            if self.token.is_cancelled() {
                return Err(ClientError::Cancelled);
            }
            if !state.store.has_messages_loaded(session_id) {
                state.store.seed_messages(session_id, messages);
            }
        }
        Ok(true)
    }

    pub async fn snapshot(&self) -> ChatView {
        let state = self.state.lock().await;
        ChatView {
            sessions: state.store.list_sessions().to_vec(),
            active_session_id: state.store.active_session_id(),
            messages: state.store.active_messages().to_vec(),
            // A discarded reply never clears the flag itself.
            awaiting_reply: state.awaiting_reply && !self.token.is_cancelled(),
        }
    }

    pub async fn messages_of(&self, session_id: Uuid) -> Vec<Message> {
        self.state.lock().await.store.messages(session_id).to_vec()
    }

    pub fn has_pending_reply(&self) -> bool {
        self.pending.as_ref().is_some_and(|p| !p.is_finished())
    }

    /// Waits until the pending reply, if any, has been applied or discarded.
    pub async fn settle(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.wait().await;
        }
    }

    /// Tears the screen down. A reply that has not been applied yet never will be.
    pub fn dispose(&mut self) {
        if self.token.is_cancelled() {
            return;
        }
        self.token.cancel();
        if let Some(pending) = self.pending.take() {
            pending.cancel();
        }
        info!("Chat screen disposed.");
    }

    pub fn is_disposed(&self) -> bool {
        self.token.is_cancelled()
    }
}

impl Drop for ChatScreen {
    fn drop(&mut self) {
        self.token.cancel();
    }
}
