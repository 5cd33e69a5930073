//! services/client/src/adapters/chat.rs
//!
//! A `ChatService` that answers from memory after a fixed delay.

use async_trait::async_trait;
use project_manager_core::domain::{ChatSession, Message};
use project_manager_core::ports::{ChatService, PortResult};
use std::time::Duration;
use tracing::debug;
use uuid::Uuid;

use crate::adapters::seeds;
use crate::config::Config;

pub struct SimulatedChatService {
    latency: Duration,
    reply_delay: Duration,
    seed_demo_data: bool,
}

impl SimulatedChatService {
    pub fn new(config: &Config) -> Self {
        Self {
            latency: config.simulated_latency,
            reply_delay: config.bot_reply_delay,
            seed_demo_data: config.seed_demo_data,
        }
    }
}

/// The canned assistant answer echoing the user's text.
pub fn simulated_reply(text: &str) -> String {
    format!(
        "SIMULATION: I received your message \"{}\". How else can I help?",
        text
    )
}

#[async_trait]
impl ChatService for SimulatedChatService {
    async fn list_sessions(&self, user_id: Uuid) -> PortResult<Vec<ChatSession>> {
        tokio::time::sleep(self.latency).await;
        debug!("Listing chat sessions for user {}", user_id);
        if !self.seed_demo_data {
            return Ok(Vec::new());
        }
        Ok(seeds::chat_sessions())
    }

    async fn load_messages(&self, session_id: Uuid) -> PortResult<Vec<Message>> {
        tokio::time::sleep(self.latency).await;
        debug!("Loading messages for session {}", session_id);
        if !self.seed_demo_data {
            return Ok(Vec::new());
        }
        Ok(seeds::welcome(session_id))
    }

    async fn reply_to(&self, session_id: Uuid, text: &str) -> PortResult<String> {
        tokio::time::sleep(self.reply_delay).await;
        debug!("Replying in session {}", session_id);
        Ok(simulated_reply(text))
    }
}
