//! crates/project_manager_core/src/ports.rs
//!
//! Defines the service contracts (traits) the screens consume.
//! These traits form the boundary of the hexagonal architecture, allowing the core
//! to stay independent of how authentication, feedback, navigation and the remote
//! data source are actually provided.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{
    ChatSession, Message, Notification, Project, ProjectDraft, Route, SelectedFile, UploadRecord,
    User,
};

//=========================================================================================
// Generic Port Error and Result Types
//=========================================================================================

/// A generic error type for all port operations.
/// This abstracts away whatever transport sits behind an adapter.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PortError {
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Conflict: {0}")]
    Conflict(String),
    #[error("An unexpected error occurred: {0}")]
    Unexpected(String),
    #[error("Unauthorized")]
    Unauthorized,
}

/// A convenience type alias for `Result<T, PortError>`.
pub type PortResult<T> = Result<T, PortError>;

//=========================================================================================
// Collaborator Ports
//=========================================================================================

/// The signed-in user and the account operations around it.
#[async_trait]
pub trait AuthContext: Send + Sync {
    fn current_user(&self) -> Option<User>;

    /// True while a register/login call is in flight.
    fn is_loading(&self) -> bool;

    /// Creates an account and signs it in.
    async fn register(&self, name: &str, email: &str, password: &str) -> PortResult<User>;

    async fn login(&self, email: &str, password: &str) -> PortResult<User>;

    async fn logout(&self) -> PortResult<()>;
}

/// User-visible success/error feedback.
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// Redirects between screens. Navigation replaces the current entry.
pub trait Navigator: Send + Sync {
    fn navigate(&self, route: Route);
}

//=========================================================================================
// Remote Data Ports
//=========================================================================================

#[async_trait]
pub trait ChatService: Send + Sync {
    async fn list_sessions(&self, user_id: Uuid) -> PortResult<Vec<ChatSession>>;

    async fn load_messages(&self, session_id: Uuid) -> PortResult<Vec<Message>>;

    /// Produces the assistant's answer to `text`.
    async fn reply_to(&self, session_id: Uuid, text: &str) -> PortResult<String>;
}

#[async_trait]
pub trait ProjectService: Send + Sync {
    async fn list_projects(&self, owner_id: Uuid) -> PortResult<Vec<Project>>;

    /// Submits a new project. The caller records it locally once this succeeds.
    async fn submit_project(&self, owner_id: Uuid, draft: &ProjectDraft) -> PortResult<()>;
}

#[async_trait]
pub trait UploadService: Send + Sync {
    async fn list_uploads(&self, user_id: Uuid) -> PortResult<Vec<UploadRecord>>;

    /// Sends the file contents. The caller records the metadata once this succeeds.
    async fn transfer(&self, file: &SelectedFile, project_id: Uuid) -> PortResult<()>;
}
