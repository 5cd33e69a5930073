//! crates/project_manager_core/src/domain.rs
//!
//! Defines the pure, core data structures for the application.
//! These structs are independent of any screen, adapter or rendering layer.

use bytes::Bytes;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Number of characters of a user message kept in a session preview.
pub const PREVIEW_LEN: usize = 20;

// Represents a user - used throughout app
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub user_id: Uuid,
    pub name: String,
    pub email: String,
}

/// One conversation in the chat sidebar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatSession {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub preview: String,
}

impl ChatSession {
    /// A fresh session with an empty preview.
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            preview: String::new(),
        }
    }
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds the sidebar preview for a message: the first [`PREVIEW_LEN`]
/// characters followed by an ellipsis.
pub fn preview_of(text: &str) -> String {
    let head: String = text.chars().take(PREVIEW_LEN).collect();
    format!("{}...", head)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sender {
    User,
    Bot,
}

/// A single chat message. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: Uuid,
    pub session_id: Uuid,
    pub text: String,
    pub sender: Sender,
    pub sent_at: DateTime<Utc>,
}

/// A project record as listed on the projects screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: Uuid,
    pub name: String,
    pub requested_date: NaiveDate,
    pub due_date: NaiveDate,
    pub owner_id: Uuid,
}

impl Project {
    /// The instant the project falls due: midnight UTC of the due date.
    pub fn due_at(&self) -> DateTime<Utc> {
        self.due_date.and_time(chrono::NaiveTime::MIN).and_utc()
    }
}

/// The form payload for a new project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectDraft {
    pub name: String,
    pub requested_date: NaiveDate,
    pub due_date: NaiveDate,
}

/// The deadline band shown as a badge next to each project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    Overdue,
    Urgent,
    OnTime,
}

impl ProjectStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ProjectStatus::Overdue => "Overdue",
            ProjectStatus::Urgent => "Urgent",
            ProjectStatus::OnTime => "On time",
        }
    }
}

/// A file the user picked in the upload form. Only its metadata is recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub mime_type: String,
    pub content: Bytes,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, content: Bytes) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            content,
        }
    }

    pub fn size_bytes(&self) -> u64 {
        self.content.len() as u64
    }
}

/// Metadata of a file attached to a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadRecord {
    pub id: Uuid,
    pub file_name: String,
    pub mime_type: String,
    pub size_bytes: u64,
    pub project_id: Uuid,
    pub uploaded_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Info,
    Error,
}

/// User-visible feedback shown as a toast.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub severity: Severity,
}

impl Notification {
    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            severity: Severity::Info,
        }
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            severity: Severity::Error,
        }
    }
}

/// The screens a navigator can redirect to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Route {
    Chat,
    Login,
    Register,
    Projects,
    Upload,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Chat => "/chat",
            Route::Login => "/login",
            Route::Register => "/register",
            Route::Projects => "/projects",
            Route::Upload => "/upload",
        }
    }
}
