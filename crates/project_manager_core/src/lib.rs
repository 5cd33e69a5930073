pub mod domain;
pub mod files;
pub mod ports;
pub mod status;
pub mod stores;
pub mod validation;

pub use domain::{
    preview_of, ChatSession, Message, Notification, Project, ProjectDraft, ProjectStatus, Route,
    SelectedFile, Sender, Severity, UploadRecord, User,
};
pub use files::{validate_mime, FileKind, ALLOWED_MIME_TYPES};
pub use ports::{
    AuthContext, ChatService, Navigator, Notifier, PortError, PortResult, ProjectService,
    UploadService,
};
pub use status::{days_until, status_of};
pub use stores::{ChatStore, MessageStore, ProjectStore, SessionStore, UploadStore};
pub use validation::{ValidationError, ValidationResult};
