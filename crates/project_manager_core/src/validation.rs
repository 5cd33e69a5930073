//! crates/project_manager_core/src/validation.rs
//!
//! Input validation failures. A validation error always means the operation was
//! aborted before any store was touched.

use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Message text is empty")]
    EmptyMessage,
    #[error("Unknown chat session: {0}")]
    UnknownSession(Uuid),
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
    #[error("Invalid email address: {0}")]
    InvalidEmail(String),
    #[error("Passwords do not match")]
    PasswordMismatch,
    #[error("File type not allowed: {0}")]
    DisallowedMimeType(String),
    #[error("File is {size} bytes, the limit is {limit} bytes")]
    FileTooLarge { size: u64, limit: u64 },
}

pub type ValidationResult<T> = Result<T, ValidationError>;
