//! In-memory list managers, one per screen concern. Each store exclusively
//! owns its records.

pub mod chat;
pub mod messages;
pub mod projects;
pub mod sessions;
pub mod uploads;

pub use chat::ChatStore;
pub use messages::MessageStore;
pub use projects::ProjectStore;
pub use sessions::SessionStore;
pub use uploads::UploadStore;
