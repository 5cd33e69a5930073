pub mod chat;
pub mod landing;
pub mod pending;
pub mod projects;
pub mod register;
pub mod state;
pub mod upload;

// Re-export the screen controllers so the binary and the tests can build them
// straight from `client_lib::screens`.
pub use chat::{ChatScreen, ChatView};
pub use landing::{enter, landing_route};
pub use pending::PendingTask;
pub use projects::{ProjectRow, ProjectsScreen};
pub use register::{RegisterScreen, RegistrationForm};
pub use state::AppContext;
pub use upload::{UploadRow, UploadScreen, UploadView};
