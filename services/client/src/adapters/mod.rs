pub mod auth;
pub mod chat;
pub mod navigation;
pub mod notifier;
pub mod projects;
pub mod seeds;
pub mod uploads;

pub use auth::SimulatedAuth;
pub use chat::SimulatedChatService;
pub use navigation::RecordingNavigator;
pub use notifier::{RecordingNotifier, TracingNotifier};
pub use projects::SimulatedProjectService;
pub use uploads::SimulatedUploadService;
