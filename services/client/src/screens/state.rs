//! services/client/src/screens/state.rs
//!
//! Defines the application context shared by every screen.

use crate::adapters::{
    SimulatedAuth, SimulatedChatService, SimulatedProjectService, SimulatedUploadService,
};
use crate::config::Config;
use crate::error::{ClientError, ClientResult};
use project_manager_core::domain::{Notification, Route, User};
use project_manager_core::ports::{
    AuthContext, ChatService, Navigator, Notifier, PortError, ProjectService, UploadService,
};
use project_manager_core::validation::ValidationError;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

//=========================================================================================
// AppContext (Shared Across All Screens)
//=========================================================================================

/// The collaborators every screen talks to, created once at the application
/// root and torn down on logout.
#[derive(Clone)]
pub struct AppContext {
    pub config: Arc<Config>,
    pub auth: Arc<dyn AuthContext>,
    pub notifier: Arc<dyn Notifier>,
    pub navigator: Arc<dyn Navigator>,
    pub chat: Arc<dyn ChatService>,
    pub projects: Arc<dyn ProjectService>,
    pub uploads: Arc<dyn UploadService>,
    /// Parent of every screen token. Cancelled on logout.
    root: CancellationToken,
}

impl AppContext {
    pub fn new(
        config: Arc<Config>,
        auth: Arc<dyn AuthContext>,
        notifier: Arc<dyn Notifier>,
        navigator: Arc<dyn Navigator>,
        chat: Arc<dyn ChatService>,
        projects: Arc<dyn ProjectService>,
        uploads: Arc<dyn UploadService>,
    ) -> Self {
        Self {
            config,
            auth,
            notifier,
            navigator,
            chat,
            projects,
            uploads,
            root: CancellationToken::new(),
        }
    }

    /// Wires the in-memory auth and remote adapters around the given feedback
    /// and navigation capabilities.
    pub fn simulated(
        config: Config,
        notifier: Arc<dyn Notifier>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self::new(
            Arc::new(config.clone()),
            Arc::new(SimulatedAuth::new(&config)),
            notifier,
            navigator,
            Arc::new(SimulatedChatService::new(&config)),
            Arc::new(SimulatedProjectService::new(&config)),
            Arc::new(SimulatedUploadService::new(&config)),
        )
    }

    /// A token for one screen. It is cancelled with the screen or with the
    /// whole context, whichever comes first.
    pub fn screen_token(&self) -> CancellationToken {
        self.root.child_token()
    }

    pub fn is_shut_down(&self) -> bool {
        self.root.is_cancelled()
    }

    /// The signed-in user. Without one, redirects to the login screen.
    pub fn require_user(&self) -> ClientResult<User> {
        match self.auth.current_user() {
            Some(user) => Ok(user),
            None => {
                warn!("No signed-in user; redirecting to login.");
                self.navigator.navigate(Route::Login);
                Err(ClientError::Port(PortError::Unauthorized))
            }
        }
    }

    pub fn notify(&self, notification: Notification) {
        self.notifier.notify(notification);
    }

    /// Reports a rejected input to the user and hands the error back.
    pub fn reject(&self, title: &str, description: &str, err: ValidationError) -> ClientError {
        warn!("Rejected input: {}", err);
        self.notify(Notification::error(title, description));
        ClientError::Validation(err)
    }

    /// Signs the user out, cancels every pending completion, and returns to login.
    pub async fn logout(&self) -> ClientResult<()> {
        self.auth.logout().await?;
        self.root.cancel();
        info!("Application context shut down.");
        self.navigator.navigate(Route::Login);
        Ok(())
    }
}
