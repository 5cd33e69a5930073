// Shared setup for the screen tests.
#![allow(dead_code)]

use async_trait::async_trait;
use client_lib::adapters::{
    RecordingNavigator, RecordingNotifier, SimulatedAuth, SimulatedChatService,
    SimulatedProjectService, SimulatedUploadService,
};
use client_lib::config::Config;
use client_lib::screens::AppContext;
use project_manager_core::domain::{
    ChatSession, Message, Project, ProjectDraft, SelectedFile, UploadRecord, User,
};
use project_manager_core::ports::{
    AuthContext, ChatService, PortError, PortResult, ProjectService, UploadService,
};
use std::sync::Arc;
use std::time::Duration;
use uuid::Uuid;

pub struct Harness {
    pub ctx: Arc<AppContext>,
    pub notifier: Arc<RecordingNotifier>,
    pub navigator: Arc<RecordingNavigator>,
}

pub fn config() -> Config {
    Config {
        simulated_latency: Duration::ZERO,
        ..Config::default()
    }
}

pub fn user() -> User {
    User {
        user_id: Uuid::new_v4(),
        name: "Ana Souza".to_string(),
        email: "ana@example.com".to_string(),
    }
}

pub struct Services {
    pub auth: Arc<dyn AuthContext>,
    pub chat: Arc<dyn ChatService>,
    pub projects: Arc<dyn ProjectService>,
    pub uploads: Arc<dyn UploadService>,
}

impl Services {
    /// Simulated adapters with a user already signed in.
    pub fn simulated(config: &Config) -> Self {
        Self {
            auth: Arc::new(SimulatedAuth::signed_in(config, user())),
            chat: Arc::new(SimulatedChatService::new(config)),
            projects: Arc::new(SimulatedProjectService::new(config)),
            uploads: Arc::new(SimulatedUploadService::new(config)),
        }
    }

    pub fn signed_out(config: &Config) -> Self {
        Self {
            auth: Arc::new(SimulatedAuth::new(config)),
            ..Self::simulated(config)
        }
    }
}

impl Harness {
    pub fn new(config: Config) -> Self {
        let services = Services::simulated(&config);
        Self::with_services(config, services)
    }

    pub fn signed_out(config: Config) -> Self {
        let services = Services::signed_out(&config);
        Self::with_services(config, services)
    }

    pub fn with_services(config: Config, services: Services) -> Self {
        let notifier = Arc::new(RecordingNotifier::new());
        let navigator = Arc::new(RecordingNavigator::new());
        let ctx = Arc::new(AppContext::new(
            Arc::new(config),
            services.auth,
            notifier.clone(),
            navigator.clone(),
            services.chat,
            services.projects,
            services.uploads,
        ));
        Self {
            ctx,
            notifier,
            navigator,
        }
    }
}

//=========================================================================================
// Remote doubles that always fail on write
//=========================================================================================

pub struct FailingChat;

#[async_trait]
impl ChatService for FailingChat {
    async fn list_sessions(&self, _user_id: Uuid) -> PortResult<Vec<ChatSession>> {
        Ok(vec![ChatSession::new()])
    }

    async fn load_messages(&self, _session_id: Uuid) -> PortResult<Vec<Message>> {
        Ok(Vec::new())
    }

    async fn reply_to(&self, _session_id: Uuid, _text: &str) -> PortResult<String> {
        tokio::time::sleep(Duration::from_millis(1000)).await;
        Err(PortError::Unexpected("assistant unavailable".to_string()))
    }
}

pub struct FailingProjects;

#[async_trait]
impl ProjectService for FailingProjects {
    async fn list_projects(&self, _owner_id: Uuid) -> PortResult<Vec<Project>> {
        Ok(Vec::new())
    }

    async fn submit_project(&self, _owner_id: Uuid, _draft: &ProjectDraft) -> PortResult<()> {
        Err(PortError::Unexpected("project service unavailable".to_string()))
    }
}

pub struct FailingUploads;

#[async_trait]
impl UploadService for FailingUploads {
    async fn list_uploads(&self, _user_id: Uuid) -> PortResult<Vec<UploadRecord>> {
        Ok(Vec::new())
    }

    async fn transfer(&self, _file: &SelectedFile, _project_id: Uuid) -> PortResult<()> {
        Err(PortError::Unexpected("upload service unavailable".to_string()))
    }
}
