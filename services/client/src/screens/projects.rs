//! services/client/src/screens/projects.rs
//!
//! The projects screen: the user's projects with their deadline badges and the
//! form that creates new ones.

use crate::error::{ClientError, ClientResult};
use crate::screens::state::AppContext;
use chrono::{DateTime, Utc};
use project_manager_core::domain::{Notification, Project, ProjectDraft, ProjectStatus, User};
use project_manager_core::status::{days_until, status_of};
use project_manager_core::stores::ProjectStore;
use serde::Serialize;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

/// One line of the project list.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectRow {
    pub project: Project,
    pub status: ProjectStatus,
    pub status_label: &'static str,
    pub days_left: i64,
}

pub struct ProjectsScreen {
    ctx: Arc<AppContext>,
    user: User,
    store: ProjectStore,
    token: CancellationToken,
}

impl ProjectsScreen {
    pub async fn mount(ctx: Arc<AppContext>) -> ClientResult<Self> {
        let user = ctx.require_user()?;
        let token = ctx.screen_token();

        let mut store = ProjectStore::new();
        store.seed(ctx.projects.list_projects(user.user_id).await?);
        info!("Projects screen mounted with {} projects.", store.list().len());

        Ok(Self {
            ctx,
            user,
            store,
            token,
        })
    }

    pub fn projects(&self) -> &[Project] {
        self.store.list()
    }

    pub fn status_of(&self, project: &Project) -> ProjectStatus {
        status_of(project, Utc::now())
    }

    pub fn rows(&self) -> Vec<ProjectRow> {
        self.rows_at(Utc::now())
    }

    pub fn rows_at(&self, now: DateTime<Utc>) -> Vec<ProjectRow> {
        self.store
            .list()
            .iter()
            .map(|project| {
                let days_left = days_until(project.due_at(), now);
                let status = status_of(project, now);
                ProjectRow {
                    project: project.clone(),
                    status,
                    status_label: status.label(),
                    days_left,
                }
            })
            .collect()
    }

    /// Submits the form. The list only changes once the remote accepted it.
    pub async fn create_project(&mut self, draft: ProjectDraft) -> ClientResult<Project> {
        if let Err(e) = ProjectStore::validate(&draft) {
            return Err(self.ctx.reject("Required fields", "Enter the project name", e));
        }

        let submitted = tokio::select! {
            biased;
            _ = self.token.cancelled() => {
                info!("Project creation cancelled by teardown.");
                return Err(ClientError::Cancelled);
            }
            result = self.ctx.projects.submit_project(self.user.user_id, &draft) => result,
        };
        if let Err(e) = submitted {
            error!("Failed to create project '{}': {}", draft.name, e);
            self.ctx
                .notify(Notification::error("Error", "Could not create the project"));
            return Err(e.into());
        }

        let project = self.store.create_project(&draft, self.user.user_id)?;
        info!("Created project {}", project.id);
        self.ctx.notify(Notification::info(
            "Project created!",
            format!("The project \"{}\" was added.", project.name),
        ));
        Ok(project)
    }

    pub fn dispose(&mut self) {
        self.token.cancel();
    }
}

impl Drop for ProjectsScreen {
    fn drop(&mut self) {
        self.token.cancel();
    }
}
