//! services/client/src/screens/upload.rs
//!
//! The upload screen: pick a file and a project, send it, and list what was
//! sent before.

use crate::error::{ClientError, ClientResult};
use crate::screens::state::AppContext;
use project_manager_core::domain::{Notification, Project, SelectedFile, UploadRecord, User};
use project_manager_core::files::{format_megabytes, FileKind, ALLOWED_EXTENSIONS};
use project_manager_core::stores::{ProjectStore, UploadStore};
use project_manager_core::validation::ValidationError;
use serde::Serialize;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};
use uuid::Uuid;

pub const UNKNOWN_PROJECT: &str = "Project not found";

#[derive(Debug, Clone, Serialize)]
pub struct UploadRow {
    pub record: UploadRecord,
    pub kind: FileKind,
    pub project_name: String,
    pub size: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct UploadView {
    pub projects: Vec<Project>,
    pub uploads: Vec<UploadRow>,
    pub selected_file: Option<String>,
    pub selected_project: Option<Uuid>,
}

pub struct UploadScreen {
    ctx: Arc<AppContext>,
    projects: ProjectStore,
    store: UploadStore,
    selected_file: Option<SelectedFile>,
    selected_project: Option<Uuid>,
    token: CancellationToken,
}

impl UploadScreen {
    /// Loads the project list and the previous uploads side by side.
    pub async fn mount(ctx: Arc<AppContext>) -> ClientResult<Self> {
        let user: User = ctx.require_user()?;
        let token = ctx.screen_token();

        let (projects, uploads) = futures::try_join!(
            ctx.projects.list_projects(user.user_id),
            ctx.uploads.list_uploads(user.user_id),
        )?;

        let mut project_store = ProjectStore::new();
        project_store.seed(projects);
        let mut store = UploadStore::new();
        store.seed(uploads);
        info!(
            "Upload screen mounted with {} projects and {} uploads.",
            project_store.list().len(),
            store.list().len()
        );

        Ok(Self {
            ctx,
            projects: project_store,
            store,
            selected_file: None,
            selected_project: None,
            token,
        })
    }

    pub fn projects(&self) -> &[Project] {
        self.projects.list()
    }

    pub fn uploads(&self) -> &[UploadRecord] {
        self.store.list()
    }

    pub fn selected_file(&self) -> Option<&SelectedFile> {
        self.selected_file.as_ref()
    }

    pub fn selected_project(&self) -> Option<Uuid> {
        self.selected_project
    }

    pub fn project_name(&self, project_id: Uuid) -> &str {
        self.projects
            .get(project_id)
            .map(|p| p.name.as_str())
            .unwrap_or(UNKNOWN_PROJECT)
    }

    /// Accepts `file` as the pending selection if its type and size are allowed.
    /// A rejected file also clears any earlier selection.
    pub fn select_file(&mut self, file: SelectedFile) -> ClientResult<()> {
        if !UploadStore::validate_mime(&file.mime_type) {
            self.selected_file = None;
            return Err(self.ctx.reject(
                "File type not allowed",
                &format!("Please select a {} file", ALLOWED_EXTENSIONS),
                ValidationError::DisallowedMimeType(file.mime_type),
            ));
        }

        let limit = self.ctx.config.max_file_size;
        if file.size_bytes() > limit {
            self.selected_file = None;
            return Err(self.ctx.reject(
                "File too large",
                &format!("Files can be at most {}", format_megabytes(limit)),
                ValidationError::FileTooLarge {
                    size: file.size_bytes(),
                    limit,
                },
            ));
        }

        info!(
            "Selected {} ({})",
            file.name,
            format_megabytes(file.size_bytes())
        );
        self.selected_file = Some(file);
        Ok(())
    }

    pub fn select_project(&mut self, project_id: Uuid) {
        self.selected_project = Some(project_id);
    }

    /// Sends the selected file for the selected project.
    pub async fn submit(&mut self) -> ClientResult<UploadRecord> {
        let (file, project_id) = match (&self.selected_file, self.selected_project) {
            (Some(file), Some(project_id)) => (file.clone(), project_id),
            (None, _) => {
                return Err(self.ctx.reject(
                    "Required fields",
                    "Select a file and a project",
                    ValidationError::MissingField("file"),
                ))
            }
            (_, None) => {
                return Err(self.ctx.reject(
                    "Required fields",
                    "Select a file and a project",
                    ValidationError::MissingField("project"),
                ))
            }
        };
        UploadStore::validate(&file, Some(project_id))?;

        let transferred = tokio::select! {
            biased;
            _ = self.token.cancelled() => {
                info!("Upload cancelled by teardown.");
                return Err(ClientError::Cancelled);
            }
            result = self.ctx.uploads.transfer(&file, project_id) => result,
        };
        if let Err(e) = transferred {
            error!("Failed to upload {}: {}", file.name, e);
            self.ctx
                .notify(Notification::error("Upload error", "Could not upload the file"));
            return Err(e.into());
        }

        let record = self.store.record_upload(&file, Some(project_id))?;
        self.selected_file = None;
        self.selected_project = None;
        info!("Uploaded {} to project {}", record.file_name, record.project_id);
        self.ctx.notify(Notification::info(
            "Upload complete!",
            format!("The file \"{}\" was uploaded.", record.file_name),
        ));
        Ok(record)
    }

    pub fn view(&self) -> UploadView {
        UploadView {
            projects: self.projects.list().to_vec(),
            uploads: self
                .store
                .list()
                .iter()
                .map(|record| UploadRow {
                    record: record.clone(),
                    kind: FileKind::from_mime(&record.mime_type),
                    project_name: self.project_name(record.project_id).to_string(),
                    size: format_megabytes(record.size_bytes),
                })
                .collect(),
            selected_file: self.selected_file.as_ref().map(|f| f.name.clone()),
            selected_project: self.selected_project,
        }
    }

    pub fn dispose(&mut self) {
        self.token.cancel();
    }
}

impl Drop for UploadScreen {
    fn drop(&mut self) {
        self.token.cancel();
    }
}
