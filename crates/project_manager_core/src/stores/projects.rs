use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::{Project, ProjectDraft, ProjectStatus};
use crate::status::status_of;
use crate::validation::{ValidationError, ValidationResult};

/// Projects of the signed-in user, newest first.
#[derive(Debug, Default, Clone)]
pub struct ProjectStore {
    projects: Vec<Project>,
}

impl ProjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed(&mut self, projects: Vec<Project>) {
        self.projects = projects;
    }

    pub fn list(&self) -> &[Project] {
        &self.projects
    }

    pub fn get(&self, id: Uuid) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    /// Checks a draft without touching the store.
    pub fn validate(draft: &ProjectDraft) -> ValidationResult<()> {
        if draft.name.trim().is_empty() {
            return Err(ValidationError::MissingField("name"));
        }
        Ok(())
    }

    /// Records a new project owned by `owner_id` at the top of the list.
    pub fn create_project(
        &mut self,
        draft: &ProjectDraft,
        owner_id: Uuid,
    ) -> ValidationResult<Project> {
        Self::validate(draft)?;
        let project = Project {
            id: Uuid::new_v4(),
            name: draft.name.trim().to_string(),
            requested_date: draft.requested_date,
            due_date: draft.due_date,
            owner_id,
        };
        self.projects.insert(0, project.clone());
        Ok(project)
    }

    pub fn status_of(&self, id: Uuid, now: DateTime<Utc>) -> Option<ProjectStatus> {
        self.get(id).map(|p| status_of(p, now))
    }
}
