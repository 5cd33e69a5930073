use chrono::Utc;
use uuid::Uuid;

use crate::domain::{SelectedFile, UploadRecord};
use crate::files;
use crate::validation::{ValidationError, ValidationResult};

/// Upload metadata, newest first.
#[derive(Debug, Default, Clone)]
pub struct UploadStore {
    uploads: Vec<UploadRecord>,
}

impl UploadStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed(&mut self, uploads: Vec<UploadRecord>) {
        self.uploads = uploads;
    }

    pub fn list(&self) -> &[UploadRecord] {
        &self.uploads
    }

    pub fn validate_mime(mime_type: &str) -> bool {
        files::validate_mime(mime_type)
    }

    /// Checks a file and its target project without touching the store.
    pub fn validate(file: &SelectedFile, project_id: Option<Uuid>) -> ValidationResult<Uuid> {
        if !Self::validate_mime(&file.mime_type) {
            return Err(ValidationError::DisallowedMimeType(file.mime_type.clone()));
        }
        project_id.ok_or(ValidationError::MissingField("project"))
    }

    pub fn record_upload(
        &mut self,
        file: &SelectedFile,
        project_id: Option<Uuid>,
    ) -> ValidationResult<UploadRecord> {
        let project_id = Self::validate(file, project_id)?;
        let record = UploadRecord {
            id: Uuid::new_v4(),
            file_name: file.name.clone(),
            mime_type: file.mime_type.clone(),
            size_bytes: file.size_bytes(),
            project_id,
            uploaded_at: Utc::now(),
        };
        self.uploads.insert(0, record.clone());
        Ok(record)
    }

    pub fn for_project(&self, project_id: Uuid) -> impl Iterator<Item = &UploadRecord> {
        self.uploads.iter().filter(move |u| u.project_id == project_id)
    }
}
