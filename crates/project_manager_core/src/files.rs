//! crates/project_manager_core/src/files.rs
//!
//! MIME allow-listing and display helpers for uploaded files.

use serde::{Deserialize, Serialize};

/// Every MIME type the upload form accepts.
pub const ALLOWED_MIME_TYPES: [&str; 8] = [
    "application/pdf",
    "application/msword",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
    "application/vnd.ms-excel",
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
    "image/jpeg",
    "image/jpg",
    "text/plain",
];

/// Human-readable list of the accepted extensions.
pub const ALLOWED_EXTENSIONS: &str = "PDF, DOC, DOCX, XLS, XLSX, JPG, JPEG or TXT";

pub fn validate_mime(mime_type: &str) -> bool {
    ALLOWED_MIME_TYPES.contains(&mime_type)
}

/// Coarse file category, used to pick an icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FileKind {
    Pdf,
    Image,
    Spreadsheet,
    Other,
}

impl FileKind {
    pub fn from_mime(mime_type: &str) -> Self {
        if mime_type.contains("pdf") {
            FileKind::Pdf
        } else if mime_type.contains("image") {
            FileKind::Image
        } else if mime_type.contains("sheet") || mime_type.contains("excel") {
            FileKind::Spreadsheet
        } else {
            FileKind::Other
        }
    }
}

/// Formats a byte count as megabytes with two decimals, e.g. `"1.50 MB"`.
pub fn format_megabytes(size_bytes: u64) -> String {
    format!("{:.2} MB", size_bytes as f64 / 1024.0 / 1024.0)
}
