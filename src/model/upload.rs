//! Uploaded-file metadata.

use serde::{Deserialize, Serialize};

/// Lifecycle of an accepted upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UploadStatus {
    Uploaded,
    Previewed,
}

impl UploadStatus {
    pub fn as_str(&self) -> &str {
        match self {
            UploadStatus::Uploaded => "Uploaded",
            UploadStatus::Previewed => "Previewed",
        }
    }
}

/// Metadata for a file that passed upload screening. Created client-side on
/// file selection; the file content itself never enters the core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadMeta {
    pub id: String,
    pub filename: String,
    /// Size in bytes.
    pub size: u64,
    pub mime_type: String,
    pub status: UploadStatus,
}
