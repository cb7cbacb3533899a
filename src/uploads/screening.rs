//! Upload screening.
//!
//! Client-side filter applied on file selection. Checks MIME type, size,
//! and filename before a file's metadata is admitted to the uploads list;
//! rejected files surface a user-visible reason and are excluded. File
//! content never enters the core.

use lazy_static::lazy_static;
use regex::Regex;
use uuid::Uuid;

use crate::logging::structured::LogContext;
use crate::model::{UploadMeta, UploadStatus};

/// Maximum accepted file size: 10 MiB.
pub const MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

/// MIME types the wizard accepts.
pub const ACCEPTED_MIME_TYPES: [&str; 3] = ["application/pdf", "image/jpeg", "image/png"];

lazy_static! {
    /// Filename patterns that should never come out of a file picker.
    static ref SUSPICIOUS_FILENAME_PATTERNS: Vec<Regex> = vec![
        Regex::new(r"\.\.[\\/]").unwrap(),
        Regex::new(r"^[\\/]").unwrap(),
        Regex::new(r"[\x00-\x1f]").unwrap(),
    ];
}

/// A file as presented by the picker, before screening.
#[derive(Debug, Clone)]
pub struct FileCandidate {
    pub filename: String,
    pub size: u64,
    pub mime_type: String,
}

impl FileCandidate {
    pub fn new(filename: &str, size: u64, mime_type: &str) -> Self {
        Self {
            filename: filename.to_string(),
            size,
            mime_type: mime_type.to_string(),
        }
    }
}

/// Why a file was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RejectionReason {
    UnsupportedType(String),
    TooLarge(u64),
    SuspiciousFilename,
}

impl RejectionReason {
    /// User-facing rejection message.
    pub fn message(&self) -> String {
        match self {
            RejectionReason::UnsupportedType(mime) => format!("Unsupported type: {}", mime),
            RejectionReason::TooLarge(size) => {
                format!("File too large: {} MB", size / (1024 * 1024))
            }
            RejectionReason::SuspiciousFilename => "Invalid filename".to_string(),
        }
    }
}

/// One rejected file with its reason.
#[derive(Debug, Clone)]
pub struct UploadRejection {
    pub filename: String,
    pub reason: RejectionReason,
}

/// Outcome of screening a batch of selected files.
#[derive(Debug, Default)]
pub struct ScreeningResult {
    pub accepted: Vec<UploadMeta>,
    pub rejections: Vec<UploadRejection>,
}

impl ScreeningResult {
    pub fn has_rejections(&self) -> bool {
        !self.rejections.is_empty()
    }
}

/// Screen selected files.
///
/// Accepted files get a fresh upload id and status `Uploaded`; rejected
/// files are reported, never admitted, and never abort the batch.
pub fn screen_files(candidates: Vec<FileCandidate>, ctx: &LogContext) -> ScreeningResult {
    let mut result = ScreeningResult::default();

    for candidate in candidates {
        match screen_one(&candidate) {
            Ok(()) => {
                let meta = UploadMeta {
                    id: format!("upl-{}", &Uuid::new_v4().to_string()[..8]),
                    filename: candidate.filename,
                    size: candidate.size,
                    mime_type: candidate.mime_type,
                    status: UploadStatus::Uploaded,
                };
                log::info!(
                    "{} UPLOAD_ACCEPTED upload_id={} mime={} size={}",
                    ctx,
                    meta.id,
                    meta.mime_type,
                    meta.size
                );
                result.accepted.push(meta);
            }
            Err(reason) => {
                log::warn!(
                    "{} UPLOAD_REJECTED filename={:?} reason={}",
                    ctx,
                    candidate.filename,
                    reason.message()
                );
                result.rejections.push(UploadRejection {
                    filename: candidate.filename,
                    reason,
                });
            }
        }
    }

    result
}

fn screen_one(candidate: &FileCandidate) -> Result<(), RejectionReason> {
    if !ACCEPTED_MIME_TYPES.contains(&candidate.mime_type.as_str()) {
        return Err(RejectionReason::UnsupportedType(candidate.mime_type.clone()));
    }
    if candidate.size > MAX_UPLOAD_BYTES {
        return Err(RejectionReason::TooLarge(candidate.size));
    }
    if SUSPICIOUS_FILENAME_PATTERNS
        .iter()
        .any(|p| p.is_match(&candidate.filename))
    {
        return Err(RejectionReason::SuspiciousFilename);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> LogContext {
        LogContext::new("sess-test")
    }

    #[test]
    fn test_png_within_limit_is_accepted() {
        let result = screen_files(
            vec![FileCandidate::new("passport.png", 500_000, "image/png")],
            &ctx(),
        );

        assert_eq!(result.accepted.len(), 1);
        assert!(!result.has_rejections());
        let meta = &result.accepted[0];
        assert_eq!(meta.status, UploadStatus::Uploaded);
        assert_eq!(meta.size, 500_000);
        assert!(meta.id.starts_with("upl-"));
    }

    #[test]
    fn test_wrong_mime_type_is_rejected() {
        let result = screen_files(
            vec![FileCandidate::new("docs.zip", 1_000, "application/zip")],
            &ctx(),
        );

        assert!(result.accepted.is_empty());
        assert_eq!(
            result.rejections[0].reason,
            RejectionReason::UnsupportedType("application/zip".to_string())
        );
        assert_eq!(
            result.rejections[0].reason.message(),
            "Unsupported type: application/zip"
        );
    }

    #[test]
    fn test_oversized_file_is_rejected() {
        let result = screen_files(
            vec![FileCandidate::new("scan.pdf", 11_000_000, "application/pdf")],
            &ctx(),
        );

        assert!(result.accepted.is_empty());
        assert_eq!(
            result.rejections[0].reason,
            RejectionReason::TooLarge(11_000_000)
        );
        assert_eq!(result.rejections[0].reason.message(), "File too large: 10 MB");
    }

    #[test]
    fn test_exactly_at_limit_is_accepted() {
        let result = screen_files(
            vec![FileCandidate::new("scan.pdf", MAX_UPLOAD_BYTES, "application/pdf")],
            &ctx(),
        );
        assert_eq!(result.accepted.len(), 1);
    }

    #[test]
    fn test_traversal_filename_is_rejected() {
        let result = screen_files(
            vec![FileCandidate::new("../../etc/passwd.png", 1_000, "image/png")],
            &ctx(),
        );

        assert!(result.accepted.is_empty());
        assert_eq!(
            result.rejections[0].reason,
            RejectionReason::SuspiciousFilename
        );
    }

    #[test]
    fn test_one_rejection_does_not_abort_the_batch() {
        let result = screen_files(
            vec![
                FileCandidate::new("a.png", 1_000, "image/png"),
                FileCandidate::new("b.zip", 1_000, "application/zip"),
                FileCandidate::new("c.jpg", 1_000, "image/jpeg"),
            ],
            &ctx(),
        );

        assert_eq!(result.accepted.len(), 2);
        assert_eq!(result.rejections.len(), 1);
    }
}
