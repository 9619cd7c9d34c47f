//! Error types for the registration flow.
//!
//! One enum per class of failure a user can run into:
//!
//! - [`FieldError`] - a single field failed its rules (rendered inline)
//! - [`TagError`] - a tag outside the group's vocabulary was toggled
//! - [`UploadError`] - a batch or a staged file broke the upload policy
//! - [`SubmitError`] - the submission could not be assembled, sent or decoded
//!
//! None of these is fatal: each one ends up either next to a field or in a
//! [`crate::Notice`], and the draft is kept so the user can retry.

use thiserror::Error;

use crate::config::{MAX_UPLOAD_FILES, MAX_UPLOAD_SIZE};
use crate::validation::Field;

// =============================================================================
// Field Validation Errors
// =============================================================================

/// Class of a field validation failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Value missing (or an empty selection).
    Required,
    /// Value does not have the expected shape (e.g. email).
    InvalidFormat,
    /// Value shorter than the minimum length.
    TooShort,
    /// Value longer than the maximum length.
    TooLong,
    /// Numeric value outside its accepted range.
    OutOfRange,
}

/// A field-scoped validation failure.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct FieldError {
    /// Offending field.
    pub field: Field,
    /// Failure class.
    pub kind: ErrorKind,
    /// Message shown next to the field.
    pub message: String,
}

impl FieldError {
    pub fn new(field: Field, kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            field,
            kind,
            message: message.into(),
        }
    }
}

// =============================================================================
// Tag Errors
// =============================================================================

/// Errors while toggling a tag.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum TagError {
    /// Tag is not part of the group's fixed vocabulary.
    #[error("Unknown {group} tag: {tag}")]
    Unknown { group: &'static str, tag: String },
}

// =============================================================================
// Upload Errors
// =============================================================================

/// Why a single file was refused.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum FileIssue {
    /// File is larger than [`MAX_UPLOAD_SIZE`].
    #[error("File {name} exceeds {}MB limit", MAX_UPLOAD_SIZE / (1024 * 1024))]
    TooLarge { name: String, size: u64 },

    /// File MIME type is not an accepted audio format.
    #[error("File {name} is not a supported audio format")]
    UnsupportedType { name: String, mime: String },
}

/// Upload policy violations.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum UploadError {
    /// Batch holds more than [`MAX_UPLOAD_FILES`] files.
    #[error("You can only upload up to {} files (got {count})", MAX_UPLOAD_FILES)]
    TooManyFiles { count: usize },

    /// One or more files in the batch were refused.
    #[error("{}", join_issues(.0))]
    Rejected(Vec<FileIssue>),

    /// Removal index does not point at a staged file.
    #[error("No staged file at position {index} ({len} staged)")]
    IndexOutOfBounds { index: usize, len: usize },
}

fn join_issues(issues: &[FileIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

// =============================================================================
// Submission Errors
// =============================================================================

/// Errors while submitting a registration.
#[derive(Debug, Error)]
pub enum SubmitError {
    /// Some fields failed validation; details are rendered inline.
    #[error("{0} field(s) need attention before submitting")]
    Validation(usize),

    /// Encoding tags or social links failed.
    #[error("Failed to encode registration: {0}")]
    Payload(#[from] serde_json::Error),

    /// Request could not be built or sent.
    #[error("Network error: {0}")]
    Network(String),

    /// Server answered with a non-2xx status.
    #[error("Server error ({status}): {body}")]
    Http { status: u16, body: String },

    /// Server answered 2xx with a body that is not JSON.
    #[error("Failed to parse response: {0}")]
    Decode(String),

    /// Request was cancelled before it completed.
    #[error("Registration request was cancelled")]
    Aborted,
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for upload staging operations.
pub type UploadResult<T> = Result<T, UploadError>;

/// Result type for submission operations.
pub type SubmitResult<T> = Result<T, SubmitError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_issue_messages() {
        let too_large = FileIssue::TooLarge {
            name: "demo.wav".into(),
            size: MAX_UPLOAD_SIZE + 1,
        };
        assert_eq!(too_large.to_string(), "File demo.wav exceeds 10MB limit");

        let wrong_type = FileIssue::UnsupportedType {
            name: "cover.png".into(),
            mime: "image/png".into(),
        };
        assert!(wrong_type.to_string().contains("not a supported audio format"));
    }

    #[test]
    fn test_rejected_lists_every_file() {
        let err = UploadError::Rejected(vec![
            FileIssue::TooLarge { name: "a.wav".into(), size: u64::MAX },
            FileIssue::UnsupportedType { name: "b.txt".into(), mime: "text/plain".into() },
        ]);
        let msg = err.to_string();
        assert!(msg.contains("a.wav"));
        assert!(msg.contains("b.txt"));
    }

    #[test]
    fn test_http_error_format() {
        let err = SubmitError::Http { status: 502, body: "bad gateway".into() };
        let msg = err.to_string();
        assert!(msg.contains("502"));
        assert!(msg.contains("bad gateway"));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: SubmitError = json_err.into();
        assert!(matches!(err, SubmitError::Payload(_)));
    }
}
