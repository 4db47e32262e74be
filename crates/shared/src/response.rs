//! JSON envelopes returned by the upload resource.

use serde::Serialize;

use crate::error::AppError;

/// Body for create, both on success and on upstream failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UploadResponse {
    /// Human-readable outcome.
    pub message: String,
    /// Secure delivery URL, empty on failure.
    pub url: String,
    /// Store-assigned identifier, empty on failure.
    pub id: String,
}

impl UploadResponse {
    /// Message sent with a successful upload.
    pub const SUCCESS_MESSAGE: &'static str = "File successfully uploaded";
    /// Message sent with any upstream failure.
    pub const FAILURE_MESSAGE: &'static str = "Something went wrong";

    /// Envelope for a stored asset.
    #[must_use]
    pub fn uploaded(url: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            message: Self::SUCCESS_MESSAGE.to_string(),
            url: url.into(),
            id: id.into(),
        }
    }

    /// Generic failure envelope. Carries no upstream detail.
    #[must_use]
    pub fn failed() -> Self {
        Self {
            message: Self::FAILURE_MESSAGE.to_string(),
            url: String::new(),
            id: String::new(),
        }
    }
}

/// Body for a successful delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeleteResponse {
    /// Human-readable outcome.
    pub message: &'static str,
}

impl Default for DeleteResponse {
    fn default() -> Self {
        Self {
            message: "File successfully deleted",
        }
    }
}

/// Error body: `{ error, message }`, or `{ error }` when there is no key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorResponse {
    /// Error kind.
    pub error: &'static str,
    /// Symbolic message key for client-side lookup.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
}

impl ErrorResponse {
    /// Store failure body shared by delete and fetch-metadata.
    pub const DELETE_FAILED: Self = Self {
        error: "DELETE_FAILED",
        message: None,
    };
}

impl From<&AppError> for ErrorResponse {
    fn from(err: &AppError) -> Self {
        Self {
            error: err.error_code(),
            message: err.message_key(),
        }
    }
}
