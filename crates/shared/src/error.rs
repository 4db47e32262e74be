//! Application-wide error types.

use thiserror::Error;

/// Result type alias using `AppError`.
pub type AppResult<T> = Result<T, AppError>;

/// Application error types.
///
/// The first four variants are client-input errors detected before any
/// network call. `Upstream` covers every failure of the remote asset store;
/// its detail is for server-side logs only.
#[derive(Debug, Error)]
pub enum AppError {
    /// No file was supplied.
    #[error("no image supplied")]
    NoImage,

    /// The declared MIME type is not an allowed image subtype.
    #[error("invalid type: {0}")]
    InvalidType(String),

    /// The file is larger than the effective size ceiling.
    #[error("invalid size: {size} bytes exceeds maximum {max} bytes")]
    InvalidSize {
        /// Actual file size.
        size: u64,
        /// Maximum allowed size.
        max: u64,
    },

    /// The asset identifier is missing or cannot be derived.
    #[error("invalid asset id")]
    InvalidId,

    /// The remote asset store failed.
    #[error("upstream error: {0}")]
    Upstream(String),
}

impl AppError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::NoImage | Self::InvalidType(_) | Self::InvalidSize { .. } | Self::InvalidId => {
                400
            }
            Self::Upstream(_) => 500,
        }
    }

    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::NoImage => "NO_IMAGE",
            Self::InvalidType(_) => "INVALID_TYPE",
            Self::InvalidSize { .. } => "INVALID_SIZE",
            Self::InvalidId => "INVALID_ID",
            Self::Upstream(_) => "UPSTREAM_ERROR",
        }
    }

    /// Returns the symbolic message key clients use for lookup.
    ///
    /// `None` for upstream failures, which are never described to callers.
    #[must_use]
    pub const fn message_key(&self) -> Option<&'static str> {
        match self {
            Self::NoImage => Some("UploadErrors.NO_IMAGE"),
            Self::InvalidType(_) => Some("UploadErrors.INVALID_TYPE"),
            Self::InvalidSize { .. } => Some("UploadErrors.INVALID_SIZE"),
            Self::InvalidId => Some("UploadErrors.INVALID_ID"),
            Self::Upstream(_) => None,
        }
    }

    /// Whether the error was caused by client input.
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        !matches!(self, Self::Upstream(_))
    }

    /// Create an upstream error.
    #[must_use]
    pub fn upstream(msg: impl Into<String>) -> Self {
        Self::Upstream(msg.into())
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
