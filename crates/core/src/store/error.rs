//! Store error types.

use thiserror::Error;

/// Remote asset store errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store answered with a non-success status.
    #[error("store returned {status}: {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Store-supplied message, or the status reason.
        message: String,
    },

    /// The request never completed (DNS, TLS, connection reset, ...).
    #[error("transport error: {0}")]
    Transport(String),

    /// The response body was not what the store documents.
    #[error("unexpected response: {0}")]
    Decode(String),

    /// Client configuration error.
    #[error("store configuration error: {0}")]
    Configuration(String),
}

impl StoreError {
    /// Create an API error.
    #[must_use]
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    /// Create a decode error.
    #[must_use]
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// Create a configuration error.
    #[must_use]
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }
}

impl From<reqwest::Error> for StoreError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err.to_string())
        } else if err.is_builder() {
            Self::Configuration(err.to_string())
        } else {
            Self::Transport(err.to_string())
        }
    }
}
