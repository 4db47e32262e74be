//! Shared types, errors, and configuration for Mediagate.
//!
//! This crate provides common types used across all other crates:
//! - Application-wide error taxonomy
//! - JSON response envelopes for the upload resource
//! - Configuration management

pub mod config;
pub mod error;
pub mod response;

pub use config::{
    AppConfig, LogFormat, ServerConfig, SignatureAlgorithm, StoreCredentials, UploadConfig,
};
pub use error::{AppError, AppResult};
pub use response::{DeleteResponse, ErrorResponse, UploadResponse};
