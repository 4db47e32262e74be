//! Core upload logic for Mediagate.
//!
//! This crate contains the upload validation rules and the asset-store
//! integration with ZERO web-framework dependencies.
//!
//! # Modules
//!
//! - `asset` - Upload validation, asset references, and the asset service
//! - `store` - HTTP client for the remote asset store

pub mod asset;
pub mod store;
