//! Asset service for image uploads.
//!
//! This module provides the upload gateway's business logic:
//! - Upload form validation (presence, MIME allow-list, size ceiling)
//! - Asset identifier derivation from delivery URLs
//! - Upload, deletion, and metadata lookup through an [`AssetStore`]

mod reference;
mod service;
mod types;

pub use reference::{AssetReference, derive_public_id};
pub use service::{AssetService, AssetStore};
pub use types::{
    AssetMetadata, DestroyAck, EncodeOptions, UploadFile, UploadForm, UploadRequest, UploadResult,
};
