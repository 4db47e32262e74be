//! HTTP client for the remote asset store.
//!
//! Speaks the Cloudinary-compatible upload and admin API:
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │                     Remote asset store                           │
//! ├──────────────────────────────────────────────────────────────────┤
//! │ POST /v1_1/{cloud}/image/upload      multipart, signed           │
//! │ POST /v1_1/{cloud}/image/destroy     form-encoded, signed        │
//! │ GET  /v1_1/{cloud}/resources/image/upload/{public_id}  basic auth│
//! └──────────────────────────────────────────────────────────────────┘
//! ```

mod client;
mod config;
mod error;
mod signing;

pub use client::StoreClient;
pub use config::StoreConfig;
pub use error::StoreError;
pub use signing::sign_params;
