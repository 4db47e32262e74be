//! Asset service implementation.

use std::future::Future;
use std::sync::Arc;

use bytes::Bytes;
use mediagate_shared::{AppError, AppResult};
use tracing::{debug, error, info};

use super::reference::AssetReference;
use super::types::{AssetMetadata, DestroyAck, EncodeOptions, UploadForm, UploadResult};
use crate::store::StoreError;

/// Remote asset store operations consumed by the gateway.
///
/// Each call is one awaited operation resolving to a single result or a
/// single error. Implemented by [`crate::store::StoreClient`].
pub trait AssetStore: Send + Sync {
    /// Upload `bytes`, encoding them as described by `options`.
    fn upload_stream(
        &self,
        bytes: Bytes,
        options: &EncodeOptions,
    ) -> impl Future<Output = Result<UploadResult, StoreError>> + Send;

    /// Delete an asset by identifier.
    fn destroy(&self, public_id: &str)
    -> impl Future<Output = Result<DestroyAck, StoreError>> + Send;

    /// Fetch an asset's metadata by identifier.
    fn get_resource(
        &self,
        public_id: &str,
    ) -> impl Future<Output = Result<AssetMetadata, StoreError>> + Send;
}

/// Validates uploads and delegates to the asset store.
///
/// Holds no per-request state; results are never cached.
pub struct AssetService<S: AssetStore> {
    store: Arc<S>,
    encode: EncodeOptions,
    default_max_size: u64,
}

impl<S: AssetStore> AssetService<S> {
    /// Create a new asset service.
    #[must_use]
    pub fn new(store: Arc<S>, default_max_size: u64) -> Self {
        Self {
            store,
            encode: EncodeOptions::default(),
            default_max_size,
        }
    }

    /// Validate the form and upload the file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file is missing (`NoImage`)
    /// - The declared type is not an allowed image subtype (`InvalidType`)
    /// - The file exceeds the size ceiling (`InvalidSize`)
    /// - The store fails (`Upstream`)
    pub async fn upload(&self, form: UploadForm) -> AppResult<UploadResult> {
        let request = form.into_request(self.default_max_size)?;
        if let Err(e) = request.validate() {
            debug!(error = %e, "Upload rejected");
            return Err(e);
        }

        let result = self
            .store
            .upload_stream(request.file_bytes, &self.encode)
            .await
            .map_err(|e| upstream("upload", &e))?;

        info!(public_id = %result.public_id, "File uploaded");
        Ok(result)
    }

    /// Delete the referenced asset.
    ///
    /// # Errors
    ///
    /// Returns `InvalidId` if no identifier can be resolved, or `Upstream`
    /// if the store fails.
    pub async fn delete(&self, reference: &AssetReference) -> AppResult<DestroyAck> {
        let public_id = reference.resolve()?;

        let ack = self
            .store
            .destroy(public_id)
            .await
            .map_err(|e| upstream("destroy", &e))?;

        info!(public_id, result = %ack.result, "File deleted");
        Ok(ack)
    }

    /// Fetch the referenced asset's metadata from the store.
    ///
    /// # Errors
    ///
    /// Returns `InvalidId` if no identifier can be resolved, or `Upstream`
    /// if the store fails.
    pub async fn fetch_metadata(&self, reference: &AssetReference) -> AppResult<AssetMetadata> {
        let public_id = reference.resolve()?;

        self.store
            .get_resource(public_id)
            .await
            .map_err(|e| upstream("get_resource", &e))
    }
}

// Full detail goes to the log; callers only ever see the kind.
fn upstream(operation: &'static str, err: &StoreError) -> AppError {
    error!(operation, error = %err, "Asset store call failed");
    AppError::upstream(err.to_string())
}
