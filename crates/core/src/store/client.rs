//! Store client implementation using reqwest.

use bytes::Bytes;
use chrono::Utc;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response, Url};
use serde::Deserialize;
use serde::de::DeserializeOwned;

use super::config::StoreConfig;
use super::error::StoreError;
use super::signing::sign_params;
use crate::asset::{AssetMetadata, AssetStore, DestroyAck, EncodeOptions, UploadResult};

/// Error body the store sends with non-success statuses.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: String,
}

/// Subset of the upload response we rely on.
#[derive(Debug, Deserialize)]
struct UploadResponseBody {
    public_id: String,
    secure_url: Option<String>,
    url: Option<String>,
}

/// Client for the remote asset store.
///
/// Stateless apart from its configuration; safe to share across requests.
#[derive(Debug, Clone)]
pub struct StoreClient {
    http: Client,
    config: StoreConfig,
}

impl StoreClient {
    /// Create a new client.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: StoreConfig) -> Result<Self, StoreError> {
        let http = Client::builder()
            .user_agent(concat!("mediagate/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| StoreError::configuration(e.to_string()))?;
        Ok(Self { http, config })
    }

    /// Add `api_key`, `timestamp`, and `signature` to `params`.
    fn signed(&self, mut params: Vec<(&'static str, String)>) -> Vec<(&'static str, String)> {
        params.push(("timestamp", Utc::now().timestamp().to_string()));
        let signature = sign_params(
            &params,
            &self.config.api_secret,
            self.config.signature_algorithm,
        );
        params.push(("api_key", self.config.api_key.clone()));
        params.push(("signature", signature));
        params
    }
}

impl AssetStore for StoreClient {
    async fn upload_stream(
        &self,
        bytes: Bytes,
        options: &EncodeOptions,
    ) -> Result<UploadResult, StoreError> {
        let params = self.signed(vec![
            ("format", options.format.clone()),
            ("transformation", options.transformation()),
        ]);

        // A known length keeps the request out of chunked encoding.
        let length = u64::try_from(bytes.len())
            .map_err(|e| StoreError::configuration(e.to_string()))?;
        let form = params
            .into_iter()
            .fold(Form::new(), |form, (k, v)| form.text(k, v))
            .part(
                "file",
                Part::stream_with_length(bytes, length).file_name("upload"),
            );

        let response = self
            .http
            .post(self.config.image_url("upload"))
            .multipart(form)
            .send()
            .await?;

        let body: UploadResponseBody = decode(response).await?;
        let delivery_url = if self.config.secure {
            body.secure_url.or(body.url)
        } else {
            body.url.or(body.secure_url)
        };

        Ok(UploadResult {
            secure_url: delivery_url
                .ok_or_else(|| StoreError::decode("upload response has no delivery URL"))?,
            public_id: body.public_id,
        })
    }

    async fn destroy(&self, public_id: &str) -> Result<DestroyAck, StoreError> {
        let params = self.signed(vec![("public_id", public_id.to_string())]);

        let response = self
            .http
            .post(self.config.image_url("destroy"))
            .form(&params)
            .send()
            .await?;

        decode(response).await
    }

    async fn get_resource(&self, public_id: &str) -> Result<AssetMetadata, StoreError> {
        let mut url = Url::parse(&self.config.resources_url())
            .map_err(|e| StoreError::configuration(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|()| StoreError::configuration("base URL cannot carry a path"))?
            .push(public_id);

        let response = self
            .http
            .get(url)
            .basic_auth(&self.config.api_key, Some(&self.config.api_secret))
            .send()
            .await?;

        decode(response).await
    }
}

/// Turn a store response into `T`, or into an `Api` error for non-2xx.
async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, StoreError> {
    let status = response.status();
    if !status.is_success() {
        let text = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ApiErrorBody>(&text).map_or_else(
            |_| status.canonical_reason().unwrap_or("unknown").to_string(),
            |body| body.error.message,
        );
        return Err(StoreError::api(status.as_u16(), message));
    }

    let text = response.text().await?;
    serde_json::from_str(&text).map_err(|e| StoreError::decode(e.to_string()))
}
