//! Upload resource routes.
//!
//! One path, four methods:
//! - `OPTIONS` answers preflight checks with `{}`
//! - `POST` validates a multipart form and uploads the file
//! - `GET` returns store metadata for a delivery URL
//! - `DELETE` removes an asset by identifier

use axum::{
    Json, Router,
    extract::{
        Multipart, Query, State,
        multipart::{MultipartError, MultipartRejection},
        rejection::QueryRejection,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use mediagate_core::asset::{AssetReference, AssetStore, UploadFile, UploadForm};
use mediagate_shared::{AppError, DeleteResponse, ErrorResponse, UploadResponse};
use serde_json::json;
use tracing::{debug, error};

use crate::AppState;

/// Resource path served by this module.
pub const UPLOAD_PATH: &str = "/api/upload";

/// Creates the upload routes.
pub fn routes<S: AssetStore + 'static>() -> Router<AppState<S>> {
    Router::new().route(
        UPLOAD_PATH,
        get(fetch_metadata::<S>)
            .post(create_asset::<S>)
            .delete(delete_asset::<S>)
            .options(preflight),
    )
}

// ============================================================================
// Request Types
// ============================================================================

/// Raw query pairs in arrival order. Repeated keys are kept, so a
/// duplicated parameter never fails extraction.
type QueryPairs = Vec<(String, String)>;

// ============================================================================
// Helper Functions
// ============================================================================

/// First value for `key`, matching `URLSearchParams.get`.
fn first_param(pairs: QueryPairs, key: &str) -> Option<String> {
    pairs.into_iter().find(|(k, _)| k == key).map(|(_, v)| v)
}

/// Query pairs, or none when the query string cannot be read.
fn query_pairs(query: Result<Query<QueryPairs>, QueryRejection>) -> QueryPairs {
    query.map(|Query(pairs)| pairs).unwrap_or_else(|e| {
        debug!(error = %e, "Malformed query string");
        Vec::new()
    })
}

/// `{ error, message }` with the error's status.
fn error_response(err: &AppError) -> Response {
    let status =
        StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(ErrorResponse::from(err))).into_response()
}

/// Store failure body shared by delete and fetch metadata.
fn store_failed_response() -> Response {
    (StatusCode::BAD_REQUEST, Json(ErrorResponse::DELETE_FAILED)).into_response()
}

fn upload_failed_response() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(UploadResponse::failed()),
    )
        .into_response()
}

/// Collect the create form. The first occurrence of each field wins;
/// unknown fields are skipped.
async fn read_form(mut multipart: Multipart) -> Result<UploadForm, MultipartError> {
    let mut form = UploadForm::default();

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().map(str::to_owned);
        match name.as_deref() {
            Some("file") if form.file.is_none() => {
                let content_type = field.content_type().unwrap_or_default().to_string();
                let bytes = field.bytes().await?;
                form.file = Some(UploadFile {
                    bytes,
                    content_type,
                });
            }
            Some("allowed") if form.allowed.is_none() => {
                form.allowed = Some(field.text().await?);
            }
            Some("max_size") if form.max_size.is_none() => {
                form.max_size = Some(field.text().await?);
            }
            _ => {}
        }
    }

    Ok(form)
}

// ============================================================================
// Route Handlers
// ============================================================================

/// OPTIONS `/api/upload`
async fn preflight() -> Json<serde_json::Value> {
    Json(json!({}))
}

/// POST `/api/upload`
/// Validate the form and upload the file to the asset store.
async fn create_asset<S: AssetStore + 'static>(
    State(state): State<AppState<S>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Response {
    let form = match multipart {
        Ok(multipart) => read_form(multipart).await,
        Err(rejection) => {
            error!(error = %rejection, "Rejected upload body");
            return upload_failed_response();
        }
    };

    let form = match form {
        Ok(form) => form,
        Err(e) => {
            error!(error = %e, "Failed to read upload form");
            return upload_failed_response();
        }
    };

    match state.assets.upload(form).await {
        Ok(result) => (
            StatusCode::OK,
            Json(UploadResponse::uploaded(result.secure_url, result.public_id)),
        )
            .into_response(),
        Err(e) if e.is_client_error() => error_response(&e),
        Err(_) => upload_failed_response(),
    }
}

/// DELETE `/api/upload?id={public_id}`
async fn delete_asset<S: AssetStore + 'static>(
    State(state): State<AppState<S>>,
    query: Result<Query<QueryPairs>, QueryRejection>,
) -> Response {
    let id = first_param(query_pairs(query), "id");

    let reference = match AssetReference::public_id(id) {
        Ok(reference) => reference,
        Err(e) => return error_response(&e),
    };

    match state.assets.delete(&reference).await {
        Ok(_) => (StatusCode::OK, Json(DeleteResponse::default())).into_response(),
        Err(e) if e.is_client_error() => error_response(&e),
        Err(_) => store_failed_response(),
    }
}

/// GET `/api/upload?url={secure_url}`
/// Return the store's metadata for the asset behind a delivery URL.
async fn fetch_metadata<S: AssetStore + 'static>(
    State(state): State<AppState<S>>,
    query: Result<Query<QueryPairs>, QueryRejection>,
) -> Response {
    let url = first_param(query_pairs(query), "url");

    let reference = match AssetReference::source_url(url) {
        Ok(reference) => reference,
        Err(e) => return error_response(&e),
    };

    match state.assets.fetch_metadata(&reference).await {
        Ok(metadata) => (StatusCode::OK, Json(metadata)).into_response(),
        Err(e) if e.is_client_error() => error_response(&e),
        Err(_) => store_failed_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_response_status() {
        let response = error_response(&AppError::InvalidId);
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_store_failed_response_status() {
        assert_eq!(store_failed_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_first_param_takes_first_occurrence() {
        let pairs = vec![
            ("url".to_string(), "x".to_string()),
            ("id".to_string(), "abc".to_string()),
            ("id".to_string(), "def".to_string()),
        ];
        assert_eq!(first_param(pairs.clone(), "id").as_deref(), Some("abc"));
        assert_eq!(first_param(pairs, "other"), None);
    }

    #[test]
    fn test_upload_failed_response_status() {
        assert_eq!(
            upload_failed_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
