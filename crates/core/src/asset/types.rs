//! Asset types and data structures.

use std::collections::HashSet;

use bytes::Bytes;
use mediagate_shared::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// Raw metadata object returned by the store, passed through verbatim.
pub type AssetMetadata = serde_json::Value;

/// A file part received from the upload form.
#[derive(Debug, Clone)]
pub struct UploadFile {
    /// File contents.
    pub bytes: Bytes,
    /// Client-declared MIME type; empty when the part carried none.
    pub content_type: String,
}

/// The create form as received, before validation.
#[derive(Debug, Clone, Default)]
pub struct UploadForm {
    /// `file` field.
    pub file: Option<UploadFile>,
    /// `allowed` field: `|`-delimited image subtypes.
    pub allowed: Option<String>,
    /// `max_size` field: string-encoded byte count.
    pub max_size: Option<String>,
}

impl UploadForm {
    /// Resolve the form into a request, failing with `NoImage` when the
    /// file is absent.
    ///
    /// A missing `allowed` field yields an empty allowed set. A blank
    /// `max_size` reads as zero, like a numeric cast of an empty string; a
    /// missing or unparseable one falls back to `default_max_size`.
    pub fn into_request(self, default_max_size: u64) -> AppResult<UploadRequest> {
        let file = self.file.ok_or(AppError::NoImage)?;

        let allowed_subtypes = self
            .allowed
            .as_deref()
            .map(parse_allowed)
            .unwrap_or_default();

        let max_size_bytes = match self.max_size.as_deref().map(str::trim) {
            None => default_max_size,
            Some("") => 0,
            Some(raw) => raw.parse::<u64>().unwrap_or_else(|_| {
                tracing::warn!(max_size = raw, "Unparseable max_size, using default");
                default_max_size
            }),
        };

        Ok(UploadRequest {
            file_bytes: file.bytes,
            declared_mime_type: file.content_type,
            allowed_subtypes,
            max_size_bytes,
        })
    }
}

fn parse_allowed(raw: &str) -> HashSet<String> {
    raw.split('|').map(str::to_owned).collect()
}

/// A single upload, constructed per request and discarded afterwards.
#[derive(Debug, Clone)]
pub struct UploadRequest {
    /// File contents.
    pub file_bytes: Bytes,
    /// Client-declared MIME type.
    pub declared_mime_type: String,
    /// Accepted image subtypes.
    pub allowed_subtypes: HashSet<String>,
    /// Size ceiling in bytes, inclusive.
    pub max_size_bytes: u64,
}

impl UploadRequest {
    /// File size in bytes.
    #[must_use]
    pub fn size(&self) -> u64 {
        u64::try_from(self.file_bytes.len()).unwrap_or(u64::MAX)
    }

    /// Check the declared type, then the size. The first failure wins.
    ///
    /// Only the declared MIME type is consulted; the bytes are not sniffed.
    pub fn validate(&self) -> AppResult<()> {
        let mut segments = self.declared_mime_type.split('/');
        let kind = segments.next();
        let subtype = segments.next();

        let type_ok = kind == Some("image")
            && subtype.is_some_and(|sub| self.allowed_subtypes.contains(sub));
        if !type_ok {
            return Err(AppError::InvalidType(self.declared_mime_type.clone()));
        }

        let size = self.size();
        if size > self.max_size_bytes {
            return Err(AppError::InvalidSize {
                size,
                max: self.max_size_bytes,
            });
        }

        Ok(())
    }
}

/// How the store should encode an incoming asset: the target format, with
/// quality left to the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodeOptions {
    /// Target format.
    pub format: String,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            format: "webp".to_string(),
        }
    }
}

impl EncodeOptions {
    /// Incoming transformation string, e.g. `f_webp,q_auto`.
    #[must_use]
    pub fn transformation(&self) -> String {
        format!("f_{},q_auto", self.format)
    }
}

/// Stored asset as reported by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadResult {
    /// HTTPS delivery URL.
    pub secure_url: String,
    /// Store-assigned identifier.
    pub public_id: String,
}

/// Store acknowledgement for a deletion, e.g. `ok` or `not found`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DestroyAck {
    /// Result string.
    pub result: String,
}
