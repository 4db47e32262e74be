//! Identifying a previously uploaded asset.

use mediagate_shared::{AppError, AppResult};

/// The two ways a caller may name an existing asset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetReference {
    /// The store's identifier.
    PublicId(String),
    /// A delivery URL previously returned by create.
    SourceUrl(String),
}

impl AssetReference {
    /// Reference by identifier. Missing or empty values are `InvalidId`.
    pub fn public_id(raw: Option<String>) -> AppResult<Self> {
        non_empty(raw).map(Self::PublicId)
    }

    /// Reference by delivery URL. Missing or empty values are `InvalidId`.
    pub fn source_url(raw: Option<String>) -> AppResult<Self> {
        non_empty(raw).map(Self::SourceUrl)
    }

    /// The store identifier this reference points at.
    ///
    /// For URLs the identifier is derived with [`derive_public_id`]; an empty
    /// result is `InvalidId`.
    pub fn resolve(&self) -> AppResult<&str> {
        match self {
            Self::PublicId(id) => Ok(id.as_str()),
            Self::SourceUrl(url) => derive_public_id(url).ok_or(AppError::InvalidId),
        }
    }
}

fn non_empty(raw: Option<String>) -> AppResult<String> {
    raw.filter(|s| !s.is_empty()).ok_or(AppError::InvalidId)
}

/// Take the last `/`-delimited segment of `url` and cut it at the first `.`.
///
/// Returns `None` when that leaves nothing.
#[must_use]
pub fn derive_public_id(url: &str) -> Option<&str> {
    let last = url.rsplit('/').next().unwrap_or(url);
    let id = last.split('.').next().unwrap_or(last);
    (!id.is_empty()).then_some(id)
}
