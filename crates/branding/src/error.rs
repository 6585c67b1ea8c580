//! Error types for storage and the branding service.

use header_theme_extract::ExtractError;
use thiserror::Error;

/// Errors produced by a [`BlobStore`](crate::BlobStore).
#[derive(Debug, Error)]
pub enum StoreError {
    /// Keys are flat names; separators and dot segments are refused.
    #[error("invalid storage key: {0:?}")]
    InvalidKey(String),

    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A remote object store refused or failed the request.
    #[error("remote storage error: {0}")]
    Remote(String),
}

/// Errors produced by the branding service.
#[derive(Debug, Error)]
pub enum BrandingError {
    /// The upload contained no bytes.
    #[error("uploaded logo is empty")]
    EmptyUpload,

    /// The upload could not be read as an image.
    #[error("invalid image: {0}")]
    InvalidImage(#[source] ExtractError),

    #[error(transparent)]
    Storage(#[from] StoreError),

    /// The stored header style is not valid JSON for a `HeaderStyle`.
    #[error("stored header style is corrupt: {0}")]
    CorruptStyle(#[source] serde_json::Error),

    /// The stored logo is not a recognized image.
    #[error("stored logo is not a valid image")]
    CorruptLogo,

    #[error("failed to serialize header style: {0}")]
    Serialize(#[source] serde_json::Error),
}
