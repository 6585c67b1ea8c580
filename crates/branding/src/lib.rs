#![deny(unsafe_code)]
//! Branding service for header-theme.
//!
//! Wires an uploaded logo through extraction and theme derivation into a
//! [`BlobStore`], and reads the stored header style and logo back out.

pub mod error;
pub mod service;
pub mod store;

pub use error::{BrandingError, StoreError};
pub use service::{Branding, StoredLogo, LOGO_KEY, STYLE_KEY};
pub use store::{BlobStore, FallbackStore, LocalStore, MemoryStore};
#[cfg(feature = "gcs")]
pub use store::{GcsStore, DEFAULT_GCS_API, DEFAULT_GCS_PREFIX};

pub use header_theme_extract::{ExtractError, DEFAULT_TOLERANCE};
