//! Blob storage for the logo and the header style document.
//!
//! Keys are flat object names such as `logo.png`. The local store keeps them as
//! files in one directory; the memory store backs tests.

mod fallback;
#[cfg(feature = "gcs")]
mod gcs;
mod local;
mod memory;

pub use fallback::FallbackStore;
#[cfg(feature = "gcs")]
pub use gcs::{GcsStore, DEFAULT_GCS_API, DEFAULT_GCS_PREFIX};
pub use local::LocalStore;
pub use memory::MemoryStore;

use crate::error::StoreError;
use std::sync::Arc;

/// A flat key/value store of byte blobs.
///
/// This trait is **object-safe** so a server can hold `Arc<dyn BlobStore>`.
pub trait BlobStore: Send + Sync {
    /// Stores `data` under `key`, replacing any previous value.
    fn put(&self, key: &str, data: &[u8], content_type: &str) -> Result<(), StoreError>;

    /// Returns the blob under `key`, or `None` if nothing is stored.
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError>;

    fn exists(&self, key: &str) -> Result<bool, StoreError> {
        Ok(self.get(key)?.is_some())
    }
}

impl<T: BlobStore + ?Sized> BlobStore for Arc<T> {
    fn put(&self, key: &str, data: &[u8], content_type: &str) -> Result<(), StoreError> {
        (**self).put(key, data, content_type)
    }

    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        (**self).get(key)
    }

    fn exists(&self, key: &str) -> Result<bool, StoreError> {
        (**self).exists(key)
    }
}

/// Rejects keys that could escape a flat namespace.
pub(crate) fn validate_key(key: &str) -> Result<(), StoreError> {
    let bad = key.is_empty()
        || key == "."
        || key == ".."
        || key.starts_with('.')
        || key.contains(['/', '\\', '\0']);
    if bad {
        return Err(StoreError::InvalidKey(key.to_string()));
    }
    Ok(())
}
