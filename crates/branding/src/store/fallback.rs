use super::BlobStore;
use crate::error::StoreError;
use tracing::warn;

/// A primary store backed by a secondary one.
///
/// Writes go to the primary and land in the fallback only when the primary
/// fails. Reads try the primary first and consult the fallback when the primary
/// errors or has nothing, so a blob written during a primary outage stays
/// visible afterwards.
#[derive(Debug, Clone)]
pub struct FallbackStore<P, F> {
    primary: P,
    fallback: F,
}

impl<P: BlobStore, F: BlobStore> FallbackStore<P, F> {
    pub fn new(primary: P, fallback: F) -> Self {
        Self { primary, fallback }
    }

    pub fn primary(&self) -> &P {
        &self.primary
    }

    pub fn fallback(&self) -> &F {
        &self.fallback
    }
}

impl<P: BlobStore, F: BlobStore> BlobStore for FallbackStore<P, F> {
    fn put(&self, key: &str, data: &[u8], content_type: &str) -> Result<(), StoreError> {
        match self.primary.put(key, data, content_type) {
            Ok(()) => Ok(()),
            Err(StoreError::InvalidKey(k)) => Err(StoreError::InvalidKey(k)),
            Err(e) => {
                warn!(key, error = %e, "primary store write failed, using fallback");
                self.fallback.put(key, data, content_type)
            }
        }
    }

    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        match self.primary.get(key) {
            Ok(Some(data)) => Ok(Some(data)),
            Ok(None) => self.fallback.get(key),
            Err(StoreError::InvalidKey(k)) => Err(StoreError::InvalidKey(k)),
            Err(e) => {
                warn!(key, error = %e, "primary store read failed, using fallback");
                self.fallback.get(key)
            }
        }
    }

    fn exists(&self, key: &str) -> Result<bool, StoreError> {
        match self.primary.exists(key) {
            Ok(true) => Ok(true),
            Ok(false) => self.fallback.exists(key),
            Err(StoreError::InvalidKey(k)) => Err(StoreError::InvalidKey(k)),
            Err(e) => {
                warn!(key, error = %e, "primary store lookup failed, using fallback");
                self.fallback.exists(key)
            }
        }
    }
}
