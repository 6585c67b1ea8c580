use super::{validate_key, BlobStore};
use crate::error::StoreError;
use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

/// In-process store, mainly for tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    blobs: Mutex<HashMap<String, (Vec<u8>, String)>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Content type recorded for `key` on its last `put`.
    pub fn content_type(&self, key: &str) -> Option<String> {
        self.blobs
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .map(|(_, ct)| ct.clone())
    }
}

impl BlobStore for MemoryStore {
    fn put(&self, key: &str, data: &[u8], content_type: &str) -> Result<(), StoreError> {
        validate_key(key)?;
        self.blobs
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), (data.to_vec(), content_type.to_string()));
        Ok(())
    }

    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        validate_key(key)?;
        Ok(self
            .blobs
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .map(|(data, _)| data.clone()))
    }
}
