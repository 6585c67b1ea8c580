use std::{fmt, sync::Arc};

use header_theme_branding::{BlobStore, Branding, LocalStore, StoreError};

use crate::config::{Config, DEFAULT_MAX_UPLOAD_BYTES};

#[derive(Clone)]
pub struct AppState {
    pub branding: Arc<Branding<Arc<dyn BlobStore>>>,
    pub max_upload_bytes: usize,
    pub cors_origins: Arc<[String]>,
}

impl AppState {
    pub fn new(store: Arc<dyn BlobStore>) -> Self {
        Self {
            branding: Arc::new(Branding::new(store)),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            cors_origins: Arc::from(Vec::new()),
        }
    }

    /// Opens the store named by the config and applies its settings.
    ///
    /// With the `gcs` feature and a bucket configured, the bucket is the
    /// primary store and the local directory its fallback. The bucket client
    /// blocks, so call this outside the async executor.
    pub fn from_config(config: &Config) -> Result<Self, StoreError> {
        let store = open_store(config)?;
        Ok(Self {
            branding: Arc::new(Branding::new(store).with_tolerance(config.tolerance)),
            max_upload_bytes: config.max_upload_bytes,
            cors_origins: Arc::from(config.cors_origins.clone()),
        })
    }

    pub fn with_max_upload_bytes(mut self, limit: usize) -> Self {
        self.max_upload_bytes = limit;
        self
    }
}

#[cfg(not(feature = "gcs"))]
fn open_store(config: &Config) -> Result<Arc<dyn BlobStore>, StoreError> {
    Ok(Arc::new(LocalStore::open(&config.store_dir)?))
}

#[cfg(feature = "gcs")]
fn open_store(config: &Config) -> Result<Arc<dyn BlobStore>, StoreError> {
    use header_theme_branding::{FallbackStore, GcsStore};

    let local = LocalStore::open(&config.store_dir)?;
    let Some(bucket) = &config.gcs_bucket else {
        return Ok(Arc::new(local));
    };
    let gcs = GcsStore::with_api_base(
        &config.gcs_api,
        bucket.as_str(),
        config.gcs_prefix.as_str(),
        config.gcs_token.clone(),
    )?;
    tracing::info!(bucket = %bucket, fallback = %config.store_dir.display(), "using cloud storage");
    Ok(Arc::new(FallbackStore::new(gcs, local)))
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("tolerance", &self.branding.tolerance())
            .field("max_upload_bytes", &self.max_upload_bytes)
            .finish_non_exhaustive()
    }
}
