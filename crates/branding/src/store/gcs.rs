//! Google Cloud Storage backend over the JSON API.
//!
//! Uses a blocking reqwest client. Calls must run off the async executor
//! (`spawn_blocking` in the server), and the store must be built outside an
//! async context.

use super::{validate_key, BlobStore};
use crate::error::StoreError;
use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use reqwest::{StatusCode, Url};
use std::time::Duration;
use tracing::debug;

/// Public endpoint of the Cloud Storage JSON API.
pub const DEFAULT_GCS_API: &str = "https://storage.googleapis.com";

/// Object name prefix the logo blobs live under.
pub const DEFAULT_GCS_PREFIX: &str = "logos/";

/// Blobs stored as objects `{prefix}{key}` in one bucket.
#[derive(Debug, Clone)]
pub struct GcsStore {
    http: Client,
    api_base: Url,
    bucket: String,
    prefix: String,
    token: Option<String>,
}

fn remote(e: impl std::fmt::Display) -> StoreError {
    StoreError::Remote(e.to_string())
}

impl GcsStore {
    /// Creates a store for `bucket`. `token` is an OAuth2 access token sent
    /// as a bearer credential; `None` suits local emulators.
    pub fn new(
        bucket: impl Into<String>,
        prefix: impl Into<String>,
        token: Option<String>,
    ) -> Result<Self, StoreError> {
        Self::with_api_base(DEFAULT_GCS_API, bucket, prefix, token)
    }

    /// Like [`GcsStore::new`] against another endpoint, such as an emulator.
    pub fn with_api_base(
        api_base: &str,
        bucket: impl Into<String>,
        prefix: impl Into<String>,
        token: Option<String>,
    ) -> Result<Self, StoreError> {
        let api_base = Url::parse(api_base).map_err(remote)?;
        if api_base.cannot_be_a_base() {
            return Err(StoreError::Remote(format!("not a base URL: {api_base}")));
        }
        let http = Client::builder()
            .user_agent(concat!("header-theme/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(remote)?;
        Ok(Self {
            http,
            api_base,
            bucket: bucket.into(),
            prefix: prefix.into(),
            token,
        })
    }

    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    fn object_name(&self, key: &str) -> Result<String, StoreError> {
        validate_key(key)?;
        Ok(format!("{}{key}", self.prefix))
    }

    fn url(&self, segments: &[&str]) -> Result<Url, StoreError> {
        let mut url = self.api_base.clone();
        url.path_segments_mut()
            .map_err(|()| StoreError::Remote(format!("not a base URL: {}", self.api_base)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// `POST /upload/storage/v1/b/{bucket}/o?uploadType=media&name={object}`
    fn upload_url(&self, object: &str) -> Result<Url, StoreError> {
        let mut url = self.url(&["upload", "storage", "v1", "b", &self.bucket, "o"])?;
        url.query_pairs_mut()
            .append_pair("uploadType", "media")
            .append_pair("name", object);
        Ok(url)
    }

    /// `GET /storage/v1/b/{bucket}/o/{object}`, the object name as one segment.
    fn object_url(&self, object: &str, media: bool) -> Result<Url, StoreError> {
        let mut url = self.url(&["storage", "v1", "b", &self.bucket, "o", object])?;
        if media {
            url.query_pairs_mut().append_pair("alt", "media");
        }
        Ok(url)
    }

    fn authorize(
        &self,
        req: reqwest::blocking::RequestBuilder,
    ) -> reqwest::blocking::RequestBuilder {
        match &self.token {
            Some(token) => req.bearer_auth(token),
            None => req,
        }
    }

    /// Fetches an object; `None` on 404.
    fn fetch(&self, key: &str, media: bool) -> Result<Option<Vec<u8>>, StoreError> {
        let object = self.object_name(key)?;
        let url = self.object_url(&object, media)?;
        let resp = self.authorize(self.http.get(url)).send().map_err(remote)?;
        match resp.status() {
            StatusCode::NOT_FOUND => Ok(None),
            s if s.is_success() => Ok(Some(resp.bytes().map_err(remote)?.to_vec())),
            s => Err(StoreError::Remote(format!("GET {object}: HTTP {s}"))),
        }
    }
}

impl BlobStore for GcsStore {
    fn put(&self, key: &str, data: &[u8], content_type: &str) -> Result<(), StoreError> {
        let object = self.object_name(key)?;
        let url = self.upload_url(&object)?;
        let resp = self
            .authorize(self.http.post(url))
            .header(CONTENT_TYPE, content_type)
            .body(data.to_vec())
            .send()
            .map_err(remote)?;
        let status = resp.status();
        if !status.is_success() {
            return Err(StoreError::Remote(format!("upload {object}: HTTP {status}")));
        }
        debug!(bucket = %self.bucket, object, bytes = data.len(), "uploaded blob");
        Ok(())
    }

    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        self.fetch(key, true)
    }

    fn exists(&self, key: &str) -> Result<bool, StoreError> {
        Ok(self.fetch(key, false)?.is_some())
    }
}
