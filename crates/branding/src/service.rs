//! Logo upload and header style retrieval.

use crate::error::BrandingError;
use crate::store::BlobStore;
use header_theme_core::{HeaderStyle, StyleSource, Theme};
use header_theme_extract::{dominant_color, normalize_to_png, sniff_format, DEFAULT_TOLERANCE};
use tracing::{debug, info, warn};

/// Key the normalized PNG logo is stored under.
pub const LOGO_KEY: &str = "logo.png";

/// Key the header style document is stored under.
pub const STYLE_KEY: &str = "header_style.json";

/// A logo read back from storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredLogo {
    pub bytes: Vec<u8>,
    pub content_type: &'static str,
}

/// Logo and header style service over a [`BlobStore`].
#[derive(Debug)]
pub struct Branding<S> {
    store: S,
    tolerance: u8,
}

impl<S: BlobStore> Branding<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            tolerance: DEFAULT_TOLERANCE,
        }
    }

    /// Sets the color grouping tolerance (0..=100) used during extraction.
    pub fn with_tolerance(mut self, tolerance: u8) -> Self {
        self.tolerance = tolerance.min(100);
        self
    }

    pub fn tolerance(&self) -> u8 {
        self.tolerance
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Stores an uploaded logo and the header style derived from it.
    ///
    /// Undecodable uploads are rejected and nothing is written. A decodable
    /// logo without a single opaque pixel is still stored, with the default
    /// theme and `StyleSource::Fallback`.
    pub fn upload_logo(&self, data: &[u8]) -> Result<HeaderStyle, BrandingError> {
        if data.is_empty() {
            return Err(BrandingError::EmptyUpload);
        }
        debug!(bytes = data.len(), "processing logo upload");

        let logo = normalize_to_png(data).map_err(BrandingError::InvalidImage)?;

        let style = match dominant_color(&logo.image, self.tolerance) {
            Ok(color) => HeaderStyle::new(Theme::from_rgb(color), StyleSource::Extracted),
            Err(e) => {
                warn!(error = %e, "no dominant color in logo, using default theme");
                HeaderStyle::new(Theme::default(), StyleSource::Fallback)
            }
        };

        self.store.put(LOGO_KEY, &logo.png, "image/png")?;
        let json = serde_json::to_vec(&style).map_err(BrandingError::Serialize)?;
        self.store.put(STYLE_KEY, &json, "application/json")?;

        info!(
            dominant = %style.dominant_color,
            complementary = %style.complementary_color,
            source = ?style.source,
            "logo uploaded and header style generated"
        );
        Ok(style)
    }

    /// The stored header style, or the default style if none was uploaded.
    pub fn header_style(&self) -> Result<HeaderStyle, BrandingError> {
        match self.store.get(STYLE_KEY)? {
            Some(bytes) => serde_json::from_slice(&bytes).map_err(BrandingError::CorruptStyle),
            None => {
                debug!("no stored header style, serving default");
                Ok(HeaderStyle::default())
            }
        }
    }

    /// The stored logo, if any, with its sniffed content type.
    pub fn logo(&self) -> Result<Option<StoredLogo>, BrandingError> {
        let Some(bytes) = self.store.get(LOGO_KEY)? else {
            return Ok(None);
        };
        let kind = sniff_format(&bytes).map_err(|_| BrandingError::CorruptLogo)?;
        Ok(Some(StoredLogo {
            bytes,
            content_type: kind.content_type(),
        }))
    }
}
