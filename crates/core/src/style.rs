//! The persisted header style document.
//!
//! This is the JSON the frontend fetches to paint its header:
//! `{"dominantColor", "complementaryColor", "logoUrl", "source"}`.

use crate::theme::Theme;
use serde::{Deserialize, Serialize};

/// Path the frontend loads the uploaded logo from.
pub const LOGO_URL: &str = "/api/logo";

/// Where the colors of a [`HeaderStyle`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleSource {
    /// Extracted from the uploaded logo.
    Extracted,
    /// A logo was uploaded but yielded no usable color.
    Fallback,
    /// Nothing has been uploaded yet.
    Default,
}

/// Header style served to the frontend and stored next to the logo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderStyle {
    pub dominant_color: String,
    pub complementary_color: String,
    pub logo_url: String,
    pub source: StyleSource,
}

impl HeaderStyle {
    pub fn new(theme: Theme, source: StyleSource) -> Self {
        Self {
            dominant_color: theme.dominant_color,
            complementary_color: theme.complementary_color,
            logo_url: LOGO_URL.to_string(),
            source,
        }
    }

    pub fn theme(&self) -> Theme {
        Theme {
            dominant_color: self.dominant_color.clone(),
            complementary_color: self.complementary_color.clone(),
        }
    }
}

impl Default for HeaderStyle {
    fn default() -> Self {
        Self::new(Theme::default(), StyleSource::Default)
    }
}
