//! Header theme derivation: a dominant color plus its complementary color.
//!
//! The complementary color sits opposite the dominant on the color wheel,
//! with saturation forced into a vibrant band and lightness pushed toward the
//! other extreme, so header accents stay visible against any logo color.

use crate::color::{hex_to_hsl, hsl_to_hex, rgb_to_hsl, Hsl, Rgb};
use crate::error::ThemeError;
use serde::{Deserialize, Serialize};

/// Dominant color used when no logo color is available.
pub const DEFAULT_DOMINANT: &str = "#282c34";

/// Complementary color paired with [`DEFAULT_DOMINANT`].
pub const DEFAULT_COMPLEMENTARY: &str = "#6495ED";

const SATURATION_FLOOR: f64 = 60.0;
const SATURATION_CEILING: f64 = 90.0;
const LIGHTNESS_SHIFT: f64 = 30.0;
const LIGHTNESS_FLOOR: f64 = 30.0;
const LIGHTNESS_CEILING: f64 = 80.0;

/// A header theme: the dominant color and the color used for contrast.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    pub dominant_color: String,
    pub complementary_color: String,
}

impl Theme {
    /// Derives a theme from an optional dominant color.
    ///
    /// `None` yields the default theme. A supplied color is normalized to
    /// lowercase `#rrggbb`; malformed input is an error, never a silent default.
    pub fn derive(dominant: Option<&str>) -> Result<Self, ThemeError> {
        match dominant {
            None => Ok(Self::default()),
            Some(hex) => {
                let rgb = Rgb::from_hex(hex)?;
                Ok(Self::from_rgb(rgb))
            }
        }
    }

    /// Derives a theme from an already-parsed color.
    pub fn from_rgb(dominant: Rgb) -> Self {
        let complementary = hsl_to_hex(complementary_hsl(rgb_to_hsl(dominant)));
        Self {
            dominant_color: dominant.to_hex(),
            complementary_color: complementary,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            dominant_color: DEFAULT_DOMINANT.to_string(),
            complementary_color: DEFAULT_COMPLEMENTARY.to_string(),
        }
    }
}

/// Rotates the hue by 180 degrees and adjusts saturation and lightness for contrast.
pub fn complementary_hsl(c: Hsl) -> Hsl {
    let h = (c.h + 180.0) % 360.0;
    let s = c.s.clamp(SATURATION_FLOOR, SATURATION_CEILING);
    let l = if c.l < 50.0 {
        (c.l + LIGHTNESS_SHIFT).min(LIGHTNESS_CEILING)
    } else {
        (c.l - LIGHTNESS_SHIFT).max(LIGHTNESS_FLOOR)
    };
    Hsl { h, s, l }
}

/// Computes the complementary color of a hex color, as a hex string.
pub fn complementary(hex: &str) -> Result<String, ThemeError> {
    hex_to_hsl(hex).map(|hsl| hsl_to_hex(complementary_hsl(hsl)))
}
