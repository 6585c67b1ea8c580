//! Color types and conversion functions for header-theme.
//!
//! `Rgb` is the 8-bit color every public interface speaks (hex strings in
//! JSON, pixels out of the image decoder). `Hsl` is the working space of the
//! theme derivation. `OkLab` is only used to measure perceptual distance when
//! grouping similar pixel colors.
//!
//! HSL values produced here are rounded the same way everywhere: hue to a
//! whole degree, saturation and lightness to one decimal place of a percent.

use crate::error::ThemeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// 8-bit sRGB color.
///
/// Serializes as a lowercase hex string `"#rrggbb"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// HSL color: hue in degrees [0, 360), saturation and lightness in percent [0, 100].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

/// OKLab perceptual color space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OkLab {
    pub l: f64,
    pub a: f64,
    pub b: f64,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses a hex color string like "#ff00aa" or "ff00aa" (case insensitive).
    ///
    /// Returns `ThemeError::InvalidColorFormat` unless the input is exactly six
    /// ASCII hex digits after an optional leading `#`.
    pub fn from_hex(hex: &str) -> Result<Rgb, ThemeError> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 {
            return Err(ThemeError::InvalidColorFormat(format!(
                "expected 6 hex digits in {hex:?}, got {}",
                digits.len()
            )));
        }
        // from_str_radix alone would accept a leading '+'.
        if let Some(bad) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
            return Err(ThemeError::InvalidColorFormat(format!(
                "non-hex character {bad:?} in {hex:?}"
            )));
        }
        let channel = |range: std::ops::Range<usize>, name: &str| {
            u8::from_str_radix(&digits[range], 16).map_err(|e| {
                ThemeError::InvalidColorFormat(format!("invalid {name} component: {e}"))
            })
        };
        Ok(Rgb {
            r: channel(0..2, "red")?,
            g: channel(2..4, "green")?,
            b: channel(4..6, "blue")?,
        })
    }

    /// Formats the color as `"#rrggbb"` with lowercase digits.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Channels scaled to [0, 1].
    pub fn normalized(self) -> (f64, f64, f64) {
        (
            self.r as f64 / 255.0,
            self.g as f64 / 255.0,
            self.b as f64 / 255.0,
        )
    }

    /// Converts to OKLab via linear RGB.
    pub fn to_oklab(self) -> OkLab {
        let (r, g, b) = self.normalized();
        linear_to_oklab(
            srgb_component_to_linear(r),
            srgb_component_to_linear(g),
            srgb_component_to_linear(b),
        )
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Rgb {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rgb::from_hex(s)
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Rgb::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

impl OkLab {
    /// Euclidean distance in OKLab. Black to white is 1.0.
    pub fn distance(self, other: OkLab) -> f64 {
        let dl = self.l - other.l;
        let da = self.a - other.a;
        let db = self.b - other.b;
        (dl * dl + da * da + db * db).sqrt()
    }
}

fn round_to_tenth(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

/// Converts an RGB color to HSL.
///
/// Hue is rounded to the nearest degree (a hue rounding up to 360 wraps to 0),
/// saturation and lightness to one decimal place. Achromatic colors get
/// `h = 0, s = 0`.
pub fn rgb_to_hsl(c: Rgb) -> Hsl {
    let (r, g, b) = c.normalized();
    let cmax = r.max(g).max(b);
    let cmin = r.min(g).min(b);
    let delta = cmax - cmin;

    let mut h = if delta == 0.0 {
        0.0
    } else if cmax == r {
        60.0 * (((g - b) / delta) % 6.0)
    } else if cmax == g {
        60.0 * ((b - r) / delta + 2.0)
    } else {
        60.0 * ((r - g) / delta + 4.0)
    };
    if h < 0.0 {
        h += 360.0;
    }
    let h = h.round() % 360.0;

    let l = (cmax + cmin) / 2.0;
    let s = if delta == 0.0 {
        0.0
    } else {
        delta / (1.0 - (2.0 * l - 1.0).abs())
    };

    Hsl {
        h,
        s: round_to_tenth(s * 100.0),
        l: round_to_tenth(l * 100.0),
    }
}

/// Parses a hex color and converts it to HSL.
pub fn hex_to_hsl(hex: &str) -> Result<Hsl, ThemeError> {
    Rgb::from_hex(hex).map(rgb_to_hsl)
}

/// Converts an HSL color to RGB.
///
/// Out-of-range input is tolerated: hue wraps, saturation and lightness clamp
/// to [0, 100].
pub fn hsl_to_rgb(c: Hsl) -> Rgb {
    let h = c.h.rem_euclid(360.0);
    let s = (c.s / 100.0).clamp(0.0, 1.0);
    let l = (c.l / 100.0).clamp(0.0, 1.0);

    let chroma = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = chroma * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = l - chroma / 2.0;

    let (r, g, b) = if h < 60.0 {
        (chroma, x, 0.0)
    } else if h < 120.0 {
        (x, chroma, 0.0)
    } else if h < 180.0 {
        (0.0, chroma, x)
    } else if h < 240.0 {
        (0.0, x, chroma)
    } else if h < 300.0 {
        (x, 0.0, chroma)
    } else {
        (chroma, 0.0, x)
    };

    Rgb {
        r: to_channel(r + m),
        g: to_channel(g + m),
        b: to_channel(b + m),
    }
}

/// Converts an HSL color to a `"#rrggbb"` string.
pub fn hsl_to_hex(c: Hsl) -> String {
    hsl_to_rgb(c).to_hex()
}

fn to_channel(v: f64) -> u8 {
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}

fn srgb_component_to_linear(c: f64) -> f64 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

fn linear_to_oklab(r: f64, g: f64, b: f64) -> OkLab {
    let l_ = 0.4122214708 * r + 0.5363325363 * g + 0.0514459929 * b;
    let m_ = 0.2119034982 * r + 0.6806995451 * g + 0.1073969566 * b;
    let s_ = 0.0883024619 * r + 0.2817188376 * g + 0.6299787005 * b;

    let l_c = l_.cbrt();
    let m_c = m_.cbrt();
    let s_c = s_.cbrt();

    OkLab {
        l: 0.2104542553 * l_c + 0.7936177850 * m_c - 0.0040720468 * s_c,
        a: 1.9779984951 * l_c - 2.4285922050 * m_c + 0.4505937099 * s_c,
        b: 0.0259040371 * l_c + 0.7827717662 * m_c - 0.8086757660 * s_c,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::hue_gap;

    const EPSILON: f64 = 1e-6;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON
    }

    // -- Hex parsing tests --

    #[test]
    fn from_hex_parses_red_with_hash() {
        assert_eq!(Rgb::from_hex("#ff0000").unwrap(), Rgb::new(255, 0, 0));
    }

    #[test]
    fn from_hex_parses_green_without_hash() {
        assert_eq!(Rgb::from_hex("00ff00").unwrap(), Rgb::new(0, 255, 0));
    }

    #[test]
    fn from_hex_is_case_insensitive() {
        assert_eq!(
            Rgb::from_hex("#FF00AA").unwrap(),
            Rgb::from_hex("#ff00aa").unwrap()
        );
    }

    #[test]
    fn from_hex_rejects_wrong_length() {
        for bad in ["#zzz", "#1234", "", "#", "#ff00ff00", "#fff"] {
            assert!(
                matches!(Rgb::from_hex(bad), Err(ThemeError::InvalidColorFormat(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn from_hex_rejects_non_hex_characters() {
        for bad in ["#gggggg", "#12345z", "#+f+f+f", "#ff 0ff"] {
            assert!(
                matches!(Rgb::from_hex(bad), Err(ThemeError::InvalidColorFormat(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn from_hex_rejects_multibyte_input_without_panicking() {
        // Six bytes, but not six characters.
        assert!(Rgb::from_hex("#ééé").is_err());
    }

    #[test]
    fn to_hex_is_lowercase_with_hash() {
        assert_eq!(Rgb::new(0xC0, 0xFF, 0xEE).to_hex(), "#c0ffee");
        assert_eq!(Rgb::new(0, 0, 0).to_string(), "#000000");
    }

    #[test]
    fn from_str_matches_from_hex() {
        let parsed: Rgb = "282C34".parse().unwrap();
        assert_eq!(parsed, Rgb::new(0x28, 0x2c, 0x34));
    }

    // -- Serde tests --

    #[test]
    fn rgb_serializes_as_hex_string() {
        let json = serde_json::to_string(&Rgb::new(255, 0, 0)).unwrap();
        assert_eq!(json, "\"#ff0000\"");
    }

    #[test]
    fn rgb_deserialize_rejects_invalid_hex() {
        let result: Result<Rgb, _> = serde_json::from_str("\"not-a-color\"");
        assert!(result.is_err());
    }

    // -- RGB -> HSL --

    #[test]
    fn pure_red_is_h0_s100_l50() {
        let hsl = hex_to_hsl("#ff0000").unwrap();
        assert_eq!(hsl, Hsl { h: 0.0, s: 100.0, l: 50.0 });
    }

    #[test]
    fn pure_green_and_blue_hues() {
        assert_eq!(hex_to_hsl("#00ff00").unwrap().h, 120.0);
        assert_eq!(hex_to_hsl("#0000ff").unwrap().h, 240.0);
    }

    #[test]
    fn magenta_side_of_red_normalizes_negative_hue() {
        // cmax == r with b > g gives a negative raw hue.
        let hsl = hex_to_hsl("#ff0080").unwrap();
        assert_eq!(hsl.h, 330.0);
    }

    #[test]
    fn achromatic_gray_has_zero_hue_and_saturation() {
        let hsl = hex_to_hsl("#808080").unwrap();
        assert_eq!(hsl.h, 0.0);
        assert_eq!(hsl.s, 0.0);
        assert_eq!(hsl.l, 50.2);
        assert!(!hsl.h.is_nan() && !hsl.s.is_nan());
    }

    #[test]
    fn black_and_white_are_not_nan() {
        let black = hex_to_hsl("#000000").unwrap();
        let white = hex_to_hsl("#ffffff").unwrap();
        assert_eq!(black, Hsl { h: 0.0, s: 0.0, l: 0.0 });
        assert_eq!(white, Hsl { h: 0.0, s: 0.0, l: 100.0 });
    }

    #[test]
    fn default_dominant_decomposes_to_known_hsl() {
        let hsl = hex_to_hsl("#282c34").unwrap();
        assert_eq!(hsl, Hsl { h: 220.0, s: 13.0, l: 18.0 });
    }

    #[test]
    fn hue_just_below_360_wraps_to_zero() {
        // Raw hue is ~359.6 for this color.
        let hsl = hex_to_hsl("#ff0002").unwrap();
        assert_eq!(hsl.h, 0.0);
    }

    // -- HSL -> RGB --

    #[test]
    fn hsl_to_hex_primary_colors() {
        assert_eq!(hsl_to_hex(Hsl { h: 0.0, s: 100.0, l: 50.0 }), "#ff0000");
        assert_eq!(hsl_to_hex(Hsl { h: 120.0, s: 100.0, l: 50.0 }), "#00ff00");
        assert_eq!(hsl_to_hex(Hsl { h: 240.0, s: 100.0, l: 50.0 }), "#0000ff");
    }

    #[test]
    fn hsl_to_hex_covers_every_sector() {
        let expected = [
            (30.0, "#ff8000"),
            (90.0, "#80ff00"),
            (150.0, "#00ff80"),
            (210.0, "#0080ff"),
            (270.0, "#8000ff"),
            (330.0, "#ff0080"),
        ];
        for (h, hex) in expected {
            assert_eq!(hsl_to_hex(Hsl { h, s: 100.0, l: 50.0 }), hex, "hue {h}");
        }
    }

    #[test]
    fn hsl_to_hex_zero_saturation_is_gray() {
        assert_eq!(hsl_to_hex(Hsl { h: 200.0, s: 0.0, l: 50.0 }), "#808080");
    }

    #[test]
    fn hsl_to_rgb_clamps_out_of_range_input() {
        let rgb = hsl_to_rgb(Hsl { h: 720.0, s: 150.0, l: -5.0 });
        assert_eq!(rgb, Rgb::new(0, 0, 0));
    }

    // -- OKLab --

    #[test]
    fn white_in_oklab_has_l_near_one_and_zero_chroma() {
        let lab = Rgb::new(255, 255, 255).to_oklab();
        assert!(approx_eq(lab.l, 1.0), "expected L~1.0, got {}", lab.l);
        assert!(lab.a.abs() < 1e-4, "expected a~0.0, got {}", lab.a);
        assert!(lab.b.abs() < 1e-4, "expected b~0.0, got {}", lab.b);
    }

    #[test]
    fn black_to_white_distance_is_about_one() {
        let d = Rgb::new(0, 0, 0)
            .to_oklab()
            .distance(Rgb::new(255, 255, 255).to_oklab());
        assert!((d - 1.0).abs() < 1e-3, "got {d}");
    }

    #[test]
    fn similar_colors_are_closer_than_different_ones() {
        let red = Rgb::new(220, 20, 20).to_oklab();
        let near_red = Rgb::new(230, 30, 25).to_oklab();
        let blue = Rgb::new(20, 20, 220).to_oklab();
        assert!(red.distance(near_red) < red.distance(blue));
    }

    // -- Property-based tests --

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn any_rgb() -> impl Strategy<Value = Rgb> {
            (any::<u8>(), any::<u8>(), any::<u8>()).prop_map(|(r, g, b)| Rgb::new(r, g, b))
        }

        proptest! {
            #[test]
            fn hsl_round_trip_is_stable_within_one_unit(c in any_rgb()) {
                let first = rgb_to_hsl(c);
                let second = hex_to_hsl(&hsl_to_hex(first)).unwrap();
                prop_assert!(hue_gap(first.h, second.h) <= 1.0,
                    "{c}: h {} vs {}", first.h, second.h);
                prop_assert!((first.s - second.s).abs() <= 1.0,
                    "{c}: s {} vs {}", first.s, second.s);
                prop_assert!((first.l - second.l).abs() <= 1.0,
                    "{c}: l {} vs {}", first.l, second.l);
            }

            #[test]
            fn hsl_fields_stay_in_range(c in any_rgb()) {
                let hsl = rgb_to_hsl(c);
                prop_assert!(hsl.h >= 0.0 && hsl.h < 360.0, "h {}", hsl.h);
                prop_assert!(hsl.s >= 0.0 && hsl.s <= 100.0, "s {}", hsl.s);
                prop_assert!(hsl.l >= 0.0 && hsl.l <= 100.0, "l {}", hsl.l);
            }

            #[test]
            fn hex_round_trip_is_exact(c in any_rgb()) {
                prop_assert_eq!(Rgb::from_hex(&c.to_hex()).unwrap(), c);
            }

            #[test]
            fn achromatic_colors_have_zero_hue_and_saturation(v in any::<u8>()) {
                let hsl = rgb_to_hsl(Rgb::new(v, v, v));
                prop_assert_eq!(hsl.h, 0.0);
                prop_assert_eq!(hsl.s, 0.0);
            }
        }
    }
}
