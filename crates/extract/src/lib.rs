#![deny(unsafe_code)]
//! Logo handling for header-theme: format sniffing, decoding, PNG
//! normalization and dominant color extraction.
//!
//! This crate sits between `header-theme-core` (which owns the color math) and
//! the branding service, so the CLI and server share one extraction path.

pub mod error;
pub mod format;
pub mod logo;
pub mod pixel;
pub mod swatch;

pub use error::ExtractError;
pub use format::{sniff_format, ImageKind};
pub use logo::{decode, encode_png, normalize_to_png, Logo};
pub use swatch::{dominant_color, extract_swatches, Swatch, DEFAULT_TOLERANCE};
