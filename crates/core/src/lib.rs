#![deny(unsafe_code)]
//! Core types for header-theme.
//!
//! Provides the `Rgb`/`Hsl`/`OkLab` color types with hex and HSL conversion,
//! the complementary-color derivation used to build a header [`Theme`], and the
//! persisted [`HeaderStyle`] document.

pub mod color;
pub mod error;
pub mod style;
pub mod theme;

#[cfg(test)]
mod test_util;

pub use color::{hex_to_hsl, hsl_to_hex, Hsl, OkLab, Rgb};
pub use error::ThemeError;
pub use style::{HeaderStyle, StyleSource, LOGO_URL};
pub use theme::{complementary, Theme, DEFAULT_COMPLEMENTARY, DEFAULT_DOMINANT};
