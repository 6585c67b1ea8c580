//! Error types for the header-theme core.

use thiserror::Error;

/// Errors produced by color parsing and theme derivation.
///
/// The color math itself is total; only parsing a hex string can fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ThemeError {
    /// A hex string had the wrong length or contained non-hex characters.
    #[error("invalid color format: {0}")]
    InvalidColorFormat(String),
}
