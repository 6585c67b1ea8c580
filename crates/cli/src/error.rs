//! Structured CLI errors with meaningful exit codes.
//!
//! Exit code scheme:
//! - 0:  success
//! - 2:  clap arg parse error (automatic, before our code runs)
//! - 10: theme error (malformed color)
//! - 11: I/O or storage error (reading the image, writing the logo, the store)
//! - 12: input error (undecodable image, nothing to extract, nothing stored)
//! - 13: serialization error

use header_theme_branding::{BrandingError, ExtractError};
use header_theme_core::ThemeError;
use std::fmt;

/// Errors produced by CLI operations, each mapped to a distinct exit code.
pub enum CliError {
    /// A color could not be parsed.
    Theme(ThemeError),
    /// Filesystem or store failure.
    Io(String),
    /// The input image or store contents were unusable.
    Input(String),
    /// A serialization error (JSON output failure).
    Serialization(String),
}

impl CliError {
    /// Returns the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Theme(_) => 10,
            CliError::Io(_) => 11,
            CliError::Input(_) => 12,
            CliError::Serialization(_) => 13,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Theme(e) => write!(f, "{e}"),
            CliError::Io(msg) => write!(f, "{msg}"),
            CliError::Input(msg) => write!(f, "{msg}"),
            CliError::Serialization(msg) => write!(f, "{msg}"),
        }
    }
}

impl From<ThemeError> for CliError {
    fn from(e: ThemeError) -> Self {
        CliError::Theme(e)
    }
}

impl From<ExtractError> for CliError {
    fn from(e: ExtractError) -> Self {
        CliError::Input(e.to_string())
    }
}

impl From<BrandingError> for CliError {
    fn from(e: BrandingError) -> Self {
        match e {
            BrandingError::EmptyUpload | BrandingError::InvalidImage(_) => {
                CliError::Input(e.to_string())
            }
            other => CliError::Io(other.to_string()),
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Serialization(e.to_string())
    }
}
