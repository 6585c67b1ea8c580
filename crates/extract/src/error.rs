//! Error types for logo decoding and color extraction.

use thiserror::Error;

/// Errors produced while reading an uploaded logo.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// Fewer bytes than any image header.
    #[error("image data too small to contain a header ({0} bytes)")]
    TooSmall(usize),

    /// The magic bytes match no supported format.
    #[error("unrecognized image format")]
    UnrecognizedFormat,

    /// The header was recognized but the image could not be decoded.
    #[error("failed to decode image: {0}")]
    Decode(String),

    /// Re-encoding the image as PNG failed.
    #[error("failed to encode image: {0}")]
    Encode(String),

    /// Every pixel is fully transparent, so there is no color to extract.
    #[error("image has no opaque pixels")]
    NoOpaquePixels,
}
