//! Magic-byte detection of supported image formats.

use crate::error::ExtractError;
use image::ImageFormat;
use tracing::warn;

/// Image container formats accepted as logos.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageKind {
    Png,
    Jpeg,
    Gif,
    WebP,
    Bmp,
}

impl ImageKind {
    pub fn content_type(self) -> &'static str {
        match self {
            ImageKind::Png => "image/png",
            ImageKind::Jpeg => "image/jpeg",
            ImageKind::Gif => "image/gif",
            ImageKind::WebP => "image/webp",
            ImageKind::Bmp => "image/bmp",
        }
    }

    pub fn image_format(self) -> ImageFormat {
        match self {
            ImageKind::Png => ImageFormat::Png,
            ImageKind::Jpeg => ImageFormat::Jpeg,
            ImageKind::Gif => ImageFormat::Gif,
            ImageKind::WebP => ImageFormat::WebP,
            ImageKind::Bmp => ImageFormat::Bmp,
        }
    }
}

const PNG_SIGNATURE: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

/// Detects the image format from its leading bytes.
pub fn sniff_format(data: &[u8]) -> Result<ImageKind, ExtractError> {
    if data.len() < 4 {
        return Err(ExtractError::TooSmall(data.len()));
    }

    if data.starts_with(&[0xFF, 0xD8, 0xFF]) {
        return Ok(ImageKind::Jpeg);
    }
    if data.starts_with(&PNG_SIGNATURE) {
        return Ok(ImageKind::Png);
    }
    if data.len() >= 12 && &data[0..4] == b"RIFF" && &data[8..12] == b"WEBP" {
        return Ok(ImageKind::WebP);
    }
    if data.starts_with(b"GIF87a") || data.starts_with(b"GIF89a") {
        return Ok(ImageKind::Gif);
    }
    if data.starts_with(b"BM") {
        return Ok(ImageKind::Bmp);
    }

    warn!(
        "unrecognized image format, first bytes: {:02X?}",
        &data[..8.min(data.len())]
    );
    Err(ExtractError::UnrecognizedFormat)
}
