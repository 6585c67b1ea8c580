//! Decoding uploaded logos and normalizing them to PNG.
//!
//! Logos are always stored as PNG. A PNG upload keeps its original bytes;
//! anything else is decoded and re-encoded.

use crate::error::ExtractError;
use crate::format::{sniff_format, ImageKind};
use image::{DynamicImage, GenericImageView, ImageFormat};
use std::io::Cursor;
use tracing::debug;

/// A decoded logo together with the PNG bytes to store.
#[derive(Debug, Clone)]
pub struct Logo {
    pub image: DynamicImage,
    pub png: Vec<u8>,
    /// Format the logo was uploaded in.
    pub original: ImageKind,
}

/// Sniffs the format and decodes the image.
pub fn decode(data: &[u8]) -> Result<(ImageKind, DynamicImage), ExtractError> {
    let kind = sniff_format(data)?;
    let image = image::load_from_memory_with_format(data, kind.image_format())
        .map_err(|e| ExtractError::Decode(e.to_string()))?;
    let (w, h) = image.dimensions();
    debug!(format = ?kind, width = w, height = h, bytes = data.len(), "decoded logo");
    Ok((kind, image))
}

/// Encodes an image as PNG.
pub fn encode_png(image: &DynamicImage) -> Result<Vec<u8>, ExtractError> {
    let mut buf = Cursor::new(Vec::new());
    image
        .write_to(&mut buf, ImageFormat::Png)
        .map_err(|e| ExtractError::Encode(e.to_string()))?;
    Ok(buf.into_inner())
}

/// Decodes an uploaded logo and produces the PNG bytes to persist.
pub fn normalize_to_png(data: &[u8]) -> Result<Logo, ExtractError> {
    let (original, image) = decode(data)?;
    let png = match original {
        ImageKind::Png => data.to_vec(),
        other => {
            debug!(from = ?other, "converting logo to PNG");
            encode_png(&image)?
        }
    };
    Ok(Logo {
        image,
        png,
        original,
    })
}
