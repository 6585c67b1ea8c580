//! Grouping of similar pixel colors into swatches.
//!
//! Colors are visited from most to least frequent. Each one joins the first
//! swatch whose representative lies within the tolerance, or starts a new
//! swatch. A swatch keeps the color of its most frequent member.

use crate::error::ExtractError;
use crate::pixel::opaque_histogram;
use header_theme_core::{OkLab, Rgb};
use image::DynamicImage;
use tracing::debug;

/// Grouping radius used when none is configured, on a 0..=100 scale.
pub const DEFAULT_TOLERANCE: u8 = 32;

/// A group of similar colors and the number of pixels it covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Swatch {
    pub color: Rgb,
    pub count: u64,
}

/// Groups a histogram (sorted most frequent first) into swatches.
///
/// `tolerance` is the OKLab distance scaled by 100, capped at 100. Zero keeps
/// every distinct color apart. The result is sorted by pixel count, largest
/// first; equal counts keep their discovery order.
pub fn group_colors(histogram: &[(Rgb, u64)], tolerance: u8) -> Vec<Swatch> {
    let radius = f64::from(tolerance.min(100)) / 100.0;
    let mut groups: Vec<(OkLab, Swatch)> = Vec::new();

    for &(color, count) in histogram {
        let lab = color.to_oklab();
        let home = if tolerance == 0 {
            None
        } else {
            groups
                .iter_mut()
                .find(|(rep, _)| rep.distance(lab) <= radius)
        };
        match home {
            Some((_, swatch)) => swatch.count += count,
            None => groups.push((lab, Swatch { color, count })),
        }
    }

    let mut swatches: Vec<Swatch> = groups.into_iter().map(|(_, s)| s).collect();
    swatches.sort_by(|a, b| b.count.cmp(&a.count));
    swatches
}

/// Extracts the swatches of an image.
pub fn extract_swatches(image: &DynamicImage, tolerance: u8) -> Vec<Swatch> {
    let histogram = opaque_histogram(image);
    let swatches = group_colors(&histogram, tolerance);
    debug!(
        distinct = histogram.len(),
        swatches = swatches.len(),
        tolerance,
        "grouped logo colors"
    );
    swatches
}

/// The color of the largest swatch.
///
/// Returns `ExtractError::NoOpaquePixels` when the image is fully transparent.
pub fn dominant_color(image: &DynamicImage, tolerance: u8) -> Result<Rgb, ExtractError> {
    extract_swatches(image, tolerance)
        .first()
        .map(|s| s.color)
        .ok_or(ExtractError::NoOpaquePixels)
}
