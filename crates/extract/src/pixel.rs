//! Exact-color pixel histogram of a decoded image.

use header_theme_core::Rgb;
use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView};
use std::collections::HashMap;

/// Images larger than this on either side are downscaled before counting.
pub const MAX_SAMPLE_SIDE: u32 = 256;

/// Counts every distinct opaque color in the image.
///
/// Fully transparent pixels (alpha 0) are skipped; any other alpha counts as
/// its RGB color. Large images are first shrunk with nearest-neighbour
/// sampling, which never invents colors. The result is sorted by count
/// descending, ties broken by color.
pub fn opaque_histogram(image: &DynamicImage) -> Vec<(Rgb, u64)> {
    let (w, h) = image.dimensions();
    let sampled;
    let image = if w > MAX_SAMPLE_SIDE || h > MAX_SAMPLE_SIDE {
        sampled = image.resize(MAX_SAMPLE_SIDE, MAX_SAMPLE_SIDE, FilterType::Nearest);
        &sampled
    } else {
        image
    };

    let mut counts: HashMap<Rgb, u64> = HashMap::new();
    for px in image.to_rgba8().pixels() {
        let [r, g, b, a] = px.0;
        if a == 0 {
            continue;
        }
        *counts.entry(Rgb::new(r, g, b)).or_insert(0) += 1;
    }

    let mut histogram: Vec<(Rgb, u64)> = counts.into_iter().collect();
    histogram.sort_by(|(ca, na), (cb, nb)| nb.cmp(na).then(ca.cmp(cb)));
    histogram
}
