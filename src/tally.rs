use anyhow::{Context, Result};
use image::DynamicImage;
use log::debug;
use std::collections::HashSet;
use std::hash::Hash;
use std::path::Path;

/// Count the distinct pixel values in the image at `image_path`.
///
/// Pixels are compared exactly, channel by channel, in whatever sample
/// format the decoder produced for the file's native mode. Nothing is
/// normalized across modes: a grayscale image tallies scalar samples, and
/// RGBA pixels that differ only in alpha are different colors.
pub fn count_distinct_colors(image_path: &Path) -> Result<u64> {
    let bytes = fs_err::read(image_path)?;
    let image = image::load_from_memory(&bytes)
        .with_context(|| format!("Failed to decode image {}", image_path.display()))?;

    debug!(
        "decoded {}: {}x{} {:?}",
        image_path.display(),
        image.width(),
        image.height(),
        image.color()
    );

    Ok(distinct_pixel_values(&image))
}

/// Single pass over the decoded buffer, in its own sample type so that
/// equality stays exact per mode. Float samples compare by bit pattern.
fn distinct_pixel_values(image: &DynamicImage) -> u64 {
    match image {
        DynamicImage::ImageLuma8(buf) => distinct_samples(buf.as_raw(), 1),
        DynamicImage::ImageLumaA8(buf) => distinct_samples(buf.as_raw(), 2),
        DynamicImage::ImageRgb8(buf) => distinct_samples(buf.as_raw(), 3),
        DynamicImage::ImageRgba8(buf) => distinct_samples(buf.as_raw(), 4),
        DynamicImage::ImageLuma16(buf) => distinct_samples(buf.as_raw(), 1),
        DynamicImage::ImageLumaA16(buf) => distinct_samples(buf.as_raw(), 2),
        DynamicImage::ImageRgb16(buf) => distinct_samples(buf.as_raw(), 3),
        DynamicImage::ImageRgba16(buf) => distinct_samples(buf.as_raw(), 4),
        DynamicImage::ImageRgb32F(buf) => {
            let bits: Vec<u32> = buf.as_raw().iter().map(|s| s.to_bits()).collect();
            distinct_samples(&bits, 3)
        }
        DynamicImage::ImageRgba32F(buf) => {
            let bits: Vec<u32> = buf.as_raw().iter().map(|s| s.to_bits()).collect();
            distinct_samples(&bits, 4)
        }
        // DynamicImage is non_exhaustive; anything new tallies as RGBA8.
        other => distinct_samples(other.to_rgba8().as_raw(), 4),
    }
}

fn distinct_samples<S: Eq + Hash>(samples: &[S], channels: usize) -> u64 {
    let seen: HashSet<&[S]> = samples.chunks_exact(channels).collect();
    seen.len() as u64
}
